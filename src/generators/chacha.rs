//! ChaCha stream-cipher generator.
//!
//! A 20-round ARX quarter-round network run in counter mode over a
//! 16-word state. Each block run yields 16 keystream words, consumed
//! sequentially before the next block is generated. This is the only
//! algorithm in the family with a cryptographic construction; the seed
//! layout here is a PRNG convenience, not a vetted cipher keying scheme.

use crate::generator::Generator;
use crate::seed;

const ROUNDS: usize = 20;

/// "expand 32-byte k" block constants.
const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646E, 0x7962_2D32, 0x6B20_6574];

/// Filler pattern for the key/nonce words the 64-bit seed leaves unused.
const SENTINEL: u32 = 0xDEAD_BEEF;

/// ChaCha20 keystream PRNG with a 16-word state and block counter.
///
/// The 64-bit seed occupies two key words, the 64-bit stream identifier
/// two nonce words; a 64-bit little-endian block counter advances after
/// every generated block.
pub struct ChaChaRng {
    state: [u32; 16],
    keystream: [u32; 16],
    ks_index: usize,
}

impl ChaChaRng {
    /// Creates a new generator seeded from system time on stream 0.
    pub fn new() -> Self {
        Self::with_seed(seed::from_time())
    }

    /// Creates a new generator with a fixed seed on stream 0.
    ///
    /// # Parameters
    /// - `seed`: Seed split across two key words.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_seed_and_stream(seed, 0)
    }

    /// Creates a new generator with a fixed seed and stream identifier.
    ///
    /// Distinct stream identifiers yield independent keystreams for the
    /// same seed.
    ///
    /// # Parameters
    /// - `seed`: Seed split across two key words.
    /// - `stream`: Stream identifier split across two nonce words.
    pub fn with_seed_and_stream(seed: u64, stream: u64) -> Self {
        let mut state = [SENTINEL; 16];
        state[..4].copy_from_slice(&CONSTANTS);
        state[4] = seed as u32;
        state[5] = (seed >> 32) as u32;
        state[8] = stream as u32;
        state[9] = (stream >> 32) as u32;
        state[12] = 0;
        state[13] = 0;
        ChaChaRng {
            state,
            keystream: [0; 16],
            ks_index: 16,
        }
    }

    fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
        x[a] = x[a].wrapping_add(x[b]);
        x[d] = (x[d] ^ x[a]).rotate_left(16);
        x[c] = x[c].wrapping_add(x[d]);
        x[b] = (x[b] ^ x[c]).rotate_left(12);
        x[a] = x[a].wrapping_add(x[b]);
        x[d] = (x[d] ^ x[a]).rotate_left(8);
        x[c] = x[c].wrapping_add(x[d]);
        x[b] = (x[b] ^ x[c]).rotate_left(7);
    }

    /// Runs the round function once and refills the keystream block.
    fn generate_keystream(&mut self) {
        let mut working = self.state;
        for _ in 0..(ROUNDS / 2) {
            // Column round.
            Self::quarter_round(&mut working, 0, 4, 8, 12);
            Self::quarter_round(&mut working, 1, 5, 9, 13);
            Self::quarter_round(&mut working, 2, 6, 10, 14);
            Self::quarter_round(&mut working, 3, 7, 11, 15);
            // Diagonal round.
            Self::quarter_round(&mut working, 0, 5, 10, 15);
            Self::quarter_round(&mut working, 1, 6, 11, 12);
            Self::quarter_round(&mut working, 2, 7, 8, 13);
            Self::quarter_round(&mut working, 3, 4, 9, 14);
        }
        for (out, (&w, &s)) in self
            .keystream
            .iter_mut()
            .zip(working.iter().zip(self.state.iter()))
        {
            *out = w.wrapping_add(s);
        }
        // 64-bit little-endian block counter.
        self.state[12] = self.state[12].wrapping_add(1);
        if self.state[12] == 0 {
            self.state[13] = self.state[13].wrapping_add(1);
        }
        self.ks_index = 0;
    }

    /// Returns the next keystream word.
    fn next_word(&mut self) -> u32 {
        if self.ks_index >= 16 {
            self.generate_keystream();
        }
        let word = self.keystream[self.ks_index];
        self.ks_index += 1;
        word
    }
}

impl Default for ChaChaRng {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for ChaChaRng {
    fn next_u64(&mut self) -> u64 {
        let low = self.next_word();
        let high = self.next_word();
        (u64::from(high) << 32) | u64::from(low)
    }

    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }
}
