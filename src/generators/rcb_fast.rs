//! RCB-Fast bit-mixing generator.
//!
//! A flattened single-word variant of the RCB construction: one mixing
//! word scrambled through circular shifts and xor-folds, combined with a
//! scrambled complement product each draw. Shares the RCB draw-counter
//! and self-reseeding-on-exhaustion policy without the flag-steered
//! chaining, trading mixing depth for speed.

use tracing::debug;

use crate::generator::Generator;
use crate::seed;

/// Offset folded into the seed when deriving the mixing word.
const SEED_OFFSET: u64 = 10;

/// RCB-Fast PRNG with one 64-bit mixing word and a draw counter.
pub struct RcbFast {
    value: u64,
    count: u64,
    reseeding: bool,
}

impl RcbFast {
    /// Creates a new non-reseeding generator seeded from system time.
    pub fn new() -> Self {
        Self::with_seed(seed::from_time())
    }

    /// Creates a new non-reseeding generator with a fixed seed.
    ///
    /// # Parameters
    /// - `seed`: Seed for the mixing word.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_seed_reseeding(seed, false)
    }

    /// Creates a new generator with a fixed seed and reseeding policy.
    ///
    /// # Parameters
    /// - `seed`: Seed for the mixing word.
    /// - `reseed`: Whether to self-reseed once the draw counter is
    ///   exhausted.
    pub fn with_seed_reseeding(seed: u64, reseed: bool) -> Self {
        let mut rcb = RcbFast {
            value: 0,
            count: 0,
            reseeding: reseed,
        };
        rcb.initialize(seed, SEED_OFFSET, reseed);
        rcb
    }

    /// Whether this instance re-initializes itself on counter exhaustion.
    pub fn reseeds(&self) -> bool {
        self.reseeding
    }

    /// Whether the draw counter still has headroom.
    pub fn is_good(&self) -> bool {
        self.count != u64::MAX
    }

    fn initialize(&mut self, seed: u64, offset: u64, reseed: bool) {
        self.count = 0;
        self.value = !seed.wrapping_add(offset);
        self.reseeding = reseed;
    }

    /// Scrambles one word through shift-xor folds and a derived rotation.
    fn scramble(input: u64) -> u64 {
        let mut value = input;
        let rotation = (value.wrapping_add((value & 0x7FFF_FFFF_FFFF_FFFF) << 1) >> 3) | 1;
        value ^= value.rotate_right(1);
        value ^= value >> 32;
        value ^= value << 32;
        value ^ value.rotate_right((rotation & 63) as u32)
    }

    /// Combines scrambled state, complement product, and counter.
    fn advance(&mut self, counter: u64) -> u64 {
        let v = self.value;
        let product = ((!v) << 1).wrapping_mul(Self::scramble(!v) << 1);
        let result = Self::scramble(v)
            ^ product
            ^ Self::scramble(product)
            ^ Self::scramble(!Self::scramble(counter));
        self.value = result;
        result
    }
}

impl Default for RcbFast {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RcbFast {
    fn next_u64(&mut self) -> u64 {
        self.count = self.count.wrapping_add(1);
        if self.count == 0 {
            self.count = 1;
        }
        let result = self.advance(self.count);
        if !self.is_good() && self.reseeds() {
            debug!("rcb-fast draw counter exhausted, reseeding from generator output");
            self.count = self.count.wrapping_add(1);
            let reseed_value = self.advance(self.count);
            self.count = self.count.wrapping_add(1);
            let reseed_offset = self.advance(self.count);
            self.initialize(reseed_value, reseed_offset, true);
        }
        result
    }
}
