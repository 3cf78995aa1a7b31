//! Complementary multiply-with-carry generator.
//!
//! A power-of-two lag table of 32-bit words plus a carry word. Each draw
//! multiplies the lagged word by a fixed constant, folds the carry, and
//! stores the complement against the modulus back into the table. The
//! table and carry are seeded through SplitMix64; the carry is redrawn
//! until it falls below the safe bound for the recurrence.

use crate::error::RngError;
use crate::generator::Generator;
use crate::generators::split_mix64::SplitMix64;
use crate::seed;

const MULTIPLIER_A: u64 = 18_782;
const CARRY_MAX: u64 = 809_430_660;
const MODULUS: u64 = 0xFFFF_FFFE;

/// CMWC PRNG over a configurable power-of-two lag table.
#[derive(Debug)]
pub struct Cmwc {
    q: Vec<u32>,
    carry: u64,
    index: usize,
    cycle: usize,
}

impl Cmwc {
    /// Lag table length used when none is supplied.
    pub const DEFAULT_CYCLE: usize = 4096;

    /// Lag table length of the small variant.
    pub const SMALL_CYCLE: usize = 128;

    /// Creates a new generator seeded from system time.
    pub fn new() -> Self {
        Self::with_seed(seed::from_time())
    }

    /// Creates a new generator with a fixed seed and the default table.
    ///
    /// # Parameters
    /// - `seed`: Seed expanded into the lag table and carry.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(seed, Self::DEFAULT_CYCLE)
    }

    /// Creates the small-table variant with a fixed seed.
    pub fn small_with_seed(seed: u64) -> Self {
        Self::build(seed, Self::SMALL_CYCLE)
    }

    /// Creates a new generator with a fixed seed and explicit table size.
    ///
    /// # Parameters
    /// - `seed`: Seed expanded into the lag table and carry.
    /// - `cycle`: Lag table length; a power of two, at least 16.
    ///
    /// # Errors
    /// Returns [`RngError::CycleNotPowerOfTwo`] or
    /// [`RngError::CycleTooSmall`] when `cycle` is unusable.
    pub fn with_seed_and_cycle(seed: u64, cycle: usize) -> Result<Self, RngError> {
        if !cycle.is_power_of_two() {
            return Err(RngError::CycleNotPowerOfTwo { cycle });
        }
        if cycle < 16 {
            return Err(RngError::CycleTooSmall { cycle });
        }
        Ok(Self::build(seed, cycle))
    }

    fn build(seed: u64, cycle: usize) -> Self {
        let mut sm = SplitMix64::with_seed(seed);
        let mut q = vec![0u32; cycle];
        for word in q.iter_mut() {
            *word = sm.next_u64() as u32;
        }
        let mut carry = carry_candidate(&mut sm);
        while carry >= CARRY_MAX {
            carry = carry_candidate(&mut sm);
        }
        Cmwc {
            q,
            carry,
            index: cycle - 1,
            cycle,
        }
    }

    /// Produces one native 32-bit word.
    fn next_word(&mut self) -> u32 {
        self.index = (self.index + 1) & (self.cycle - 1);
        let t = MULTIPLIER_A * u64::from(self.q[self.index]) + self.carry;
        self.carry = t >> 32;
        let x = (t & 0xFFFF_FFFF) + self.carry;
        let result = MODULUS.wrapping_sub(x) as u32;
        self.q[self.index] = result;
        result
    }
}

fn carry_candidate(sm: &mut SplitMix64) -> u64 {
    sm.next_u64() & 0xFFFF_FFFF
}

impl Default for Cmwc {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Cmwc {
    fn next_u64(&mut self) -> u64 {
        let high = self.next_word();
        let low = self.next_word();
        (u64::from(high) << 32) | u64::from(low)
    }

    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }
}
