//! Jenkins small fast generator, 64-bit variant.
//!
//! Four 64-bit words chained through subtract/rotate/add updates. The
//! first 20 outputs after seeding are discarded as warm-up to dissipate
//! the correlations of the three-identical-word initial state.

use crate::generator::Generator;
use crate::seed;

/// Initial value of the `a` word before warm-up.
const INIT_A: u64 = 0xF1EA_5EED;

/// Outputs discarded after seeding.
const WARM_UP_DRAWS: usize = 20;

/// JSF PRNG with a 4x64-bit state.
pub struct Jsf64 {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl Jsf64 {
    /// Creates a new generator seeded from system time.
    pub fn new() -> Self {
        Self::with_seed(seed::from_time())
    }

    /// Creates a new generator with a fixed seed.
    ///
    /// # Parameters
    /// - `seed`: Seed copied into the `b`, `c`, and `d` words.
    pub fn with_seed(seed: u64) -> Self {
        let mut jsf = Jsf64 {
            a: INIT_A,
            b: seed,
            c: seed,
            d: seed,
        };
        for _ in 0..WARM_UP_DRAWS {
            jsf.advance();
        }
        jsf
    }

    fn advance(&mut self) -> u64 {
        let e = self.a.wrapping_sub(self.b.rotate_left(27));
        self.a = self.b ^ self.c.rotate_left(17);
        self.b = self.c.wrapping_add(self.d);
        self.c = self.d.wrapping_add(e);
        self.d = e.wrapping_add(self.a);
        self.d
    }
}

impl Default for Jsf64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Jsf64 {
    fn next_u64(&mut self) -> u64 {
        self.advance()
    }
}
