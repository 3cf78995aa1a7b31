//! The generator contract shared by all algorithms.
//!
//! Every algorithm exposes the same low-level operation set through the
//! [`Generator`] trait: a canonical 64-bit draw plus derived 32-bit,
//! signed, ranged, floating-point, and byte forms. The derived forms are
//! provided methods so each algorithm only has to supply its recurrence;
//! algorithms whose natural word size is 32 bits override [`next_u32`]
//! with the native draw and synthesize the 64-bit word from a pair.
//!
//! [`next_u32`]: Generator::next_u32

use crate::error::RngError;

/// Scale factor mapping the top 53 bits of a draw into [0, 1).
pub(crate) const DOUBLE_UNIT: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Low-level operation set every algorithm implements.
///
/// Each instance owns private mutable state and advances it on every
/// draw; there is no shared or global state behind this trait. Draws are
/// synchronous and unconditionally terminating. Instances are not
/// thread-safe: concurrent access requires the caller's own
/// serialization (a mutex, or one instance per execution context).
///
/// Ranged draws use modulo reduction, which carries a slight bias when
/// the range does not evenly divide 2^64. That bias is inherited from
/// the reference behavior and acceptable for non-cryptographic use.
pub trait Generator {
    /// Advances the state and returns the next raw 64-bit word.
    ///
    /// This is the canonical primitive every derived operation builds on.
    fn next_u64(&mut self) -> u64;

    /// Returns the next 32-bit value.
    ///
    /// For 64-bit algorithms this is the high half of [`next_u64`];
    /// 32-bit algorithms override it with their native draw.
    ///
    /// [`next_u64`]: Generator::next_u64
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Returns the next draw reinterpreted as a signed 64-bit value.
    fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Returns an integer in the inclusive range `[min, max]`.
    ///
    /// `min == max` returns `min` without consuming a draw.
    ///
    /// # Errors
    /// Returns [`RngError::InvalidRange`] if `min > max`.
    fn next_int(&mut self, min: i64, max: i64) -> Result<i64, RngError> {
        if min > max {
            return Err(RngError::InvalidRange { min, max });
        }
        if min == max {
            return Ok(min);
        }
        Ok(reduce_to_range(self.next_u64(), min, max))
    }

    /// Returns the next value in [0, 1) using the top 53 bits of a draw.
    fn next_double(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }

    /// Fills `dest` with the bytes of successive 64-bit draws.
    ///
    /// Words are written little-endian-first; the final partial word is
    /// truncated to the remaining byte count. Decoding 8 filled bytes as
    /// a little-endian `u64` therefore reproduces the draw itself.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }
}

/// Reduces a raw 64-bit draw into the inclusive range `[min, max]`.
///
/// Callers must have rejected `min > max` and short-circuited
/// `min == max` already. The offset arithmetic runs in `u64` so the
/// full `i64` domain works, including spans wider than `i64::MAX`.
pub(crate) fn reduce_to_range(raw: u64, min: i64, max: i64) -> i64 {
    debug_assert!(min < max);
    let span = max.wrapping_sub(min) as u64;
    if span == u64::MAX {
        // Range covers every i64 value; the draw is already uniform.
        return raw as i64;
    }
    let offset = raw % (span + 1);
    (min as u64).wrapping_add(offset) as i64
}
