//! Entropy seed source.
//!
//! Produces a 64-bit default seed from coarse wall-clock and subsecond
//! time when the caller does not supply one. This is the only place the
//! library touches the environment; every other operation is a pure
//! state transition.

use std::time::{SystemTime, UNIX_EPOCH};

/// Fallback seed when the system clock is unavailable (pre-epoch clock).
const FALLBACK_SEED: u64 = 5489;

/// Derives a 64-bit seed from the current time.
///
/// The low 32 bits of the epoch millisecond counter land in the high
/// half; the subsecond nanosecond counter lands in the low half, so two
/// calls in quick succession still differ.
///
/// # Returns
/// A 64-bit seed value.
pub fn from_time() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    if now.as_nanos() == 0 {
        return FALLBACK_SEED;
    }
    let millis = (now.as_millis() as u64) & 0xFFFF_FFFF;
    let nanos = u64::from(now.subsec_nanos());
    (millis << 32) | nanos
}
