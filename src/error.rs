//! Error types for the rngkit library.

use thiserror::Error;

/// The two failure categories exposed by the library.
///
/// Construction problems are [`ErrorKind::Configuration`]; misuse of an
/// otherwise valid generator or facade is [`ErrorKind::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid construction parameters, detected before the first draw.
    Configuration,
    /// A valid instance was called with an unusable argument.
    InvalidArgument,
}

/// Errors produced by the rngkit library.
///
/// Every error surfaces synchronously to the caller; nothing is retried,
/// logged, or downgraded inside the library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RngError {
    /// PCG32 requires an odd increment for a full-period stream.
    #[error("PCG32 increment must be odd, got {increment}")]
    EvenIncrement {
        /// The rejected increment value.
        increment: u64,
    },
    /// The CMWC lag table length must be a power of two for mask indexing.
    #[error("CMWC lag table size must be a power of two, got {cycle}")]
    CycleNotPowerOfTwo {
        /// The rejected lag table length.
        cycle: usize,
    },
    /// The CMWC lag table must hold at least 16 entries.
    #[error("CMWC lag table size must be at least 16, got {cycle}")]
    CycleTooSmall {
        /// The rejected lag table length.
        cycle: usize,
    },
    /// An explicit state vector was entirely zero.
    #[error("state vector must not be all zero")]
    AllZeroState,
    /// A ranged draw was requested with an inverted range.
    #[error("min must be <= max, got min={min} max={max}")]
    InvalidRange {
        /// Lower bound as supplied.
        min: i64,
        /// Upper bound as supplied.
        max: i64,
    },
    /// An item draw was requested from an empty sequence.
    #[error("cannot draw an item from an empty sequence")]
    EmptySequence,
    /// A registry lookup used a name no algorithm answers to.
    #[error("unknown algorithm name: {name}")]
    UnknownAlgorithm {
        /// The unrecognized name.
        name: String,
    },
}

impl RngError {
    /// Returns the failure category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RngError::EvenIncrement { .. }
            | RngError::CycleNotPowerOfTwo { .. }
            | RngError::CycleTooSmall { .. }
            | RngError::AllZeroState => ErrorKind::Configuration,
            RngError::InvalidRange { .. }
            | RngError::EmptySequence
            | RngError::UnknownAlgorithm { .. } => ErrorKind::InvalidArgument,
        }
    }
}
