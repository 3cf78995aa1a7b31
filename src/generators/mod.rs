//! The ten peer generator algorithms.
//!
//! Each module holds one independent implementation of the
//! [`Generator`](crate::Generator) contract. All state words are genuine
//! fixed-width unsigned integers with wrapping arithmetic; several
//! algorithms' statistical properties depend on exact overflow behavior.

pub mod chacha;
pub mod cmwc;
pub mod jsf;
pub mod melg19937;
pub mod mersenne_twister;
pub mod pcg32;
pub mod rcb;
pub mod rcb_fast;
pub mod split_mix64;
pub mod xoshiro256;

pub use chacha::ChaChaRng;
pub use cmwc::Cmwc;
pub use jsf::Jsf64;
pub use melg19937::Melg19937;
pub use mersenne_twister::MersenneTwister19937;
pub use pcg32::Pcg32;
pub use rcb::Rcb;
pub use rcb_fast::RcbFast;
pub use split_mix64::SplitMix64;
pub use xoshiro256::Xoshiro256StarStar;
