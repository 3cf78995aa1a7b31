//! Named algorithm registry.
//!
//! [`Algorithm`] enumerates the supported generator names and knows how
//! to construct each one; [`Registry`] holds one lazily created, shared
//! facade per algorithm. The registry is an explicit object rather than
//! process-wide static state: whoever owns the registry owns the shared
//! instances, and passing it by reference preserves the construct-once,
//! share-after semantics without a hidden global.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::RngError;
use crate::generator::Generator;
use crate::generators::{
    ChaChaRng, Cmwc, Jsf64, Melg19937, MersenneTwister19937, Pcg32, Rcb, RcbFast, SplitMix64,
    Xoshiro256StarStar,
};
use crate::random::Random;

/// The supported generator algorithms, by registry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SplitMix64 splitting/mixing generator (also the default).
    SplitMix,
    /// Xoshiro256** XOR/shift/rotate generator.
    Xoshiro,
    /// MT19937 32-bit Mersenne Twister.
    MersenneTwister,
    /// PCG32 permuted linear-congruential generator.
    Pcg,
    /// CMWC multiply-with-carry generator, 4096-entry lag table.
    Cmwc,
    /// CMWC multiply-with-carry generator, 128-entry lag table.
    CmwcSmall,
    /// ChaCha 20-round stream-cipher generator.
    ChaCha,
    /// Jenkins small fast generator.
    Jsf,
    /// RCB bit-mixing generator.
    Rcb,
    /// RCB-Fast bit-mixing generator.
    RcbFast,
    /// MELG19937-64 Mersenne-Twister variant.
    Melg,
}

impl Algorithm {
    /// Every supported algorithm, in registry-name order.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::SplitMix,
        Algorithm::Xoshiro,
        Algorithm::MersenneTwister,
        Algorithm::Pcg,
        Algorithm::Cmwc,
        Algorithm::CmwcSmall,
        Algorithm::ChaCha,
        Algorithm::Jsf,
        Algorithm::Rcb,
        Algorithm::RcbFast,
        Algorithm::Melg,
    ];

    /// Returns the canonical registry name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::SplitMix => "splitmix",
            Algorithm::Xoshiro => "xoshiro",
            Algorithm::MersenneTwister => "mersenne-twister",
            Algorithm::Pcg => "pcg",
            Algorithm::Cmwc => "cmwc",
            Algorithm::CmwcSmall => "cmwc-small",
            Algorithm::ChaCha => "chacha",
            Algorithm::Jsf => "jsf",
            Algorithm::Rcb => "rcb",
            Algorithm::RcbFast => "rcb-fast",
            Algorithm::Melg => "melg",
        }
    }

    /// Looks an algorithm up by registry name.
    ///
    /// `"default"` resolves to [`Algorithm::SplitMix`].
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name {
            "default" | "splitmix" => Some(Algorithm::SplitMix),
            "xoshiro" => Some(Algorithm::Xoshiro),
            "mersenne-twister" => Some(Algorithm::MersenneTwister),
            "pcg" => Some(Algorithm::Pcg),
            "cmwc" => Some(Algorithm::Cmwc),
            "cmwc-small" => Some(Algorithm::CmwcSmall),
            "chacha" => Some(Algorithm::ChaCha),
            "jsf" => Some(Algorithm::Jsf),
            "rcb" => Some(Algorithm::Rcb),
            "rcb-fast" => Some(Algorithm::RcbFast),
            "melg" => Some(Algorithm::Melg),
            _ => None,
        }
    }

    /// Constructs a boxed generator of this algorithm with a fixed seed.
    pub(crate) fn construct(self, seed: u64) -> Box<dyn Generator> {
        match self {
            Algorithm::SplitMix => Box::new(SplitMix64::with_seed(seed)),
            Algorithm::Xoshiro => Box::new(Xoshiro256StarStar::with_seed(seed)),
            Algorithm::MersenneTwister => Box::new(MersenneTwister19937::with_seed(seed)),
            Algorithm::Pcg => Box::new(Pcg32::with_seed(seed)),
            Algorithm::Cmwc => Box::new(Cmwc::with_seed(seed)),
            Algorithm::CmwcSmall => Box::new(Cmwc::small_with_seed(seed)),
            Algorithm::ChaCha => Box::new(ChaChaRng::with_seed(seed)),
            Algorithm::Jsf => Box::new(Jsf64::with_seed(seed)),
            Algorithm::Rcb => Box::new(Rcb::with_seed(seed)),
            Algorithm::RcbFast => Box::new(RcbFast::with_seed(seed)),
            Algorithm::Melg => Box::new(Melg19937::with_seed(seed)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| RngError::UnknownAlgorithm {
            name: s.to_string(),
        })
    }
}

/// Cache of one shared facade per algorithm name.
///
/// The first lookup of each algorithm constructs a facade with a
/// time-derived seed; later lookups return the same instance, state and
/// all. Entries live as long as the registry; there is no invalidation
/// or reseeding entry point.
///
/// # Examples
///
/// ```
/// use rngkit::{Algorithm, Registry};
///
/// let mut registry = Registry::new();
/// let roll = registry.get(Algorithm::Xoshiro).next_percent_int();
/// assert!((1..=100).contains(&roll));
/// ```
pub struct Registry {
    instances: HashMap<Algorithm, Random>,
}

impl Registry {
    /// Creates an empty registry; no generator is constructed yet.
    pub fn new() -> Self {
        Registry {
            instances: HashMap::new(),
        }
    }

    /// Returns the shared facade for an algorithm, creating it on first
    /// access with a time-derived seed.
    pub fn get(&mut self, algorithm: Algorithm) -> &mut Random {
        self.instances.entry(algorithm).or_insert_with(|| {
            debug!(algorithm = algorithm.name(), "constructing shared generator");
            Random::with_algorithm(algorithm, None)
        })
    }

    /// Returns the default shared facade (SplitMix64).
    pub fn default_instance(&mut self) -> &mut Random {
        self.get(Algorithm::SplitMix)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
        }
    }

    #[test]
    fn test_default_alias() {
        assert_eq!(Algorithm::from_name("default"), Some(Algorithm::SplitMix));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Algorithm::from_name("mt19937"), None);
        let err = "mt19937".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err,
            RngError::UnknownAlgorithm {
                name: "mt19937".to_string()
            }
        );
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Algorithm::MersenneTwister.to_string(), "mersenne-twister");
        assert_eq!(Algorithm::RcbFast.to_string(), "rcb-fast");
    }

    #[test]
    fn test_registry_lazy_and_shared() {
        let mut registry = Registry::new();
        assert!(registry.instances.is_empty());

        // Advance the shared instance through one lookup, then confirm
        // the next lookup continues the same stream instead of
        // reconstructing.
        let first = registry.get(Algorithm::Jsf).next_u64();
        let second = registry.get(Algorithm::Jsf).next_u64();
        assert_ne!(first, second);
        assert_eq!(registry.instances.len(), 1);
    }

    #[test]
    fn test_registry_constructs_every_algorithm() {
        let mut registry = Registry::new();
        for algorithm in Algorithm::ALL {
            let value = registry.get(algorithm).next_double();
            assert!((0.0..1.0).contains(&value), "{} out of range", algorithm);
        }
        assert_eq!(registry.instances.len(), Algorithm::ALL.len());
    }

    #[test]
    fn test_default_instance_is_splitmix_entry() {
        let mut registry = Registry::new();
        let _ = registry.default_instance().next_u64();
        assert!(registry.instances.contains_key(&Algorithm::SplitMix));
        assert_eq!(registry.instances.len(), 1);
    }
}
