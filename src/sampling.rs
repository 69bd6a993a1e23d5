//! Streaming reservoir sampling.
//!
//! This module provides single-pass samplers that keep at most `k` items from
//! a stream of unknown, possibly unbounded length:
//! - Algorithm R (exact, one draw per item)
//! - Algorithm L (geometric skips, same distribution as R with far fewer draws)
//! - Max-key replacement (experimental, see [`max_key`])
//!
//! All samplers take their randomness from an injected [`UniformSource`],
//! so seeding the generator makes a run reproducible.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use reservoir_algos::sampling::Algorithm;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! for algorithm in Algorithm::ALL {
//!     let sample = algorithm.sample(0..10_000, 8, &mut rng).unwrap();
//!     assert_eq!(sample.len(), 8);
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub mod algorithm_l;
pub mod algorithm_r;
pub mod max_key;
pub mod reservoir;
pub mod source;

pub use algorithm_l::sample_algorithm_l;
pub use algorithm_r::sample_algorithm_r;
pub use max_key::sample_max_key;
pub use reservoir::{KeyedReservoir, Reservoir};
pub use source::{CountingSource, UniformSource, MAX_BOUNDARY_RETRIES};

/// The available sampling algorithms behind one `sample(stream, k, rng)` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    R,
    L,
    MaxKey,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::R, Algorithm::MaxKey, Algorithm::L];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::R => "algorithm_r",
            Algorithm::L => "algorithm_l",
            Algorithm::MaxKey => "max_key",
        }
    }

    /// Whether the algorithm is known to give every item probability `k / n`.
    pub fn is_uniform(&self) -> bool {
        !matches!(self, Algorithm::MaxKey)
    }

    pub fn sample<T, I, R>(&self, stream: I, k: usize, rng: &mut R) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = T>,
        R: UniformSource + ?Sized,
    {
        match self {
            Algorithm::R => sample_algorithm_r(stream, k, rng),
            Algorithm::L => sample_algorithm_l(stream, k, rng),
            Algorithm::MaxKey => sample_max_key(stream, k, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "r" | "algorithm_r" => Ok(Algorithm::R),
            "l" | "algorithm_l" => Ok(Algorithm::L),
            "max_key" | "maxkey" => Ok(Algorithm::MaxKey),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
