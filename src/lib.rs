//! Streaming reservoir sampling.
//!
//! Draw a sample of up to `k` items from a single pass over a stream of
//! unknown length, in O(k) memory:
//!
//! - [`sample_algorithm_r`]: Algorithm R, one random draw per item
//! - [`sample_algorithm_l`]: Algorithm L, skip-based, same distribution as R
//! - [`sample_max_key`]: experimental max-key replacement variant
//!
//! A stream shorter than `k` is not an error: the sample simply holds every
//! item seen.

pub mod error;
pub mod harness;
pub mod sampling;

pub use error::{Error, Result};
pub use sampling::{sample_algorithm_l, sample_algorithm_r, sample_max_key, Algorithm, UniformSource};
