//! Error type shared by every sampling routine and the timing harness.

use thiserror::Error;

/// Result type for sampling operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The requested sample size cannot hold any item.
    #[error("invalid sample size {k}: the reservoir must hold at least one item")]
    InvalidSampleSize { k: usize },

    /// The random source kept returning 0, 1 or NaN where an open-interval draw was required.
    #[error("random source returned a boundary value on {attempts} consecutive open-interval draws")]
    DegenerateRngDraw { attempts: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl Error {
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Error::InvalidParameter(msg.into())
    }
}
