//! Uniform random draws used by the reservoir samplers.
//!
//! Every sampler receives its randomness through [`UniformSource`], which is
//! implemented for any [`rand::Rng`]. Seeding a generator such as
//! `rand_chacha::ChaCha8Rng` therefore makes a sampling run reproducible.
//!
//! Algorithm L takes logarithms of its draws, so a draw of exactly 0 or 1
//! must never reach it. [`UniformSource::open_unit`] rejects such values and
//! draws again, giving up with [`Error::DegenerateRngDraw`] only when the
//! source is stuck on the boundary.

use rand::Rng;

use crate::error::{Error, Result};

/// Number of consecutive boundary draws tolerated before the source is declared degenerate.
pub const MAX_BOUNDARY_RETRIES: usize = 64;

/// A source of uniform real and integer draws.
pub trait UniformSource {
    /// Raw uniform draw in `[0, 1]`. May hit either boundary.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform draw strictly inside `(0, 1)`.
    ///
    /// Boundary values (and NaN) are discarded and redrawn.
    fn open_unit(&mut self) -> Result<f64> {
        for attempt in 0..MAX_BOUNDARY_RETRIES {
            let u = self.unit();
            if u > 0.0 && u < 1.0 {
                return Ok(u);
            }
            log::trace!("rejected boundary draw {} (attempt {})", u, attempt + 1);
        }
        Err(Error::DegenerateRngDraw {
            attempts: MAX_BOUNDARY_RETRIES,
        })
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Wraps a source and counts the draws made through it.
#[derive(Debug)]
pub struct CountingSource<S> {
    inner: S,
    draws: usize,
}

impl<S: UniformSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        CountingSource { inner, draws: 0 }
    }

    /// Total number of raw real and integer draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: UniformSource> UniformSource for CountingSource<S> {
    fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.inner.unit()
    }

    fn below(&mut self, bound: usize) -> usize {
        self.draws += 1;
        self.inner.below(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Replays a fixed script of real draws.
    struct Scripted {
        values: Vec<f64>,
        next: usize,
    }

    impl UniformSource for Scripted {
        fn unit(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }

        fn below(&mut self, _bound: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_open_unit_skips_boundaries() {
        let mut src = Scripted {
            values: vec![0.0, 1.0, f64::NAN, 0.25],
            next: 0,
        };
        assert_eq!(src.open_unit(), Ok(0.25));
        assert_eq!(src.next, 4);
    }

    #[test]
    fn test_open_unit_degenerate_source() {
        let mut src = Scripted {
            values: vec![1.0],
            next: 0,
        };
        assert_eq!(
            src.open_unit(),
            Err(Error::DegenerateRngDraw {
                attempts: MAX_BOUNDARY_RETRIES
            })
        );
    }

    #[test]
    fn test_step_rng_stuck_at_zero() {
        // An all-zero generator produces 0.0 for every f64 draw.
        let mut rng = rand::rngs::mock::StepRng::new(0, 0);
        assert!(matches!(
            rng.open_unit(),
            Err(Error::DegenerateRngDraw { .. })
        ));
    }

    #[test]
    fn test_rng_draws_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for bound in 1..50 {
            let m = rng.below(bound);
            assert!(m < bound);
            let u = rng.open_unit().unwrap();
            assert!(u > 0.0 && u < 1.0);
        }
    }

    #[test]
    fn test_counting_source() {
        let mut src = CountingSource::new(ChaCha8Rng::seed_from_u64(1));
        src.below(10);
        src.open_unit().unwrap();
        src.unit();
        assert_eq!(src.draws(), 3);
    }
}
