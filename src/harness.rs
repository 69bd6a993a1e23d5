//! Timing harness comparing the samplers on synthetic populations.
//!
//! Populations are drawn from an exponential distribution so that a sample
//! can be sanity-checked through the rate estimate `len / sum`. With the
//! default rate of 0.1 a uniform sample should give an estimate close to 0.1.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp};

use crate::error::{Error, Result};
use crate::sampling::{Algorithm, UniformSource};

/// Configuration for a timing run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Reservoir size `k`
    pub sample_size: usize,
    /// Rate parameter of the exponential population
    pub rate: f64,
    /// Population sizes to time, in order
    pub population_sizes: Vec<usize>,
    /// Algorithms to time, in order
    pub algorithms: Vec<Algorithm>,
    /// Seed for population generation and sampling
    pub seed: u64,
    /// Sort each population ascending before sampling
    pub sorted: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sample_size: 2000,
            rate: 0.1,
            population_sizes: vec![100_000, 500_000, 1_000_000, 2_000_000, 5_000_000],
            algorithms: Algorithm::ALL.to_vec(),
            seed: 42,
            sorted: true,
        }
    }
}

/// One measurement: an algorithm run over a population of a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRow {
    pub algorithm: Algorithm,
    pub population: usize,
    pub elapsed: Duration,
    pub rate_estimate: Option<f64>,
}

impl TimingRow {
    pub fn csv_header() -> &'static str {
        "algorithm,population,seconds,rate_estimate"
    }

    pub fn to_csv(&self) -> String {
        let estimate = self
            .rate_estimate
            .map(|r| format!("{:.6}", r))
            .unwrap_or_default();
        format!(
            "{},{},{:.6},{}",
            self.algorithm,
            self.population,
            self.elapsed.as_secs_f64(),
            estimate
        )
    }
}

/// Draws `size` values from an exponential distribution with the given rate.
pub fn exponential_population<R>(size: usize, rate: f64, rng: &mut R) -> Result<Vec<f64>>
where
    R: rand::Rng + ?Sized,
{
    if !(rate.is_finite() && rate > 0.0) {
        return Err(Error::invalid_parameter(format!(
            "exponential rate must be positive and finite, got {}",
            rate
        )));
    }
    let exp = Exp::new(rate).map_err(|e| Error::invalid_parameter(e.to_string()))?;
    Ok(exp.sample_iter(rng).take(size).collect())
}

/// Maximum likelihood estimate of the exponential rate from a sample.
///
/// Returns `None` for an empty sample or a non-positive sum.
pub fn rate_estimate(sample: &[f64]) -> Option<f64> {
    let sum: f64 = sample.iter().sum();
    if sample.is_empty() || sum <= 0.0 {
        return None;
    }
    Some(sample.len() as f64 / sum)
}

/// Times a single sampling run over `population`.
pub fn time_algorithm<R>(
    algorithm: Algorithm,
    population: &[f64],
    k: usize,
    rng: &mut R,
) -> Result<TimingRow>
where
    R: UniformSource + ?Sized,
{
    let start = Instant::now();
    let sample = algorithm.sample(population.iter().copied(), k, rng)?;
    let elapsed = start.elapsed();

    Ok(TimingRow {
        algorithm,
        population: population.len(),
        elapsed,
        rate_estimate: rate_estimate(&sample),
    })
}

/// Times every configured algorithm on every configured population size.
pub fn run(config: &HarnessConfig) -> Result<Vec<TimingRow>> {
    if config.sample_size == 0 {
        return Err(Error::InvalidSampleSize { k: 0 });
    }
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut rows = Vec::with_capacity(config.population_sizes.len() * config.algorithms.len());

    for &size in &config.population_sizes {
        let mut population = exponential_population(size, config.rate, &mut rng)?;
        if config.sorted {
            population.sort_by(|a, b| a.total_cmp(b));
        }
        log::info!("timing population of {} values", size);

        for &algorithm in &config.algorithms {
            let row = time_algorithm(algorithm, &population, config.sample_size, &mut rng)?;
            log::debug!(
                "{} over {} values took {:?}",
                algorithm,
                size,
                row.elapsed
            );
            rows.push(row);
        }
    }

    Ok(rows)
}
