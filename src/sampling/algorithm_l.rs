//! Algorithm L (Li, 1994): reservoir sampling by geometric skips.
//!
//! Instead of drawing a number for every item as Algorithm R does, Algorithm L
//! keeps a running value `w` (the largest of `k` uniform keys among the items
//! currently held) and jumps straight to the next item that would enter the
//! reservoir. The skip length is geometric:
//!
//! ```text
//! s = floor(ln(u) / ln(1 - w))
//! ```
//!
//! Skipped items still have to be read off the stream, but no draw is spent
//! on them. The output distribution is identical to Algorithm R while the
//! expected number of draws drops to O(k (1 + ln(n / k))).

use crate::error::Result;
use crate::sampling::reservoir::Reservoir;
use crate::sampling::source::UniformSource;

/// Smallest and largest values `w` may take.
const W_MIN: f64 = f64::MIN_POSITIVE;
const W_MAX: f64 = 1.0 - f64::EPSILON;

/// Returns a uniform sample of `k` items from `stream` using Algorithm L.
///
/// Same distribution as [`sample_algorithm_r`](crate::sample_algorithm_r)
/// with far fewer random draws on long streams.
///
/// If the stream yields fewer than `k` items, all of them are returned in
/// arrival order and the result is shorter than `k`. This is not an error.
///
/// # Errors
/// * [`Error::InvalidSampleSize`](crate::Error::InvalidSampleSize) when `k == 0`,
///   before anything is read from the stream.
/// * [`Error::DegenerateRngDraw`](crate::Error::DegenerateRngDraw) when `rng`
///   keeps returning 0 or 1 for open-interval draws.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use reservoir_algos::sample_algorithm_l;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let sample = sample_algorithm_l(0..1_000_000u64, 5, &mut rng).unwrap();
/// assert_eq!(sample.len(), 5);
/// ```
///
/// # Complexity
/// * Time: O(n) stream traversal, O(k (1 + log(n / k))) draws
/// * Space: O(k)
pub fn sample_algorithm_l<T, I, R>(stream: I, k: usize, rng: &mut R) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
    R: UniformSource + ?Sized,
{
    let mut reservoir = Reservoir::new(k)?;
    let mut stream = stream.into_iter();
    if !reservoir.fill(&mut stream) {
        return Ok(reservoir.into_vec());
    }

    let mut w = clamp_w(key_factor(rng, k)?);
    let mut replacements = 0usize;

    loop {
        let skip = skip_length(rng.open_unit()?, w);
        // `nth(skip)` discards `skip` items and yields the one after them.
        let item = match stream.nth(skip) {
            Some(item) => item,
            None => break,
        };
        reservoir.observe(skip.saturating_add(1));
        reservoir.replace(rng.below(k), item);
        replacements += 1;
        w = clamp_w(w * key_factor(rng, k)?);
    }

    log::debug!(
        "algorithm L: k={}, items up to last replacement={}, replacements={}, final w={:e}",
        k,
        reservoir.seen(),
        replacements,
        w
    );
    Ok(reservoir.into_vec())
}

/// [`sample_algorithm_l`] with a fresh thread-local generator.
pub fn sample<T, I>(stream: I, k: usize) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let mut rng = rand::thread_rng();
    sample_algorithm_l(stream, k, &mut rng)
}

/// `exp(ln(u) / k)`: the distribution of the largest of `k` uniform keys.
fn key_factor<R>(rng: &mut R, k: usize) -> Result<f64>
where
    R: UniformSource + ?Sized,
{
    Ok((rng.open_unit()?.ln() / k as f64).exp())
}

/// Number of items to pass over before the next replacement.
///
/// `ln_1p(-w)` keeps precision when `w` is tiny, where `ln(1 - w)` would
/// round to zero. Lengths beyond `usize` saturate.
fn skip_length(u: f64, w: f64) -> usize {
    let s = (u.ln() / (-w).ln_1p()).floor();
    if s.is_finite() && s >= 0.0 {
        s as usize
    } else {
        usize::MAX
    }
}

fn clamp_w(w: f64) -> f64 {
    if w > W_MIN && w < W_MAX {
        return w;
    }
    log::debug!("algorithm L: w={:e} left (0, 1), clamping", w);
    if w.is_nan() {
        W_MAX
    } else {
        w.clamp(W_MIN, W_MAX)
    }
}
