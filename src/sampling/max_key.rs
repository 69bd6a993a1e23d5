//! Max-key replacement sampling. **Experimental.**
//!
//! Every reservoir slot carries an independent uniform key. Each later item
//! draws its own key and, if that key is smaller than the largest key held,
//! evicts the item in the max-key slot.
//!
//! The construction resembles weighted reservoir sampling with all weights
//! equal, but its inclusion probabilities for uniform sampling have not been
//! derived. Do not treat its output as equivalent to
//! [`sample_algorithm_r`](crate::sample_algorithm_r) or
//! [`sample_algorithm_l`](crate::sample_algorithm_l); use those when an
//! unbiased sample is required.

use crate::error::Result;
use crate::sampling::reservoir::{KeyedReservoir, Reservoir};
use crate::sampling::source::UniformSource;

/// Samples up to `k` items from `stream` with the max-key replacement rule.
///
/// If the stream yields fewer than `k` items, all of them are returned in
/// arrival order and no key is drawn. This is not an error.
///
/// Each replacement rescans all `k` keys, so a replacement costs O(k).
/// Replacements get rarer as the stream grows.
///
/// # Errors
/// * [`Error::InvalidSampleSize`](crate::Error::InvalidSampleSize) when `k == 0`.
/// * [`Error::DegenerateRngDraw`](crate::Error::DegenerateRngDraw) when `rng`
///   keeps returning boundary values.
pub fn sample_max_key<T, I, R>(stream: I, k: usize, rng: &mut R) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
    R: UniformSource + ?Sized,
{
    let mut reservoir = Reservoir::new(k)?;
    let mut stream = stream.into_iter();
    if !reservoir.fill(&mut stream) {
        return Ok(reservoir.into_vec());
    }

    let mut keyed = KeyedReservoir::with_random_keys(reservoir, rng)?;
    let mut replacements = 0usize;
    for item in stream {
        let u = rng.open_unit()?;
        if u < keyed.max_key() {
            keyed.replace_max(item, u);
            replacements += 1;
        }
        keyed.observe(1);
    }

    log::debug!(
        "max-key: k={}, seen={}, replacements={}, max key={:e}",
        k,
        keyed.seen(),
        replacements,
        keyed.max_key()
    );
    Ok(keyed.into_vec())
}

/// [`sample_max_key`] with a fresh thread-local generator.
pub fn sample<T, I>(stream: I, k: usize) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let mut rng = rand::thread_rng();
    sample_max_key(stream, k, &mut rng)
}
