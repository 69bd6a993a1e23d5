use crate::error::Result;
use crate::sampling::reservoir::Reservoir;
use crate::sampling::source::UniformSource;

/// Returns a uniform sample of `k` items from `stream` using Algorithm R.
///
/// The stream is consumed in a single pass. The first `k` items fill the
/// reservoir; the item at 1-based position `t > k` replaces slot `m` when a
/// uniform draw `m` from `[0, t)` lands below `k`. Every item ends up in the
/// sample with probability exactly `k / n`.
///
/// If the stream yields fewer than `k` items, all of them are returned in
/// arrival order and the result is shorter than `k`. This is not an error.
///
/// # Errors
/// * [`Error::InvalidSampleSize`](crate::Error::InvalidSampleSize) when `k == 0`.
///   Nothing is read from the stream and no draw is made.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use reservoir_algos::sample_algorithm_r;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let sample = sample_algorithm_r(1..=100, 10, &mut rng).unwrap();
/// assert_eq!(sample.len(), 10);
/// assert!(sample.iter().all(|x| (1..=100).contains(x)));
/// ```
///
/// # Complexity
/// * Time: O(n), one draw per item after the first `k`
/// * Space: O(k)
pub fn sample_algorithm_r<T, I, R>(stream: I, k: usize, rng: &mut R) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
    R: UniformSource + ?Sized,
{
    let mut reservoir = Reservoir::new(k)?;
    let mut stream = stream.into_iter();
    if !reservoir.fill(&mut stream) {
        return Ok(reservoir.into_vec());
    }

    let mut replacements = 0usize;
    for (t, item) in stream.enumerate().map(|(i, x)| (i + k + 1, x)) {
        let m = rng.below(t);
        if m < k {
            reservoir.replace(m, item);
            replacements += 1;
        }
        reservoir.observe(1);
    }

    log::debug!(
        "algorithm R: k={}, seen={}, replacements={}",
        k,
        reservoir.seen(),
        replacements
    );
    Ok(reservoir.into_vec())
}

/// [`sample_algorithm_r`] with a fresh thread-local generator.
pub fn sample<T, I>(stream: I, k: usize) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let mut rng = rand::thread_rng();
    sample_algorithm_r(stream, k, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sampling::source::CountingSource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_algorithm_r() {
        let data = 1..101;
        let sample = sample(data, 10).unwrap();
        assert_eq!(sample.len(), 10);
        for &x in &sample {
            assert!((1..=100).contains(&x));
        }
    }

    #[test]
    fn test_short_stream_keeps_everything_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let sample = sample_algorithm_r(vec![5, 6, 7], 10, &mut rng).unwrap();
        assert_eq!(sample, vec![5, 6, 7]);
    }

    #[test]
    fn test_exact_length_stream() {
        let mut rng = CountingSource::new(ChaCha8Rng::seed_from_u64(0));
        let sample = sample_algorithm_r(0..4, 4, &mut rng).unwrap();
        assert_eq!(sample, vec![0, 1, 2, 3]);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_zero_k_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut stream = 0..10;
        let result = sample_algorithm_r(&mut stream, 0, &mut rng);
        assert_eq!(result, Err(Error::InvalidSampleSize { k: 0 }));
        assert_eq!(stream.next(), Some(0));
    }

    #[test]
    fn test_one_draw_per_extra_item() {
        let mut rng = CountingSource::new(ChaCha8Rng::seed_from_u64(11));
        let sample = sample_algorithm_r(0..1000, 10, &mut rng).unwrap();
        assert_eq!(sample.len(), 10);
        assert_eq!(rng.draws(), 990);
    }

    #[test]
    fn test_seeded_runs_match() {
        let a = sample_algorithm_r(0..10_000, 25, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        let b = sample_algorithm_r(0..10_000, 25, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_slot_uniformity() {
        let n = 10;
        let trials = 20_000;
        let mut counts = vec![0usize; n];
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..trials {
            let sample = sample_algorithm_r(0..n, 1, &mut rng).unwrap();
            counts[sample[0]] += 1;
        }
        let expected = trials as f64 / n as f64;
        for (i, &count) in counts.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.1,
                "item {} chosen {} times (expected ~{})",
                i,
                count,
                expected
            );
        }
    }
}
