//! Fixed-capacity buffers holding the current sample.
//!
//! After `t` items have been offered, a [`Reservoir`] holds `min(t, k)` of
//! them. [`KeyedReservoir`] additionally pairs every slot with a random key
//! and remembers which slot holds the largest one.

use crate::error::{Error, Result};
use crate::sampling::source::UniformSource;

/// The sample buffer for a single sampling run.
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    capacity: usize,
    items: Vec<T>,
    seen: usize,
}

impl<T> Reservoir<T> {
    /// Creates an empty reservoir able to hold `capacity` items.
    ///
    /// Fails with [`Error::InvalidSampleSize`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidSampleSize { k: capacity });
        }
        Ok(Reservoir {
            capacity,
            items: Vec::with_capacity(capacity),
            seen: 0,
        })
    }

    /// Pulls items from `stream` until the reservoir is full or the stream ends.
    ///
    /// Returns `true` if the reservoir is full afterwards.
    pub fn fill<I>(&mut self, stream: &mut I) -> bool
    where
        I: Iterator<Item = T>,
    {
        while self.items.len() < self.capacity {
            match stream.next() {
                Some(item) => {
                    self.items.push(item);
                    self.seen += 1;
                }
                None => return false,
            }
        }
        true
    }

    /// Overwrites slot `slot` with `item`.
    pub fn replace(&mut self, slot: usize, item: T) {
        self.items[slot] = item;
    }

    /// Records that `count` more stream items went by, whether kept or not.
    pub fn observe(&mut self, count: usize) {
        self.seen = self.seen.saturating_add(count);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Number of stream items offered to this reservoir so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the reservoir and returns the sample in slot order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

/// A full reservoir whose slots each carry a key in `(0, 1)`.
#[derive(Debug, Clone)]
pub struct KeyedReservoir<T> {
    inner: Reservoir<T>,
    keys: Vec<f64>,
    max_slot: usize,
}

impl<T> KeyedReservoir<T> {
    /// Assigns an independent key to every slot of a full reservoir.
    pub fn with_random_keys<R>(inner: Reservoir<T>, rng: &mut R) -> Result<Self>
    where
        R: UniformSource + ?Sized,
    {
        debug_assert!(inner.is_full());
        let keys = (0..inner.len())
            .map(|_| rng.open_unit())
            .collect::<Result<Vec<f64>>>()?;
        let max_slot = argmax(&keys);
        Ok(KeyedReservoir {
            inner,
            keys,
            max_slot,
        })
    }

    /// The largest key currently held.
    pub fn max_key(&self) -> f64 {
        self.keys[self.max_slot]
    }

    pub fn max_slot(&self) -> usize {
        self.max_slot
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Puts `item` with `key` into the slot holding the largest key, then
    /// rescans for the new maximum.
    pub fn replace_max(&mut self, item: T, key: f64) {
        self.inner.replace(self.max_slot, item);
        self.keys[self.max_slot] = key;
        self.max_slot = argmax(&self.keys);
    }

    pub fn observe(&mut self, count: usize) {
        self.inner.observe(count);
    }

    pub fn seen(&self) -> usize {
        self.inner.seen()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }
}

/// Index of the largest value; the first one wins on ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
