//! Random integer operands and a caller-owned cache for them.
//!
//! The algebra itself is deterministic; randomness only enters here, through
//! an RNG supplied by the caller.

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, StpError};
use crate::math::Array2;

/// Half-open integer range `[low, high)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub low: i64,
    pub high: i64,
}

impl ValueRange {
    pub fn new(low: i64, high: i64) -> Result<Self, StpError> {
        let range = Self { low, high };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), StpError> {
        if self.low >= self.high {
            return Err(StpError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value < self.high
    }
}

pub fn random_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    range: &ValueRange,
) -> Result<Array2<i64>, StpError> {
    ensure_positive("rows", rows)?;
    ensure_positive("columns", cols)?;
    range.validate()?;

    let data = (0..rows * cols)
        .map(|_| rng.gen_range(range.low..range.high))
        .collect();
    Ok(Array2::from_shape_vec((rows, cols), data)?)
}

pub fn random_column<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    range: &ValueRange,
) -> Result<Array2<i64>, StpError> {
    random_matrix(rng, len, 1, range)
}

/// Operands kept between interactions, keyed by the dimensions they were
/// generated for.
///
/// A lookup with the same key returns the cached value. A different key
/// means the dimensions changed, so the old value is dropped and a fresh one
/// is generated.
#[derive(Debug, Clone)]
pub struct OperandCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V> OperandCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reuse the value for `key` or generate one, evicting stale dimensions.
    pub fn get_or_insert_with<E, F>(&mut self, key: K, generate: F) -> Result<&V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if !self.entries.contains_key(&key) {
            let value = generate()?;
            self.entries.clear();
            self.entries.insert(key.clone(), value);
        }
        Ok(&self.entries[&key])
    }

    /// Always regenerate the value for `key`.
    pub fn refresh<E, F>(&mut self, key: K, generate: F) -> Result<&V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let value = generate()?;
        self.entries.clear();
        self.entries.insert(key.clone(), value);
        Ok(&self.entries[&key])
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Eq + Hash + Clone, V> Default for OperandCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
