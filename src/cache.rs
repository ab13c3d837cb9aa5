use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::HashAlgorithm;

pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Occupancy snapshot of a [`HashCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
}

/// Bounded memo of computed hashes keyed by `(algorithm, salted input)`.
///
/// Once `capacity` entries are stored, new results are returned but no longer
/// inserted. Nothing is evicted; entries only go away through [`HashCache::clear`].
#[derive(Debug)]
pub struct HashCache {
    entries: Mutex<HashMap<(HashAlgorithm, String), u32>>,
    capacity: usize,
}

impl HashCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
        }
    }

    // Entries are plain values, so a panic elsewhere can't leave one half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<(HashAlgorithm, String), u32>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached hash for `input`, computing and storing it on a miss.
    pub fn get_or_compute(&self, algorithm: HashAlgorithm, input: &str) -> u32 {
        let mut entries = self.lock();
        let key = (algorithm, input.to_string());
        if let Some(&hash) = entries.get(&key) {
            log::trace!("hash cache hit for {algorithm}");
            return hash;
        }

        let hash = algorithm.compute(input);
        if entries.len() < self.capacity {
            entries.insert(key, hash);
        } else {
            log::trace!("hash cache full ({} entries), not storing", self.capacity);
        }
        hash
    }

    /// Remove every entry, returning how many were removed.
    pub fn clear(&self) -> usize {
        let mut entries = self.lock();
        let removed = entries.len();
        entries.clear();
        removed
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.lock().len(),
            capacity: self.capacity,
        }
    }
}

impl Default for HashCache {
    fn default() -> Self {
        Self::new()
    }
}
