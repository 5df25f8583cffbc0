//! Size-weighted LRU cache for loaded fragments.
//!
//! One store exists per renderer and lives for the renderer's lifetime.
//! Entries are keyed by resolved path and weighted by body byte length;
//! when the cumulative weight exceeds the capacity, least-recently-used
//! entries are evicted until it fits again.
//!
//! The store is advisory: dropping it, resetting it, or evicting from it
//! must never change rendered output, only how often storage is read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::fragment::Fragment;

/// Default total weight budget in bytes, matching the historical adapter.
pub const DEFAULT_CAPACITY: usize = 50_000;

#[derive(Debug)]
struct Entry {
    fragment: Fragment,
    /// Monotonic recency stamp; smaller means colder.
    last_used: u64,
}

/// Size-weighted LRU cache mapping resolved paths to loaded fragments.
#[derive(Debug)]
pub struct FragmentStore {
    entries: HashMap<PathBuf, Entry>,
    capacity: usize,
    total_weight: usize,
    clock: u64,
    hits: usize,
    misses: usize,
}

impl Default for FragmentStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl FragmentStore {
    /// Create a store with the default weight capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store bounded by `capacity` total body bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            total_weight: 0,
            clock: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a fragment by location.
    ///
    /// A hit refreshes the entry's recency and returns a clone; a miss has
    /// no side effect beyond the miss counter.
    pub fn get(&mut self, location: &Path) -> Option<Fragment> {
        self.clock += 1;
        match self.entries.get_mut(location) {
            Some(entry) => {
                entry.last_used = self.clock;
                self.hits += 1;
                tracing::trace!(location = %location.display(), "fragment cache hit");
                Some(entry.fragment.clone())
            }
            None => {
                self.misses += 1;
                tracing::trace!(location = %location.display(), "fragment cache miss");
                None
            }
        }
    }

    /// Insert or replace the fragment cached for `location`, then evict
    /// least-recently-used entries until the store fits its capacity.
    ///
    /// A single fragment heavier than the whole capacity is not retained
    /// past the eviction sweep.
    pub fn set(&mut self, location: PathBuf, fragment: Fragment) {
        self.clock += 1;
        let weight = fragment.weight();
        if let Some(old) = self.entries.insert(
            location,
            Entry {
                fragment,
                last_used: self.clock,
            },
        ) {
            self.total_weight -= old.fragment.weight();
        }
        self.total_weight += weight;
        self.evict_to_capacity();
    }

    /// Drop all entries and statistics.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.total_weight = 0;
        self.hits = 0;
        self.misses = 0;
        tracing::debug!("fragment cache reset");
    }

    /// Number of cached fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all cached body byte lengths.
    #[must_use]
    pub fn total_weight(&self) -> usize {
        self.total_weight
    }

    /// Configured weight budget.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lifetime (hit, miss) counters since construction or the last reset.
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    fn evict_to_capacity(&mut self) {
        while self.total_weight > self.capacity {
            let Some(coldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(location, _)| location.clone())
            else {
                break;
            };
            if let Some(evicted) = self.entries.remove(&coldest) {
                self.total_weight -= evicted.fragment.weight();
                tracing::debug!(
                    location = %coldest.display(),
                    weight = evicted.fragment.weight(),
                    "evicted fragment from cache"
                );
            }
        }
    }
}
