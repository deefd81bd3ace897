//! Caching layer for translations
//!
//! Translation is referentially transparent, so identical requests against
//! an identical mapping set can be answered from memory. The cache here is
//! an explicit value owned by the caller (typically one per viewer session);
//! nothing in the crate keeps process-wide state.
//!
//! Entries are keyed by `(start, end, direction, mapping-set fingerprint)`
//! plus the caller's options. Failures are cached too, since a region with
//! no structural coverage stays uncovered.
//!
//! # Example
//!
//! ```
//! use ferro_sifts::cache::TranslationCache;
//! use ferro_sifts::{Direction, MappingSet, Segment, StructAnchor};
//!
//! let mappings = MappingSet::new(vec![Segment::new(
//!     1, "A", "A", 10, 20,
//!     StructAnchor::new(5, 5, ""),
//!     StructAnchor::new(15, 15, ""),
//! )]);
//!
//! let cache = TranslationCache::new(1000);
//! let first = cache.get_or_translate(12, 14, Direction::UnpToStruct, &mappings);
//! let second = cache.get_or_translate(12, 14, Direction::UnpToStruct, &mappings);
//! assert_eq!(first, second);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::PositionMappingError;
use crate::mapping::MappingSet;
use crate::translate::{translate_with_options, Direction, TranslateOptions, TranslatedPosition};

/// Statistics for cache usage
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of items currently in cache
    pub size: usize,
    /// Maximum cache capacity
    pub capacity: usize,
    /// Number of evictions
    pub evictions: u64,
}

impl CacheStats {
    /// Calculate hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Calculate miss rate as a percentage
    pub fn miss_rate(&self) -> f64 {
        100.0 - self.hit_rate()
    }
}

/// Thread-safe LRU cache implementation
pub struct LruCache<K: Hash + Eq + Clone, V: Clone> {
    /// Cache entries with their last access tick
    entries: RwLock<HashMap<K, (V, AtomicU64)>>,
    /// Maximum capacity
    capacity: usize,
    /// Access counter for LRU tracking
    access_counter: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<K: Hash + Eq + Clone, V: Clone> LruCache<K, V> {
    /// Create a new LRU cache with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            capacity,
            access_counter: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    // Poisoning is ignored; no writer leaves the map half-updated
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, (V, AtomicU64)>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, (V, AtomicU64)>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Get a value from the cache
    ///
    /// Statistics counters use `Relaxed` ordering; counts may be slightly
    /// inconsistent under heavy concurrent access.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.read();
        if let Some((value, last_access)) = entries.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            let access = self.access_counter.fetch_add(1, Ordering::Relaxed);
            last_access.store(access, Ordering::Relaxed);
            Some(value.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// Insert a value into the cache
    pub fn insert(&self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        let access = self.access_counter.fetch_add(1, Ordering::Relaxed);
        let mut entries = self.write();

        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            self.evict_lru(&mut entries);
        }

        entries.insert(key, (value, AtomicU64::new(access)));
    }

    fn evict_lru(&self, entries: &mut HashMap<K, (V, AtomicU64)>) {
        if let Some(lru_key) = entries
            .iter()
            .min_by_key(|(_, (_, access))| access.load(Ordering::Relaxed))
            .map(|(k, _)| k.clone())
        {
            entries.remove(&lru_key);
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.read().len(),
            capacity: self.capacity,
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    /// Get the number of items in the cache
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identity of one translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    pub start: i64,
    pub end: i64,
    pub direction: Direction,
    /// [`MappingSet::fingerprint`] of the table translated against
    pub mapping_set: u64,
    pub allow_empty: bool,
}

type TranslationResult = Result<Vec<TranslatedPosition>, PositionMappingError>;

/// Memoizing front end to [`translate_with_options`]
pub struct TranslationCache {
    cache: LruCache<TranslationKey, TranslationResult>,
}

impl TranslationCache {
    /// Create a new translation cache with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Get a cached translation or compute and store it
    pub fn get_or_translate(
        &self,
        start: i64,
        end: i64,
        direction: Direction,
        mappings: &MappingSet,
    ) -> TranslationResult {
        self.get_or_translate_with_options(
            start,
            end,
            direction,
            mappings,
            &TranslateOptions::default(),
        )
    }

    /// Get a cached translation or compute it with the given options
    pub fn get_or_translate_with_options(
        &self,
        start: i64,
        end: i64,
        direction: Direction,
        mappings: &MappingSet,
        options: &TranslateOptions,
    ) -> TranslationResult {
        let key = TranslationKey {
            start,
            end,
            direction,
            mapping_set: mappings.fingerprint(),
            allow_empty: options.allow_empty,
        };

        if let Some(result) = self.cache.get(&key) {
            return result;
        }

        let result = translate_with_options(start, end, direction, mappings, options);
        self.cache.insert(key, result.clone());
        result
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Get the number of cached translations
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(1000)
    }
}
