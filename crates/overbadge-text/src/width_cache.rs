#![forbid(unsafe_code)]

//! LRU width cache for display-width lookups.
//!
//! The fit planner measures the comma-joined candidate text once per item per
//! relayout pass, and resize bursts replay the same strings over and over.
//! This cache stores the computed cell widths so repeated strings skip the
//! Unicode width walk.
//!
//! # Example
//! ```
//! use overbadge_text::WidthCache;
//!
//! let mut cache = WidthCache::new(1000);
//!
//! // First call computes the width.
//! assert_eq!(cache.get_or_compute("Item 0, Item 1"), 14);
//!
//! // Second call hits the cache.
//! assert_eq!(cache.get_or_compute("Item 0, Item 1"), 14);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache for text display widths, in cells.
///
/// Cell widths are font-independent, so the cache survives font changes; the
/// owning surface converts cells to pixels with its current advance.
///
/// Keys are stored as 64-bit FxHash values rather than full strings to keep
/// the per-entry footprint small. Collision probability at 64 bits is
/// negligible for the short candidate strings measured here.
///
/// Not thread-safe; each measurement surface owns its own cache.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, usize>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a new cache with the specified capacity.
    ///
    /// A zero capacity is clamped to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped above zero");
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a new cache with the default capacity.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Get cached width or compute and cache it.
    #[inline]
    pub fn get_or_compute(&mut self, text: &str) -> usize {
        self.get_or_compute_with(text, crate::display_width)
    }

    /// Get cached width or compute it with a custom function.
    pub fn get_or_compute_with<F>(&mut self, text: &str, compute: F) -> usize
    where
        F: FnOnce(&str) -> usize,
    {
        let hash = hash_text(text);

        if let Some(&width) = self.cache.get(&hash) {
            self.hits += 1;
            return width;
        }

        self.misses += 1;
        let width = compute(text);
        self.cache.put(hash, width);
        width
    }

    /// Check if a text string is in the cache.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&hash_text(text))
    }

    /// Clear the cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    /// Current number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get the cache capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

/// Hash a text string with FxHash.
#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cache_is_empty() {
        let cache = WidthCache::new(100);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 100);
    }

    #[test]
    fn get_or_compute_caches_value() {
        let mut cache = WidthCache::new(100);

        assert_eq!(cache.get_or_compute("hello"), 5);
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.get_or_compute("hello"), 5);
        assert_eq!(cache.len(), 1);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn wide_characters_count_double() {
        let mut cache = WidthCache::new(100);
        assert_eq!(cache.get_or_compute("你好"), 4);
    }

    #[test]
    fn contains_does_not_modify_stats() {
        let mut cache = WidthCache::new(100);
        cache.get_or_compute("hello");

        let before = cache.stats();
        let _ = cache.contains("hello");
        let _ = cache.contains("missing");
        let after = cache.stats();

        assert_eq!(before, after);
    }

    #[test]
    fn lru_eviction() {
        let mut cache = WidthCache::new(2);

        cache.get_or_compute("a");
        cache.get_or_compute("b");
        cache.get_or_compute("c"); // evicts "a"

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn lru_refresh_on_access() {
        let mut cache = WidthCache::new(2);

        cache.get_or_compute("a");
        cache.get_or_compute("b");
        cache.get_or_compute("a"); // refresh "a"
        cache.get_or_compute("c"); // evicts "b"

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn custom_compute_function() {
        let mut cache = WidthCache::new(100);
        assert_eq!(cache.get_or_compute_with("hello", |_| 42), 42);
        // Cached value survives.
        assert_eq!(cache.get_or_compute("hello"), 42);
    }

    #[test]
    fn clear_removes_entries() {
        let mut cache = WidthCache::new(100);
        cache.get_or_compute("hello");
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains("hello"));
    }

    #[test]
    fn reset_stats_preserves_entries() {
        let mut cache = WidthCache::new(100);
        cache.get_or_compute("hello");
        cache.get_or_compute("hello");
        cache.reset_stats();

        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.size, 1);
    }

    #[test]
    fn minimum_capacity_is_one() {
        let cache = WidthCache::new(0);
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn empty_string_is_zero_wide() {
        let mut cache = WidthCache::new(100);
        assert_eq!(cache.get_or_compute(""), 0);
    }

    #[test]
    fn hit_rate_no_requests() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn hit_rate_computed() {
        let stats = CacheStats {
            hits: 75,
            misses: 25,
            size: 100,
            capacity: 1000,
        };
        assert!((stats.hit_rate() - 0.75).abs() < 0.001);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use unicode_width::UnicodeWidthStr;

    proptest! {
        #[test]
        fn cached_width_matches_direct(s in "[a-zA-Z0-9 ,]{1,50}") {
            let mut cache = WidthCache::new(100);
            prop_assert_eq!(cache.get_or_compute(&s), s.width());
        }

        #[test]
        fn second_access_is_hit(s in "[a-zA-Z0-9]{1,20}") {
            let mut cache = WidthCache::new(100);

            cache.get_or_compute(&s);
            let before = cache.stats();

            cache.get_or_compute(&s);
            let after = cache.stats();

            prop_assert_eq!(after.hits, before.hits + 1);
            prop_assert_eq!(after.misses, before.misses);
        }

        #[test]
        fn lru_never_exceeds_capacity(
            strings in prop::collection::vec("[a-z]{1,5}", 10..100),
            capacity in 5usize..20
        ) {
            let mut cache = WidthCache::new(capacity);

            for s in &strings {
                cache.get_or_compute(s);
                prop_assert!(cache.len() <= capacity);
            }
        }
    }
}
