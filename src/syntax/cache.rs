//! Bounded memoization tables
//!
//! Both the token cache and the render cache are LRU maps behind a
//! mutex. Keys carry an explicit content hash of the text instead of
//! the text itself; a 64-bit collision returns the wrong entry and is
//! accepted as the cost of cheap keys.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use rustc_hash::FxHasher;

/// Identity of a text value for cache keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash {
    pub hash: u64,
    pub len: usize,
}

impl ContentHash {
    /// Hash the full text
    pub fn of(text: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write(text.as_bytes());
        Self {
            hash: hasher.finish(),
            len: text.len(),
        }
    }
}

/// Key for the token cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenKey {
    pub language: String,
    pub content: ContentHash,
}

/// Key for the render cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub language: String,
    pub content: ContentHash,
    /// `f32::to_bits` of the font size
    pub font_size_bits: u32,
    pub theme_key: &'static str,
}

/// Hit and miss counters
#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// A mutex-guarded LRU map of shared values
pub struct MemoCache<K: Hash + Eq, V> {
    entries: Mutex<LruCache<K, Arc<V>>>,
    counters: Counters,
}

impl<K: Hash + Eq, V> MemoCache<K, V> {
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            counters: Counters::default(),
        }
    }

    /// Look up a key, marking it most recently used
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let found = self.entries.lock().get(key).cloned();
        let counter = if found.is_some() {
            &self.counters.hits
        } else {
            &self.counters.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Store a value, evicting the least recently used entry when full
    pub fn insert(&self, key: K, value: Arc<V>) {
        self.entries.lock().put(key, value);
    }

    /// Return the cached value or compute, store and return it
    ///
    /// The lock is not held while computing; two racing misses both
    /// compute and the later insert wins, which is harmless because
    /// both values are equal.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = Arc::new(compute());
        self.insert(key, Arc::clone(&value));
        value
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn hits(&self) -> u64 {
        self.counters.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.counters.misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_distinguishes_text() {
        assert_eq!(ContentHash::of("let x = 1"), ContentHash::of("let x = 1"));
        assert_ne!(ContentHash::of("let x = 1"), ContentHash::of("let x = 2"));
        assert_eq!(ContentHash::of("").len, 0);
    }

    #[test]
    fn test_get_or_insert_computes_once() {
        let cache: MemoCache<u32, String> = MemoCache::new(4);
        let mut calls = 0;
        let first = cache.get_or_insert_with(1, || {
            calls += 1;
            "one".to_string()
        });
        let second = cache.get_or_insert_with(1, || {
            calls += 1;
            "uno".to_string()
        });
        assert_eq!(calls, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_bounded_lru_eviction() {
        let cache: MemoCache<u32, u32> = MemoCache::new(2);
        cache.insert(1, Arc::new(10));
        cache.insert(2, Arc::new(20));
        // Touch 1 so 2 becomes the eviction candidate
        assert!(cache.get(&1).is_some());
        cache.insert(3, Arc::new(30));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&2).is_none());
        assert_eq!(cache.get(&1).as_deref(), Some(&10));
        assert_eq!(cache.get(&3).as_deref(), Some(&30));
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let cache: MemoCache<u32, u32> = MemoCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.insert(1, Arc::new(1));
        cache.clear();
        assert!(cache.is_empty());
    }
}
