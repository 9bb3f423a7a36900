use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use super::{CompiledPattern, PatternResult, compile_path};

pub const DEFAULT_PATTERN_CACHE_CAPACITY: usize = 256;

#[derive(Debug)]
pub struct PatternCache {
    entries: RwLock<LruPatterns>,
    stats: CacheStats,
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN_CACHE_CAPACITY)
    }
}

impl PatternCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(LruPatterns::new(capacity)),
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.read().capacity
    }

    pub fn len(&self) -> usize {
        self.entries.read().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.read().map.contains_key(pattern)
    }

    pub fn get_or_compile(&self, pattern: &str) -> PatternResult<Arc<CompiledPattern>> {
        if let Some(hit) = self.entries.write().get(pattern) {
            self.stats.record_hit();
            return Ok(hit);
        }

        self.stats.record_miss();
        let compiled = Arc::new(compile_path(pattern)?);
        self.entries.write().insert(pattern, Arc::clone(&compiled));
        Ok(compiled)
    }

    pub fn clear(&self) {
        let mut guard = self.entries.write();
        guard.map.clear();
        guard.order.clear();
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

/// Process-wide cache used by the free matching functions.
pub fn global_cache() -> &'static PatternCache {
    static CACHE: OnceLock<PatternCache> = OnceLock::new();
    CACHE.get_or_init(PatternCache::default)
}

#[derive(Debug)]
struct LruPatterns {
    capacity: usize,
    map: FastHashMap<Box<str>, Arc<CompiledPattern>>,
    order: VecDeque<Box<str>>,
}

impl LruPatterns {
    fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            capacity: cap,
            map: FastHashMap::with_capacity(cap),
            order: VecDeque::with_capacity(cap),
        }
    }

    fn get(&mut self, key: &str) -> Option<Arc<CompiledPattern>> {
        let found = self.map.get(key).cloned()?;
        self.promote(key);
        Some(found)
    }

    fn insert(&mut self, key: &str, value: Arc<CompiledPattern>) {
        if let Some(entry) = self.map.get_mut(key) {
            *entry = value;
            self.promote(key);
            return;
        }

        if self.order.len() == self.capacity
            && let Some(oldest) = self.order.pop_back()
        {
            self.map.remove(&oldest);
        }

        let boxed: Box<str> = key.into();
        self.order.push_front(boxed.clone());
        self.map.insert(boxed, value);
    }

    fn promote(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|existing| &**existing == key) {
            if let Some(entry) = self.order.remove(pos) {
                self.order.push_front(entry);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// `(hits, misses)`.
    pub fn snapshot(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }
}
