//! Tool result memoization.
//!
//! Every prompt tool is a pure function of its arguments, so a repeated call
//! with a byte-identical arguments string can be answered from memory.
//! Results are keyed by `(tool_name, arguments_hash)`; the full arguments
//! string is kept alongside to rule out hash collisions. When full, the
//! oldest insertion is evicted.

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct CacheEntry {
    arguments: String,
    result: String,
    /// Insertion sequence number, used for eviction order.
    seq: u64,
}

/// Bounded cache for tool results, keyed by (tool_name, arguments_hash).
#[derive(Debug)]
pub struct ToolResultCache {
    entries: HashMap<(String, u64), CacheEntry>,
    /// Maximum number of entries before eviction.
    max_entries: usize,
    next_seq: u64,
    hits: u64,
    misses: u64,
}

impl ToolResultCache {
    /// Create a new cache with the given capacity (at least one entry).
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
            next_seq: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a cached result. Returns `Some(result)` on cache hit.
    pub fn get(&mut self, tool_name: &str, arguments: &str) -> Option<&str> {
        let key = (tool_name.to_string(), hash_arguments(arguments));
        match self.entries.get(&key) {
            Some(entry) if entry.arguments == arguments => {
                self.hits += 1;
                Some(&entry.result)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a result, evicting the oldest entry if at capacity.
    pub fn put(&mut self, tool_name: &str, arguments: &str, result: String) {
        let key = (tool_name.to_string(), hash_arguments(arguments));
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            key,
            CacheEntry {
                arguments: arguments.to_string(),
                result,
                seq,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Hit rate as a fraction (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest_key) = self
            .entries
            .iter()
            .min_by_key(|(_, v)| v.seq)
            .map(|(k, _)| k.clone())
        {
            self.entries.remove(&oldest_key);
        }
    }
}

impl Default for ToolResultCache {
    fn default() -> Self {
        Self::new(super::core::DEFAULT_CACHE_CAPACITY)
    }
}

/// FNV-1a hash of the arguments string.
fn hash_arguments(arguments: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in arguments.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
