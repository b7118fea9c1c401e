//! In-memory cache for static assets.
//!
//! Assets never change while the process runs, so entries are kept until
//! the cache is dropped. There is no eviction and no TTL.
//!
//! ## Metrics
//!
//! - `hits`/`misses`: lookups served from memory vs. storage
//! - `entry_count`: number of cached assets
//! - `size_bytes`: total cached bytes

use bytes::Bytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Statistics for the asset cache.
///
/// All fields are atomic for lock-free reads from metrics endpoints.
#[derive(Debug, Default)]
pub struct AssetCacheStats {
    /// Total cache hits
    pub hits: AtomicU64,
    /// Total cache misses
    pub misses: AtomicU64,
    /// Current number of entries in cache
    pub entry_count: AtomicU64,
    /// Current cache size in bytes
    pub size_bytes: AtomicU64,
}

impl AssetCacheStats {
    /// Calculate cache hit rate as a percentage (0-100).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }
}

/// Shared map from asset key to asset bytes.
#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    entries: Arc<RwLock<HashMap<String, Bytes>>>,
    stats: Arc<AssetCacheStats>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an asset, counting the hit or miss.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(data) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                Some(data.clone())
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store an asset. Replacing an entry adjusts the size accounting.
    pub async fn insert(&self, key: &str, data: Bytes) {
        let mut entries = self.entries.write().await;
        let added = data.len() as u64;
        match entries.insert(key.to_string(), data) {
            Some(previous) => {
                self.stats
                    .size_bytes
                    .fetch_sub(previous.len() as u64, Ordering::Relaxed);
            }
            None => {
                self.stats.entry_count.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.stats.size_bytes.fetch_add(added, Ordering::Relaxed);
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub fn stats(&self) -> &AssetCacheStats {
        &self.stats
    }
}
