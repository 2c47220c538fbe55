//! Typed cache facade over a storage backend

use std::path::Path;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{CacheError, Result};
use crate::key::CacheKey;
use crate::metrics::{CacheMetrics, CacheStats};
use crate::storage::{CacheStorage, DiskStorage};

/// Content-addressed cache
///
/// Entries never expire on their own. They become unreachable when their
/// key stops being computed, and disappear on [`Cache::clear`].
#[derive(Clone)]
pub struct Cache {
    storage: Arc<dyn CacheStorage>,
    metrics: CacheMetrics,
}

impl Cache {
    /// Create a cache over any storage backend
    pub fn new(storage: Arc<dyn CacheStorage>) -> Self {
        Self {
            storage,
            metrics: CacheMetrics::new(),
        }
    }

    /// Create a cache of JSON files under `dir`
    pub fn on_disk<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(Arc::new(DiskStorage::new(dir)))
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot()
    }

    /// Look up `key`
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>> {
        let Some(value) = self.storage.get(key).await? else {
            debug!(key = %key, "cache miss");
            self.metrics.record_miss();
            return Ok(None);
        };

        let data = serde_json::from_value(value).map_err(|e| CacheError::Deserialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        debug!(key = %key, "cache hit");
        self.metrics.record_hit();
        Ok(Some(data))
    }

    /// Store `value` under `key`, replacing what was there
    pub async fn put<T: Serialize>(&self, key: &CacheKey, value: &T) -> Result<()> {
        let json_value = serde_json::to_value(value).map_err(|e| CacheError::Serialization {
            message: e.to_string(),
        })?;

        self.storage.set(key, &json_value).await?;
        self.metrics.record_store();
        Ok(())
    }

    /// Check if a key exists
    pub async fn contains(&self, key: &CacheKey) -> Result<bool> {
        self.storage.contains(key).await
    }

    /// Drop every entry
    pub async fn clear(&self) -> Result<()> {
        debug!("clearing cache");
        self.storage.clear().await?;
        self.metrics.record_clear();
        Ok(())
    }

    /// Number of stored entries
    pub async fn len(&self) -> Result<usize> {
        self.storage.len().await
    }

    /// Whether the cache holds nothing
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
