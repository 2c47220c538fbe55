//! Cache storage backends

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use tracing::debug;

use crate::{CacheError, CacheKey, Result};

/// Cache storage trait
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Store a value
    async fn set(&self, key: &CacheKey, value: &serde_json::Value) -> Result<()>;

    /// Retrieve a value
    async fn get(&self, key: &CacheKey) -> Result<Option<serde_json::Value>>;

    /// Check if key exists
    async fn contains(&self, key: &CacheKey) -> Result<bool>;

    /// Remove every entry
    async fn clear(&self) -> Result<()>;

    /// Get number of entries
    async fn len(&self) -> Result<usize>;
}

/// In-memory cache storage
#[derive(Default)]
pub struct MemoryStorage {
    data: Arc<RwLock<HashMap<CacheKey, serde_json::Value>>>,
}

impl MemoryStorage {
    /// Create new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStorage for MemoryStorage {
    async fn set(&self, key: &CacheKey, value: &serde_json::Value) -> Result<()> {
        let mut data = self.data.write().await;
        data.insert(key.clone(), value.clone());
        Ok(())
    }

    async fn get(&self, key: &CacheKey) -> Result<Option<serde_json::Value>> {
        let data = self.data.read().await;
        Ok(data.get(key).cloned())
    }

    async fn contains(&self, key: &CacheKey) -> Result<bool> {
        let data = self.data.read().await;
        Ok(data.contains_key(key))
    }

    async fn clear(&self) -> Result<()> {
        let mut data = self.data.write().await;
        data.clear();
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        let data = self.data.read().await;
        Ok(data.len())
    }
}

/// Disk-based cache storage: one pretty-printed `<key>.json` per entry
///
/// The directory may be shared with other files; only `<64 hex>.json` names
/// are treated as entries, and `clear` removes nothing else. No locking. Two writers racing on the same key both write the same
/// content-addressed payload; the last one wins.
pub struct DiskStorage {
    base_path: PathBuf,
}

impl DiskStorage {
    /// Create new disk storage with base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the cache files
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get file path for a key
    pub fn key_path(&self, key: &CacheKey) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Whether `path` is named like a cache entry
    fn is_entry(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "json")
            && path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| CacheKey::parse(stem).is_ok())
    }

    /// Paths of every entry file in the directory
    async fn entries(&self) -> Result<Vec<PathBuf>> {
        let mut dir = match fs::read_dir(&self.base_path).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if Self::is_entry(&path) {
                entries.push(path);
            }
        }
        Ok(entries)
    }
}

#[async_trait]
impl CacheStorage for DiskStorage {
    async fn set(&self, key: &CacheKey, value: &serde_json::Value) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;

        let file_path = self.key_path(key);
        let json_data =
            serde_json::to_string_pretty(value).map_err(|e| CacheError::Serialization {
                message: e.to_string(),
            })?;

        fs::write(&file_path, json_data).await?;
        debug!(path = %file_path.display(), "wrote cache file");
        Ok(())
    }

    async fn get(&self, key: &CacheKey) -> Result<Option<serde_json::Value>> {
        let file_path = self.key_path(key);

        let json_data = match fs::read_to_string(&file_path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_str(&json_data).map_err(|e| CacheError::Deserialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        Ok(Some(value))
    }

    async fn contains(&self, key: &CacheKey) -> Result<bool> {
        Ok(fs::try_exists(self.key_path(key)).await?)
    }

    async fn clear(&self) -> Result<()> {
        let entries = self.entries().await?;
        for path in &entries {
            match fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        debug!(path = %self.base_path.display(), removed = entries.len(), "cleared cache entries");

        // Only succeeds when nothing else lives there
        if fs::remove_dir(&self.base_path).await.is_ok() {
            debug!(path = %self.base_path.display(), "removed empty cache directory");
        }
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries().await?.len())
    }
}
