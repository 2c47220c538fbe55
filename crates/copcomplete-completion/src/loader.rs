//! Registry loading with content-addressed caching

use std::path::{Path, PathBuf};
use std::sync::Arc;

use copcomplete_cache::{Cache, CacheError, CacheKey};
use copcomplete_process::{ToolRunner, CONFIG_FILE, LOCK_FILE, SHOW_COPS};
use tracing::{debug, info};

use crate::error::CompletionResult;
use crate::registry::{Registry, SCHEMA_VERSION};

/// Produces the cop registry for a project folder
///
/// RuboCop runs once per distinct set of governing file contents. Later
/// requests are served from the cache.
#[derive(Clone)]
pub struct RegistryLoader {
    runner: Arc<dyn ToolRunner>,
    cache: Cache,
}

impl RegistryLoader {
    pub fn new(runner: Arc<dyn ToolRunner>, cache: Cache) -> Self {
        Self { runner, cache }
    }

    /// The cache backing this loader
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Files whose contents decide the registry, in key order
    pub fn governing_files(root: &Path) -> [PathBuf; 2] {
        [root.join(CONFIG_FILE), root.join(LOCK_FILE)]
    }

    /// Cache key for the registry of `root`
    pub fn cache_key(root: &Path) -> CompletionResult<CacheKey> {
        Ok(CacheKey::from_files(
            SCHEMA_VERSION,
            &Self::governing_files(root),
        )?)
    }

    /// Load the registry, surfacing cache and decode errors
    ///
    /// A failed or skipped RuboCop run yields an empty registry that is not
    /// cached.
    pub async fn try_load(&self, root: Option<&Path>) -> CompletionResult<Registry> {
        let Some(root) = root else {
            debug!("no root folder, using empty registry");
            return Ok(Registry::empty());
        };

        let key = Self::cache_key(root)?;

        if let Some(registry) = self.cached(&key).await {
            return Ok(registry);
        }

        let output = self.runner.run(&[SHOW_COPS], Some(root)).await;
        if !output.success {
            debug!(root = %root.display(), "rubocop produced no cop list");
            return Ok(Registry::empty());
        }

        let registry = Registry::from_show_cops(&output.stdout)?;
        self.cache.put(&key, &registry).await?;
        info!(root = %root.display(), cops = registry.len(), key = %key, "cached cop registry");

        Ok(registry)
    }

    /// Load the registry, degrading every failure to an empty one
    pub async fn load(&self, root: Option<&Path>) -> Registry {
        match self.try_load(root).await {
            Ok(registry) => registry,
            Err(e) => {
                debug!(error = %e, "failed to load cop registry");
                Registry::empty()
            }
        }
    }

    /// Stored registry for `key`, if readable and at the current schema
    async fn cached(&self, key: &CacheKey) -> Option<Registry> {
        match self.cache.get::<Registry>(key).await {
            Ok(Some(registry)) if registry.version == SCHEMA_VERSION => Some(registry),
            Ok(Some(registry)) => {
                debug!(key = %key, version = registry.version, "ignoring registry from another schema");
                None
            }
            Ok(None) => None,
            Err(CacheError::Deserialization { message, .. }) => {
                debug!(key = %key, error = %message, "ignoring unreadable cache entry");
                None
            }
            Err(e) => {
                debug!(key = %key, error = %e, "cache lookup failed");
                None
            }
        }
    }
}
