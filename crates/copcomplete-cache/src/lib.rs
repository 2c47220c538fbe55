//! # copcomplete cache
//!
//! Content-addressed JSON cache for decoded RuboCop cop catalogues.
//!
//! ## Features
//!
//! - **Content addressing**: keys are SHA-256 digests over a schema version
//!   and the project's governing files
//! - **Disk storage**: one pretty-printed JSON file per key
//! - **Invalidation**: implicit (key change) or explicit (full clear); no TTL
//! - **Metrics**: hit/miss/store/clear counters

pub mod cache;
pub mod error;
pub mod key;
pub mod metrics;
pub mod storage;

pub use cache::Cache;
pub use error::{CacheError, Result};
pub use key::CacheKey;
pub use metrics::{CacheMetrics, CacheStats};
pub use storage::{CacheStorage, DiskStorage, MemoryStorage};
