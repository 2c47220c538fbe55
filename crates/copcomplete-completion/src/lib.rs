//! RuboCop cop registry and completion classification
//!
//! This crate turns `rubocop --show-cops` output into a [`Registry`], caches
//! it per project through [`RegistryLoader`], and answers completion queries
//! for `.rubocop.yml` files and `rubocop:disable` comments through
//! [`CompletionEngine`].
//!
//! # Example
//!
//! ```
//! use copcomplete_completion::*;
//!
//! let registry = Registry::from_show_cops(b"Style/Foo:\n  Enabled: true\n").unwrap();
//! let request = CompletionRequest::new("", Position::new(0, 0), SourceScope::config());
//! let list = CompletionEngine::new().complete(&request, &registry);
//!
//! assert_eq!(list.triggers(), vec!["Style/Foo"]);
//! ```

pub mod context;
pub mod docs;
pub mod engine;
pub mod error;
pub mod loader;
pub mod providers;
pub mod registry;
pub mod types;

pub use context::{CommentTarget, ConfigTarget, CursorContext, COMMENT_START, DISABLE_DIRECTIVE};
pub use docs::{display_value, docs_link, docs_url, escape_html, escape_snippet};
pub use engine::{CompletionEngine, CompletionRequest};
pub use error::{CompletionError, CompletionResult};
pub use loader::RegistryLoader;
pub use providers::{
    CommentCompletionProvider, CompletionProvider, ConfigCompletionProvider, ENFORCED_STYLE,
};
pub use registry::{decode_show_cops, Cop, Registry, SCHEMA_VERSION};
pub use types::*;
