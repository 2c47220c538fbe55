//! Completion engine: routes a request to the providers for its scope

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::CursorContext;
use crate::providers::{CommentCompletionProvider, CompletionProvider, ConfigCompletionProvider};
use crate::registry::Registry;
use crate::types::{CompletionList, Position, SourceScope};

/// A single completion query from the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Full document text
    pub document: String,
    /// Cursor position
    pub position: Position,
    /// Regions the cursor is in
    pub scope: SourceScope,
}

impl CompletionRequest {
    pub fn new(document: impl Into<String>, position: Position, scope: SourceScope) -> Self {
        Self {
            document: document.into(),
            position,
            scope,
        }
    }
}

/// Combines every provider that handles the request scope
#[derive(Clone)]
pub struct CompletionEngine {
    providers: Vec<Arc<dyn CompletionProvider>>,
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionEngine {
    /// Engine with the config and comment providers
    pub fn new() -> Self {
        Self::with_providers(vec![
            Arc::new(ConfigCompletionProvider),
            Arc::new(CommentCompletionProvider),
        ])
    }

    pub fn with_providers(providers: Vec<Arc<dyn CompletionProvider>>) -> Self {
        Self { providers }
    }

    /// Candidates for `request`, concatenated across providers and sorted
    pub fn complete(&self, request: &CompletionRequest, registry: &Registry) -> CompletionList {
        let context = CursorContext::new(&request.document, request.position, request.scope);

        let mut items = Vec::new();
        for provider in self.providers.iter().filter(|p| p.handles(&request.scope)) {
            let found = provider.provide(&context, registry);
            debug!(provider = provider.name(), count = found.len(), "provider finished");
            items.extend(found);
        }

        CompletionList::new(items)
    }
}
