//! Core completion data types

use serde::{Deserialize, Serialize};

/// Zero-based cursor position; `character` counts chars, not bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Which editing regions the cursor sits in
///
/// Hosts report scopes independently, so both flags may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceScope {
    /// Inside a RuboCop YAML configuration file
    pub structured_config: bool,
    /// Inside a `#` comment of a Ruby file
    pub script_comment: bool,
}

impl SourceScope {
    /// Structured-config region only
    pub fn config() -> Self {
        Self {
            structured_config: true,
            script_comment: false,
        }
    }

    /// Script-comment region only
    pub fn comment() -> Self {
        Self {
            structured_config: false,
            script_comment: true,
        }
    }

    /// Neither region
    pub fn none() -> Self {
        Self::default()
    }
}

/// What a candidate stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionItemKind {
    /// A cop name
    Cop,
    /// A cop attribute name
    Property,
    /// A value for an attribute
    Value,
    /// The `rubocop:disable` directive
    Directive,
}

impl CompletionItemKind {
    /// Short label shown next to the trigger
    pub fn annotation(&self) -> &'static str {
        match self {
            CompletionItemKind::Cop => "Cop",
            CompletionItemKind::Property => "Property",
            CompletionItemKind::Value => "Value",
            CompletionItemKind::Directive => "Directive",
        }
    }
}

/// How the host should treat `insert_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertTextFormat {
    #[default]
    PlainText,
    /// `${1:placeholder}` style snippet
    Snippet,
}

/// A completion candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Text shown in the list and matched against what the user typed
    pub trigger: String,
    /// Kind of candidate
    pub kind: CompletionItemKind,
    /// Text inserted on commit
    pub insert_text: String,
    /// Plain text or snippet
    #[serde(default)]
    pub insert_text_format: InsertTextFormat,
    /// HTML detail line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CompletionItem {
    /// Create a plain-text completion item
    pub fn new(
        trigger: impl Into<String>,
        kind: CompletionItemKind,
        insert_text: impl Into<String>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            kind,
            insert_text: insert_text.into(),
            insert_text_format: InsertTextFormat::PlainText,
            details: None,
        }
    }

    /// Create a snippet completion item
    pub fn snippet(
        trigger: impl Into<String>,
        kind: CompletionItemKind,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            insert_text_format: InsertTextFormat::Snippet,
            ..Self::new(trigger, kind, snippet)
        }
    }

    /// Set the detail line
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Annotation shown next to the trigger
    pub fn annotation(&self) -> &'static str {
        self.kind.annotation()
    }
}

/// Ordered completion result handed back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionList {
    /// Candidates sorted by trigger
    pub items: Vec<CompletionItem>,
    /// Suppress the host's buffer-word completions
    pub inhibit_word_completions: bool,
    /// Suppress the host's explicit completions
    pub inhibit_explicit_completions: bool,
}

impl CompletionList {
    /// Sort `items` by trigger (case-sensitive, ascending, stable)
    pub fn new(mut items: Vec<CompletionItem>) -> Self {
        items.sort_by(|a, b| a.trigger.cmp(&b.trigger));
        Self {
            items,
            inhibit_word_completions: true,
            inhibit_explicit_completions: true,
        }
    }

    /// No candidates
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Triggers in order
    pub fn triggers(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.trigger.as_str()).collect()
    }
}
