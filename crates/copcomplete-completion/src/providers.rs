//! Completion providers, one per editing region

use tracing::debug;

use crate::context::{CommentTarget, ConfigTarget, CursorContext, DISABLE_DIRECTIVE};
use crate::docs::{display_value, docs_link, escape_html, escape_snippet};
use crate::registry::{Cop, Registry};
use crate::types::*;

/// The only attribute whose values are offered
pub const ENFORCED_STYLE: &str = "EnforcedStyle";

/// Produces candidates for one kind of editing region
pub trait CompletionProvider: Send + Sync {
    /// Provider name, for logging
    fn name(&self) -> &str;

    /// Whether the cursor is in a region this provider serves
    fn handles(&self, scope: &SourceScope) -> bool;

    /// Candidates for the cursor, unsorted
    fn provide(&self, context: &CursorContext<'_>, registry: &Registry) -> Vec<CompletionItem>;
}

/// Escaped description followed by the documentation anchor
fn cop_details(name: &str, cop: &Cop) -> String {
    format!("{}{}", escape_html(cop.description()), docs_link(name))
}

/// Candidates inside `.rubocop.yml`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigCompletionProvider;

impl ConfigCompletionProvider {
    fn cop_names(registry: &Registry) -> Vec<CompletionItem> {
        registry
            .iter()
            .map(|(name, cop)| {
                CompletionItem::new(name, CompletionItemKind::Cop, format!("{}:\n  ", name))
                    .with_details(cop_details(name, cop))
            })
            .collect()
    }

    fn attribute_names(cop_name: &str, cop: &Cop) -> Vec<CompletionItem> {
        let enforced_style = cop.enforced_style();

        cop.attributes()
            .map(|(attribute, value)| {
                let default = enforced_style.unwrap_or(value);
                CompletionItem::snippet(
                    attribute,
                    CompletionItemKind::Property,
                    format!("{}: ${{1:{}}}", attribute, escape_snippet(&display_value(default))),
                )
                .with_details(format!(
                    "Default: {}{}",
                    escape_html(&display_value(value)),
                    docs_link(cop_name)
                ))
            })
            .collect()
    }

    fn attribute_values(cop: &Cop) -> Vec<CompletionItem> {
        let Some(styles) = cop.supported_styles() else {
            return Vec::new();
        };

        styles
            .iter()
            .map(|style| {
                let value = display_value(style);
                CompletionItem::new(value.clone(), CompletionItemKind::Value, value)
            })
            .collect()
    }
}

impl CompletionProvider for ConfigCompletionProvider {
    fn name(&self) -> &str {
        "rubocop-config"
    }

    fn handles(&self, scope: &SourceScope) -> bool {
        scope.structured_config
    }

    fn provide(&self, context: &CursorContext<'_>, registry: &Registry) -> Vec<CompletionItem> {
        let Some(target) = context.config_target() else {
            debug!(line = context.row(), column = context.column(), "no config completion here");
            return Vec::new();
        };

        match target {
            ConfigTarget::CopName => Self::cop_names(registry),
            ConfigTarget::AttributeName { cop } => {
                let Some((name, cop)) = cop.as_deref().and_then(|name| registry.get(name).map(|c| (name, c))) else {
                    debug!(cop = ?cop, "no governing cop for attribute completion");
                    return Vec::new();
                };
                Self::attribute_names(name, cop)
            }
            ConfigTarget::AttributeValue { cop, attribute } => {
                if attribute != ENFORCED_STYLE {
                    return Vec::new();
                }
                match cop.as_deref().and_then(|name| registry.get(name)) {
                    Some(cop) => Self::attribute_values(cop),
                    None => {
                        debug!(cop = ?cop, "no governing cop for value completion");
                        Vec::new()
                    }
                }
            }
        }
    }
}

/// Candidates inside Ruby `#` comments
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentCompletionProvider;

impl CommentCompletionProvider {
    fn directive(leading_space: bool) -> CompletionItem {
        let insert = if leading_space {
            format!(" {} ", DISABLE_DIRECTIVE)
        } else {
            format!("{} ", DISABLE_DIRECTIVE)
        };

        CompletionItem::new(DISABLE_DIRECTIVE, CompletionItemKind::Directive, insert)
            .with_details("Disable one or more RuboCop rules")
    }
}

impl CompletionProvider for CommentCompletionProvider {
    fn name(&self) -> &str {
        "rubocop-comment"
    }

    fn handles(&self, scope: &SourceScope) -> bool {
        scope.script_comment
    }

    fn provide(&self, context: &CursorContext<'_>, registry: &Registry) -> Vec<CompletionItem> {
        match context.comment_target() {
            Some(CommentTarget::Directive { leading_space }) => vec![Self::directive(leading_space)],
            Some(CommentTarget::CopName) => registry
                .iter()
                .map(|(name, cop)| {
                    CompletionItem::new(name, CompletionItemKind::Cop, name)
                        .with_details(cop_details(name, cop))
                })
                .collect(),
            None => {
                debug!(column = context.column(), "cursor is not in a directive position");
                Vec::new()
            }
        }
    }
}
