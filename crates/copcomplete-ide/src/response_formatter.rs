//! Host response formatting
//!
//! Core logic produces one typed [`CompletionList`]. This module renders it in
//! the shape a given host expects: rich items for current editors, or the
//! `[trigger, contents]` pairs older hosts understand.

use copcomplete_completion::{CompletionItem, CompletionItemKind, CompletionList, InsertTextFormat};
use serde_json::{json, Value};
use tracing::debug;

use crate::types::HostFlavor;

/// Response formatter for completion lists
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format a completion list for `flavor`
    pub fn format_completions(list: &CompletionList, flavor: HostFlavor) -> Value {
        debug!(count = list.len(), flavor = ?flavor, "formatting completions");

        match flavor {
            HostFlavor::Modern => Self::format_modern(list),
            HostFlavor::Legacy => Self::format_legacy(list),
        }
    }

    fn format_modern(list: &CompletionList) -> Value {
        let items: Vec<Value> = list
            .items
            .iter()
            .map(|item| {
                json!({
                    "trigger": item.trigger,
                    "annotation": item.annotation(),
                    "completion": item.insert_text,
                    "completion_format": Self::format_insert_format(item.insert_text_format),
                    "kind": Self::format_kind(item.kind),
                    "details": item.details,
                })
            })
            .collect();

        json!({
            "items": items,
            "flags": {
                "inhibit_word_completions": list.inhibit_word_completions,
                "inhibit_explicit_completions": list.inhibit_explicit_completions,
            },
        })
    }

    fn format_legacy(list: &CompletionList) -> Value {
        let pairs: Vec<Value> = list.items.iter().map(Self::format_pair).collect();

        json!({
            "completions": pairs,
            "inhibit_word_completions": list.inhibit_word_completions,
            "inhibit_explicit_completions": list.inhibit_explicit_completions,
        })
    }

    fn format_pair(item: &CompletionItem) -> Value {
        json!([item.trigger, item.insert_text])
    }

    fn format_insert_format(format: InsertTextFormat) -> &'static str {
        match format {
            InsertTextFormat::PlainText => "text",
            InsertTextFormat::Snippet => "snippet",
        }
    }

    fn format_kind(kind: CompletionItemKind) -> &'static str {
        match kind {
            CompletionItemKind::Cop => "keyword",
            CompletionItemKind::Property => "variable",
            CompletionItemKind::Value => "markup",
            CompletionItemKind::Directive => "markup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> CompletionList {
        CompletionList::new(vec![
            CompletionItem::snippet("Max", CompletionItemKind::Property, "Max: ${1:120}")
                .with_details("Default: 120"),
            CompletionItem::new("Layout/LineLength", CompletionItemKind::Cop, "Layout/LineLength:\n  "),
        ])
    }

    #[test]
    fn test_modern_format() {
        let value = ResponseFormatter::format_completions(&list(), HostFlavor::Modern);

        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["trigger"], "Layout/LineLength");
        assert_eq!(items[0]["annotation"], "Cop");
        assert_eq!(items[0]["kind"], "keyword");
        assert_eq!(items[0]["details"], Value::Null);
        assert_eq!(items[1]["completion_format"], "snippet");
        assert_eq!(items[1]["details"], "Default: 120");
        assert_eq!(value["flags"]["inhibit_word_completions"], true);
    }

    #[test]
    fn test_legacy_pairs() {
        let value = ResponseFormatter::format_completions(&list(), HostFlavor::Legacy);

        assert_eq!(
            value["completions"],
            json!([
                ["Layout/LineLength", "Layout/LineLength:\n  "],
                ["Max", "Max: ${1:120}"]
            ])
        );
        assert_eq!(value["inhibit_explicit_completions"], true);
    }

    #[test]
    fn test_empty_list() {
        let value = ResponseFormatter::format_completions(&CompletionList::empty(), HostFlavor::Legacy);
        assert_eq!(value["completions"], json!([]));
    }
}
