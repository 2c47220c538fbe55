/// Property-based tests for config and comment classification
use std::collections::BTreeMap;

use copcomplete_completion::{
    Cop, CompletionEngine, CompletionItemKind, CompletionRequest, Position, Registry, SourceScope,
};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for cop names such as `Style/FooBar`
fn cop_name_strategy() -> impl Strategy<Value = String> {
    "(Style|Layout|Lint|Rails|Performance)/[A-Z][A-Za-z0-9]{0,12}"
}

/// Strategy for attribute names
fn attribute_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z]{0,12}"
}

/// Strategy for descriptions, including characters that need escaping
fn description_strategy() -> impl Strategy<Value = String> {
    "[a-z <>&]{0,30}"
}

fn registry_strategy() -> impl Strategy<Value = Registry> {
    prop::collection::btree_map(
        cop_name_strategy(),
        (
            description_strategy(),
            prop::collection::btree_map(attribute_strategy(), any::<i32>(), 0..6),
        ),
        0..15,
    )
    .prop_map(|entries| {
        let cops = entries
            .into_iter()
            .map(|(name, (description, attributes))| {
                let mut map: BTreeMap<String, Value> = attributes
                    .into_iter()
                    .map(|(k, v)| (k, json!(v)))
                    .collect();
                map.insert("Description".to_string(), json!(description));
                (name, Cop::new(map))
            })
            .collect();
        Registry::new(cops)
    })
}

fn complete(document: &str, line: usize, character: usize, scope: SourceScope, registry: &Registry) -> Vec<(String, String)> {
    let request = CompletionRequest::new(document, Position::new(line, character), scope);
    CompletionEngine::new()
        .complete(&request, registry)
        .items
        .into_iter()
        .map(|item| (item.trigger, item.insert_text))
        .collect()
}

proptest! {
    /// Property: column 0 yields one cop candidate per registry entry, sorted by name
    #[test]
    fn prop_column_zero_lists_every_cop(registry in registry_strategy()) {
        let items = complete("", 0, 0, SourceScope::config(), &registry);
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        let triggers: Vec<&str> = items.iter().map(|(t, _)| t.as_str()).collect();

        prop_assert_eq!(triggers, names);
        for (trigger, insert) in &items {
            prop_assert_eq!(insert, &format!("{}:\n  ", trigger));
        }
    }

    /// Property: attribute completion lists exactly the governing cop's attributes
    #[test]
    fn prop_attribute_names_follow_governing_cop(
        registry in registry_strategy(),
        filler in prop::collection::vec("    - [a-z]{1,8}", 0..4),
    ) {
        prop_assume!(!registry.is_empty());
        let (name, cop) = registry.iter().last().unwrap();

        let mut document = format!("{}:\n", name);
        for line in &filler {
            document.push_str(line);
            document.push('\n');
        }
        let row = filler.len() + 1;
        document.push_str("  \n");

        let items = complete(&document, row, 2, SourceScope::config(), &registry);
        let expected: Vec<&str> = cop.attributes().map(|(k, _)| k).collect();
        let triggers: Vec<&str> = items.iter().map(|(t, _)| t.as_str()).collect();
        prop_assert_eq!(triggers, expected);
    }

    /// Property: an attribute line with no cop header above completes nothing
    #[test]
    fn prop_attribute_names_need_a_header(registry in registry_strategy()) {
        let items = complete("# comment\n  \n", 1, 2, SourceScope::config(), &registry);
        prop_assert!(items.is_empty());
    }

    /// Property: values other than EnforcedStyle never complete
    #[test]
    fn prop_other_attribute_values_are_empty(
        registry in registry_strategy(),
        attribute in attribute_strategy(),
    ) {
        prop_assume!(attribute != "EnforcedStyle");
        prop_assume!(!registry.is_empty());
        let (name, _) = registry.iter().next().unwrap();

        let line = format!("  {}: ", attribute);
        let document = format!("{}:\n{}\n", name, line);
        let items = complete(&document, 1, line.chars().count(), SourceScope::config(), &registry);
        prop_assert!(items.is_empty());
    }

    /// Property: descriptions are HTML-escaped exactly once
    #[test]
    fn prop_descriptions_escaped_once(registry in registry_strategy()) {
        let request = CompletionRequest::new("", Position::new(0, 0), SourceScope::config());
        let list = CompletionEngine::new().complete(&request, &registry);

        for item in &list.items {
            let details = item.details.as_deref().unwrap_or_default();
            let description = registry.get(&item.trigger).unwrap().description();
            let (text, _) = details.split_at(details.len() - copcomplete_completion::docs_link(&item.trigger).len());

            prop_assert!(!text.contains('<') && !text.contains('>'));
            prop_assert_eq!(text.matches("&lt;").count(), description.matches('<').count());
            prop_assert_eq!(text.matches("&gt;").count(), description.matches('>').count());
            prop_assert_eq!(text.matches("&amp;").count(), description.matches('&').count());
        }
    }

    /// Property: comment cop completion ignores what was typed after the directive
    #[test]
    fn prop_disabled_cops_are_unfiltered(
        registry in registry_strategy(),
        typed in "[A-Za-z/, ]{0,20}",
    ) {
        let line = format!("x = 1 # rubocop:disable {}", typed);
        let items = complete(&line, 0, line.chars().count(), SourceScope::comment(), &registry);

        prop_assert_eq!(items.len(), registry.len());
        for (trigger, insert) in &items {
            prop_assert_eq!(trigger, insert);
        }
    }
}

#[test]
fn test_enforced_style_values() {
    let registry = Registry::from_show_cops(
        b"Style/Foo:\n  EnforcedStyle: a\n  SupportedStyles:\n  - a\n  - b\n",
    )
    .unwrap();

    let items = complete(
        "Style/Foo:\n  EnforcedStyle: \n",
        1,
        17,
        SourceScope::config(),
        &registry,
    );
    assert_eq!(
        items,
        vec![
            ("a".to_string(), "a".to_string()),
            ("b".to_string(), "b".to_string())
        ]
    );
}

#[test]
fn test_disable_directive_after_hash_space() {
    let registry = Registry::from_show_cops(b"Style/Foo:\n  Enabled: true\n").unwrap();
    let request = CompletionRequest::new("# ", Position::new(0, 2), SourceScope::comment());
    let list = CompletionEngine::new().complete(&request, &registry);

    assert_eq!(list.len(), 1);
    assert_eq!(list.items[0].insert_text, "rubocop:disable ");
    assert_eq!(list.items[0].kind, CompletionItemKind::Directive);
}
