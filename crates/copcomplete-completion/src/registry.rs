//! Cop registry: the decoded output of `rubocop --show-cops`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::CompletionResult;

/// Version of the cached registry layout; part of every cache key
pub const SCHEMA_VERSION: u32 = 2;

/// One cop and its default configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cop {
    attributes: BTreeMap<String, Value>,
}

impl Cop {
    pub fn new(attributes: BTreeMap<String, Value>) -> Self {
        Self { attributes }
    }

    /// Attribute value by name
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    /// Whether the cop defines `attribute`
    pub fn has(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }

    /// Attributes in name order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `Description`, or empty
    pub fn description(&self) -> &str {
        self.get("Description").and_then(Value::as_str).unwrap_or_default()
    }

    /// `EnforcedStyle` value, if any
    pub fn enforced_style(&self) -> Option<&Value> {
        self.get("EnforcedStyle")
    }

    /// `SupportedStyles`, if present and a sequence
    pub fn supported_styles(&self) -> Option<&[Value]> {
        self.get("SupportedStyles")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

/// Every known cop, plus the schema version it was stored with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub version: u32,
    pub cops: BTreeMap<String, Cop>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::empty()
    }
}

impl Registry {
    /// Registry at the current schema version
    pub fn new(cops: BTreeMap<String, Cop>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            cops,
        }
    }

    /// No cops
    pub fn empty() -> Self {
        Self::new(BTreeMap::new())
    }

    /// Decode `rubocop --show-cops` output
    pub fn from_show_cops(stdout: &[u8]) -> CompletionResult<Self> {
        Ok(Self::new(decode_show_cops(stdout)?))
    }

    pub fn get(&self, name: &str) -> Option<&Cop> {
        self.cops.get(name)
    }

    /// Cops in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cop)> {
        self.cops.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cops.is_empty()
    }
}

/// Decode the YAML cop catalogue
///
/// Tagged nodes (`!ruby/regexp /x/` and anything else RuboCop may emit)
/// become null. Top-level entries that are not `name: mapping` pairs are
/// dropped.
pub fn decode_show_cops(stdout: &[u8]) -> CompletionResult<BTreeMap<String, Cop>> {
    let mut cops = BTreeMap::new();

    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Ok(cops);
    }

    let document: serde_yaml::Value = serde_yaml::from_slice(stdout)?;
    let serde_yaml::Value::Mapping(entries) = document else {
        debug!("cop list is not a mapping, ignoring it");
        return Ok(cops);
    };

    for (name, attributes) in entries {
        let Some(name) = yaml_key(name) else {
            continue;
        };

        match yaml_to_json(attributes) {
            Value::Object(map) => {
                cops.insert(name, Cop::new(map.into_iter().collect()));
            }
            other => debug!(entry = %name, value = %other, "skipping non-cop entry"),
        }
    }

    Ok(cops)
}

fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Null => Some("null".to_string()),
        _ => None,
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null | serde_yaml::Value::Tagged(_) => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(map) => Value::Object(
            map.into_iter()
                .filter_map(|(k, v)| yaml_key(k).map(|k| (k, yaml_to_json(v))))
                .collect(),
        ),
    }
}
