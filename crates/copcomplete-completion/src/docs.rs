//! Rendering helpers for completion details

use serde_json::Value;

const DOCS_RAILS: &str = "https://docs.rubocop.org/rubocop-rails";
const DOCS_PERFORMANCE: &str = "https://docs.rubocop.org/rubocop-performance";
const DOCS_DEFAULT: &str = "https://docs.rubocop.org/rubocop";

/// Documentation URL for a cop name such as `Rails/FindBy`
pub fn docs_url(cop_name: &str) -> String {
    let department = cop_name.split('/').next().unwrap_or_default().to_lowercase();
    let fragment = cop_name.to_lowercase().replace('/', "");

    let base = match department.as_str() {
        "rails" => DOCS_RAILS,
        "performance" => DOCS_PERFORMANCE,
        _ => DOCS_DEFAULT,
    };

    format!("{}/cops_{}.html#{}", base, department, fragment)
}

/// Anchor appended to detail text, with a leading space
pub fn docs_link(cop_name: &str) -> String {
    format!(" <a href='{}'>More</a>", docs_url(cop_name))
}

/// Replace `&`, `<` and `>` with their entities
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render an attribute value the way it would be written in `.rubocop.yml`
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "~".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, display_value(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

/// Escape text for use inside a `${1:...}` snippet placeholder
pub fn escape_snippet(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '$' | '}') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
