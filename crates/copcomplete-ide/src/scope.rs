//! Scope detection for hosts that do not report syntax scopes

use std::path::Path;

use copcomplete_completion::{Position, SourceScope, COMMENT_START};

const RUBY_EXTENSIONS: &[&str] = &["rb", "rake", "gemspec", "ru"];
const RUBY_FILE_NAMES: &[&str] = &["Gemfile", "Rakefile", "Guardfile"];

/// Whether `path` names a RuboCop configuration file (`.rubocop*.yml`)
pub fn is_rubocop_config(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    name.starts_with(".rubocop") && (name.ends_with(".yml") || name.ends_with(".yaml"))
}

/// Whether `path` names a Ruby source file
pub fn is_ruby_source(path: &Path) -> bool {
    let by_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| RUBY_EXTENSIONS.contains(&e));

    let by_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| RUBY_FILE_NAMES.contains(&n));

    by_extension || by_name
}

/// Guess the scope of the cursor from the file name and the text before it
///
/// A `#` anywhere before the cursor counts as a comment start; `#` inside
/// string literals is not told apart.
pub fn detect_scope(path: &Path, document: &str, position: Position) -> SourceScope {
    if is_rubocop_config(path) {
        return SourceScope::config();
    }

    if is_ruby_source(path) {
        let line = document.lines().nth(position.line).unwrap_or_default();
        let in_comment = line
            .chars()
            .take(position.character)
            .any(|c| c == COMMENT_START);
        if in_comment {
            return SourceScope::comment();
        }
    }

    SourceScope::none()
}
