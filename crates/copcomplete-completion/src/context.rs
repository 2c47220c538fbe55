//! Cursor-context classification
//!
//! Decides, from the line under the cursor (and, for `.rubocop.yml`, the
//! lines above it), which kind of completion applies. Classification needs
//! no registry; the providers resolve targets against it afterwards.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{Position, SourceScope};

/// Directive that introduces a cop list in a Ruby comment
pub const DISABLE_DIRECTIVE: &str = "rubocop:disable";

/// Character that opens a Ruby line comment
pub const COMMENT_START: char = '#';

/// A bare `Department/Name:` line opening a cop block
fn cop_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([A-Za-z0-9/]+):$").expect("valid regex"))
}

/// An indented `Attribute:` with the cursor in value position
fn attribute_value_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s{2}(\S+):\s*").expect("valid regex"))
}

/// Completion target inside `.rubocop.yml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigTarget {
    /// Column 0: any cop name
    CopName,
    /// Empty two-space line under `cop`
    AttributeName { cop: Option<String> },
    /// After `attribute:` inside the block of `cop`
    AttributeValue {
        cop: Option<String>,
        attribute: String,
    },
}

/// Completion target inside a Ruby comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentTarget {
    /// Right after `#` (or `# `): offer the directive itself
    Directive { leading_space: bool },
    /// After `rubocop:disable `: any cop name
    CopName,
}

/// Everything known about the cursor for one completion request
#[derive(Debug, Clone)]
pub struct CursorContext<'a> {
    lines: Vec<&'a str>,
    line: &'a str,
    position: Position,
    scope: SourceScope,
}

impl<'a> CursorContext<'a> {
    /// Build the context for `position` in `document`
    ///
    /// Line terminators are not part of the line. A row past the end of the
    /// document reads as an empty line.
    pub fn new(document: &'a str, position: Position, scope: SourceScope) -> Self {
        let lines: Vec<&str> = document.lines().collect();
        let line = lines.get(position.line).copied().unwrap_or_default();
        Self {
            lines,
            line,
            position,
            scope,
        }
    }

    /// Text of the cursor line
    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn row(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.character
    }

    pub fn scope(&self) -> SourceScope {
        self.scope
    }

    /// Character `offset` positions before the cursor (1 = immediately before)
    pub fn char_before(&self, offset: usize) -> Option<char> {
        let index = self.column().checked_sub(offset)?;
        self.line.chars().nth(index)
    }

    /// Nearest line above the cursor matching `pattern`, as its captures
    ///
    /// Walks up to the start of the document, so the cost is linear in the
    /// number of lines above the cursor.
    pub fn find_previous_line_matching(&self, pattern: &Regex) -> Option<regex::Captures<'a>> {
        let end = self.row().min(self.lines.len());
        self.lines[..end]
            .iter()
            .rev()
            .copied()
            .find_map(|line| pattern.captures(line))
    }

    /// Name of the cop whose block contains the cursor
    pub fn governing_cop(&self) -> Option<String> {
        self.find_previous_line_matching(cop_header_regex())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Classify the cursor inside `.rubocop.yml`
    ///
    /// Checked in order, first match wins: column 0, empty indented line,
    /// attribute value position.
    pub fn config_target(&self) -> Option<ConfigTarget> {
        if self.column() == 0 {
            return Some(ConfigTarget::CopName);
        }

        if self.column() == 2 && self.line == "  " {
            return Some(ConfigTarget::AttributeName {
                cop: self.governing_cop(),
            });
        }

        let caps = attribute_value_regex().captures(self.line)?;
        Some(ConfigTarget::AttributeValue {
            cop: self.governing_cop(),
            attribute: caps[1].to_string(),
        })
    }

    /// Classify the cursor inside a Ruby comment
    pub fn comment_target(&self) -> Option<CommentTarget> {
        let directive_end = self.line.rfind(DISABLE_DIRECTIVE).map(|byte_index| {
            self.line[..byte_index].chars().count() + DISABLE_DIRECTIVE.chars().count() + 1
        });

        match directive_end {
            Some(end) if self.column() >= end => Some(CommentTarget::CopName),
            _ => match (self.char_before(1), self.char_before(2)) {
                (Some(COMMENT_START), _) => Some(CommentTarget::Directive {
                    leading_space: true,
                }),
                (Some(' '), Some(COMMENT_START)) => Some(CommentTarget::Directive {
                    leading_space: false,
                }),
                _ => None,
            },
        }
    }
}
