//! Validation context and utilities for API description parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Error, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Encapsulates the source document, filename, and the current path through
/// the class/method hierarchy so nested validation can report where it is.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "api.json");
/// let method = ctx.push("Node").push("add_child");
/// return Err(method.missing_default("legible"));
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments, e.g. ["Node", "add_child"]
    path: Vec<String>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &str) -> Self {
        let mut path = self.path.clone();
        path.push(segment.to_string());
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "method in 'Node'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `"name": "<name>"` pair in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Build an empty-name error for the given kind at the current path.
    pub fn empty_name(&self, kind: &str) -> Box<Error> {
        self.source.empty_name_error(self.context_for(kind))
    }

    /// Build a missing-default error for an argument of the current method.
    pub fn missing_default(&self, argument: &str) -> Box<Error> {
        self.source.missing_default_error(
            argument,
            format!("'{}'", self.path_string()),
            self.find_span(argument),
        )
    }
}

/// Find the span of a name used as a `"name"` value in the JSON source.
///
/// Whitespace around the colon is tolerated. Returns the first match, which
/// is good enough for pointing a diagnostic at the right area.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let needle = format!("\"{}\"", name);
    let mut search_from = 0;

    while let Some(found) = src[search_from..].find(&needle) {
        let start = search_from + found;
        let before = src[..start].trim_end();
        if let Some(before_colon) = before.strip_suffix(':')
            && before_colon.trim_end().ends_with("\"name\"")
        {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((start + 1, name.len())));
        }
        search_from = start + needle.len();
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is a valid C++ identifier (used for the include guard
/// macro). Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
