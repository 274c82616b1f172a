//! Language-agnostic code generation traits.

use std::{fmt::Display, path::Path};

use eyre::Result;

/// Trait for language-specific generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "cpp")
    fn language(&self) -> &'static str;

    /// File extension for generated files (e.g., "hpp")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files relative to the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<String>,
    /// Files whose content was already up to date
    pub unchanged: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping schema type tokens and default-value tokens to the
/// target language.
///
/// Both lookups are total: a token no rule recognises is passed through.
pub trait TypeMapper {
    /// A resolved target-language type.
    type Type: Display;

    /// A synthesized default-value expression.
    type Literal: Display;

    /// Resolve a schema type token (e.g. `Vector2`, `enum.Error`, `int`).
    fn resolve_type(&self, token: &str) -> Self::Type;

    /// Build a literal of type `ty` from a display-formatted default token.
    fn synthesize_literal(&self, ty: &Self::Type, raw: &str) -> Self::Literal;
}
