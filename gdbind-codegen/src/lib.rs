//! Shared code generation utilities for the gdbind header generator.
//!
//! This crate provides the language-agnostic half of generation; the
//! target-language rules live in `gdbind-cpp`.
//!
//! # Module Organization
//!
//! - [`builder`] - Scoped document model (Document, Scope, Block, Indent)
//! - [`language`] - Language-specific seams (TypeMapper, NamingConvention, LanguageCodegen)
//! - [`diagnostic`] - Warnings and notes produced while analysing an API

pub mod builder;
pub mod diagnostic;
pub mod language;

pub use builder::{Block, BlockStyle, Document, Indent, Renderable, Scope, ScopeId};
pub use diagnostic::{Diagnostic, Severity};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile, TypeMapper};
