//! Scoped document model.
//!
//! Generated text is assembled in a tree of scopes:
//! - [`Document`] - Arena owning every scope; the root holds the final output
//! - [`Scope`] - Emission handle for one scope (lines, directives, enums)
//! - [`Block`] - A nested scope that finalizes itself into its parent on drop
//! - [`Renderable`] - Trait for nodes that know how to emit themselves
//! - [`Indent`], [`BlockStyle`] - Indentation unit and block delimiters

mod block;
mod document;
mod indent;
mod renderable;
mod scope;

pub use block::Block;
pub use document::{Document, ScopeId};
pub use indent::{BlockStyle, Indent};
pub use renderable::Renderable;
pub use scope::Scope;
