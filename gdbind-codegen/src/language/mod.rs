//! Language-specific abstractions.
//!
//! - [`TypeMapper`] - Schema type tokens to target types, and default tokens to literals
//! - [`NamingConvention`] - Reserved words and how to escape them
//! - [`LanguageCodegen`] - Preview and write generated files
//! - [`GenerateResult`], [`PreviewFile`] - Outcomes of the above

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
