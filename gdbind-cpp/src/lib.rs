//! C++ header generation for Godot's engine API.
//!
//! [`Generator`] turns an [`Api`](gdbind_api::Api) into a single header in
//! which every engine class is declared inside one namespace, with types
//! resolved by [`GodotTypeMapper`] and defaults rewritten as C++ literals.

mod generator;
mod literal;
mod naming;
mod type_mapper;

pub mod ast;
pub mod check;
pub mod files;

pub use check::{Checker, Lint, check};
pub use gdbind_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use literal::{Literal, LiteralRule, NULL_SENTINELS, RID_SENTINEL, synthesize};
pub use naming::CPP_NAMING;
pub use type_mapper::{CORE_NAMESPACE, CoreType, ENUM_PREFIX, GodotTypeMapper, ResolvedType};
