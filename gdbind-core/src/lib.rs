//! Core utilities for the gdbind header generator.
//!
//! This crate owns the last step of generation: putting rendered text on
//! disk. Nothing here knows about the API description or the target
//! language.

mod file;

pub use file::{GeneratedFile, WriteResult};
