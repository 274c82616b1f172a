//! API description and configuration model for the gdbind header generator.
//!
//! - [`Api`] and its descriptors mirror the parts of Godot's `api.json`
//!   that the generator reads.
//! - [`Config`] is the optional `gdbind.toml`.
//! - [`Error`] carries miette diagnostics pointing into either document.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod api;
mod config;
mod error;
mod file;
mod validate;

pub use api::{
    Api, ArgumentDescriptor, ClassDescriptor, EnumDescriptor, MethodDescriptor, parse_api,
};
pub use config::{CONFIG_FILE_NAME, Config, HeaderConfig, PathsConfig, parse_config};
pub use error::{Error, Result, SourceContext};
pub use file::ApiJson;
