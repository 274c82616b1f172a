//! Core operations.
//!
//! This module contains the business logic for gdbind commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod info;

use std::path::{Path, PathBuf};

pub use bake::{BakeOptions, bake};
pub use check::check;
use gdbind_api::{ApiJson, CONFIG_FILE_NAME, Config};
pub use info::info;
use tracing::debug;

/// Where inputs come from, with command-line overrides applied on top of
/// `gdbind.toml`.
#[derive(Debug, Default)]
pub struct InputOptions {
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
}

/// A loaded configuration and a parsed, validated API.
#[derive(Debug)]
pub struct Project {
    pub config: Config,
    /// The config file that was read, if any.
    pub config_path: Option<PathBuf>,
    pub api_json: ApiJson,
}

/// Load the config (explicit path, `./gdbind.toml`, or defaults), apply
/// overrides, then read and validate the API it points at.
pub fn load(options: &InputOptions) -> gdbind_api::Result<Project> {
    let (mut config, config_path) = match &options.config {
        Some(path) => (Config::from_file(path)?, Some(path.clone())),
        None => {
            let path = Path::new(CONFIG_FILE_NAME);
            let found = path.exists().then(|| path.to_path_buf());
            (Config::load_or_default(path)?, found)
        }
    };

    if let Some(input) = &options.input {
        config.paths.api = input.clone();
    }
    if let Some(output) = &options.output {
        config.paths.output = output.clone();
    }
    if let Some(namespace) = &options.namespace {
        config.header.namespace = namespace.clone();
    }

    debug!(
        config = ?config_path,
        api = %config.paths.api.display(),
        "loading api"
    );
    let api_json = ApiJson::open(&config.paths.api)?;

    Ok(Project {
        config,
        config_path,
        api_json,
    })
}
