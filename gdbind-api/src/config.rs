//! `gdbind.toml` configuration.
//!
//! Every key is optional; an absent file behaves like an empty one, which
//! reproduces the stock `godot/engine.hpp` layout.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, validate::validate_identifier};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gdbind.toml";

/// Root of `gdbind.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Layout of the generated header.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Namespace wrapping every generated class.
    pub namespace: String,
    /// Macro used by the `#ifndef`/`#define`/`#endif` guard.
    pub include_guard: String,
    /// Header providing the core value types.
    pub core_include: String,
    /// Namespace the core value types live in.
    pub core_namespace: String,
    /// Spaces per indentation level; tabs when absent.
    pub indent_width: Option<u8>,
    /// Write the guard after `#endif` as a `//` comment instead of a bare token.
    pub guard_comment: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            namespace: "godot::engine".to_string(),
            include_guard: "GODOT_ENGINE_H".to_string(),
            core_include: "godot/core.hpp".to_string(),
            core_namespace: "godot::core".to_string(),
            indent_width: None,
            guard_comment: false,
        }
    }
}

/// Input and output locations.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub api: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            api: PathBuf::from("godot_headers/api.json"),
            output: PathBuf::from("godot/engine.hpp"),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load the config at `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.config_parse_error(e))?;
    validate_header(&config.header, &source_ctx)?;
    Ok(config)
}

fn validate_header(header: &HeaderConfig, ctx: &SourceContext) -> Result<()> {
    if header.namespace.is_empty() {
        return Err(ctx.validation_error("header.namespace cannot be empty"));
    }

    if let Some(reason) = validate_identifier(&header.include_guard) {
        return Err(ctx.validation_error(format!("header.include_guard: {}", reason)));
    }

    if header.core_include.is_empty() {
        return Err(ctx.validation_error("header.core_include cannot be empty"));
    }

    if let Some(width) = header.indent_width
        && !(1..=8).contains(&width)
    {
        return Err(ctx.validation_error(format!(
            "header.indent_width must be between 1 and 8, got {}",
            width
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.header.namespace, "godot::engine");
        assert_eq!(config.header.include_guard, "GODOT_ENGINE_H");
        assert_eq!(config.paths.output, PathBuf::from("godot/engine.hpp"));
        assert!(!config.header.guard_comment);
    }

    #[test]
    fn test_guard_comment_enabled() {
        let config: Config = "[header]\nguard_comment = true\n".parse().unwrap();
        assert!(config.header.guard_comment);
        assert_eq!(config.header.include_guard, "GODOT_ENGINE_H");
    }

    #[test]
    fn test_partial_header_keeps_other_defaults() {
        let config: Config = r#"
            [header]
            namespace = "my::engine"
            indent_width = 4
        "#
        .parse()
        .unwrap();
        assert_eq!(config.header.namespace, "my::engine");
        assert_eq!(config.header.indent_width, Some(4));
        assert_eq!(config.header.core_namespace, "godot::core");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "[header]\nnamepsace = \"x\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_invalid_guard_rejected() {
        let err = "[header]\ninclude_guard = \"NOT-VALID\"\n"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_indent_width_out_of_range() {
        let err = "[header]\nindent_width = 0\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config::load_or_default(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }
}
