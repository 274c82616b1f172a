use std::path::{Path, PathBuf};

use crate::{Api, Error, Result, api::parse_api};

/// Represents an api.json file with both raw content and parsed description.
#[derive(Debug)]
pub struct ApiJson {
    path: PathBuf,
    content: String,
    api: Api,
}

impl ApiJson {
    /// Open and parse an api.json file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let api = parse_api(&content, &filename)?;

        Ok(Self { path, content, api })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed description.
    pub fn api(&self) -> &Api {
        &self.api
    }
}
