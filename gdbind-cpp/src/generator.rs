use std::path::Path;

use eyre::Result;
use gdbind_api::{Api, Config};
use gdbind_codegen::{Diagnostic, GenerateResult, LanguageCodegen, PreviewFile};
use gdbind_core::{GeneratedFile, WriteResult};
use tracing::{debug, info};

use crate::{GodotTypeMapper, check, files::EngineHpp};

/// C++ engine header generator
pub struct Generator<'a> {
    api: &'a Api,
    config: &'a Config,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn file_extension(&self) -> &'static str {
        "hpp"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let header = self.header();
        vec![PreviewFile {
            path: header.relative_path().display().to_string(),
            content: header.render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let header = self.header();
        let path = header.relative_path().display().to_string();

        debug!(
            classes = self.api.classes().len(),
            methods = self.api.method_count(),
            "rendering engine header"
        );

        let mut result = GenerateResult::default();
        match header.write(output_dir)? {
            WriteResult::Written => {
                info!(path = %path, "wrote engine header");
                result.written.push(path);
            }
            WriteResult::Unchanged => {
                debug!(path = %path, "engine header unchanged");
                result.unchanged.push(path);
            }
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(api: &'a Api, config: &'a Config) -> Self {
        Self { api, config }
    }

    /// Render the whole header to a string.
    pub fn render(&self) -> String {
        self.header().render()
    }

    /// Lint the API with the configured core namespace.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mapper = GodotTypeMapper::new(&self.config.header.core_namespace);
        check::check(self.api, &mapper)
    }

    fn header(&self) -> EngineHpp {
        EngineHpp::new(self.api, &self.config.header, &self.config.paths.output)
    }
}
