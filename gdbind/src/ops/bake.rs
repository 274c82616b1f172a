//! Bake operation - header generation from the API.

use std::path::Path;

use eyre::{Context, Result};
use gdbind_cpp::{Generator, LanguageCodegen};

use super::Project;
use crate::reports::{BakeReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Output paths are relative to the working directory, like the input paths.
pub fn bake(project: &Project, opts: BakeOptions) -> Result<BakeReport> {
    let api = project.api_json.api();
    let generator = Generator::new(api, &project.config);

    let warnings = generator
        .diagnostics()
        .into_iter()
        .filter(|d| d.severity.is_warning())
        .collect();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(Path::new("."))
            .wrap_err("Failed to generate header")?;

        GenerationResult::Written(WrittenResult {
            written: gen_result.written,
            unchanged: gen_result.unchanged,
        })
    };

    Ok(BakeReport {
        namespace: project.config.header.namespace.clone(),
        class_count: api.classes().len(),
        method_count: api.method_count(),
        warnings,
        result,
    })
}
