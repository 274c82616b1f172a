//! Bake command report data structures.

use gdbind_codegen::Diagnostic;

use super::output::{Output, Report};

/// Report data from header generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Namespace the classes were generated into.
    pub namespace: String,

    /// Number of classes in the API.
    pub class_count: usize,

    /// Number of methods across all classes.
    pub method_count: usize,

    /// Warnings from the analysis lints.
    pub warnings: Vec<Diagnostic>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of header generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files that were already up to date.
    pub unchanged: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &self.warnings {
            out.diagnostic(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "namespace {}: {} classes, {} methods",
            self.namespace, self.class_count, self.method_count
        ));
        out.newline();

        if !written.written.is_empty() {
            out.section("Generated");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.unchanged.is_empty() {
            out.section("Up to date");
            for path in &written.unchanged {
                out.list_item(path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
