//! Check command report data structures.

use std::path::PathBuf;

use gdbind_codegen::Diagnostic;

use super::output::{Output, Report};

/// Report data from API analysis.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the api.json that was checked.
    pub api_path: PathBuf,
    /// Number of classes in the API.
    pub class_count: usize,
    /// Lint results, warnings and infos mixed in lint order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            out.diagnostic(diagnostic);
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        let warnings = self.warning_count();
        let summary = if warnings == 0 {
            format!(
                "✓ {} is valid ({} classes)",
                self.api_path.display(),
                self.class_count
            )
        } else {
            format!(
                "✓ {} is valid ({} classes, {} warning{})",
                self.api_path.display(),
                self.class_count,
                warnings,
                if warnings == 1 { "" } else { "s" }
            )
        };
        out.preformatted(&summary);
    }
}
