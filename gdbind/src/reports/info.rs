//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from API info.
#[derive(Debug)]
pub struct InfoReport {
    /// Config file path, when one was read.
    pub config_path: Option<PathBuf>,
    /// api.json path.
    pub api_path: PathBuf,
    /// Header path that bake would write.
    pub output_path: PathBuf,
    /// Generated namespace.
    pub namespace: String,
    /// Include guard macro.
    pub include_guard: String,
    /// API statistics.
    pub stats: Stats,
}

/// API statistics.
#[derive(Debug, Default)]
pub struct Stats {
    /// All classes.
    pub classes: usize,
    /// Classes without a base class.
    pub root_classes: usize,
    /// Methods across all classes.
    pub methods: usize,
    /// Named and anonymous enums.
    pub enums: usize,
    /// Class constants.
    pub constants: usize,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        // Paths
        let config = self
            .config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string());
        out.preformatted(&format!("  Config      {}", config));
        out.preformatted(&format!("  API         {}", self.api_path.display()));
        out.preformatted(&format!("  Output      {}", self.output_path.display()));
        out.preformatted(&format!("  Namespace   {}", self.namespace));
        out.preformatted(&format!("  Guard       {}", self.include_guard));
        out.newline();

        // Statistics
        out.preformatted("  Statistics");
        out.preformatted("  ──────────");
        let roots = if self.stats.root_classes > 0 {
            format!(" ({} root)", self.stats.root_classes)
        } else {
            String::new()
        };
        out.preformatted(&format!("  Classes     {}{}", self.stats.classes, roots));
        out.preformatted(&format!("  Methods     {}", self.stats.methods));
        out.preformatted(&format!("  Enums       {}", self.stats.enums));
        out.preformatted(&format!("  Constants   {}", self.stats.constants));
    }
}
