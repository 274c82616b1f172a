//! Info operation - API and configuration summary.

use std::path::Path;

use super::Project;
use crate::reports::{InfoReport, Stats};

/// Execute the info operation.
pub fn info(project: &Project) -> InfoReport {
    let api = project.api_json.api();
    let config = &project.config;

    InfoReport {
        config_path: project.config_path.as_deref().map(canonical),
        api_path: canonical(project.api_json.path()),
        output_path: config.paths.output.clone(),
        namespace: config.header.namespace.clone(),
        include_guard: config.header.include_guard.clone(),
        stats: Stats {
            classes: api.classes().len(),
            root_classes: api
                .classes()
                .iter()
                .filter(|c| c.base_class.is_empty())
                .count(),
            methods: api.method_count(),
            enums: api.enum_count(),
            constants: api.constant_count(),
        },
    }
}

fn canonical(path: &Path) -> std::path::PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
