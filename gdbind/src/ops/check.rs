//! Check operation - API validation and fallback analysis.

use super::Project;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing and validation already happened while loading; this adds the
/// lints that point at best-effort output.
pub fn check(project: &Project) -> CheckReport {
    let mapper = gdbind_cpp::GodotTypeMapper::new(&project.config.header.core_namespace);
    let api = project.api_json.api();

    CheckReport {
        api_path: project.api_json.path().to_path_buf(),
        class_count: api.classes().len(),
        diagnostics: gdbind_cpp::check(api, &mapper),
    }
}
