use std::path::{Path, PathBuf};

use gdbind_api::{Api, HeaderConfig};
use gdbind_codegen::{BlockStyle, Document, Indent};
use gdbind_core::GeneratedFile;

use crate::{
    GodotTypeMapper,
    ast::{Class, Namespace},
};

/// The engine header: include guard, core include, and one namespace holding
/// every class.
#[derive(Debug, Clone)]
pub struct EngineHpp {
    path: PathBuf,
    include_guard: String,
    core_include: String,
    indent: Indent,
    guard_comment: bool,
    namespace: Namespace<Class>,
}

impl EngineHpp {
    pub fn new(api: &Api, config: &HeaderConfig, path: impl Into<PathBuf>) -> Self {
        let mapper = GodotTypeMapper::new(&config.core_namespace);
        let namespace = Namespace::new(&config.namespace).items(
            api.classes()
                .iter()
                .map(|class| Class::from_descriptor(class, &mapper)),
        );

        Self {
            path: path.into(),
            include_guard: config.include_guard.clone(),
            core_include: config.core_include.clone(),
            indent: Indent::from_width(config.indent_width),
            guard_comment: config.guard_comment,
            namespace,
        }
    }

    fn endif(&self) -> String {
        if self.guard_comment {
            format!("endif // {}", self.include_guard)
        } else {
            format!("endif {}", self.include_guard)
        }
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> &Path {
        &self.path
    }
}

impl GeneratedFile for EngineHpp {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        let mut doc = Document::new(self.indent, BlockStyle::CPP);
        doc.root()
            .directive(&format!("ifndef {}", self.include_guard))
            .directive(&format!("define {}", self.include_guard))
            .blank()
            .directive(&format!("include \"{}\"", self.core_include))
            .blank()
            .emit(&self.namespace)
            .blank()
            .directive(&self.endif());
        doc.finish()
    }
}
