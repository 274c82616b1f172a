//! C++ class declaration.

use gdbind_api::ClassDescriptor;
use gdbind_codegen::{Renderable, Scope};
use tracing::trace;

use super::{Enum, Method};
use crate::{CPP_NAMING, GodotTypeMapper};

/// A class body: `public:`, constants, enums, then methods.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    base: Option<String>,
    constants: Enum,
    enums: Vec<Enum>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            constants: Enum::anonymous(),
            enums: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the public base class. An empty name means no base.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.base = (!base.is_empty()).then_some(base);
        self
    }

    pub fn constant(mut self, name: impl Into<String>, value: i64) -> Self {
        self.constants = self.constants.member(name, value);
        self
    }

    pub fn enumeration(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn from_descriptor(class: &ClassDescriptor, mapper: &GodotTypeMapper) -> Self {
        trace!(class = %class.name, methods = class.methods.len(), "building class");

        let mut decl = Self::new(&class.name).base(&class.base_class);
        decl.constants = Enum::anonymous().members(
            class
                .constants
                .iter()
                .map(|(name, value)| (name.as_str(), *value)),
        );
        decl.enums = class.enums.iter().map(Enum::from).collect();
        decl.methods = class
            .methods
            .iter()
            .map(|m| Method::from_descriptor(m, mapper, &CPP_NAMING))
            .collect();
        decl
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `class` line, without the block-open token.
    pub fn opening(&self) -> String {
        match &self.base {
            Some(base) => format!("class {} : public {}", self.name, base),
            None => format!("class {}", self.name),
        }
    }
}

impl Renderable for Class {
    fn render(&self, scope: &mut Scope<'_>) {
        scope.block(&self.opening(), |body| {
            body.line("public:");
            if !self.constants.is_empty() {
                body.emit(&self.constants);
            }
            for e in &self.enums {
                body.emit(e);
            }
            for method in &self.methods {
                body.emit(method);
            }
        });
    }
}
