//! C++ method declaration.

use gdbind_api::MethodDescriptor;
use gdbind_codegen::{NamingConvention, Renderable, Scope, TypeMapper};
use tracing::debug;

use crate::{GodotTypeMapper, literal::LiteralRule};

/// A parameter in a method declaration.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn declaration(&self) -> String {
        match &self.default {
            Some(value) => format!("{} {} = {}", self.ty, self.name, value),
            None => format!("{} {}", self.ty, self.name),
        }
    }
}

/// A method declaration (`Ret name(T a, U b = x);`).
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    return_type: String,
    params: Vec<Param>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Build a declaration from an `api.json` method.
    ///
    /// Types go through `mapper`, names through `naming`, and defaults are
    /// synthesized against the argument's resolved type.
    pub fn from_descriptor(
        method: &MethodDescriptor,
        mapper: &GodotTypeMapper,
        naming: &NamingConvention,
    ) -> Self {
        let return_type = mapper.resolve_type(&method.return_type);
        let mut decl = Self::new(naming.safe_name(&method.name), return_type.to_string());

        for argument in &method.arguments {
            let ty = mapper.resolve_type(&argument.ty);
            let mut param = Param::new(naming.safe_name(&argument.name), ty.to_string());

            if let Some(raw) = argument.default() {
                let literal = mapper.synthesize_literal(&ty, raw);
                if literal.rule == LiteralRule::Passthrough && ty.core().is_some() {
                    debug!(
                        method = %method.name,
                        argument = %argument.name,
                        ty = %ty,
                        raw,
                        "default passed through unconverted"
                    );
                }
                param = param.default_value(literal.text);
            }

            decl = decl.param(param);
        }

        decl
    }

    /// The full declaration line, without indentation.
    pub fn declaration(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::declaration)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}({});", self.return_type, self.name, params)
    }
}

impl Renderable for Method {
    fn render(&self, scope: &mut Scope<'_>) {
        scope.line(&self.declaration());
    }
}
