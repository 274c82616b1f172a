//! Lints over an API description.
//!
//! Generation is total: every type and default token produces *something*.
//! These lints point at the places where that something is a guess.

use std::collections::HashSet;

use gdbind_api::{Api, ArgumentDescriptor, ClassDescriptor, MethodDescriptor};
use gdbind_codegen::{Diagnostic, TypeMapper};

use crate::{GodotTypeMapper, literal::LiteralRule, type_mapper::ResolvedType};

/// Type tokens that are valid C++ as written.
pub const PRIMITIVE_TYPES: &[&str] = &["void", "int", "float", "bool"];

/// Everything a lint needs to inspect one API.
pub struct LintContext<'a> {
    pub api: &'a Api,
    pub mapper: &'a GodotTypeMapper,
    class_names: HashSet<&'a str>,
}

impl<'a> LintContext<'a> {
    pub fn new(api: &'a Api, mapper: &'a GodotTypeMapper) -> Self {
        Self {
            api,
            mapper,
            class_names: api.class_names(),
        }
    }

    /// Whether `name` is declared by a class in this API.
    pub fn is_class(&self, name: &str) -> bool {
        self.class_names.contains(name)
    }
}

/// A check that adds diagnostics for one kind of problem.
pub trait Lint {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Inspect the API and add any diagnostics.
    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints in order.
pub struct Checker {
    lints: Vec<Box<dyn Lint>>,
}

impl Checker {
    /// A checker with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnknownTypeLint),
                Box::new(UnknownBaseLint),
                Box::new(DefaultValueLint),
            ],
        }
    }

    /// A checker with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|lint| lint.name()).collect()
    }

    pub fn run(&self, api: &Api, mapper: &GodotTypeMapper) -> Vec<Diagnostic> {
        let ctx = LintContext::new(api, mapper);
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(&ctx, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the built-in lints.
pub fn check(api: &Api, mapper: &GodotTypeMapper) -> Vec<Diagnostic> {
    Checker::new().run(api, mapper)
}

fn each_argument<'a>(
    api: &'a Api,
) -> impl Iterator<
    Item = (
        &'a ClassDescriptor,
        &'a MethodDescriptor,
        &'a ArgumentDescriptor,
    ),
> {
    api.classes().iter().flat_map(|class| {
        class.methods.iter().flat_map(move |method| {
            method
                .arguments
                .iter()
                .map(move |argument| (class, method, argument))
        })
    })
}

// ============================================================================
// Built-in lints
// ============================================================================

/// Warns about type tokens that pass through without being a primitive or a
/// declared class.
pub struct UnknownTypeLint;

impl UnknownTypeLint {
    fn check_token(
        &self,
        ctx: &LintContext<'_>,
        token: &str,
        location: String,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if let ResolvedType::Other(name) = ctx.mapper.resolve_type(token) {
            if !PRIMITIVE_TYPES.contains(&name.as_str()) && !ctx.is_class(&name) {
                diagnostics.push(
                    Diagnostic::warning(self.name(), format!("type '{}' is not declared", name))
                        .at(location),
                );
            }
        }
    }
}

impl Lint for UnknownTypeLint {
    fn name(&self) -> &'static str {
        "unknown-type"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for class in ctx.api.classes() {
            for method in &class.methods {
                self.check_token(
                    ctx,
                    &method.return_type,
                    format!("{}.{}", class.name, method.name),
                    diagnostics,
                );
                for argument in &method.arguments {
                    self.check_token(
                        ctx,
                        &argument.ty,
                        format!("{}.{}.{}", class.name, method.name, argument.name),
                        diagnostics,
                    );
                }
            }
        }
    }
}

/// Warns about base classes that are not declared in the same API.
pub struct UnknownBaseLint;

impl Lint for UnknownBaseLint {
    fn name(&self) -> &'static str {
        "unknown-base"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for class in ctx.api.classes() {
            if !class.base_class.is_empty() && !ctx.is_class(&class.base_class) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("base class '{}' is not declared", class.base_class),
                    )
                    .at(class.name.as_str()),
                );
            }
        }
    }
}

/// Reports defaults of core types that were copied verbatim or approximated.
pub struct DefaultValueLint;

impl Lint for DefaultValueLint {
    fn name(&self) -> &'static str {
        "default-value"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for (class, method, argument) in each_argument(ctx.api) {
            let Some(raw) = argument.default() else {
                continue;
            };
            let ty = ctx.mapper.resolve_type(&argument.ty);
            let literal = ctx.mapper.synthesize_literal(&ty, raw);
            let location = format!("{}.{}.{}", class.name, method.name, argument.name);

            match literal.rule {
                LiteralRule::Passthrough if ty.core().is_some() => diagnostics.push(
                    Diagnostic::warning(
                        "unconverted-default",
                        format!("default '{}' for '{}' is copied verbatim", raw, ty),
                    )
                    .at(location),
                ),
                rule if rule.is_lossy() => diagnostics.push(
                    Diagnostic::info(
                        "lossy-default",
                        format!("default '{}' for '{}' is replaced by {}", raw, ty, literal),
                    )
                    .at(location),
                ),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gdbind_codegen::Severity;

    use super::*;

    fn api(json: &str) -> Api {
        Api::from_str_with_filename(json, "api.json").expect("test api should parse")
    }

    fn class(name: &str, base: &str, methods: &str) -> String {
        format!(
            r#"{{"name": "{name}", "base_class": "{base}", "constants": {{}}, "enums": [], "methods": [{methods}]}}"#
        )
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<&'static str> {
        diagnostics.iter().map(|d| d.code).collect()
    }

    #[test]
    fn test_clean_api_has_no_diagnostics() {
        let api = api(&format!(
            "[{}, {}]",
            class("Object", "", ""),
            class(
                "Node",
                "Object",
                r#"{"name": "add_child", "return_type": "void", "arguments": [
                    {"name": "node", "type": "Object", "has_default_value": false, "default_value": ""},
                    {"name": "legible", "type": "bool", "has_default_value": true, "default_value": "False"}
                ]}"#
            )
        ));

        assert!(check(&api, &GodotTypeMapper::default()).is_empty());
    }

    #[test]
    fn test_unknown_type() {
        let api = api(&format!(
            "[{}]",
            class(
                "Node",
                "",
                r#"{"name": "get_tree", "return_type": "SceneTree", "arguments": []}"#
            )
        ));

        let diagnostics = check(&api, &GodotTypeMapper::default());
        assert_eq!(codes(&diagnostics), vec!["unknown-type"]);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Node.get_tree"));
    }

    #[test]
    fn test_enum_and_core_types_are_known() {
        let api = api(&format!(
            "[{}]",
            class(
                "Node",
                "",
                r#"{"name": "f", "return_type": "enum.Error", "arguments": [
                    {"name": "p", "type": "Dictionary", "has_default_value": false, "default_value": ""}
                ]}"#
            )
        ));

        assert!(check(&api, &GodotTypeMapper::default()).is_empty());
    }

    #[test]
    fn test_unknown_base() {
        let api = api(&format!("[{}]", class("Node", "Object", "")));
        let diagnostics = check(&api, &GodotTypeMapper::default());
        assert_eq!(codes(&diagnostics), vec!["unknown-base"]);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Node"));
    }

    #[test]
    fn test_default_value_lints() {
        let api = api(&format!(
            "[{}]",
            class(
                "Node2D",
                "",
                r#"{"name": "f", "return_type": "void", "arguments": [
                    {"name": "xform", "type": "Transform2D", "has_default_value": true, "default_value": "((1, 0), (0, 1), (0, 0))"},
                    {"name": "opts", "type": "Dictionary", "has_default_value": true, "default_value": "{}"},
                    {"name": "n", "type": "int", "has_default_value": true, "default_value": "0"},
                    {"name": "ids", "type": "PoolIntArray", "has_default_value": true, "default_value": "[PoolIntArray]"}
                ]}"#
            )
        ));

        let diagnostics = check(&api, &GodotTypeMapper::default());
        assert_eq!(codes(&diagnostics), vec!["lossy-default", "unconverted-default"]);
        assert_eq!(diagnostics[0].severity, Severity::Info);
        assert_eq!(diagnostics[1].severity, Severity::Warning);
        assert_eq!(diagnostics[1].location.as_deref(), Some("Node2D.f.opts"));
    }

    #[test]
    fn test_lossy_default_follows_literal_rule() {
        let api = api(&format!(
            "[{}]",
            class(
                "Spatial",
                "",
                r#"{"name": "set_transform", "return_type": "void", "arguments": [
                    {"name": "local", "type": "Transform", "has_default_value": true, "default_value": "1, 0, 0 - 0, 1, 0 - 0, 0, 1 - 0, 0, 0"},
                    {"name": "tags", "type": "Array", "has_default_value": true, "default_value": "[]"}
                ]}"#
            )
        ));

        let diagnostics = check(&api, &GodotTypeMapper::default());
        assert_eq!(codes(&diagnostics), vec!["lossy-default"]);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Spatial.set_transform.local"));
        assert!(diagnostics[0].message.contains("godot::core::Transform::zero()"));
    }

    #[test]
    fn test_checker_composition() {
        let api = api(&format!("[{}]", class("Node", "Object", "")));

        assert!(Checker::empty().run(&api, &GodotTypeMapper::default()).is_empty());

        let checker = Checker::empty().with_lint(UnknownBaseLint);
        assert_eq!(checker.lint_names(), vec!["unknown-base"]);
        assert_eq!(checker.run(&api, &GodotTypeMapper::default()).len(), 1);
    }
}
