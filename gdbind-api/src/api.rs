//! API description descriptors, as found in Godot's `api.json`.
//!
//! Only the fields the header generator reads are modelled; every other key
//! in the document (properties, signals, singleton flags, ...) is ignored.

use std::{collections::HashSet, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, validate::ParseContext};

/// The whole API description: classes in document order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Api {
    classes: Vec<ClassDescriptor>,
}

/// One engine class.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    /// Empty for root classes.
    pub base_class: String,
    /// Integer constants, emitted as an anonymous enum.
    pub constants: IndexMap<String, i64>,
    pub enums: Vec<EnumDescriptor>,
    pub methods: Vec<MethodDescriptor>,
}

/// A named (or anonymous, when `name` is empty) enumeration.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDescriptor {
    #[serde(default)]
    pub name: String,
    /// Members in declaration order.
    pub values: IndexMap<String, i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub return_type: String,
    pub arguments: Vec<ArgumentDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub has_default_value: bool,
    /// Display-formatted default, only meaningful when `has_default_value`.
    #[serde(default)]
    pub default_value: Option<String>,
}

impl EnumDescriptor {
    /// Whether this enum has no name token.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl ArgumentDescriptor {
    /// The raw default token, if the argument is defaulted.
    pub fn default(&self) -> Option<&str> {
        if self.has_default_value {
            self.default_value.as_deref()
        } else {
            None
        }
    }
}

impl Api {
    /// Build an API from already-constructed descriptors.
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        Self { classes }
    }

    /// Parse an api.json file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_api(&content, &path.display().to_string())
    }

    /// Parse an api.json from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_api(content, filename)
    }

    /// Classes in document order.
    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    /// Names of every class declared in the description.
    pub fn class_names(&self) -> HashSet<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    /// Total number of methods across all classes.
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }

    /// Total number of named enums across all classes.
    pub fn enum_count(&self) -> usize {
        self.classes.iter().map(|c| c.enums.len()).sum()
    }

    /// Total number of integer constants across all classes.
    pub fn constant_count(&self) -> usize {
        self.classes.iter().map(|c| c.constants.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromStr for Api {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_api(s, "api.json")
    }
}

/// Parse an API description from content with the given filename for error reporting.
pub fn parse_api(content: &str, filename: &str) -> Result<Api> {
    let source_ctx = SourceContext::new(content, filename);
    let api: Api =
        serde_json::from_str(content).map_err(|e| source_ctx.schema_shape_error(e))?;
    validate_api(&api, content, filename)?;
    Ok(api)
}

/// Validate the API after parsing.
fn validate_api(api: &Api, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for (index, class) in api.classes.iter().enumerate() {
        let position = format!("[{}]", index);
        if class.name.is_empty() {
            return Err(ctx.push(&position).empty_name("class"));
        }

        let class_ctx = ctx.push(&class.name);
        for method in &class.methods {
            validate_method(&class_ctx, method)?;
        }
    }
    Ok(())
}

fn validate_method(ctx: &ParseContext, method: &MethodDescriptor) -> Result<()> {
    if method.name.is_empty() {
        return Err(ctx.empty_name("method"));
    }

    let method_ctx = ctx.push(&method.name);
    for (index, argument) in method.arguments.iter().enumerate() {
        if argument.name.is_empty() {
            let position = format!("arguments[{}]", index);
            return Err(method_ctx.push(&position).empty_name("argument"));
        }

        if argument.has_default_value && argument.default_value.is_none() {
            return Err(method_ctx.missing_default(&argument.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE: &str = r#"[
        {
            "name": "Node",
            "base_class": "Object",
            "api_type": "core",
            "constants": { "NOTIFICATION_READY": 13, "NOTIFICATION_ENTER_TREE": 10 },
            "enums": [
                { "name": "PauseMode", "values": { "PAUSE_MODE_INHERIT": 0, "PAUSE_MODE_STOP": 1 } }
            ],
            "methods": [
                {
                    "name": "add_child",
                    "return_type": "void",
                    "is_const": false,
                    "arguments": [
                        { "name": "node", "type": "Node", "has_default_value": false, "default_value": "" },
                        { "name": "legible_unique_name", "type": "bool", "has_default_value": true, "default_value": "False" }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let api: Api = NODE.parse().unwrap();
        assert_eq!(api.classes().len(), 1);
        assert_eq!(api.classes()[0].name, "Node");
        assert_eq!(api.classes()[0].base_class, "Object");
    }

    #[test]
    fn test_constants_keep_document_order() {
        let api: Api = NODE.parse().unwrap();
        let keys: Vec<_> = api.classes()[0].constants.keys().cloned().collect();
        assert_eq!(keys, ["NOTIFICATION_READY", "NOTIFICATION_ENTER_TREE"]);
    }

    #[test]
    fn test_argument_default() {
        let api: Api = NODE.parse().unwrap();
        let args = &api.classes()[0].methods[0].arguments;
        assert_eq!(args[0].default(), None);
        assert_eq!(args[1].default(), Some("False"));
        assert_eq!(args[1].ty, "bool");
    }

    #[test]
    fn test_enum_without_name_is_anonymous() {
        let api: Api = r#"[{
            "name": "A", "base_class": "", "constants": {}, "methods": [],
            "enums": [{ "values": { "X": 1 } }]
        }]"#
        .parse()
        .unwrap();
        assert!(api.classes()[0].enums[0].is_anonymous());
    }

    #[test]
    fn test_counts() {
        let api: Api = NODE.parse().unwrap();
        assert_eq!(api.method_count(), 1);
        assert_eq!(api.enum_count(), 1);
        assert_eq!(api.constant_count(), 2);
        assert!(api.class_names().contains("Node"));
    }

    #[test]
    fn test_missing_arguments_is_schema_shape_error() {
        let err = r#"[{
            "name": "A", "base_class": "", "constants": {}, "enums": [],
            "methods": [{ "name": "f", "return_type": "void" }]
        }]"#
        .parse::<Api>()
        .unwrap_err();
        assert!(matches!(*err, Error::SchemaShape { .. }));
    }

    #[test]
    fn test_empty_method_name_rejected() {
        let err = r#"[{
            "name": "A", "base_class": "", "constants": {}, "enums": [],
            "methods": [{ "name": "", "return_type": "void", "arguments": [] }]
        }]"#
        .parse::<Api>()
        .unwrap_err();
        match *err {
            Error::EmptyName { context, .. } => assert_eq!(context, "method in 'A'"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_defaulted_argument_without_value_rejected() {
        let err = r#"[{
            "name": "A", "base_class": "", "constants": {}, "enums": [],
            "methods": [{ "name": "f", "return_type": "void", "arguments": [
                { "name": "x", "type": "int", "has_default_value": true }
            ] }]
        }]"#
        .parse::<Api>()
        .unwrap_err();
        assert!(matches!(*err, Error::MissingDefault { .. }));
    }

    #[test]
    fn test_names_are_kept_verbatim() {
        let api: Api = r#"[{
            "name": "A", "base_class": "", "constants": {}, "enums": [],
            "methods": [{ "name": "bad-name", "return_type": "void", "arguments": [
                { "name": "2d", "type": "int", "has_default_value": false, "default_value": "" }
            ] }]
        }]"#
        .parse()
        .unwrap();
        let method = &api.classes()[0].methods[0];
        assert_eq!(method.name, "bad-name");
        assert_eq!(method.arguments[0].name, "2d");
    }
}
