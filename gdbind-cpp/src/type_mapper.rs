//! Godot type mapper implementation.

use std::fmt;

use gdbind_codegen::TypeMapper;

use crate::literal::{self, Literal};

/// Prefix marking an enum type token, e.g. `enum.Error` or `enum.Node::PauseMode`.
pub const ENUM_PREFIX: &str = "enum.";

/// Default namespace of the core value types.
pub const CORE_NAMESPACE: &str = "godot::core";

/// Value types provided by the core header rather than the engine header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreType {
    Object,
    Vector2,
    Vector3,
    Quat,
    Plane,
    Aabb,
    Rect2,
    Color,
    Basis,
    Transform,
    Transform2D,
    String,
    Array,
    Dictionary,
    NodePath,
    Rid,
    Variant,
    Error,
    PoolByteArray,
    PoolIntArray,
    PoolRealArray,
    PoolStringArray,
    PoolVector2Array,
    PoolVector3Array,
    PoolColorArray,
}

impl CoreType {
    pub const ALL: [CoreType; 25] = [
        Self::Object,
        Self::Vector2,
        Self::Vector3,
        Self::Quat,
        Self::Plane,
        Self::Aabb,
        Self::Rect2,
        Self::Color,
        Self::Basis,
        Self::Transform,
        Self::Transform2D,
        Self::String,
        Self::Array,
        Self::Dictionary,
        Self::NodePath,
        Self::Rid,
        Self::Variant,
        Self::Error,
        Self::PoolByteArray,
        Self::PoolIntArray,
        Self::PoolRealArray,
        Self::PoolStringArray,
        Self::PoolVector2Array,
        Self::PoolVector3Array,
        Self::PoolColorArray,
    ];

    /// The schema token, which is also the unqualified C++ name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Vector2 => "Vector2",
            Self::Vector3 => "Vector3",
            Self::Quat => "Quat",
            Self::Plane => "Plane",
            Self::Aabb => "AABB",
            Self::Rect2 => "Rect2",
            Self::Color => "Color",
            Self::Basis => "Basis",
            Self::Transform => "Transform",
            Self::Transform2D => "Transform2D",
            Self::String => "String",
            Self::Array => "Array",
            Self::Dictionary => "Dictionary",
            Self::NodePath => "NodePath",
            Self::Rid => "RID",
            Self::Variant => "Variant",
            Self::Error => "Error",
            Self::PoolByteArray => "PoolByteArray",
            Self::PoolIntArray => "PoolIntArray",
            Self::PoolRealArray => "PoolRealArray",
            Self::PoolStringArray => "PoolStringArray",
            Self::PoolVector2Array => "PoolVector2Array",
            Self::PoolVector3Array => "PoolVector3Array",
            Self::PoolColorArray => "PoolColorArray",
        }
    }

    /// Look up a schema token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == token)
    }

    /// `Array` and the `Pool*Array` family.
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            Self::Array
                | Self::PoolByteArray
                | Self::PoolIntArray
                | Self::PoolRealArray
                | Self::PoolStringArray
                | Self::PoolVector2Array
                | Self::PoolVector3Array
                | Self::PoolColorArray
        )
    }
}

/// A schema type token resolved to its C++ spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// A core value type, qualified with the core namespace.
    Core { ty: CoreType, qualified: String },
    /// An enum type with the prefix stripped, assumed to be in scope.
    Enum(String),
    /// The `bool` primitive.
    Bool,
    /// Anything else, passed through unchanged.
    Other(String),
}

impl ResolvedType {
    /// The C++ type name.
    pub fn name(&self) -> &str {
        match self {
            Self::Core { qualified, .. } => qualified,
            Self::Enum(name) | Self::Other(name) => name,
            Self::Bool => "bool",
        }
    }

    /// The core type, if this is one.
    pub fn core(&self) -> Option<CoreType> {
        match self {
            Self::Core { ty, .. } => Some(*ty),
            _ => None,
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps `api.json` type tokens and default tokens to C++.
#[derive(Debug, Clone)]
pub struct GodotTypeMapper {
    core_namespace: String,
}

impl GodotTypeMapper {
    pub fn new(core_namespace: impl Into<String>) -> Self {
        Self {
            core_namespace: core_namespace.into(),
        }
    }

    pub fn core_namespace(&self) -> &str {
        &self.core_namespace
    }
}

impl Default for GodotTypeMapper {
    fn default() -> Self {
        Self::new(CORE_NAMESPACE)
    }
}

impl TypeMapper for GodotTypeMapper {
    type Type = ResolvedType;
    type Literal = Literal;

    fn resolve_type(&self, token: &str) -> ResolvedType {
        if let Some(ty) = CoreType::from_token(token) {
            return ResolvedType::Core {
                ty,
                qualified: format!("{}::{}", self.core_namespace, ty.as_str()),
            };
        }

        if let Some(name) = token.strip_prefix(ENUM_PREFIX) {
            return ResolvedType::Enum(name.to_string());
        }

        match token {
            "bool" => ResolvedType::Bool,
            _ => ResolvedType::Other(token.to_string()),
        }
    }

    fn synthesize_literal(&self, ty: &ResolvedType, raw: &str) -> Literal {
        literal::synthesize(ty, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_types_are_qualified() {
        let mapper = GodotTypeMapper::default();

        assert_eq!(mapper.resolve_type("Vector2").name(), "godot::core::Vector2");
        assert_eq!(mapper.resolve_type("AABB").name(), "godot::core::AABB");
        assert_eq!(mapper.resolve_type("RID").name(), "godot::core::RID");
        assert_eq!(
            mapper.resolve_type("PoolColorArray").name(),
            "godot::core::PoolColorArray"
        );
    }

    #[test]
    fn test_every_core_token_round_trips() {
        for ty in CoreType::ALL {
            assert_eq!(CoreType::from_token(ty.as_str()), Some(ty));
        }
        assert_eq!(CoreType::from_token("Node"), None);
        assert_eq!(CoreType::from_token("vector2"), None);
    }

    #[test]
    fn test_enum_prefix_stripped() {
        let mapper = GodotTypeMapper::default();

        assert_eq!(
            mapper.resolve_type("enum.Node::PauseMode"),
            ResolvedType::Enum("Node::PauseMode".to_string())
        );
        assert_eq!(mapper.resolve_type("enum.Error").name(), "Error");
    }

    #[test]
    fn test_unknown_passes_through() {
        let mapper = GodotTypeMapper::default();

        assert_eq!(mapper.resolve_type("int").name(), "int");
        assert_eq!(mapper.resolve_type("Node").name(), "Node");
        assert_eq!(mapper.resolve_type("void"), ResolvedType::Other("void".into()));
    }

    #[test]
    fn test_bool_is_tagged() {
        let mapper = GodotTypeMapper::default();
        assert_eq!(mapper.resolve_type("bool"), ResolvedType::Bool);
        assert_eq!(ResolvedType::Bool.to_string(), "bool");
    }

    #[test]
    fn test_custom_core_namespace() {
        let mapper = GodotTypeMapper::new("gd");
        assert_eq!(mapper.resolve_type("Color").to_string(), "gd::Color");
    }

    #[test]
    fn test_array_family() {
        assert!(CoreType::Array.is_array());
        assert!(CoreType::PoolStringArray.is_array());
        assert!(!CoreType::Dictionary.is_array());
        assert!(!CoreType::String.is_array());
    }
}
