//! Default-value literal synthesis.
//!
//! `api.json` stores defaults as the engine's display form of the value
//! (`(0, 0)`, `1,1,1,1`, `Null`, `[RID]`, ...). Each token is turned into a
//! C++ expression of the parameter's resolved type by the first rule in
//! [`LiteralRule::select`] that applies.

use std::fmt;

use crate::type_mapper::{CoreType, ResolvedType};

/// Tokens meaning "no value" for reference-like types.
pub const NULL_SENTINELS: &[&str] = &["Null", "[Object:null]"];

/// Token for an empty resource id.
pub const RID_SENTINEL: &str = "[RID]";

/// Conversion rules, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralRule {
    /// `True` -> `true`
    Bool,
    /// `(1, 2)` -> `T::of(1, 2)`
    VectorOf,
    /// `1,1,1,1` -> `T::of(1,1,1,1)`
    ColorOf,
    /// `(0, 0, 1, 1)` -> `T::from_bounds(0, 0, 1, 1)`
    RectFromBounds,
    /// Any transform -> `T::zero()`. The token itself is discarded.
    TransformZero,
    /// `abc` -> `T("abc")`
    QuotedString,
    /// Any array -> `T()`
    EmptyArray,
    /// `Null` / `[Object:null]` -> `T()`
    NullSentinel,
    /// `[RID]` -> `RID()`
    RidSentinel,
    /// Token copied as-is.
    Passthrough,
}

impl LiteralRule {
    /// Pick the first rule that applies to a `raw` default of type `ty`.
    pub fn select(ty: &ResolvedType, raw: &str) -> Self {
        match (ty, ty.core()) {
            (ResolvedType::Bool, _) => Self::Bool,
            (_, Some(CoreType::Vector2 | CoreType::Vector3)) => Self::VectorOf,
            (_, Some(CoreType::Color)) => Self::ColorOf,
            (_, Some(CoreType::Rect2)) => Self::RectFromBounds,
            (_, Some(CoreType::Transform | CoreType::Transform2D)) => Self::TransformZero,
            (_, Some(CoreType::String)) => Self::QuotedString,
            (_, Some(core)) if core.is_array() => Self::EmptyArray,
            _ if NULL_SENTINELS.contains(&raw) => Self::NullSentinel,
            _ if raw == RID_SENTINEL => Self::RidSentinel,
            _ => Self::Passthrough,
        }
    }

    /// Whether the original value is not carried into the output.
    ///
    /// Array defaults in `api.json` only ever name an empty array, so
    /// replacing them loses nothing.
    pub fn is_lossy(&self) -> bool {
        matches!(self, Self::TransformZero)
    }

    fn apply(&self, ty: &ResolvedType, raw: &str) -> String {
        let name = ty.name();
        match self {
            Self::Bool => raw.to_lowercase(),
            Self::VectorOf => format!("{}::of{}", name, raw),
            Self::ColorOf => format!("{}::of({})", name, raw),
            Self::RectFromBounds => format!("{}::from_bounds{}", name, raw),
            Self::TransformZero => format!("{}::zero()", name),
            Self::QuotedString => format!("{}(\"{}\")", name, escape_string(raw)),
            Self::EmptyArray | Self::NullSentinel => format!("{}()", name),
            Self::RidSentinel => "RID()".to_string(),
            Self::Passthrough => raw.to_string(),
        }
    }
}

/// A synthesized default-value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub rule: LiteralRule,
    pub text: String,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Convert a display-formatted default token into a C++ expression.
pub fn synthesize(ty: &ResolvedType, raw: &str) -> Literal {
    let rule = LiteralRule::select(ty, raw);
    Literal {
        rule,
        text: rule.apply(ty, raw),
    }
}

fn escape_string(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}
