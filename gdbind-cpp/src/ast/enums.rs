//! C++ enum declaration.

use gdbind_api::EnumDescriptor;
use gdbind_codegen::{Renderable, Scope};

/// An unscoped C++ enum with explicit member values.
#[derive(Debug, Clone, Default)]
pub struct Enum {
    name: String,
    members: Vec<(String, i64)>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// An enum without a name, used for class constants.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.members.push((name.into(), value));
        self
    }

    /// Add members in iteration order.
    pub fn members<I, K>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        self.members
            .extend(members.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl From<&EnumDescriptor> for Enum {
    fn from(descriptor: &EnumDescriptor) -> Self {
        Self::new(&descriptor.name).members(
            descriptor
                .values
                .iter()
                .map(|(name, value)| (name.as_str(), *value)),
        )
    }
}

impl Renderable for Enum {
    fn render(&self, scope: &mut Scope<'_>) {
        scope.enumeration(&self.name, self.members.iter().map(|(k, v)| (k, v)));
    }
}
