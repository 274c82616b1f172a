//! C++ declaration nodes.

mod class;
mod enums;
mod method;
mod namespace;

pub use class::Class;
pub use enums::Enum;
pub use method::{Method, Param};
pub use namespace::Namespace;
