//! Indentation and block delimiter configuration.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, as used by the stock engine header.
    pub const CPP: Self = Self::Tab;

    /// Tabs when `width` is `None`, otherwise that many spaces.
    pub fn from_width(width: Option<u8>) -> Self {
        width.map_or(Self::Tab, Self::Spaces)
    }

    /// The text of one indentation level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CPP
    }
}

/// Delimiters appended to a block's opening line and written as its closing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    /// Appended to the opening text, e.g. `class Foo` + ` {`.
    pub open: &'static str,
    /// The whole closing line, without indentation or newline.
    pub close: &'static str,
}

impl BlockStyle {
    /// C++ type-like blocks: `X {` ... `};`.
    pub const CPP: Self = Self {
        open: " {",
        close: "};",
    };
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self::CPP
    }
}
