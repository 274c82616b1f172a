//! Emission handle for a single scope.

use std::fmt::Display;

use super::{Block, Document, Renderable, ScopeId};

/// Mutable access to one scope of a [`Document`].
///
/// A `Scope` is the only way to write into a document. Opening a nested
/// block borrows the scope mutably, so the parent cannot be written to
/// until the child has been finalized.
#[derive(Debug)]
pub struct Scope<'a> {
    pub(crate) doc: &'a mut Document,
    pub(crate) id: ScopeId,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(doc: &'a mut Document, id: ScopeId) -> Self {
        Self { doc, id }
    }

    /// The scope this handle writes to.
    pub fn id(&self) -> ScopeId {
        self.id
    }

    /// Depth of this scope below the root.
    pub fn depth(&self) -> usize {
        self.doc.depth(self.id)
    }

    /// Indentation prefix for lines written into this scope.
    pub fn indentation(&self) -> String {
        self.doc.indentation(self.id)
    }

    /// Write one indented line. An empty `text` writes a bare newline.
    pub fn line(&mut self, text: &str) -> &mut Self {
        let fragment = if text.is_empty() {
            "\n".to_string()
        } else {
            format!("{}{}\n", self.indentation(), text)
        };
        self.doc.push_fragment(self.id, fragment);
        self
    }

    /// Write a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Write a preprocessor directive (`#` + `text`), never indented.
    pub fn directive(&mut self, text: &str) -> &mut Self {
        self.doc.push_fragment(self.id, format!("#{}\n", text));
        self
    }

    /// Write an enumeration as one fragment.
    ///
    /// The `enum` line and the closing line sit at this scope's level, members
    /// one level deeper, in iteration order. An empty `name` produces an
    /// anonymous `enum {`.
    pub fn enumeration<I, K, V>(&mut self, name: &str, members: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let indentation = self.indentation();
        let style = self.doc.style();

        let mut text = format!("{}enum", indentation);
        if !name.is_empty() {
            text.push(' ');
            text.push_str(name);
        }
        text.push_str(style.open);
        text.push('\n');

        for (key, value) in members {
            text.push_str(&indentation);
            text.push_str(self.doc.unit());
            text.push_str(&format!("{} = {},\n", key.as_ref(), value));
        }

        text.push_str(&indentation);
        text.push_str(style.close);
        text.push('\n');

        self.doc.push_fragment(self.id, text);
        self
    }

    /// Emit a [`Renderable`] node into this scope.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        node.render(self);
        self
    }

    /// Open a nested block whose opening line is `opening` + the block-open
    /// token, indented at this scope's level.
    ///
    /// The returned [`Block`] finalizes itself into this scope when dropped.
    pub fn open_block(&mut self, opening: &str) -> Block<'_> {
        let opening_line = format!(
            "{}{}{}\n",
            self.indentation(),
            opening,
            self.doc.style().open
        );
        let child = self.doc.create(self.id);
        self.doc.push_fragment(child, opening_line);
        Block::new(Scope::new(&mut *self.doc, child))
    }

    /// Open a block, run `body` against it, and close it.
    ///
    /// The block is closed whatever `body` does: returning normally,
    /// returning an `Err` for the caller to propagate, or panicking.
    pub fn block<R>(&mut self, opening: &str, body: impl FnOnce(&mut Scope<'_>) -> R) -> R {
        let mut block = self.open_block(opening);
        body(&mut *block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BlockStyle, Indent};

    #[test]
    fn test_line_is_indented_at_scope_depth() {
        let mut doc = Document::cpp();
        doc.root().block("namespace a", |ns| {
            ns.block("class B", |class| {
                class.line("void f();");
            });
        });

        assert_eq!(
            doc.finish(),
            "namespace a {\n\tclass B {\n\t\tvoid f();\n\t};\n};\n"
        );
    }

    #[test]
    fn test_empty_line_has_no_indentation() {
        let mut doc = Document::cpp();
        doc.root().block("namespace a", |ns| {
            ns.line("int x;").line("").blank();
        });
        assert_eq!(doc.finish(), "namespace a {\n\tint x;\n\n\n};\n");
    }

    #[test]
    fn test_directive_ignores_nesting() {
        let mut doc = Document::cpp();
        doc.root().block("namespace a", |ns| {
            ns.block("class B", |class| {
                class.directive("pragma once");
            });
        });
        assert_eq!(doc.finish(), "namespace a {\n\tclass B {\n#pragma once\n\t};\n};\n");
    }

    #[test]
    fn test_enumeration_keeps_member_order() {
        let mut doc = Document::cpp();
        doc.root()
            .enumeration("Mode", [("A", 0), ("C", 5), ("B", 1)]);
        assert_eq!(doc.finish(), "enum Mode {\n\tA = 0,\n\tC = 5,\n\tB = 1,\n};\n");
    }

    #[test]
    fn test_anonymous_enumeration() {
        let mut doc = Document::cpp();
        doc.root().block("class A", |class| {
            class.enumeration("", [("NOTIFICATION_READY", 13)]);
        });
        assert_eq!(
            doc.finish(),
            "class A {\n\tenum {\n\t\tNOTIFICATION_READY = 13,\n\t};\n};\n"
        );
    }

    #[test]
    fn test_empty_enumeration() {
        let mut doc = Document::new(Indent::Spaces(4), BlockStyle::CPP);
        doc.root().enumeration("Empty", Vec::<(&str, i64)>::new());
        assert_eq!(doc.finish(), "enum Empty {\n};\n");
    }

    #[test]
    fn test_emit_renderable() {
        struct Forward(&'static str);
        impl Renderable for Forward {
            fn render(&self, scope: &mut Scope<'_>) {
                scope.line(&format!("class {};", self.0));
            }
        }

        let mut doc = Document::cpp();
        doc.root().emit(&Forward("Node")).emit(&Forward("Object"));
        assert_eq!(doc.finish(), "class Node;\nclass Object;\n");
    }

    #[test]
    fn test_depth_reported_by_handle() {
        let mut doc = Document::cpp();
        let mut root = doc.root();
        assert_eq!(root.depth(), 0);
        root.block("namespace a", |ns| {
            assert_eq!(ns.depth(), 1);
            ns.block("class B", |class| assert_eq!(class.depth(), 2));
        });
    }
}
