//! Nested scope that closes itself.

use std::ops::{Deref, DerefMut};

use super::Scope;

/// A nested scope opened with [`Scope::open_block`].
///
/// Dropping the block writes its closing line and moves the whole block's
/// text into the parent as one fragment. Drop runs exactly once on every exit
/// path, including `?` propagation and unwinding, so a block is never left
/// half-closed and its partial content is never lost.
///
/// # Example
///
/// ```
/// use gdbind_codegen::Document;
///
/// let mut doc = Document::cpp();
/// {
///     let mut root = doc.root();
///     let mut class = root.open_block("class Node : public Object");
///     class.line("public:");
/// }
///
/// assert_eq!(doc.finish(), "class Node : public Object {\n\tpublic:\n};\n");
/// ```
#[derive(Debug)]
pub struct Block<'a> {
    scope: Scope<'a>,
}

impl<'a> Block<'a> {
    pub(crate) fn new(scope: Scope<'a>) -> Self {
        Self { scope }
    }

    /// Close the block now rather than at end of scope.
    pub fn close(self) {}
}

impl<'a> Deref for Block<'a> {
    type Target = Scope<'a>;

    fn deref(&self) -> &Self::Target {
        &self.scope
    }
}

impl DerefMut for Block<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.scope
    }
}

impl Drop for Block<'_> {
    fn drop(&mut self) {
        self.scope.doc.finalize(self.scope.id);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use crate::builder::{Document, ScopeId};

    #[test]
    fn test_close_on_normal_exit() {
        let mut doc = Document::cpp();
        doc.root().block("namespace a", |ns| {
            ns.line("int x;");
        });
        assert_eq!(doc.finish(), "namespace a {\n\tint x;\n};\n");
    }

    #[test]
    fn test_close_on_error_exit() {
        let mut doc = Document::cpp();
        let result: Result<(), &str> = doc.root().block("namespace a", |ns| {
            ns.line("int x;");
            "not-a-number"
                .parse::<i32>()
                .map_err(|_| "bad descriptor")?;
            ns.line("int unreachable;");
            Ok(())
        });

        assert_eq!(result, Err("bad descriptor"));
        assert_eq!(doc.finish(), "namespace a {\n\tint x;\n};\n");
    }

    #[test]
    fn test_close_on_panic() {
        let mut doc = Document::cpp();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            doc.root().block("namespace a", |ns| {
                ns.line("int x;");
                if ns.depth() == 1 {
                    panic!("boom");
                }
            })
        }));

        assert!(outcome.is_err());
        assert_eq!(doc.fragments(ScopeId::ROOT), ["namespace a {\n\tint x;\n};\n"]);
    }

    #[test]
    fn test_explicit_close() {
        let mut doc = Document::cpp();
        let mut root = doc.root();
        let mut class = root.open_block("class A");
        class.line("public:");
        class.close();
        root.line("class B;");

        assert_eq!(doc.finish(), "class A {\n\tpublic:\n};\nclass B;\n");
    }

    #[test]
    fn test_siblings_keep_order() {
        let mut doc = Document::cpp();
        let mut root = doc.root();
        root.block("class A", |_| {});
        root.block("class B", |_| {});

        assert_eq!(doc.finish(), "class A {\n};\nclass B {\n};\n");
    }

    #[test]
    fn test_balanced_tokens() {
        let mut doc = Document::cpp();
        doc.root().block("namespace a", |ns| {
            for name in ["A", "B", "C"] {
                ns.block(&format!("class {}", name), |class| {
                    class.enumeration("E", [("X", 0)]);
                });
            }
        });

        let out = doc.finish();
        assert_eq!(out.matches(" {\n").count(), out.matches("};\n").count());
        assert_eq!(out.matches(" {\n").count(), 7);
    }
}
