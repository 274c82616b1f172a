//! Renderable trait for nodes that write themselves into a scope.

use super::Scope;

/// Trait for types that can be emitted into a [`Scope`].
///
/// Implement this trait for declaration nodes so they can be composed
/// without knowing where in the document they end up.
pub trait Renderable {
    /// Write this node into `scope`.
    fn render(&self, scope: &mut Scope<'_>);
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn render(&self, scope: &mut Scope<'_>) {
        (*self).render(scope);
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn render(&self, scope: &mut Scope<'_>) {
        self.as_ref().render(scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Document;

    struct Line(&'static str);

    impl Renderable for Line {
        fn render(&self, scope: &mut Scope<'_>) {
            scope.line(self.0);
        }
    }

    #[test]
    fn test_ref_renderable() {
        let node = Line("int x;");
        let mut doc = Document::cpp();
        doc.root().emit(&&node);
        assert_eq!(doc.finish(), "int x;\n");
    }

    #[test]
    fn test_boxed_renderable() {
        let nodes: Vec<Box<dyn Renderable>> = vec![Box::new(Line("a;")), Box::new(Line("b;"))];
        let mut doc = Document::cpp();
        let mut root = doc.root();
        for node in &nodes {
            root.emit(node);
        }
        assert_eq!(doc.finish(), "a;\nb;\n");
    }
}
