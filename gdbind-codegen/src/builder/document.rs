//! Arena of nested text scopes.

use super::{BlockStyle, Indent, Scope};

/// Handle to a scope inside a [`Document`].
///
/// Only meaningful for the document that created it. Lookups with a handle
/// from another document never panic; an unknown id reads as a detached
/// scope with no parent and no fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The root scope every document starts with.
    pub const ROOT: Self = Self(0);
}

#[derive(Debug)]
struct Node {
    /// Enclosing scope; `None` only for the root. Set once at creation.
    parent: Option<ScopeId>,
    /// Finalized text fragments, in emission order.
    fragments: Vec<String>,
}

/// A tree of nested text scopes whose root accumulates the whole output.
///
/// Scopes are never re-parented and never removed; a finalized scope stays
/// in the arena with its fragments moved into its parent.
///
/// # Example
///
/// ```
/// use gdbind_codegen::{BlockStyle, Document, Indent};
///
/// let mut doc = Document::new(Indent::Spaces(4), BlockStyle::CPP);
/// doc.root().block("namespace demo", |ns| {
///     ns.line("int answer();");
/// });
///
/// assert_eq!(doc.finish(), "namespace demo {\n    int answer();\n};\n");
/// ```
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    unit: String,
    style: BlockStyle,
}

impl Document {
    /// Create a document containing only an empty root scope.
    pub fn new(indent: Indent, style: BlockStyle) -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                fragments: Vec::new(),
            }],
            unit: indent.unit(),
            style,
        }
    }

    /// Tab-indented document with `};`-closed blocks.
    pub fn cpp() -> Self {
        Self::new(Indent::CPP, BlockStyle::CPP)
    }

    /// Emission handle for the root scope.
    pub fn root(&mut self) -> Scope<'_> {
        Scope::new(self, ScopeId::ROOT)
    }

    /// The enclosing scope of `id`, `None` for the root.
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    /// Number of parent hops from `id` to the root.
    ///
    /// Walks the chain on every call; depth is a function of tree position,
    /// not stored state.
    pub fn depth(&self, id: ScopeId) -> usize {
        std::iter::successors(self.parent(id), |&p| self.parent(p)).count()
    }

    /// Indentation prefix for content of `id`: one unit per level of depth.
    pub fn indentation(&self, id: ScopeId) -> String {
        self.unit.repeat(self.depth(id))
    }

    /// One indentation unit.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Block delimiters used by this document.
    pub fn style(&self) -> BlockStyle {
        self.style
    }

    /// Fragments currently buffered in `id`.
    pub fn fragments(&self, id: ScopeId) -> &[String] {
        self.nodes
            .get(id.0)
            .map_or(&[], |node| node.fragments.as_slice())
    }

    /// Consume the document and return the root's text.
    pub fn finish(self) -> String {
        self.nodes
            .into_iter()
            .next()
            .map(|root| root.fragments.concat())
            .unwrap_or_default()
    }

    pub(crate) fn push_fragment(&mut self, id: ScopeId, fragment: String) {
        self.nodes[id.0].fragments.push(fragment);
    }

    pub(crate) fn create(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            fragments: Vec::new(),
        });
        id
    }

    /// Close `id`: append its closing line, join its fragments, and push the
    /// result onto its parent as a single fragment.
    pub(crate) fn finalize(&mut self, id: ScopeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };

        let closing = format!("{}{}\n", self.indentation(parent), self.style.close);
        let node = &mut self.nodes[id.0];
        node.fragments.push(closing);
        let text = std::mem::take(&mut node.fragments).concat();
        self.push_fragment(parent, text);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::cpp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_depth_is_zero() {
        let doc = Document::cpp();
        assert_eq!(doc.depth(ScopeId::ROOT), 0);
        assert_eq!(doc.indentation(ScopeId::ROOT), "");
        assert_eq!(doc.parent(ScopeId::ROOT), None);
    }

    #[test]
    fn test_depth_counts_parent_hops() {
        let mut doc = Document::cpp();
        let a = doc.create(ScopeId::ROOT);
        let b = doc.create(a);
        let c = doc.create(b);

        assert_eq!(doc.depth(a), 1);
        assert_eq!(doc.depth(b), 2);
        assert_eq!(doc.depth(c), 3);
        assert_eq!(doc.indentation(c), "\t\t\t");
    }

    #[test]
    fn test_depth_independent_of_creation_order() {
        let mut doc = Document::new(Indent::Spaces(2), BlockStyle::CPP);
        let outer = doc.create(ScopeId::ROOT);
        let sibling = doc.create(ScopeId::ROOT);
        let inner = doc.create(outer);

        assert_eq!(doc.depth(sibling), 1);
        assert_eq!(doc.depth(inner), 2);
        assert_eq!(doc.indentation(inner), "    ");
    }

    #[test]
    fn test_finalize_moves_text_into_parent_once() {
        let mut doc = Document::cpp();
        let child = doc.create(ScopeId::ROOT);
        doc.push_fragment(child, "class A {\n".to_string());
        doc.push_fragment(child, "\tpublic:\n".to_string());
        doc.finalize(child);

        assert!(doc.fragments(child).is_empty());
        assert_eq!(
            doc.fragments(ScopeId::ROOT),
            ["class A {\n\tpublic:\n};\n".to_string()]
        );
    }

    #[test]
    fn test_finalize_root_is_noop() {
        let mut doc = Document::cpp();
        doc.push_fragment(ScopeId::ROOT, "x\n".to_string());
        doc.finalize(ScopeId::ROOT);
        assert_eq!(doc.finish(), "x\n");
    }

    #[test]
    fn test_foreign_scope_id_does_not_panic() {
        let mut other = Document::cpp();
        let a = other.create(ScopeId::ROOT);
        let deep = other.create(a);

        let doc = Document::cpp();
        assert_eq!(doc.parent(deep), None);
        assert_eq!(doc.depth(deep), 0);
        assert_eq!(doc.indentation(deep), "");
        assert!(doc.fragments(deep).is_empty());
    }

    #[test]
    fn test_finish_concatenates_root() {
        let mut doc = Document::cpp();
        doc.push_fragment(ScopeId::ROOT, "a\n".to_string());
        doc.push_fragment(ScopeId::ROOT, "b\n".to_string());
        assert_eq!(doc.finish(), "a\nb\n");
    }
}
