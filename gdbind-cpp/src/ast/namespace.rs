//! C++ namespace block.

use gdbind_codegen::{Renderable, Scope};

/// A namespace holding items, each followed by a blank line.
#[derive(Debug, Clone)]
pub struct Namespace<T> {
    name: String,
    items: Vec<T>,
}

impl<T: Renderable> Namespace<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Renderable> Renderable for Namespace<T> {
    fn render(&self, scope: &mut Scope<'_>) {
        scope.block(&format!("namespace {}", self.name), |ns| {
            for item in &self.items {
                ns.emit(item);
                ns.blank();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use gdbind_codegen::Document;

    use super::*;
    use crate::ast::Class;

    #[test]
    fn test_empty_namespace() {
        let mut doc = Document::cpp();
        doc.root().emit(&Namespace::<Class>::new("godot::engine"));
        assert_eq!(doc.finish(), "namespace godot::engine {\n};\n");
    }

    #[test]
    fn test_items_separated_by_blank_lines() {
        let ns = Namespace::new("a")
            .item(Class::new("B"))
            .item(Class::new("C").base("B"));
        assert_eq!(ns.len(), 2);

        let mut doc = Document::cpp();
        doc.root().emit(&ns);
        assert_eq!(
            doc.finish(),
            "namespace a {\n\
             \tclass B {\n\
             \t\tpublic:\n\
             \t};\n\
             \n\
             \tclass C : public B {\n\
             \t\tpublic:\n\
             \t};\n\
             \n\
             };\n"
        );
    }
}
