//! Document-order index of every record/enum declared in a unit.
//!
//! Keys are global-scope path segments (anonymous namespaces contribute
//! none), so lookups answer "does `a::B::C` name a type declared here".
//! Marked and unmarked declarations are both indexed: an unmarked nested
//! type can still appear in a field type.

use indexmap::IndexMap;
use yamlbind_core::{Decl, DeclId, Item, ScopePath, ScopeSeg, Unit};

/// What kind of type a path names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexedKind {
    Record,
    Enum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: DeclId,
    pub kind: IndexedKind,
}

/// Insertion-ordered map from declared path to entry.
#[derive(Debug, Default)]
pub struct DeclIndex {
    entries: IndexMap<Vec<String>, IndexEntry>,
}

impl DeclIndex {
    pub fn build(unit: &Unit) -> Self {
        let mut index = DeclIndex::default();
        let mut scope = ScopePath::new();
        for item in &unit.items {
            index.add_item(item, &mut scope);
        }
        index
    }

    fn add_item(&mut self, item: &Item, scope: &mut ScopePath) {
        match item {
            Item::Namespace(ns) => {
                scope.push(ScopeSeg::Namespace(ns.name.clone()));
                for inner in &ns.items {
                    self.add_item(inner, scope);
                }
                scope.pop();
            }
            Item::Decl(decl) => self.add_decl(decl, scope),
        }
    }

    fn add_decl(&mut self, decl: &Decl, scope: &mut ScopePath) {
        let mut path = scope.names();
        path.push(decl.name().to_string());

        let (kind, id) = match decl {
            Decl::Record(record) => (IndexedKind::Record, record.id),
            Decl::Enum(e) => (IndexedKind::Enum, e.id),
        };
        self.entries.insert(path, IndexEntry { id, kind });

        if let Decl::Record(record) = decl {
            scope.push(ScopeSeg::Record(record.name.clone()));
            for nested in record.nested() {
                self.add_decl(nested, scope);
            }
            scope.pop();
        }
    }

    /// Whether `path` names a declared type.
    pub fn contains(&self, path: &[String]) -> bool {
        self.entries.contains_key(path)
    }

    /// Declared paths in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&Vec<String>, &IndexEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
