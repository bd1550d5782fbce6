//! Declaration tree produced by the frontend.
//!
//! One `Unit` per input file. The tree is a read-only view: the walker and
//! classifier borrow from it and never mutate it.

use crate::types::TypeRef;

/// Stable per-declaration identity, assigned by the parser in document
/// order. Only meaningful within one unit; used for run-scoped dedup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);

/// A single attribute as written in source.
///
/// `[[clang::annotate("yamlbind")]]` has scope `clang`, name `annotate` and
/// payload `yamlbind`; `__attribute__((annotate("yamlbind")))` carries no
/// scope. `[[deprecated]]` has neither scope nor payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub scope: Option<String>,
    pub name: String,
    pub payload: Option<String>,
}

impl Attribute {
    /// Whether this is an `annotate` attribute, regardless of payload.
    pub fn is_annotate(&self) -> bool {
        self.name == "annotate"
            && self
                .scope
                .as_deref()
                .is_none_or(|scope| scope == "clang")
    }
}

/// Member access as resolved against the surrounding access labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Which class-key introduced a record. Determines default member access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKeyword {
    Struct,
    Class,
}

impl RecordKeyword {
    pub fn default_visibility(self) -> Visibility {
        match self {
            RecordKeyword::Struct => Visibility::Public,
            RecordKeyword::Class => Visibility::Private,
        }
    }
}

/// A non-static data member. `vis` is already resolved; `has_default` is
/// true when the declarator carries an in-place initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMember {
    pub name: String,
    pub ty: TypeRef,
    pub vis: Visibility,
    pub has_default: bool,
}

/// Body entry of a record, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(FieldMember),
    Nested(Decl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDecl {
    pub id: DeclId,
    pub keyword: RecordKeyword,
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub members: Vec<Member>,
}

impl RecordDecl {
    /// Direct child declarations, in declaration order.
    pub fn nested(&self) -> impl Iterator<Item = &Decl> {
        self.members.iter().filter_map(|member| match member {
            Member::Nested(decl) => Some(decl),
            Member::Field(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub id: DeclId,
    pub name: String,
    /// `enum class` / `enum struct` vs. plain `enum`.
    pub scoped: bool,
    pub attrs: Vec<Attribute>,
    pub enumerators: Vec<String>,
}

/// A declaration the generator can emit conversion code for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Record(RecordDecl),
    Enum(EnumDecl),
}

impl Decl {
    pub fn id(&self) -> DeclId {
        match self {
            Decl::Record(record) => record.id,
            Decl::Enum(decl) => decl.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Decl::Record(record) => &record.name,
            Decl::Enum(decl) => &decl.name,
        }
    }

    pub fn attrs(&self) -> &[Attribute] {
        match self {
            Decl::Record(record) => &record.attrs,
            Decl::Enum(decl) => &decl.attrs,
        }
    }

    /// Whether the declaration carries an `annotate` attribute anywhere in
    /// its attribute list. This is the discovery predicate; the payload is
    /// only examined at emission time.
    pub fn has_annotate_attr(&self) -> bool {
        self.attrs().iter().any(Attribute::is_annotate)
    }
}

/// `namespace name { ... }`; `name` is `None` for an anonymous namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    pub name: Option<String>,
    pub items: Vec<Item>,
}

/// Namespace-scope entry of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Namespace(NamespaceDecl),
    Decl(Decl),
}

/// One parsed input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unit {
    pub items: Vec<Item>,
}
