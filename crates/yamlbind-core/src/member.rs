//! Classified member views consumed by the code emitter.

use serde::Serialize;

/// A serializable field of a record: public visibility, resolved canonical
/// type name, and whether an in-place default makes its decode key optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub type_name: String,
    pub has_default: bool,
}

/// An enumerator with the fully scoped reference usable in generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumConstant {
    pub name: String,
    pub qualified_name: String,
}
