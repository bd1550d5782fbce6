//! Core declaration model for yamlbind.
//!
//! The generator pipeline never touches parser internals; it consumes the
//! parser-independent model defined here:
//! - `decl` - records, enumerations, members, attributes
//! - `types` - type references with canonical rendering
//! - `scope` - enclosing-scope chains and qualifier construction
//! - `member` - classified views handed to the code emitter

mod decl;
mod member;
mod scope;
mod types;


pub use decl::{
    Attribute, Decl, DeclId, EnumDecl, FieldMember, Item, Member, NamespaceDecl, RecordDecl,
    RecordKeyword, Unit, Visibility,
};
pub use member::{EnumConstant, Field};
pub use scope::{ScopePath, ScopeSeg};
pub use types::{TypeRef, TypeSeg};
