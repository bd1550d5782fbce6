//! Member classification.
//!
//! Turns declaration-model members into the flat, ordered views the emitter
//! consumes. Field order is declaration order: it fixes both encode output
//! order and the decode key list.

use yamlbind_core::{
    EnumConstant, EnumDecl, Field, Member, RecordDecl, ScopePath, ScopeSeg, Visibility,
};

use crate::index::DeclIndex;
use crate::resolve;

/// Serializable fields of `record`: public members only, declaration order.
/// `scope` is the chain enclosing the record; field types resolve against
/// the record's own scope.
pub fn public_fields(record: &RecordDecl, index: &DeclIndex, scope: &ScopePath) -> Vec<Field> {
    let mut inner = scope.clone();
    inner.push(ScopeSeg::Record(record.name.clone()));

    record
        .members
        .iter()
        .filter_map(|member| match member {
            Member::Field(field) if field.vis == Visibility::Public => Some(Field {
                name: field.name.clone(),
                type_name: resolve::type_name(index, &field.ty, &inner),
                has_default: field.has_default,
            }),
            _ => None,
        })
        .collect()
}

/// Enumerators of `decl` in declaration order, with fully scoped references.
/// The `Enum::Constant` spelling is used for scoped and unscoped
/// enumerations alike; both are valid since C++11.
pub fn enum_constants(decl: &EnumDecl, scope: &ScopePath) -> Vec<EnumConstant> {
    decl.enumerators
        .iter()
        .map(|name| EnumConstant {
            name: name.clone(),
            qualified_name: scope.qualified(&format!("{}::{}", decl.name, name)),
        })
        .collect()
}
