//! Canonical type-name construction.
//!
//! The generated `namespace YAML` block lives at global scope, outside the
//! namespaces the declarations came from, so every printed type name must
//! be self-contained there. Resolved-type spellings frequently drop scope
//! qualifiers that were unambiguous at the point of declaration; this module
//! repairs them against the unit's declaration index.

use yamlbind_core::{ScopePath, TypeRef, TypeSeg};

use crate::index::DeclIndex;

/// Canonical printable name for `ty` as written at `scope`.
pub fn type_name(index: &DeclIndex, ty: &TypeRef, scope: &ScopePath) -> String {
    if ty.is_qualified() {
        qualified_type_name(index, ty, scope)
    } else {
        let seg = ty.terminal();
        let printed = segment_text(index, seg, scope);
        match lookup(index, &seg.name, scope) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}::{printed}"),
            _ => printed,
        }
    }
}

/// Explicit-scope reference: print the underlying named type, then prepend
/// the written qualifier when the printed form does not already start with
/// it. A relative qualifier whose head resolves through the enclosing scope
/// chain picks up that scope's prefix as well.
fn qualified_type_name(index: &DeclIndex, ty: &TypeRef, scope: &ScopePath) -> String {
    let printed = segment_text(index, ty.terminal(), scope);
    let qualifier = ty.qualifier();

    let mut name = if printed.starts_with(&qualifier) {
        printed
    } else {
        format!("{qualifier}{printed}")
    };

    if !ty.absolute {
        let head = &ty.segments[0].name;
        if let Some(prefix) = lookup(index, head, scope) {
            if !prefix.is_empty() && !name.starts_with(&format!("{prefix}::")) {
                name = format!("{prefix}::{name}");
            }
        }
    }

    name
}

/// A segment with its template arguments resolved recursively.
fn segment_text(index: &DeclIndex, seg: &TypeSeg, scope: &ScopePath) -> String {
    if seg.args.is_empty() {
        return seg.name.clone();
    }
    let args: Vec<String> = seg
        .args
        .iter()
        .map(|arg| type_name(index, arg, scope))
        .collect();
    format!("{}<{}>", seg.name, args.join(", "))
}

/// Walk the enclosing scopes innermost-out looking for a declaration of
/// `name`. Returns the qualifier prefix of the matching scope (empty for a
/// global-scope hit), or `None` when the unit declares no such type.
fn lookup(index: &DeclIndex, name: &str, scope: &ScopePath) -> Option<String> {
    let names = scope.names();
    for depth in (0..=names.len()).rev() {
        let mut path: Vec<String> = names[..depth].to_vec();
        path.push(name.to_string());
        if index.contains(&path) {
            return Some(names[..depth].join("::"));
        }
    }
    None
}
