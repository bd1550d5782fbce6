use indoc::indoc;
use yamlbind_core::{ScopePath, ScopeSeg, TypeRef, TypeSeg};

use crate::index::DeclIndex;
use crate::parser::parse;
use crate::resolve::type_name;

fn index_for(source: &str) -> DeclIndex {
    DeclIndex::build(&parse(source).unwrap())
}

fn scope(segs: Vec<ScopeSeg>) -> ScopePath {
    let mut path = ScopePath::new();
    for seg in segs {
        path.push(seg);
    }
    path
}

fn ty(absolute: bool, segments: &[(&str, Vec<TypeRef>)]) -> TypeRef {
    TypeRef {
        absolute,
        segments: segments
            .iter()
            .map(|(name, args)| TypeSeg {
                name: name.to_string(),
                args: args.clone(),
            })
            .collect(),
    }
}

#[test]
fn external_types_print_as_written() {
    let index = index_for("struct S { int i; };");
    let empty = ScopePath::new();

    assert_eq!(type_name(&index, &TypeRef::plain("int"), &empty), "int");
    assert_eq!(
        type_name(&index, &ty(false, &[("std", vec![]), ("string", vec![])]), &empty),
        "std::string"
    );
}

#[test]
fn sibling_nested_type_picks_up_record_qualifier() {
    // `Nested n;` written inside Example must print as `Example::Nested`
    // outside of it.
    let index = index_for(indoc! {r#"
        struct Example {
          struct Nested { int i; };
          Nested n;
        };
    "#});

    let inside = scope(vec![ScopeSeg::Record("Example".into())]);
    assert_eq!(
        type_name(&index, &TypeRef::plain("Nested"), &inside),
        "Example::Nested"
    );
}

#[test]
fn namespace_scope_type_picks_up_namespace_qualifier() {
    let index = index_for(indoc! {r#"
        namespace cfg {
          struct Endpoint { int port; };
          struct Server {
            Endpoint endpoint;
          };
        }
    "#});

    let inside = scope(vec![
        ScopeSeg::Namespace(Some("cfg".into())),
        ScopeSeg::Record("Server".into()),
    ]);
    assert_eq!(
        type_name(&index, &TypeRef::plain("Endpoint"), &inside),
        "cfg::Endpoint"
    );
}

#[test]
fn inner_scope_shadows_outer() {
    let index = index_for(indoc! {r#"
        struct Endpoint { int a; };
        namespace cfg {
          struct Endpoint { int b; };
          struct Server { Endpoint endpoint; };
        }
    "#});

    let inside = scope(vec![
        ScopeSeg::Namespace(Some("cfg".into())),
        ScopeSeg::Record("Server".into()),
    ]);
    assert_eq!(
        type_name(&index, &TypeRef::plain("Endpoint"), &inside),
        "cfg::Endpoint"
    );
}

#[test]
fn global_hit_needs_no_qualifier() {
    let index = index_for("struct Plain { int i; }; struct S { Plain p; };");
    let inside = scope(vec![ScopeSeg::Record("S".into())]);
    assert_eq!(type_name(&index, &TypeRef::plain("Plain"), &inside), "Plain");
}

#[test]
fn explicitly_qualified_reference_is_preserved() {
    let index = index_for(indoc! {r#"
        namespace cfg {
          struct Endpoint { int port; };
        }
        struct S { cfg::Endpoint e; };
    "#});

    let inside = scope(vec![ScopeSeg::Record("S".into())]);
    assert_eq!(
        type_name(
            &index,
            &ty(false, &[("cfg", vec![]), ("Endpoint", vec![])]),
            &inside
        ),
        "cfg::Endpoint"
    );
}

#[test]
fn relative_qualifier_is_repaired_against_enclosing_scope() {
    // `Inner::Deep` written inside Outer must pick up the `Outer::` prefix.
    let index = index_for(indoc! {r#"
        struct Outer {
          struct Inner {
            struct Deep { int i; };
          };
          Inner::Deep d;
        };
    "#});

    let inside = scope(vec![ScopeSeg::Record("Outer".into())]);
    assert_eq!(
        type_name(
            &index,
            &ty(false, &[("Inner", vec![]), ("Deep", vec![])]),
            &inside
        ),
        "Outer::Inner::Deep"
    );
}

#[test]
fn absolute_reference_is_never_requalified() {
    let index = index_for(indoc! {r#"
        struct Outer {
          struct Inner { int i; };
        };
    "#});

    let inside = scope(vec![ScopeSeg::Record("Outer".into())]);
    assert_eq!(
        type_name(&index, &ty(true, &[("Inner", vec![])]), &inside),
        "::Inner"
    );
}

#[test]
fn template_arguments_resolve_recursively() {
    let index = index_for(indoc! {r#"
        struct Example {
          struct Nested { int i; };
          std::vector<Nested> items;
        };
    "#});

    let inside = scope(vec![ScopeSeg::Record("Example".into())]);
    let vec_of_nested = ty(
        false,
        &[
            ("std", vec![]),
            ("vector", vec![TypeRef::plain("Nested")]),
        ],
    );
    assert_eq!(
        type_name(&index, &vec_of_nested, &inside),
        "std::vector<Example::Nested>"
    );
}
