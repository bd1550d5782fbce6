use indoc::indoc;
use yamlbind_core::{Decl, Item, ScopePath, ScopeSeg, Unit};

use crate::classify::{enum_constants, public_fields};
use crate::index::DeclIndex;
use crate::parser::parse;

fn parsed(source: &str) -> (Unit, DeclIndex) {
    let unit = parse(source).unwrap();
    let index = DeclIndex::build(&unit);
    (unit, index)
}

fn record_at(unit: &Unit, index: usize) -> &yamlbind_core::RecordDecl {
    match &unit.items[index] {
        Item::Decl(Decl::Record(record)) => record,
        other => panic!("expected record, got {other:?}"),
    }
}

#[test]
fn fields_keep_declaration_order() {
    let (unit, index) = parsed(indoc! {r#"
        struct S {
          std::string s;
          bool b;
          int i;
          int def = 123;
        };
    "#});

    let fields = public_fields(record_at(&unit, 0), &index, &ScopePath::new());
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["s", "b", "i", "def"]);
    assert_eq!(fields[0].type_name, "std::string");
    assert!(!fields[2].has_default);
    assert!(fields[3].has_default);
}

#[test]
fn non_public_members_are_excluded() {
    let (unit, index) = parsed(indoc! {r#"
        class C {
          int hidden;
        public:
          int open;
        private:
          int secret;
        };
    "#});

    let fields = public_fields(record_at(&unit, 0), &index, &ScopePath::new());
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["open"]);
}

#[test]
fn field_types_resolve_against_the_record_scope() {
    let (unit, index) = parsed(indoc! {r#"
        struct Example {
          struct Nested { int i; };
          Nested n;
        };
    "#});

    let fields = public_fields(record_at(&unit, 0), &index, &ScopePath::new());
    assert_eq!(fields[0].type_name, "Example::Nested");
}

#[test]
fn empty_field_list_for_record_without_public_members() {
    let (unit, index) = parsed("class C { int hidden; };");
    assert!(public_fields(record_at(&unit, 0), &index, &ScopePath::new()).is_empty());
}

#[test]
fn enum_constants_are_qualified_through_enclosing_scopes() {
    let (unit, _) = parsed(indoc! {r#"
        struct Example {
          enum class E { E1, E2 };
        };
    "#});

    let record = record_at(&unit, 0);
    let Some(Decl::Enum(decl)) = record.nested().next() else {
        panic!("expected nested enum");
    };

    let mut scope = ScopePath::new();
    scope.push(ScopeSeg::Record("Example".into()));
    let constants = enum_constants(decl, &scope);

    assert_eq!(constants[0].name, "E1");
    assert_eq!(constants[0].qualified_name, "Example::E::E1");
    assert_eq!(constants[1].qualified_name, "Example::E::E2");
}

#[test]
fn unscoped_enum_constants_still_use_the_enum_qualifier() {
    let (unit, _) = parsed("enum Color { Red, Green };");
    let Item::Decl(Decl::Enum(decl)) = &unit.items[0] else {
        panic!("expected enum");
    };

    let constants = enum_constants(decl, &ScopePath::new());
    assert_eq!(constants[0].qualified_name, "Color::Red");
}

#[test]
fn anonymous_namespace_leaves_constants_unqualified() {
    let (unit, _) = parsed(indoc! {r#"
        namespace {
          enum class E { A };
        }
    "#});

    let Item::Namespace(ns) = &unit.items[0] else {
        panic!("expected namespace");
    };
    let Item::Decl(Decl::Enum(decl)) = &ns.items[0] else {
        panic!("expected enum");
    };

    let mut scope = ScopePath::new();
    scope.push(ScopeSeg::Namespace(None));
    let constants = enum_constants(decl, &scope);
    assert_eq!(constants[0].qualified_name, "E::A");
}
