use indoc::indoc;

use crate::{GenConfig, generate};

fn gen_unit(source: &str, compare_ops: bool) -> String {
    let config = GenConfig::new().compare_ops(compare_ops);
    let out = generate(source, &config).unwrap();
    out.trim_end().to_string()
}

#[test]
fn empty_unit_emits_only_the_preamble() {
    let out = gen_unit("", false);
    insta::assert_snapshot!(out, @r#"
    // Automatically generated by yamlbind, do not modify!

    #pragma once
    "#);
}

#[test]
fn record_conversion() {
    let out = gen_unit(
        indoc! {r#"
            struct [[clang::annotate("yamlbind")]] Config {
              std::string s;
              bool b;
              int i;
              int def = 123;
            };
        "#},
        false,
    );

    insta::assert_snapshot!(out, @r#"
    // Automatically generated by yamlbind, do not modify!

    #pragma once

    namespace YAML {

    template<> struct convert<Config> {

      static Node encode(Config const &obj) {
        Node node;
        node["s"] = obj.s;
        node["b"] = obj.b;
        node["i"] = obj.i;
        node["def"] = obj.def;
        return node;
      }

      static bool decode(Node const &node, Config &obj) {
        check_node(node);
        check_node_properties(node, {
          "s",
          "b",
          "i",
          "def",
        });
        set_field<std::string>(obj.s, node, "s");
        set_field<bool>(obj.b, node, "b");
        set_field<int>(obj.i, node, "i");
        set_optional_field<int>(obj.def, node, "def");
        return true;
      }

    };

    } // end namespace YAML
    "#);
}

#[test]
fn enum_conversion() {
    let out = gen_unit(
        r#"enum class [[clang::annotate("yamlbind")]] Mode { Off, On, Auto };"#,
        false,
    );

    insta::assert_snapshot!(out, @r#"
    // Automatically generated by yamlbind, do not modify!

    #pragma once

    namespace YAML {

    template<> struct convert<Mode> {

      static Node encode(Mode const &obj) {
        Node node;
        switch (obj) {
        case Mode::Off:
          node = "Off";
          break;
        case Mode::On:
          node = "On";
          break;
        case Mode::Auto:
          node = "Auto";
          break;
        }
        return node;
      }

      static bool decode(Node const &node, Mode &obj) {
        auto str { node.as<std::string>() };
        if (str == "Off") obj = Mode::Off;
        else if (str == "On") obj = Mode::On;
        else if (str == "Auto") obj = Mode::Auto;
        else return false;
        return true;
      }

    };

    } // end namespace YAML
    "#);
}

#[test]
fn nested_declarations_with_comparison_operators() {
    let out = gen_unit(
        indoc! {r#"
            struct [[clang::annotate("yamlbind")]] Example {
              enum class [[clang::annotate("yamlbind")]] E { E1, E2 };
              struct [[clang::annotate("yamlbind")]] Nested {
                int i;
              };
              std::string s;
              E e;
              Nested n;
              int def = 123;
            };
        "#},
        true,
    );

    insta::assert_snapshot!(out, @r#"
    // Automatically generated by yamlbind, do not modify!

    #pragma once

    namespace YAML {

    template<> struct convert<Example::E> {

      static Node encode(Example::E const &obj) {
        Node node;
        switch (obj) {
        case Example::E::E1:
          node = "E1";
          break;
        case Example::E::E2:
          node = "E2";
          break;
        }
        return node;
      }

      static bool decode(Node const &node, Example::E &obj) {
        auto str { node.as<std::string>() };
        if (str == "E1") obj = Example::E::E1;
        else if (str == "E2") obj = Example::E::E2;
        else return false;
        return true;
      }

    };

    } // end namespace YAML

    namespace YAML {

    template<> struct convert<Example::Nested> {

      static Node encode(Example::Nested const &obj) {
        Node node;
        node["i"] = obj.i;
        return node;
      }

      static bool decode(Node const &node, Example::Nested &obj) {
        check_node(node);
        check_node_properties(node, {
          "i",
        });
        set_field<int>(obj.i, node, "i");
        return true;
      }

    };

    } // end namespace YAML

    bool operator==(Example::Nested const &obj, Example::Nested const &other) {
      return obj.i == other.i;
    }

    namespace YAML {

    template<> struct convert<Example> {

      static Node encode(Example const &obj) {
        Node node;
        node["s"] = obj.s;
        node["e"] = obj.e;
        node["n"] = obj.n;
        node["def"] = obj.def;
        return node;
      }

      static bool decode(Node const &node, Example &obj) {
        check_node(node);
        check_node_properties(node, {
          "s",
          "e",
          "n",
          "def",
        });
        set_field<std::string>(obj.s, node, "s");
        set_field<Example::E>(obj.e, node, "e");
        set_field<Example::Nested>(obj.n, node, "n");
        set_optional_field<int>(obj.def, node, "def");
        return true;
      }

    };

    } // end namespace YAML

    bool operator==(Example const &obj, Example const &other) {
      return obj.s == other.s &&
             obj.e == other.e &&
             obj.n == other.n &&
             obj.def == other.def;
    }
    "#);
}

#[test]
fn namespace_scope_record_with_comparison_operator() {
    let out = gen_unit(
        indoc! {r#"
            namespace cfg {
              struct [[clang::annotate("yamlbind")]] Server {
                std::string host;
                int port = 8080;
              };
            }
        "#},
        true,
    );

    insta::assert_snapshot!(out, @r#"
    // Automatically generated by yamlbind, do not modify!

    #pragma once

    namespace YAML {

    template<> struct convert<cfg::Server> {

      static Node encode(cfg::Server const &obj) {
        Node node;
        node["host"] = obj.host;
        node["port"] = obj.port;
        return node;
      }

      static bool decode(Node const &node, cfg::Server &obj) {
        check_node(node);
        check_node_properties(node, {
          "host",
          "port",
        });
        set_field<std::string>(obj.host, node, "host");
        set_optional_field<int>(obj.port, node, "port");
        return true;
      }

    };

    } // end namespace YAML

    namespace cfg {

    bool operator==(Server const &obj, Server const &other) {
      return obj.host == other.host &&
             obj.port == other.port;
    }

    } // end namespace cfg
    "#);
}

#[test]
fn record_without_serializable_fields_compares_always_equal() {
    let out = gen_unit(
        r#"struct [[clang::annotate("yamlbind")]] Empty {};"#,
        true,
    );

    insta::assert_snapshot!(out, @r#"
    // Automatically generated by yamlbind, do not modify!

    #pragma once

    namespace YAML {

    template<> struct convert<Empty> {

      static Node encode(Empty const &obj) {
        Node node;
        return node;
      }

      static bool decode(Node const &node, Empty &obj) {
        check_node(node);
        check_node_properties(node, {
        });
        return true;
      }

    };

    } // end namespace YAML

    bool operator==(Empty const &obj, Empty const &other) {
      return true;
    }
    "#);
}

#[test]
fn anonymous_namespace_suppresses_comparison_wrapping() {
    let out = gen_unit(
        indoc! {r#"
            namespace {
              struct [[clang::annotate("yamlbind")]] Hidden { int i; };
            }
        "#},
        true,
    );

    assert!(out.contains("template<> struct convert<Hidden> {"));
    assert!(out.contains("bool operator==(Hidden const &obj, Hidden const &other) {"));
    // The only namespace text left is the YAML wrapper pair.
    assert_eq!(out.matches("namespace").count(), 2, "{out}");
}

#[test]
fn nested_namespaces_wrap_with_the_full_path() {
    let out = gen_unit(
        indoc! {r#"
            namespace a {
              namespace b {
                struct [[clang::annotate("yamlbind")]] T { int i; };
              }
            }
        "#},
        true,
    );

    assert!(out.contains("template<> struct convert<a::b::T> {"));
    assert!(out.contains("namespace a::b {"));
    assert!(out.contains("bool operator==(T const &obj, T const &other) {"));
    assert!(out.contains("} // end namespace a::b"));
}

#[test]
fn private_fields_never_reach_the_output() {
    let out = gen_unit(
        indoc! {r#"
            class [[clang::annotate("yamlbind")]] C {
              int hidden;
            public:
              int open;
            };
        "#},
        false,
    );

    assert!(out.contains("node[\"open\"]"));
    assert!(!out.contains("hidden"));
}

#[test]
fn generation_is_deterministic() {
    let source = indoc! {r#"
        struct [[clang::annotate("yamlbind")]] Config {
          std::string s;
          int def = 123;
        };
    "#};
    let config = GenConfig::new().compare_ops(true);
    assert_eq!(
        generate(source, &config).unwrap(),
        generate(source, &config).unwrap()
    );
}
