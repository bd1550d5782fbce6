//! Conversion-routine text generation.
//!
//! One `YAML::convert` specialization per marked declaration, plus an
//! optional `operator==` definition per record. Everything here is a pure
//! function over classified member lists; emission order is the walker's
//! responsibility.

use yamlbind_core::{EnumConstant, Field};

use crate::sink::Sink;

/// Generated-file banner and include guard.
pub fn unit_preamble(sink: &mut Sink) {
    sink.write("// Automatically generated by yamlbind, do not modify!");
    sink.end_block();
    sink.write("#pragma once");
    sink.end_block();
}

/// `YAML::convert` specialization for a record.
pub fn record_convert(sink: &mut Sink, type_name: &str, fields: &[Field]) {
    convert_open(sink, type_name);
    record_encode(sink, type_name, fields);
    record_decode(sink, type_name, fields);
    convert_close(sink);
}

/// `YAML::convert` specialization for an enumeration.
pub fn enum_convert(sink: &mut Sink, type_name: &str, constants: &[EnumConstant]) {
    convert_open(sink, type_name);
    enum_encode(sink, type_name, constants);
    enum_decode(sink, type_name, constants);
    convert_close(sink);
}

fn convert_open(sink: &mut Sink, type_name: &str) {
    sink.write("namespace YAML {");
    sink.end_block();
    sink.write(&format!("template<> struct convert<{type_name}> {{"));
    sink.end_block();
    sink.indent();
}

fn convert_close(sink: &mut Sink) {
    sink.dedent();
    sink.write("};");
    sink.end_block();
    sink.write("} // end namespace YAML");
    sink.end_block();
}

fn record_encode(sink: &mut Sink, type_name: &str, fields: &[Field]) {
    sink.write(&format!("static Node encode({type_name} const &obj) {{"));
    sink.end_line();
    sink.indent();

    sink.write("Node node;");
    sink.end_line();
    for field in fields {
        sink.write(&format!("node[\"{0}\"] = obj.{0};", field.name));
        sink.end_line();
    }
    sink.write("return node;");
    sink.end_line();

    sink.dedent();
    sink.write("}");
    sink.end_block();
}

fn record_decode(sink: &mut Sink, type_name: &str, fields: &[Field]) {
    sink.write(&format!("static bool decode(Node const &node, {type_name} &obj) {{"));
    sink.end_line();
    sink.indent();

    // Shape and key-set validation before any field is touched.
    sink.write("check_node(node);");
    sink.end_line();

    sink.write("check_node_properties(node, {");
    sink.end_line();
    for field in fields {
        sink.write(&format!("  \"{}\",", field.name));
        sink.end_line();
    }
    sink.write("});");
    sink.end_line();

    for field in fields {
        let set = if field.has_default {
            "set_optional_field"
        } else {
            "set_field"
        };
        sink.write(&format!(
            "{set}<{}>(obj.{1}, node, \"{1}\");",
            field.type_name, field.name
        ));
        sink.end_line();
    }

    sink.write("return true;");
    sink.end_line();

    sink.dedent();
    sink.write("}");
    sink.end_block();
}

fn enum_encode(sink: &mut Sink, type_name: &str, constants: &[EnumConstant]) {
    sink.write(&format!("static Node encode({type_name} const &obj) {{"));
    sink.end_line();
    sink.indent();

    sink.write("Node node;");
    sink.end_line();

    // No default case: every declared constant appears, declaration order.
    sink.write("switch (obj) {");
    sink.end_line();
    for constant in constants {
        sink.write(&format!("case {}:", constant.qualified_name));
        sink.end_line();
        sink.indent();
        sink.write(&format!("node = \"{}\";", constant.name));
        sink.end_line();
        sink.write("break;");
        sink.end_line();
        sink.dedent();
    }
    sink.write("}");
    sink.end_line();

    sink.write("return node;");
    sink.end_line();

    sink.dedent();
    sink.write("}");
    sink.end_block();
}

fn enum_decode(sink: &mut Sink, type_name: &str, constants: &[EnumConstant]) {
    sink.write(&format!("static bool decode(Node const &node, {type_name} &obj) {{"));
    sink.end_line();
    sink.indent();

    sink.write("auto str { node.as<std::string>() };");
    sink.end_line();

    // Priority chain: first comparison unconditional, the first declared
    // name wins on duplicates.
    for (i, constant) in constants.iter().enumerate() {
        if i > 0 {
            sink.write("else ");
        }
        sink.write(&format!(
            "if (str == \"{}\") obj = {};",
            constant.name, constant.qualified_name
        ));
        sink.end_line();
    }
    if constants.is_empty() {
        sink.write("return false;");
    } else {
        sink.write("else return false;");
    }
    sink.end_line();

    sink.write("return true;");
    sink.end_line();

    sink.dedent();
    sink.write("}");
    sink.end_block();
}

/// `operator==` definition for a record, placed in the record's enclosing
/// named namespace when it has one. A record with no serializable fields
/// compares always-equal.
pub fn record_compare(
    sink: &mut Sink,
    type_name: &str,
    namespace: Option<&str>,
    fields: &[Field],
) {
    let local_name = match namespace {
        Some(ns) => type_name.strip_prefix(&format!("{ns}::")).unwrap_or(type_name),
        None => type_name,
    };

    if let Some(ns) = namespace {
        sink.write(&format!("namespace {ns} {{"));
        sink.end_block();
    }

    sink.write(&format!(
        "bool operator==({local_name} const &obj, {local_name} const &other) {{"
    ));
    sink.end_line();
    sink.indent();

    if fields.is_empty() {
        sink.write("return true;");
        sink.end_line();
    } else {
        for (i, field) in fields.iter().enumerate() {
            let lead = if i == 0 { "return " } else { "       " };
            let tail = if i + 1 == fields.len() { ";" } else { " &&" };
            sink.write(&format!(
                "{lead}obj.{0} == other.{0}{tail}",
                field.name
            ));
            sink.end_line();
        }
    }

    sink.dedent();
    sink.write("}");
    sink.end_block();

    if let Some(ns) = namespace {
        sink.write(&format!("}} // end namespace {ns}"));
        sink.end_block();
    }
}
