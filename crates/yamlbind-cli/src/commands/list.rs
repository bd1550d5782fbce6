//! `list`: marked declarations with their classified members, as text or
//! JSON.

use std::path::PathBuf;

use serde::Serialize;
use yamlbind_codegen::{classify, diagnostics, discover, index::DeclIndex, marker_matches, parse};
use yamlbind_core::{Decl, EnumConstant, Field};

use super::input;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

pub struct ListArgs {
    pub input: Option<PathBuf>,
    pub format: ListFormat,
    pub color: bool,
}

#[derive(Serialize)]
struct ListEntry {
    kind: &'static str,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<Field>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    constants: Option<Vec<EnumConstant>>,
}

pub fn run(args: ListArgs) {
    let path = args.input.expect("clap enforces the input argument");
    let (source, display) = input::load(&path).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });

    let unit = match parse(&source) {
        Ok(unit) => unit,
        Err(parse_error) => {
            eprint!(
                "{}",
                diagnostics::render_parse_error(&source, Some(&display), &parse_error, args.color)
            );
            eprintln!();
            std::process::exit(1);
        }
    };

    let index = DeclIndex::build(&unit);
    let mut entries = Vec::new();
    for (decl, scope) in discover(&unit) {
        let matches = marker_matches(decl).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });
        if !matches {
            continue;
        }
        let entry = match decl {
            Decl::Record(record) => ListEntry {
                kind: "record",
                name: scope.qualified(&record.name),
                fields: Some(classify::public_fields(record, &index, &scope)),
                constants: None,
            },
            Decl::Enum(e) => ListEntry {
                kind: "enum",
                name: scope.qualified(&e.name),
                fields: None,
                constants: Some(classify::enum_constants(e, &scope)),
            },
        };
        entries.push(entry);
    }

    match args.format {
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).expect("entries serialize");
            println!("{json}");
        }
        ListFormat::Text => print_text(&entries),
    }
}

fn print_text(entries: &[ListEntry]) {
    for entry in entries {
        println!("{} {}", entry.kind, entry.name);
        if let Some(fields) = &entry.fields {
            for field in fields {
                let default = if field.has_default { " (default)" } else { "" };
                println!("  {}: {}{default}", field.name, field.type_name);
            }
        }
        if let Some(constants) = &entry.constants {
            for constant in constants {
                println!("  {}", constant.name);
            }
        }
    }
}
