//! `check`: parse a unit and report its marked declarations.

use std::path::PathBuf;

use yamlbind_codegen::{diagnostics, discover, marker_matches, parse};
use yamlbind_core::Decl;

use super::input;

pub struct CheckArgs {
    pub input: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
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

    let mut count = 0usize;
    for (decl, scope) in discover(&unit) {
        let matches = marker_matches(decl).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });
        if !matches {
            continue;
        }
        let kind = match decl {
            Decl::Record(_) => "record",
            Decl::Enum(_) => "enum",
        };
        println!("{kind} {}", scope.qualified(decl.name()));
        count += 1;
    }

    if count == 0 {
        println!("no marked declarations");
    }
}
