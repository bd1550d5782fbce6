//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("yamlbind")
        .about("YAML conversion-code generator for annotated C++ headers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_command())
        .subcommand(check_command())
        .subcommand(list_command())
}

/// Generate conversion headers for one or more input units.
fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate conversion headers for annotated declarations")
        .arg(files_arg())
        .arg(out_dir_arg())
        .arg(compare_ops_arg())
        .arg(color_arg())
}

/// Parse an input unit and report what would be generated.
fn check_command() -> Command {
    Command::new("check")
        .about("Parse a header and report its marked declarations")
        .arg(input_arg())
        .arg(color_arg())
}

/// Machine-readable listing of marked declarations.
fn list_command() -> Command {
    Command::new("list")
        .about("List marked declarations with their classified members")
        .arg(input_arg())
        .arg(format_arg())
        .arg(color_arg())
}
