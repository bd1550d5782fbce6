//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input header files (positional, one or more).
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILES")
        .num_args(1..)
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Annotated header files to process")
}

/// Single input header (positional), `-` reads stdin.
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Annotated header file, or '-' for stdin")
}

/// Output directory (--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory the generated headers are written to (default: next to the input)")
}

/// Generate comparison operators (--compare-ops).
pub fn compare_ops_arg() -> Arg {
    Arg::new("compare_ops")
        .long("compare-ops")
        .action(ArgAction::SetTrue)
        .help("Generate operator== definitions for records")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Listing format")
}
