//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror command `*Args` but are populated from clap;
//! `Into<*Args>` impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenArgs;
use crate::commands::list::{ListArgs, ListFormat};

pub struct GenParams {
    pub files: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub compare_ops: bool,
    pub color: ColorChoice,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: m
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().collect())
                .unwrap_or_default(),
            out_dir: m.get_one::<PathBuf>("out_dir").cloned(),
            compare_ops: m.get_flag("compare_ops"),
            color: parse_color(m),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            files: p.files,
            out_dir: p.out_dir,
            compare_ops: p.compare_ops,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ListParams {
    pub input: Option<PathBuf>,
    pub format: ListFormat,
    pub color: ColorChoice,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(String::as_str) {
            Some("json") => ListFormat::Json,
            _ => ListFormat::Text,
        };
        Self {
            input: m.get_one::<PathBuf>("input").cloned(),
            format,
            color: parse_color(m),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self {
            input: p.input,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
