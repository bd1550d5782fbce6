//! `gen`: generate conversion headers.
//!
//! Units are independent: a unit that fails to parse or write is reported
//! and skipped, the remaining units are still processed. The exit code
//! reflects whether any unit failed.

use std::fs;
use std::path::{Path, PathBuf};

use yamlbind_codegen::{GenConfig, GenError, diagnostics, generate};

pub struct GenArgs {
    pub files: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub compare_ops: bool,
    pub color: bool,
}

pub fn run(args: GenArgs) {
    let config = GenConfig::new().compare_ops(args.compare_ops);

    let mut failed = false;
    for file in &args.files {
        if generate_file(file, args.out_dir.as_deref(), &config, args.color).is_err() {
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Process one unit. Errors are reported on stderr; the returned result
/// only steers the exit code.
pub fn generate_file(
    file: &Path,
    out_dir: Option<&Path>,
    config: &GenConfig,
    color: bool,
) -> Result<PathBuf, ()> {
    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", file.display());
            return Err(());
        }
    };

    let display = file.display().to_string();
    let output = match generate(&source, config) {
        Ok(output) => output,
        Err(GenError::Parse(parse_error)) => {
            eprint!(
                "{}",
                diagnostics::render_parse_error(&source, Some(&display), &parse_error, color)
            );
            eprintln!();
            return Err(());
        }
        Err(e) => {
            eprintln!("error: {}: {e}", file.display());
            return Err(());
        }
    };

    let out_path = output_path(file, out_dir);
    if let Err(e) = fs::write(&out_path, &output) {
        eprintln!("error: failed to write {}: {e}", out_path.display());
        return Err(());
    }

    Ok(out_path)
}

/// Derived output filename: input base name with the extension replaced by
/// the fixed `.yamlbind.h` suffix, under `--out-dir` when given.
pub(crate) fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_else(|| input.as_os_str())
        .to_string_lossy();
    let file_name = format!("{stem}.yamlbind.h");

    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
