//! Input loading shared by commands. `-` reads stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Load an input unit, returning its source and a display name for
/// diagnostics.
pub fn load(path: &Path) -> Result<(String, String), String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        return Ok((buf, "<stdin>".to_string()));
    }

    let source = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    Ok((source, path.display().to_string()))
}
