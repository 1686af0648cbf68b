use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{join_codes, SectionRecord};
use crate::parser::load_file;

/// Write the flattened code list to `path`, replacing any existing file.
///
/// Returns the path that was written.
pub fn save_codes_to_file(results: &[SectionRecord], path: &Path) -> Result<PathBuf> {
    let line = join_codes(results);
    fs::write(path, &line).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", line.len(), path.display());
    Ok(path.to_path_buf())
}

/// Split a saved code list back into individual codes
pub fn parse_code_list(text: &str) -> Vec<String> {
    text.trim()
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a file previously written by [`save_codes_to_file`]
pub fn load_saved_codes(path: &Path) -> Result<Vec<String>> {
    let content = load_file(path)?;
    Ok(parse_code_list(&content))
}
