use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::SectionRecord;
use crate::parser::sectionizer::parse_codes;

/// Read the whole file as text with line endings normalized to `\n`
pub fn load_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Read {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(normalize_newlines(content))
}

fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parse codes from a file, reporting load failures and returning no sections
pub fn parse_codes_from_file(path: &Path) -> Vec<SectionRecord> {
    match load_file(path) {
        Ok(content) => {
            let results = parse_codes(&content);
            info!(
                "Parsed {} section(s) with codes from {}",
                results.len(),
                path.display()
            );
            results
        }
        Err(err @ Error::NotFound { .. }) => {
            println!("Error: {}", err);
            Vec::new()
        }
        Err(err) => {
            println!("Error reading file: {}", err);
            Vec::new()
        }
    }
}
