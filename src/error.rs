use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for the code parser
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },
    /// Input file exists but could not be read or decoded
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Output file could not be written
    #[error("{source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Saved code list held no codes
    #[error("No codes found in the file!")]
    EmptyCodeList,
    /// Console I/O errors while prompting
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for code parser operations
pub type Result<T> = std::result::Result<T, Error>;
