use std::path::PathBuf;

use crate::cli::Args;

/// Input file used when no path is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "new 2 simple.txt";

/// Output file used when the save prompt is answered with a blank line
pub const DEFAULT_OUTPUT_FILE: &str = "extracted_codes.txt";

/// Runtime configuration for a parsing run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// File to parse codes from
    pub input_path: PathBuf,
    /// Fallback name offered by the save prompt
    pub default_output: PathBuf,
    /// Saved code list to step through instead of parsing
    pub play_path: Option<PathBuf>,
}

impl Config {
    /// Create a configuration for the given input file with default settings
    pub fn new(input_path: impl Into<PathBuf>, debug_mode: bool) -> Self {
        Self {
            debug_mode,
            input_path: input_path.into(),
            default_output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            play_path: None,
        }
    }

    /// Build the configuration from parsed command line arguments
    pub fn from_args(args: Args) -> Self {
        let input_path = args.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));
        Self {
            play_path: args.play,
            ..Self::new(input_path, args.debug)
        }
    }
}
