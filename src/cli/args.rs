use std::path::PathBuf;

use clap::Parser;

/// Extract A/B/C/D codes from a sectioned text file
#[derive(Parser, Debug)]
#[command(name = "code_parser", version)]
#[command(after_help = "Sections are separated by lines containing only digits.\n\
After a successful parse the program asks whether to save the codes to a file.")]
pub struct Args {
    /// File to parse (defaults to "new 2 simple.txt")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Step through a saved code list instead of parsing FILE
    #[arg(long, value_name = "CODES_FILE")]
    pub play: Option<PathBuf>,
}
