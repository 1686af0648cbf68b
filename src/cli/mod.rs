//! Command-line interface handling and user interaction

mod args;
mod interaction;

pub use args::Args;
pub use interaction::{ask_output_filename, ask_save_results};
