//! Data structures shared across the parsing pipeline

pub mod config;
pub mod section;

pub use config::{Config, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
pub use section::{flatten_codes, join_codes, total_code_count, SectionRecord};
