//! Extracts short `[ABCD]` + 1-2 digit codes from a text file, grouped by
//! sections delimited with lines of digits, and steps through saved lists.

pub mod cli;
pub mod error;
pub mod models;
pub mod parser;
pub mod player;
pub mod report;
pub mod utils;

pub use error::{Error, Result};
pub use models::SectionRecord;
