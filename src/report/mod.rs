//! Console summary and output file handling

pub mod console;
pub mod persist;

pub use console::print_results;
pub use persist::{load_saved_codes, parse_code_list, save_codes_to_file};
