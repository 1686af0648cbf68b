//! Section splitting and code extraction

pub mod extractor;
pub mod loader;
pub mod sectionizer;

pub use extractor::extract_codes;
pub use loader::{load_file, parse_codes_from_file};
pub use sectionizer::{parse_codes, section_bodies, split_segments, Segment};
