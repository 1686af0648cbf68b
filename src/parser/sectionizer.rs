use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::SectionRecord;
use crate::parser::extractor::extract_codes;

lazy_static! {
    /// A line holding only digits, with the newline on each side consumed
    static ref MARKER_RE: Regex = Regex::new(r"\n(\d+)\n").unwrap();
    static ref ALL_DIGITS_RE: Regex = Regex::new(r"^\d+$").unwrap();
}

/// One piece of the input after splitting on section markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text between markers, untrimmed
    Text(&'a str),
    /// Digits of a marker line
    Marker(&'a str),
}

/// Split content into alternating text and marker segments.
///
/// A marker needs a newline on both sides, so a digit line at the very start
/// of the content stays in the first text segment. Back-to-back marker lines
/// share a newline; only the first one splits.
pub fn split_segments(content: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in MARKER_RE.captures_iter(content) {
        let (Some(whole), Some(marker)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        segments.push(Segment::Text(&content[last..whole.start()]));
        segments.push(Segment::Marker(marker.as_str()));
        last = whole.end();
    }
    segments.push(Segment::Text(&content[last..]));

    segments
}

/// Trimmed section bodies worth scanning for codes
pub fn section_bodies(content: &str) -> Vec<&str> {
    split_segments(content)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text.trim()),
            Segment::Marker(_) => None,
        })
        .filter(|body| !body.is_empty() && !ALL_DIGITS_RE.is_match(body))
        .collect()
}

/// Group the codes in `content` by section.
///
/// Sections are numbered from 1 in order of appearance, counting only those
/// that contain at least one code. Marker values are ignored for numbering.
pub fn parse_codes(content: &str) -> Vec<SectionRecord> {
    let mut results = Vec::new();

    for body in section_bodies(content) {
        let codes = extract_codes(body);
        if codes.is_empty() {
            debug!("Skipping section without codes ({} chars)", body.len());
            continue;
        }
        let record = SectionRecord::new(results.len() + 1, codes);
        debug!("Section {}: {} code(s)", record.section, record.code_count);
        results.push(record);
    }

    results
}
