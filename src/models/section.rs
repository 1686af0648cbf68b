/// Codes found in one section of the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRecord {
    /// 1-based index counting only sections that yielded codes
    pub section: usize,
    /// Matched codes in order of appearance, duplicates kept
    pub codes: Vec<String>,
    /// Number of codes in this section
    pub code_count: usize,
}

impl SectionRecord {
    pub fn new(section: usize, codes: Vec<String>) -> Self {
        let code_count = codes.len();
        Self {
            section,
            codes,
            code_count,
        }
    }
}

/// All codes across sections, in section order then match order
pub fn flatten_codes(results: &[SectionRecord]) -> Vec<&str> {
    results
        .iter()
        .flat_map(|record| record.codes.iter().map(String::as_str))
        .collect()
}

/// Sum of `code_count` over every section
pub fn total_code_count(results: &[SectionRecord]) -> usize {
    results.iter().map(|record| record.code_count).sum()
}

/// Flattened codes rendered as a single `", "`-separated line
pub fn join_codes(results: &[SectionRecord]) -> String {
    flatten_codes(results).join(", ")
}
