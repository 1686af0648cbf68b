use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// One of A, B, C or D followed by one or two digits
    static ref CODE_RE: Regex = Regex::new(r"[ABCD]\d{1,2}").unwrap();
    static ref DIGIT_RE: Regex = Regex::new(r"^\d").unwrap();
}

/// Extract every code in `body`, left to right, duplicates kept.
///
/// Matching is greedy and never overlaps, so `"A12B3"` yields `A12` and `B3`.
/// Codes cap at two digits: in `"A123"` the code is `A12` and the trailing `3`
/// is left unmatched. That truncation is silent in the output and only shows
/// up in debug logs.
pub fn extract_codes(body: &str) -> Vec<String> {
    CODE_RE
        .find_iter(body)
        .map(|m| {
            if DIGIT_RE.is_match(&body[m.end()..]) {
                debug!(
                    "Code {} at byte {} is followed by more digits; extra digits ignored",
                    m.as_str(),
                    m.start()
                );
            }
            m.as_str().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_two_digit_match() {
        assert_eq!(extract_codes("A12B3"), vec!["A12", "B3"]);
    }

    #[test]
    fn only_abcd_letters_count() {
        assert_eq!(extract_codes("E5 A5"), vec!["A5"]);
        assert!(extract_codes("a1 b2 Z9 X10").is_empty());
    }

    #[test]
    fn three_digits_truncate_to_two() {
        assert_eq!(extract_codes("A123"), vec!["A12"]);
        assert_eq!(extract_codes("D1234"), vec!["D12"]);
    }

    #[test]
    fn letter_without_digit_is_skipped() {
        assert_eq!(extract_codes("A B C D7"), vec!["D7"]);
    }

    #[test]
    fn codes_inside_words_are_found() {
        assert_eq!(extract_codes("xA1y CAB9"), vec!["A1", "B9"]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        assert_eq!(
            extract_codes("D9, A1; D9\nC44"),
            vec!["D9", "A1", "D9", "C44"]
        );
    }

    #[test]
    fn empty_body_has_no_codes() {
        assert!(extract_codes("").is_empty());
        assert!(extract_codes("no codes here").is_empty());
    }
}
