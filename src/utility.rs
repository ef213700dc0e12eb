use once_cell::sync::Lazy;
use regex::Regex;

// Blank (whitespace-only) lines separate records in the dependency format
// and never carry content in the tagged format.
pub fn is_blank_line(line: &str) -> bool {
    static REGEX_BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").unwrap());

    REGEX_BLANK_LINE.is_match(line)
}
