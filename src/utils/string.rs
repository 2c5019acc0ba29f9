//! String manipulation utilities for genutils
//!
//! Indentation, character counting and camelCase conversion.

use crate::config::IndentationConfig;

/// Return the indentation string for `level`, four spaces per level
///
/// Negative levels are treated as zero and yield an empty string.
/// Use [`IndentationConfig::indent`] for a different width.
///
/// # Example
/// ```rust
/// use genutils::get_indentation;
///
/// assert_eq!(get_indentation(2), "        ");
/// assert_eq!(get_indentation(0), "");
/// ```
pub fn get_indentation(level: i32) -> String {
    IndentationConfig::default().indent(level)
}

/// Count how many times `c` appears in `s`
///
/// # Example
/// ```rust
/// use genutils::count_occurrences;
///
/// assert_eq!(count_occurrences("hello world", 'l'), 3);
/// ```
pub fn count_occurrences(s: &str, c: char) -> usize {
    s.chars().filter(|&current| current == c).count()
}

/// Convert space-separated words to camelCase
///
/// Words are split on the single space character. The first word is
/// lower-cased; every later word is lower-cased with its first character
/// upper-cased. Empty words (from repeated, leading or trailing spaces)
/// are skipped.
///
/// # Example
/// ```rust
/// use genutils::to_camel_case;
///
/// assert_eq!(to_camel_case("this is a test"), "thisIsATest");
/// assert_eq!(to_camel_case("HELLO WORLD"), "helloWorld");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut words = s.split(' ').filter(|word| !word.is_empty());

    if let Some(first) = words.next() {
        result.push_str(&first.to_lowercase());
    }

    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }

    result
}
