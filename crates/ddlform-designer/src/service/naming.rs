//! Identifier normalization for generated DDL

use convert_case::{Case, Casing};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Convert a human-entered label to a lowercase, underscore-separated
/// identifier.
///
/// Accents are stripped, apostrophes dropped, and every other character that
/// is not a letter or digit separates words. Case changes inside a word
/// (`firstName`, `HTTPServer`) also start a new word.
pub fn to_snake_case(label: &str) -> String {
    let cleaned: String = label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let words = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if words.is_empty() {
        return String::new();
    }
    words.to_case(Case::Snake)
}
