use lazy_static::lazy_static;
use regex::Regex;

use super::intent::Gender;

/// Gender keywords, scanned in this order. Only the first hit is extracted.
pub const GENDER_KEYWORDS: &[(&str, Gender)] = &[
    ("women", Gender::Women),
    ("womens", Gender::Women),
    ("woman", Gender::Women),
    ("ladies", Gender::Women),
    ("lady", Gender::Women),
    ("female", Gender::Women),
    ("men", Gender::Men),
    ("mens", Gender::Men),
    ("man", Gender::Men),
    ("gents", Gender::Men),
    ("male", Gender::Men),
    ("kids", Gender::Kids),
    ("kid", Gender::Kids),
    ("children", Gender::Kids),
    ("child", Gender::Kids),
    ("boys", Gender::Kids),
    ("boy", Gender::Kids),
    ("girls", Gender::Kids),
    ("girl", Gender::Kids),
    ("baby", Gender::Kids),
    ("infant", Gender::Kids),
];

/// Color keywords, scanned in this order. Only the first hit is extracted.
pub const COLOR_KEYWORDS: &[&str] = &[
    "red", "blue", "green", "black", "white", "yellow", "pink", "purple", "orange", "brown",
    "grey", "gray", "beige", "navy", "maroon", "gold", "silver", "cream", "olive", "teal",
    "mustard", "peach", "lavender", "violet", "magenta", "turquoise", "khaki", "tan", "wine",
    "rust", "coral", "mint", "indigo", "ivory", "nude", "multicolor",
];

pub const FILLER_WORDS: &[&str] = &["for", "with", "in", "the", "a", "an"];

fn word_pattern(word: &str) -> Option<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(word))).ok()
}

lazy_static! {
    pub static ref GENDER_PATTERNS: Vec<(Regex, Gender)> = GENDER_KEYWORDS
        .iter()
        .filter_map(|(word, gender)| word_pattern(word).map(|re| (re, *gender)))
        .collect();

    pub static ref COLOR_PATTERNS: Vec<(Regex, &'static str)> = COLOR_KEYWORDS
        .iter()
        .filter_map(|color| word_pattern(color).map(|re| (re, *color)))
        .collect();

    pub static ref FILLER_PATTERN: Option<Regex> = Regex::new(&format!(
        r"\b(?:{})\b",
        FILLER_WORDS.join("|")
    ))
    .ok();
}

/// Removes the first occurrence of the first gender keyword found.
pub fn take_gender(text: &str) -> (Option<Gender>, String) {
    for (pattern, gender) in GENDER_PATTERNS.iter() {
        if pattern.is_match(text) {
            return (Some(*gender), pattern.replace(text, " ").into_owned());
        }
    }
    (None, text.to_string())
}

/// Removes the first occurrence of the first color keyword found.
pub fn take_color(text: &str) -> (Option<&'static str>, String) {
    for (pattern, color) in COLOR_PATTERNS.iter() {
        if pattern.is_match(text) {
            return (Some(*color), pattern.replace(text, " ").into_owned());
        }
    }
    (None, text.to_string())
}

/// Strips every filler word; whitespace is left for the caller to collapse.
pub fn strip_filler_words(text: &str) -> String {
    match FILLER_PATTERN.as_ref() {
        Some(pattern) => pattern.replace_all(text, " ").into_owned(),
        None => text.to_string(),
    }
}
