use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use super::patterns::{strip_filler_words, take_color, take_gender};
use super::resolver::CategoryResolver;
use crate::core::config::DEFAULT_MAX_QUERY_CHARS;
use crate::utils::{collapse_whitespace, safe_truncate, safe_truncate_ellipsis};


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    Men,
    Women,
    Kids,
}


/// Facets pulled out of one search string. Built per request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIntent {
    pub category: Option<String>,
    pub gender: Option<Gender>,
    pub color: Option<String>,
    pub remaining_text: String,
}

impl SearchIntent {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_facets(&self) -> bool {
        self.category.is_some() || self.gender.is_some() || self.color.is_some()
    }
}


pub struct IntentExtractor {
    resolver: Arc<CategoryResolver>,
    max_query_chars: usize,
}

impl IntentExtractor {
    pub fn new(resolver: Arc<CategoryResolver>, max_query_chars: usize) -> Self {
        Self {
            resolver,
            max_query_chars,
        }
    }

    pub fn standard() -> Self {
        Self::new(CategoryResolver::standard(), DEFAULT_MAX_QUERY_CHARS)
    }

    pub fn resolver(&self) -> &CategoryResolver {
        &self.resolver
    }

    /// Gender first, then color, then filler words, then the category.
    /// Pulling the facets out before resolving keeps words like "red" or
    /// "men" from prefix-matching an alias.
    pub fn extract(&self, query: &str) -> SearchIntent {
        let working = safe_truncate(query, self.max_query_chars).trim().to_lowercase();
        if working.is_empty() {
            return SearchIntent::empty();
        }

        let (gender, working) = take_gender(&working);
        let (color, working) = take_color(&working);
        let remaining_text = collapse_whitespace(&strip_filler_words(&working));

        let category = if remaining_text.is_empty() {
            None
        } else {
            Some(self.resolver.resolve(&remaining_text).to_string())
        };

        debug!(
            "Intent for '{}': category={:?} gender={:?} color={:?}",
            safe_truncate_ellipsis(query, 60),
            category,
            gender,
            color
        );

        SearchIntent {
            category,
            gender,
            color: color.map(str::to_string),
            remaining_text,
        }
    }

    /// Untyped input from a request body: only JSON strings are searched.
    pub fn extract_value(&self, value: &serde_json::Value) -> SearchIntent {
        match value.as_str() {
            Some(query) => self.extract(query),
            None => SearchIntent::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_for_women() {
        let intent = IntentExtractor::standard().extract("top for women");
        assert_eq!(intent.category.as_deref(), Some("Tops"));
        assert_eq!(intent.gender, Some(Gender::Women));
        assert_eq!(intent.color, None);
        assert_eq!(intent.remaining_text, "top");
    }

    #[test]
    fn test_red_shirt() {
        let intent = IntentExtractor::standard().extract("red shirt");
        assert_eq!(intent.category.as_deref(), Some("Shirts"));
        assert_eq!(intent.gender, None);
        assert_eq!(intent.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_empty_query() {
        let extractor = IntentExtractor::standard();
        assert_eq!(extractor.extract(""), SearchIntent::empty());
        assert_eq!(extractor.extract("   \t"), SearchIntent::empty());
        assert_eq!(extractor.extract("").remaining_text, "");
    }

    #[test]
    fn test_gender_extracted_before_category() {
        let intent = IntentExtractor::standard().extract("tshirts for men");
        assert_eq!(intent.gender, Some(Gender::Men));
        assert_eq!(intent.remaining_text, "tshirts");
        assert_eq!(intent.category.as_deref(), Some("Tshirts"));
    }

    #[test]
    fn test_only_facets_leave_no_category() {
        let intent = IntentExtractor::standard().extract("Black for the Women");
        assert_eq!(intent.gender, Some(Gender::Women));
        assert_eq!(intent.color.as_deref(), Some("black"));
        assert_eq!(intent.category, None);
        assert_eq!(intent.remaining_text, "");
        assert!(intent.has_facets());
    }

    #[test]
    fn test_unresolvable_text_still_reported() {
        let intent = IntentExtractor::standard().extract("blue xyzzy");
        assert_eq!(intent.color.as_deref(), Some("blue"));
        assert_eq!(intent.category.as_deref(), Some("Clothing"));
        assert_eq!(intent.remaining_text, "xyzzy");
    }

    #[test]
    fn test_mixed_case_and_spacing() {
        let intent = IntentExtractor::standard().extract("  Maroon   SAREE  with   the Border ");
        assert_eq!(intent.color.as_deref(), Some("maroon"));
        assert_eq!(intent.remaining_text, "saree border");
        assert_eq!(intent.category.as_deref(), Some("Sarees"));
    }

    #[test]
    fn test_long_query_is_truncated() {
        let extractor = IntentExtractor::new(CategoryResolver::standard(), 5);
        let intent = extractor.extract("kurti for girls in pink");
        assert_eq!(intent.remaining_text, "kurti");
        assert_eq!(intent.gender, None);
    }

    #[test]
    fn test_extract_value_coerces_non_strings() {
        let extractor = IntentExtractor::standard();
        assert_eq!(extractor.extract_value(&json!(null)), SearchIntent::empty());
        assert_eq!(extractor.extract_value(&json!(42)), SearchIntent::empty());
        assert_eq!(extractor.extract_value(&json!(["kurti"])), SearchIntent::empty());
        assert_eq!(
            extractor.extract_value(&json!("kurti")).category.as_deref(),
            Some("Kurtis")
        );
    }

    #[test]
    fn test_intent_serializes_camel_case() {
        let intent = IntentExtractor::standard().extract("girls frock");
        let value = serde_json::to_value(&intent).expect("serializable");
        assert_eq!(value["gender"], "Kids");
        assert_eq!(value["category"], "Frocks");
        assert_eq!(value["remainingText"], "frock");
    }
}
