

pub mod core;
pub mod llm;
pub mod mcp;
pub mod search;
pub mod taxonomy;
pub mod utils;

pub use utils::{safe_truncate, safe_truncate_ellipsis};


pub use core::config::{DEFAULT_FALLBACK_CATEGORY, StorefrontConfig};
pub use core::error::{Result, StorefrontError};
pub use search::{
    CategoryResolver, Gender, IntentExtractor, MatchTier, QueryPredicate, SearchIntent,
    build_predicate,
};
pub use taxonomy::{AliasIndex, Catalog, CategoryDomain, Taxonomy};


/// Resolves a label against the compiled-in catalog.
pub fn resolve_category(raw_label: &str) -> String {
    CategoryResolver::standard().resolve(raw_label).to_string()
}


/// Extracts search facets with the compiled-in catalog.
pub fn extract_intent(query: &str) -> SearchIntent {
    IntentExtractor::standard().extract(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pipeline_end_to_end() {
        let intent = extract_intent("Navy Blazer for Men");
        assert_eq!(intent.gender, Some(Gender::Men));
        assert_eq!(intent.color.as_deref(), Some("navy"));
        assert_eq!(intent.category.as_deref(), Some("Blazers"));

        let filter = build_predicate(&intent).to_filter_document();
        assert_eq!(filter["isPublished"], true);
        assert_eq!(filter["gender"], "Men");
        assert!(filter.get("$or").is_some());
    }

    #[test]
    fn test_resolve_category_helper() {
        assert_eq!(resolve_category("jhumkas"), "Earrings");
        assert_eq!(resolve_category(""), DEFAULT_FALLBACK_CATEGORY);
    }
}
