use std::sync::Arc;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use tracing::debug;

use crate::core::config::DEFAULT_FALLBACK_CATEGORY;
use crate::core::error::{Result, StorefrontError};
use crate::taxonomy::Catalog;
use crate::utils::safe_truncate_ellipsis;

lazy_static! {
    static ref STANDARD_RESOLVER: Arc<CategoryResolver> = Arc::new(CategoryResolver {
        catalog: Catalog::builtin(),
        fallback: DEFAULT_FALLBACK_CATEGORY.to_string(),
    });
}


/// Stage of the resolver that produced a category, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchTier {
    EmptyInput,
    Alias,
    Canonical,
    AliasPrefix,
    CanonicalPrefix,
    Fallback,
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub category: &'a str,
    pub tier: MatchTier,
}

impl Resolution<'_> {
    /// False when the category is only the catch-all default.
    #[must_use]
    pub fn is_confident(&self) -> bool {
        !matches!(self.tier, MatchTier::EmptyInput | MatchTier::Fallback)
    }
}

/// Maps arbitrary labels onto the taxonomy. Never fails: anything that does
/// not match lands on the fallback category.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    catalog: Catalog,
    fallback: String,
}

impl CategoryResolver {
    pub fn new(catalog: Catalog, fallback: &str) -> Result<Self> {
        let fallback = catalog
            .taxonomy
            .canonical_name(fallback.trim())
            .ok_or_else(|| {
                StorefrontError::validation(format!(
                    "fallback category {fallback:?} is not in the taxonomy"
                ))
            })?
            .to_string();
        Ok(Self { catalog, fallback })
    }

    /// Shared resolver over the compiled-in catalog.
    pub fn standard() -> Arc<CategoryResolver> {
        Arc::clone(&STANDARD_RESOLVER)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    #[must_use]
    pub fn resolve(&self, raw_label: &str) -> &str {
        self.resolve_with_tier(raw_label).category
    }

    /// `None` stands for a missing label and resolves like an empty one.
    #[must_use]
    pub fn resolve_opt(&self, raw_label: Option<&str>) -> &str {
        self.resolve(raw_label.unwrap_or_default())
    }

    pub fn resolve_with_tier(&self, raw_label: &str) -> Resolution<'_> {
        let resolution = self.match_tiers(raw_label);
        debug!(
            "Resolved '{}' -> {} via {}",
            safe_truncate_ellipsis(raw_label, 60),
            resolution.category,
            resolution.tier
        );
        resolution
    }

    fn match_tiers(&self, raw_label: &str) -> Resolution<'_> {
        let normalized = raw_label.trim().to_lowercase();
        if normalized.is_empty() {
            return self.fallback_with(MatchTier::EmptyInput);
        }

        if let Some(category) = self.catalog.aliases.lookup_alias(&normalized) {
            return Resolution { category, tier: MatchTier::Alias };
        }

        if let Some(category) = self.catalog.taxonomy.canonical_name(&normalized) {
            return Resolution { category, tier: MatchTier::Canonical };
        }

        // First hit in definition order wins, so the alias table order is
        // the tie-break between overlapping variants.
        for entry in self.catalog.aliases.iter() {
            if is_prefix_either_way(&entry.variant, &normalized) {
                return Resolution {
                    category: entry.canonical.as_str(),
                    tier: MatchTier::AliasPrefix,
                };
            }
        }

        for (lower, category) in self.catalog.taxonomy.iter_normalized() {
            if is_prefix_either_way(lower, &normalized) {
                return Resolution { category, tier: MatchTier::CanonicalPrefix };
            }
        }

        self.fallback_with(MatchTier::Fallback)
    }

    fn fallback_with(&self, tier: MatchTier) -> Resolution<'_> {
        Resolution { category: self.fallback.as_str(), tier }
    }
}

fn is_prefix_either_way(key: &str, input: &str) -> bool {
    input.starts_with(key) || key.starts_with(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{AliasIndex, CategoryEntry, Taxonomy};

    fn contrived(aliases: Vec<(&str, &str)>) -> CategoryResolver {
        let catalog = Catalog {
            taxonomy: Taxonomy::new(["A", "B", "Other"].iter().map(|n| CategoryEntry {
                name: n.to_string(),
                domain: None,
            })),
            aliases: AliasIndex::from_pairs(aliases),
        };
        CategoryResolver::new(catalog, "Other").expect("fallback is canonical")
    }

    #[test]
    fn test_every_canonical_resolves_to_itself() {
        let resolver = CategoryResolver::standard();
        for name in resolver.catalog().taxonomy.all_categories() {
            assert_eq!(resolver.resolve(name), name);
            assert_eq!(resolver.resolve(resolver.resolve(name)), name);
        }
    }

    #[test]
    fn test_every_alias_resolves_to_its_category() {
        let resolver = CategoryResolver::standard();
        for entry in resolver.catalog().aliases.iter() {
            let resolution = resolver.resolve_with_tier(&entry.variant);
            assert_eq!(resolution.category, entry.canonical, "alias {:?}", entry.variant);
            assert_eq!(resolution.tier, MatchTier::Alias);
        }
    }

    #[test]
    fn test_empty_input_falls_back() {
        let resolver = CategoryResolver::standard();
        assert_eq!(resolver.resolve(""), "Clothing");
        assert_eq!(resolver.resolve("   "), "Clothing");
        assert_eq!(resolver.resolve_opt(None), "Clothing");
        assert_eq!(resolver.resolve_with_tier("").tier, MatchTier::EmptyInput);
    }

    #[test]
    fn test_case_insensitive() {
        let resolver = CategoryResolver::standard();
        let expected = resolver.resolve("kurti");
        assert_eq!(expected, "Kurtis");
        assert_eq!(resolver.resolve("KURTI"), expected);
        assert_eq!(resolver.resolve("KuRtI"), expected);
        assert_eq!(resolver.resolve("  Kurti\n"), expected);
    }

    #[test]
    fn test_canonical_tier() {
        let resolver = CategoryResolver::standard();
        let resolution = resolver.resolve_with_tier("SALWAR SUITS");
        assert_eq!(resolution.category, "Salwar Suits");
        assert_eq!(resolution.tier, MatchTier::Canonical);
        assert!(resolution.is_confident());
    }

    #[test]
    fn test_exact_alias_beats_prefix_overlap() {
        let resolver = CategoryResolver::standard();
        assert_eq!(resolver.resolve("tshirts"), "Tshirts");
        assert_eq!(resolver.resolve("shirts"), "Shirts");
    }

    #[test]
    fn test_long_phrase_matches_short_alias_prefix() {
        let resolver = CategoryResolver::standard();
        let resolution = resolver.resolve_with_tier("top floral printed summer");
        assert_eq!(resolution.category, "Tops");
        assert_eq!(resolution.tier, MatchTier::AliasPrefix);
    }

    #[test]
    fn test_input_prefix_of_alias() {
        let resolver = CategoryResolver::standard();
        let resolution = resolver.resolve_with_tier("leheng");
        assert_eq!(resolution.category, "Lehengas");
        assert_eq!(resolution.tier, MatchTier::AliasPrefix);
    }

    #[test]
    fn test_canonical_prefix_tier() {
        let resolver = contrived(vec![("x", "A")]);
        let resolution = resolver.resolve_with_tier("b extra");
        assert_eq!(resolution.category, "B");
        assert_eq!(resolution.tier, MatchTier::CanonicalPrefix);
    }

    #[test]
    fn test_alias_order_breaks_prefix_ties() {
        let resolver = contrived(vec![("s", "A"), ("saree", "B")]);
        assert_eq!(resolver.resolve("sare"), "A");

        let reversed = contrived(vec![("saree", "B"), ("s", "A")]);
        assert_eq!(reversed.resolve("sare"), "B");
    }

    #[test]
    fn test_unmatched_falls_back() {
        let resolver = CategoryResolver::standard();
        let resolution = resolver.resolve_with_tier("zzz quantum widget");
        assert_eq!(resolution.category, "Clothing");
        assert_eq!(resolution.tier, MatchTier::Fallback);
        assert!(!resolution.is_confident());
    }

    #[test]
    fn test_fallback_must_be_canonical() {
        let result = CategoryResolver::new(Catalog::builtin(), "Spaceships");
        assert!(matches!(result, Err(StorefrontError::Validation(_))));

        let resolver = CategoryResolver::new(Catalog::builtin(), "tops").expect("canonical");
        assert_eq!(resolver.fallback(), "Tops");
    }
}
