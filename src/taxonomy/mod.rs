pub mod aliases;
pub mod categories;

pub use aliases::{ALIAS_TABLE, AliasEntry, AliasIndex};
pub use categories::{CATEGORY_TABLE, CategoryDomain, CategoryEntry, Taxonomy};

use std::collections::HashSet;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{info, warn};

use crate::core::error::{Result, StorefrontError};

lazy_static! {
    static ref BUILTIN_CATALOG: Catalog = Catalog::builtin();
}


#[derive(Debug, Clone)]
pub struct Catalog {
    pub taxonomy: Taxonomy,
    pub aliases: AliasIndex,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryDef {
    Name(String),
    Entry(CategoryEntry),
}

/// On-disk catalog. Arrays keep definition order for the prefix tiers.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryDef>,
    #[serde(default)]
    aliases: Vec<(String, String)>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            taxonomy: Taxonomy::builtin(),
            aliases: AliasIndex::builtin(),
        }
    }

    /// Process-wide compiled-in catalog.
    pub fn shared() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded catalog from {}: {} categories, {} aliases",
            path.display(),
            catalog.taxonomy.len(),
            catalog.aliases.len()
        );
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;

        if file.categories.is_empty() {
            return Err(StorefrontError::catalog("catalog has no categories"));
        }

        let mut entries = Vec::with_capacity(file.categories.len());
        let mut seen = HashSet::new();
        for def in file.categories {
            let entry = match def {
                CategoryDef::Name(name) => CategoryEntry { name, domain: None },
                CategoryDef::Entry(entry) => entry,
            };
            let key = entry.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(StorefrontError::catalog("empty category name"));
            }
            if !seen.insert(key) {
                return Err(StorefrontError::catalog(format!(
                    "duplicate category: {}",
                    entry.name
                )));
            }
            entries.push(CategoryEntry {
                name: entry.name.trim().to_string(),
                domain: entry.domain,
            });
        }
        let taxonomy = Taxonomy::new(entries);

        let mut pairs = Vec::with_capacity(file.aliases.len());
        let mut seen_variants = HashSet::new();
        for (variant, target) in file.aliases {
            let key = variant.trim().to_lowercase();
            if key.is_empty() {
                return Err(StorefrontError::catalog(format!(
                    "empty alias for {target}"
                )));
            }
            let canonical = taxonomy.canonical_name(target.trim()).ok_or_else(|| {
                StorefrontError::catalog(format!(
                    "alias {variant:?} points at unknown category {target:?}"
                ))
            })?;
            if let Some(shadowed) = taxonomy.canonical_name(&key) {
                if shadowed != canonical {
                    return Err(StorefrontError::catalog(format!(
                        "alias {variant:?} shadows canonical category {shadowed:?}"
                    )));
                }
            }
            if !seen_variants.insert(key.clone()) {
                warn!("Alias {:?} defined twice, later definition wins", key);
            }
            pairs.push((key, canonical.to_string()));
        }

        Ok(Self {
            taxonomy,
            aliases: AliasIndex::from_pairs(pairs),
        })
    }
}
