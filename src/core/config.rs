use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use super::error::{Result, StorefrontError};

pub const DEFAULT_FALLBACK_CATEGORY: &str = "Clothing";

pub const DEFAULT_MAX_QUERY_CHARS: usize = 200;

pub const DEFAULT_LOG_FILTER: &str = "storefront_search=info";


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catch-all category returned when nothing in the taxonomy matches.
    #[serde(default = "default_fallback_category")]
    pub fallback_category: String,

    /// JSON catalog replacing the compiled-in taxonomy and alias tables.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    #[serde(default = "default_max_query_chars")]
    pub max_query_chars: usize,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_fallback_category() -> String {
    DEFAULT_FALLBACK_CATEGORY.to_string()
}

fn default_max_query_chars() -> usize {
    DEFAULT_MAX_QUERY_CHARS
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl StorefrontConfig {
    /// Layers defaults, an optional config file and `STOREFRONT_*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("fallback_category", DEFAULT_FALLBACK_CATEGORY)?
            .set_default("max_query_chars", DEFAULT_MAX_QUERY_CHARS as i64)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix("STOREFRONT").try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fallback_category.trim().is_empty() {
            return Err(StorefrontError::validation("fallback_category must not be empty"));
        }
        if self.max_query_chars == 0 {
            return Err(StorefrontError::validation("max_query_chars must be positive"));
        }
        Ok(())
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            fallback_category: default_fallback_category(),
            catalog_path: None,
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
            log_filter: default_log_filter(),
        }
    }
}
