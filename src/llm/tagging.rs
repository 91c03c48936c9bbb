use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::search::{CategoryResolver, MatchTier};
use crate::utils::safe_truncate_ellipsis;


#[derive(Error, Debug)]
pub enum TaggingError {
    #[error("Image rejected: {0}")]
    InvalidImage(String),

    #[error("Tagging provider error: {0}")]
    Provider(String),
}


#[derive(Debug, Clone)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Opaque generative-AI call that describes a product photo.
#[async_trait]
pub trait ImageTagger: Send + Sync {
    async fn image_to_label(&self, image: &ImageInput) -> Result<String, TaggingError>;

    fn provider_name(&self) -> &str;
}

#[async_trait]
impl ImageTagger for Arc<dyn ImageTagger> {
    async fn image_to_label(&self, image: &ImageInput) -> Result<String, TaggingError> {
        (**self).image_to_label(image).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}


/// Label and tags recovered from a model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPayload {
    pub label: Option<String>,
    pub tags: Vec<String>,
}

const LABEL_FIELDS: &[&str] = &["category", "label", "type", "name"];

/// Accepts fenced JSON, bare JSON (object, string or array) or plain text.
pub fn parse_label(raw: &str) -> LabelPayload {
    let body = strip_code_fence(raw.trim());
    if body.is_empty() {
        return LabelPayload::default();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            let label = LABEL_FIELDS
                .iter()
                .find_map(|field| map.get(*field).and_then(Value::as_str))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let tags = map
                .get("tags")
                .and_then(Value::as_array)
                .map(|items| string_items(items))
                .unwrap_or_default();
            LabelPayload { label, tags }
        }
        Ok(Value::String(s)) => LabelPayload {
            label: Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            tags: Vec::new(),
        },
        Ok(Value::Array(items)) => {
            let tags = string_items(&items);
            LabelPayload {
                label: tags.first().cloned(),
                tags,
            }
        }
        Ok(_) => LabelPayload::default(),
        Err(_) => LabelPayload {
            label: body.lines().next().map(|l| l.trim().to_string()),
            tags: Vec::new(),
        },
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}


/// Body of the category-suggestion response: `{ "category": ..., "tags": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip)]
    pub tier: Option<MatchTier>,
}


pub struct CategorySuggester<T: ImageTagger> {
    tagger: T,
    resolver: Arc<CategoryResolver>,
}

impl<T: ImageTagger> CategorySuggester<T> {
    #[must_use]
    pub fn new(tagger: T, resolver: Arc<CategoryResolver>) -> Self {
        Self { tagger, resolver }
    }

    pub async fn suggest(&self, image: &ImageInput) -> Result<CategorySuggestion, TaggingError> {
        if image.bytes.is_empty() {
            return Err(TaggingError::InvalidImage("empty upload".to_string()));
        }

        let raw = self.tagger.image_to_label(image).await?;
        Ok(self.suggest_from_reply(&raw))
    }

    /// Resolution half of [`Self::suggest`], for replies obtained elsewhere.
    pub fn suggest_from_reply(&self, raw: &str) -> CategorySuggestion {
        let payload = parse_label(raw);
        if payload.label.is_none() {
            warn!(
                "No usable label in {} reply: '{}'",
                self.tagger.provider_name(),
                safe_truncate_ellipsis(raw, 80)
            );
        }

        let resolution = self.resolver.resolve_with_tier(payload.label.as_deref().unwrap_or_default());
        info!(
            "Suggested category {} ({}) from {}",
            resolution.category,
            resolution.tier,
            self.tagger.provider_name()
        );

        CategorySuggestion {
            category: resolution.category.to_string(),
            tags: payload.tags,
            tier: Some(resolution.tier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedTagger {
        reply: Result<String, String>,
    }

    #[async_trait]
    impl ImageTagger for CannedTagger {
        async fn image_to_label(&self, _image: &ImageInput) -> Result<String, TaggingError> {
            self.reply.clone().map_err(TaggingError::Provider)
        }

        fn provider_name(&self) -> &str {
            "canned"
        }
    }

    fn suggester(reply: Result<&str, &str>) -> CategorySuggester<CannedTagger> {
        let reply = reply.map(str::to_string).map_err(str::to_string);
        CategorySuggester::new(CannedTagger { reply }, CategoryResolver::standard())
    }

    fn photo() -> ImageInput {
        ImageInput::new(vec![0xff, 0xd8, 0xff], "image/jpeg")
    }

    #[test]
    fn test_parse_fenced_json_object() {
        let raw = "```json\n{\"category\": \"Kurti\", \"tags\": [\"cotton\", \" \", \"printed\"]}\n```";
        let payload = parse_label(raw);
        assert_eq!(payload.label.as_deref(), Some("Kurti"));
        assert_eq!(payload.tags, vec!["cotton", "printed"]);
    }

    #[test]
    fn test_parse_alternate_field_names() {
        assert_eq!(parse_label(r#"{"label": "sneaker"}"#).label.as_deref(), Some("sneaker"));
        assert_eq!(parse_label(r#"{"type": "tote"}"#).label.as_deref(), Some("tote"));
        assert_eq!(parse_label(r#"{"category": 7}"#).label, None);
    }

    #[test]
    fn test_parse_string_array_and_text() {
        assert_eq!(parse_label(r#""Saree""#).label.as_deref(), Some("Saree"));
        let payload = parse_label(r#"["jhumka", "gold"]"#);
        assert_eq!(payload.label.as_deref(), Some("jhumka"));
        assert_eq!(payload.tags.len(), 2);
        assert_eq!(parse_label("Crop top\nwith ruffles").label.as_deref(), Some("Crop top"));
        assert_eq!(parse_label("   "), LabelPayload::default());
        assert_eq!(parse_label("42").label, None);
    }

    #[test]
    fn test_suggest_resolves_label() {
        let suggester = suggester(Ok(r#"{"category": "KURTI", "tags": ["ethnic"]}"#));
        let suggestion = tokio_test::block_on(suggester.suggest(&photo())).expect("suggestion");
        assert_eq!(suggestion.category, "Kurtis");
        assert_eq!(suggestion.tier, Some(MatchTier::Alias));

        let body = serde_json::to_value(&suggestion).expect("serializable");
        assert_eq!(body, serde_json::json!({ "category": "Kurtis", "tags": ["ethnic"] }));
    }

    #[test]
    fn test_unusable_reply_falls_back() {
        let suggester = suggester(Ok("{}"));
        let suggestion = tokio_test::block_on(suggester.suggest(&photo())).expect("suggestion");
        assert_eq!(suggestion.category, "Clothing");
        assert_eq!(suggestion.tier, Some(MatchTier::EmptyInput));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let suggester = suggester(Err("quota exceeded"));
        let result = tokio_test::block_on(suggester.suggest(&photo()));
        assert!(matches!(result, Err(TaggingError::Provider(msg)) if msg == "quota exceeded"));
    }

    #[test]
    fn test_empty_image_rejected() {
        let suggester = suggester(Ok("kurti"));
        let result = tokio_test::block_on(suggester.suggest(&ImageInput::new(Vec::new(), "image/png")));
        assert!(matches!(result, Err(TaggingError::InvalidImage(_))));
    }
}
