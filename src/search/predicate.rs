use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::intent::{Gender, SearchIntent};


/// Filter handed to the product store. Unset facets are left out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPredicate {
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_equals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_equals: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_matches: Option<String>,
}

/// The product fields a predicate looks at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub dominant_color: Option<String>,
    #[serde(default)]
    pub color_variants: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
}

pub fn build_predicate(intent: &SearchIntent) -> QueryPredicate {
    QueryPredicate {
        is_published: true,
        category_equals: intent.category.clone(),
        gender_equals: intent.gender,
        color_matches: intent.color.clone(),
    }
}

impl From<&SearchIntent> for QueryPredicate {
    fn from(intent: &SearchIntent) -> Self {
        build_predicate(intent)
    }
}

impl QueryPredicate {
    /// Document-database filter with the same semantics as [`Self::matches`].
    pub fn to_filter_document(&self) -> Value {
        let mut filter = Map::new();
        filter.insert("isPublished".to_string(), Value::Bool(self.is_published));

        if let Some(category) = &self.category_equals {
            filter.insert(
                "category".to_string(),
                json!({ "$regex": format!("^{}$", regex::escape(category)), "$options": "i" }),
            );
        }

        if let Some(gender) = self.gender_equals {
            filter.insert("gender".to_string(), json!(gender.to_string()));
        }

        if let Some(color) = &self.color_matches {
            let pattern = json!({ "$regex": regex::escape(color), "$options": "i" });
            filter.insert(
                "$or".to_string(),
                json!([
                    { "dominantColor.name": pattern.clone() },
                    { "colorVariants": pattern },
                ]),
            );
        }

        Value::Object(filter)
    }

    pub fn matches(&self, product: &ProductRecord) -> bool {
        if product.is_published != self.is_published {
            return false;
        }

        if let Some(category) = &self.category_equals {
            if product.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }

        if let Some(gender) = self.gender_equals {
            if product.gender != Some(gender) {
                return false;
            }
        }

        if let Some(color) = &self.color_matches {
            let needle = color.to_lowercase();
            let contains = |field: &str| field.to_lowercase().contains(&needle);
            let dominant = product.dominant_color.as_deref().is_some_and(|c| contains(c));
            if !dominant && !product.color_variants.iter().any(|v| contains(v.as_str())) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(
        category: &str,
        gender: Option<Gender>,
        dominant: Option<&str>,
        variants: &[&str],
    ) -> ProductRecord {
        ProductRecord {
            name: format!("{category} sample"),
            category: category.to_string(),
            gender,
            dominant_color: dominant.map(str::to_string),
            color_variants: variants.iter().map(|v| v.to_string()).collect(),
            is_published: true,
        }
    }

    #[test]
    fn test_category_only_predicate_has_no_extra_keys() {
        let intent = SearchIntent {
            category: Some("Tops".to_string()),
            ..Default::default()
        };
        let predicate = build_predicate(&intent);
        assert!(predicate.is_published);
        assert_eq!(predicate.category_equals.as_deref(), Some("Tops"));
        assert!(predicate.gender_equals.is_none());
        assert!(predicate.color_matches.is_none());

        let value = serde_json::to_value(&predicate).expect("serializable");
        let keys: Vec<&String> = value.as_object().expect("object").keys().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(value["isPublished"], true);
        assert_eq!(value["categoryEquals"], "Tops");
    }

    #[test]
    fn test_empty_intent_only_requires_published() {
        let predicate = build_predicate(&SearchIntent::empty());
        let filter = predicate.to_filter_document();
        assert_eq!(filter, json!({ "isPublished": true }));
    }

    #[test]
    fn test_filter_document_with_all_facets() {
        let intent = SearchIntent {
            category: Some("Crop Tops".to_string()),
            gender: Some(Gender::Women),
            color: Some("navy".to_string()),
            remaining_text: "crop top".to_string(),
        };
        let filter = QueryPredicate::from(&intent).to_filter_document();
        assert_eq!(filter["category"]["$regex"], "^Crop Tops$");
        assert_eq!(filter["category"]["$options"], "i");
        assert_eq!(filter["gender"], "Women");
        assert_eq!(filter["$or"][0]["dominantColor.name"]["$regex"], "navy");
        assert_eq!(filter["$or"][1]["colorVariants"]["$regex"], "navy");
    }

    #[test]
    fn test_category_match_ignores_case() {
        let predicate = build_predicate(&SearchIntent {
            category: Some("Tshirts".to_string()),
            ..Default::default()
        });
        assert!(predicate.matches(&product("TSHIRTS", None, None, &[])));
        assert!(!predicate.matches(&product("Shirts", None, None, &[])));
    }

    #[test]
    fn test_color_matches_dominant_or_variant() {
        let predicate = build_predicate(&SearchIntent {
            color: Some("red".to_string()),
            ..Default::default()
        });
        assert!(predicate.matches(&product("Tops", None, Some("Dark Red"), &[])));
        assert!(predicate.matches(&product("Tops", None, Some("Blue"), &["White", "RED"])));
        assert!(!predicate.matches(&product("Tops", None, Some("Blue"), &["White"])));
        assert!(!predicate.matches(&product("Tops", None, None, &[])));
    }

    #[test]
    fn test_gender_and_publication() {
        let predicate = build_predicate(&SearchIntent {
            gender: Some(Gender::Men),
            ..Default::default()
        });
        assert!(predicate.matches(&product("Shirts", Some(Gender::Men), None, &[])));
        assert!(!predicate.matches(&product("Shirts", Some(Gender::Women), None, &[])));
        assert!(!predicate.matches(&product("Shirts", None, None, &[])));

        let mut draft = product("Shirts", Some(Gender::Men), None, &[]);
        draft.is_published = false;
        assert!(!predicate.matches(&draft));
    }
}
