use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::core::config::StorefrontConfig;
use crate::core::error::StorefrontError;
use crate::search::{build_predicate, CategoryResolver, IntentExtractor};
use crate::taxonomy::{Catalog, CategoryDomain};
use crate::utils::safe_truncate_ellipsis;


#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
pub struct ResolveCategoryParams {
    #[schemars(description = "Free-text label, e.g. the tag an image model produced for a product photo")]
    pub label: String,
}

#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
pub struct SearchIntentParams {
    #[schemars(description = "Raw search box text, e.g. 'red kurti for women'")]
    pub query: String,
}

#[derive(Debug, Deserialize, rmcp::schemars::JsonSchema)]
pub struct ListCategoriesParams {
    #[schemars(
        description = "Optional domain: Apparel, Ethnic, Innerwear, Footwear, Bags, Jewellery, Accessories, Beauty, Kidswear"
    )]
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResolveCategoryResponse<'a> {
    category: &'a str,
    matched_by: &'static str,
    confident: bool,
}


#[derive(Clone)]
pub struct StorefrontMcpServer {
    config: Arc<StorefrontConfig>,
    resolver: Arc<CategoryResolver>,
    extractor: Arc<IntentExtractor>,
    tool_router: ToolRouter<Self>,
}

impl StorefrontMcpServer {
    pub fn new(config: StorefrontConfig, resolver: Arc<CategoryResolver>) -> Self {
        let extractor = IntentExtractor::new(Arc::clone(&resolver), config.max_query_chars);
        Self {
            config: Arc::new(config),
            resolver,
            extractor: Arc::new(extractor),
            tool_router: Self::tool_router(),
        }
    }

    /// Builds the resolver from the configured catalog file, or the
    /// compiled-in tables when none is set.
    pub fn from_config(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin(),
        };
        let resolver = CategoryResolver::new(catalog, &config.fallback_category)?;
        Ok(Self::new(config, Arc::new(resolver)))
    }

    fn convert_error(err: StorefrontError) -> McpError {
        match err {
            StorefrontError::Validation(msg) => McpError::invalid_params(msg, None),
            other => McpError::internal_error(other.to_string(), None),
        }
    }

    fn result_to_json<T: Serialize>(result: T) -> Result<String, McpError> {
        serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    fn categories_json(&self, domain: Option<CategoryDomain>) -> serde_json::Value {
        let taxonomy = &self.resolver.catalog().taxonomy;
        let categories = match domain {
            Some(domain) => taxonomy.categories_in(domain),
            None => taxonomy.all_categories(),
        };
        json!({
            "domain": domain.map(|d| d.to_string()),
            "count": categories.len(),
            "categories": categories,
        })
    }
}

#[tool_router]
impl StorefrontMcpServer {
    #[tool(description = "Map a free-text or AI-generated label onto the category taxonomy. Never fails; unknown labels get the fallback category. Returns: {category, matched_by, confident}")]
    async fn resolve_category(
        &self,
        Parameters(params): Parameters<ResolveCategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let resolution = self.resolver.resolve_with_tier(&params.label);
        info!(
            "Resolved label '{}' -> {}",
            safe_truncate_ellipsis(&params.label, 40),
            resolution.category
        );

        let json = Self::result_to_json(ResolveCategoryResponse {
            category: resolution.category,
            matched_by: resolution.tier.into(),
            confident: resolution.is_confident(),
        })?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Extract gender, color and category facets from a search string and build the product filter. Returns: {intent, predicate, filter}")]
    async fn extract_search_intent(
        &self,
        Parameters(params): Parameters<SearchIntentParams>,
    ) -> Result<CallToolResult, McpError> {
        let intent = self.extractor.extract(&params.query);
        let predicate = build_predicate(&intent);
        info!(
            "Search '{}' -> category={:?} gender={:?} color={:?}",
            safe_truncate_ellipsis(&params.query, 40),
            intent.category,
            intent.gender,
            intent.color
        );

        let json = Self::result_to_json(json!({
            "intent": intent,
            "predicate": predicate,
            "filter": predicate.to_filter_document(),
        }))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List canonical categories in display order, optionally for one domain. Returns: {domain, count, categories}")]
    async fn list_categories(
        &self,
        Parameters(params): Parameters<ListCategoriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let domain = params
            .domain
            .as_deref()
            .map(|d| {
                CategoryDomain::from_str(d.trim()).map_err(|_| {
                    Self::convert_error(StorefrontError::validation(format!("unknown domain: {d}")))
                })
            })
            .transpose()?;

        let json = Self::result_to_json(self.categories_json(domain))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}


#[tool_handler]
impl ServerHandler for StorefrontMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "storefront-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Storefront category taxonomy and search-intent normalization. Use resolve_category \
                 for AI or free-text labels, extract_search_intent for search box queries, and \
                 list_categories to enumerate the taxonomy."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                RawResource::new("taxonomy://categories", "storefront-taxonomy".to_string())
                    .no_annotation(),
                RawResource::new("config://storefront", "storefront-config".to_string())
                    .no_annotation(),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let value = match uri.as_str() {
            "taxonomy://categories" => {
                let catalog = self.resolver.catalog();
                json!({
                    "fallback": self.resolver.fallback(),
                    "categories": catalog.taxonomy.entries(),
                    "alias_count": catalog.aliases.len(),
                })
            }
            "config://storefront" => json!({
                "version": env!("CARGO_PKG_VERSION"),
                "fallback_category": self.config.fallback_category,
                "catalog_path": self.config.catalog_path,
                "max_query_chars": self.config.max_query_chars,
                "tools": ["resolve_category", "extract_search_intent", "list_categories"],
            }),
            _ => {
                return Err(McpError::resource_not_found(
                    format!("Unknown resource: {}", uri),
                    Some(json!({ "uri": uri })),
                ));
            }
        };

        let content = serde_json::to_string_pretty(&value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(content, uri)],
        })
    }
}


pub async fn run_server(config: StorefrontConfig) -> anyhow::Result<()> {
    info!("Initializing storefront MCP server...");

    let server = StorefrontMcpServer::from_config(config)?;

    info!(
        "Storefront MCP server ready: {} categories, {} aliases, fallback '{}'",
        server.resolver.catalog().taxonomy.len(),
        server.resolver.catalog().aliases.len(),
        server.resolver.fallback()
    );

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
