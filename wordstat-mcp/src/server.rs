//! MCP ServerHandler implementation for Wordstat.
//!
//! Exposes five tools over the MCP protocol:
//! - `wordstat_top_requests` — top requests containing a phrase, plus similar phrases
//! - `wordstat_dynamics` — frequency dynamics over time
//! - `wordstat_regions` — regional distribution with affinity indices
//! - `wordstat_regions_tree` — the full region hierarchy (cached 24h, quota-free)
//! - `wordstat_user_info` — account login and quota status
//!
//! The server owns one [`WordstatClient`] and one region-tree cache for the
//! process lifetime; both are shared across concurrent tool invocations.

use std::sync::Arc;
use std::time::Duration;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use wordstat_client::{RegionsTreeResponse, TtlCache, WordstatClient, REGIONS_TREE_TTL};

use crate::tools::{handlers, DynamicsToolParams, RegionsToolParams, TopRequestsToolParams};

/// Wordstat MCP server handler.
#[derive(Debug, Clone)]
pub struct WordstatMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<WordstatClient>,
    regions_tree_cache: Arc<TtlCache<RegionsTreeResponse>>,
    regions_tree_ttl: Duration,
}

impl WordstatMcpServer {
    /// Create a server with the standard 24-hour region-tree TTL.
    pub fn new(client: WordstatClient) -> Self {
        Self::with_regions_tree_ttl(client, REGIONS_TREE_TTL)
    }

    /// Create a server with a custom region-tree TTL (shortened in tests).
    pub fn with_regions_tree_ttl(client: WordstatClient, ttl: Duration) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client: Arc::new(client),
            regions_tree_cache: Arc::new(TtlCache::new()),
            regions_tree_ttl: ttl,
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WordstatMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wordstat-mcp".to_string(),
                title: Some("Wordstat MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing Yandex Wordstat keyword research: phrase \
                     frequency, time dynamics, regional distribution, and quota status"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Wordstat reports Yandex search frequency for keywords. \
                 Start with wordstat_top_requests to explore a phrase and its variants. \
                 Use wordstat_dynamics for trends over time (monthly periods must start \
                 on the first of a month, weekly periods on a Monday). \
                 Use wordstat_regions for geographic breakdowns with affinity indices. \
                 Region ids for filtering come from wordstat_regions_tree, which is \
                 cached for 24 hours and does not consume the daily quota. \
                 Check remaining quota with wordstat_user_info."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl WordstatMcpServer {
    /// Top popular requests containing the phrase, plus similar requests,
    /// with 30-day frequencies.
    #[tool(
        name = "wordstat_top_requests",
        description = "Get top popular requests containing the given phrase, and similar requests, with search frequency over the last 30 days. Optionally restrict to regions and limit the result count (1-2000, default 50)."
    )]
    pub async fn wordstat_top_requests(
        &self,
        Parameters(params): Parameters<TopRequestsToolParams>,
    ) -> String {
        handlers::top_requests(&self.client, params).await
    }

    /// Frequency dynamics of a phrase over time.
    #[tool(
        name = "wordstat_dynamics",
        description = "Get search-frequency dynamics of a phrase over time: a series of {date, count, share} points. period is monthly, weekly, or daily. IMPORTANT: for monthly periods from_date must be the first day of a month (YYYY-MM-01); for weekly periods it must be a Monday. Optional region and device filters."
    )]
    pub async fn wordstat_dynamics(
        &self,
        Parameters(params): Parameters<DynamicsToolParams>,
    ) -> String {
        handlers::dynamics(&self.client, params).await
    }

    /// Regional distribution of a phrase's search frequency.
    #[tool(
        name = "wordstat_regions",
        description = "Get the regional distribution of a phrase's searches over the last 30 days: per-region count, share, and affinity index (relative interest compared to the region's share of all searches)."
    )]
    pub async fn wordstat_regions(
        &self,
        Parameters(params): Parameters<RegionsToolParams>,
    ) -> String {
        handlers::regions(&self.client, params).await
    }

    /// The full tree of regions known to Wordstat.
    #[tool(
        name = "wordstat_regions_tree",
        description = "Get the tree of all available Wordstat regions. Use it to look up region ids for the other tools. Does NOT consume the daily quota; the response is cached in-process for 24 hours."
    )]
    pub async fn wordstat_regions_tree(&self) -> String {
        handlers::regions_tree(&self.client, &self.regions_tree_cache, self.regions_tree_ttl).await
    }

    /// Account login and quota status.
    #[tool(
        name = "wordstat_user_info",
        description = "Get account information and quota status: login, daily quota limit, used, and remaining."
    )]
    pub async fn wordstat_user_info(&self) -> String {
        handlers::user_info(&self.client).await
    }
}
