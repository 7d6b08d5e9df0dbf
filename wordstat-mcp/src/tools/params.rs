//! Parameter structs for all MCP tools.

use schemars::JsonSchema;
use serde::Deserialize;
use wordstat_client::TopRequestsParams;

// ── wordstat_top_requests ──

/// Parameters for the `wordstat_top_requests` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TopRequestsToolParams {
    /// Keyword or phrase to analyze.
    #[schemars(description = "Keyword or phrase to analyze")]
    pub phrase: String,
    /// Region ids to restrict the query to.
    #[schemars(
        description = "Optional list of region ids. Use wordstat_regions_tree to look up ids"
    )]
    pub regions: Option<Vec<i64>>,
    /// Number of phrases to return (1-2000, upstream default 50).
    #[schemars(description = "Number of phrases in the response (1-2000, default 50)")]
    pub limit: Option<u32>,
}

impl From<TopRequestsToolParams> for TopRequestsParams {
    fn from(p: TopRequestsToolParams) -> Self {
        TopRequestsParams {
            phrase: p.phrase,
            regions: p.regions,
            num_phrases: p.limit,
        }
    }
}

// ── wordstat_dynamics ──

/// Parameters for the `wordstat_dynamics` tool.
///
/// `period` and `devices` arrive as strings and are parsed at the tool
/// boundary; unknown values produce a structured error, not a panic.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DynamicsToolParams {
    /// Keyword or phrase to analyze.
    #[schemars(description = "Keyword or phrase to analyze")]
    pub phrase: String,
    /// Aggregation period: monthly, weekly, or daily.
    #[schemars(description = "Aggregation period: monthly, weekly, or daily")]
    pub period: String,
    /// Start date, `YYYY-MM-DD`. Upstream requires the first day of a month
    /// for monthly periods and a Monday for weekly periods.
    #[schemars(
        description = "Start date in YYYY-MM-DD format. For monthly periods this must be the first day of a month; for weekly periods, a Monday. Enforced upstream."
    )]
    pub from_date: String,
    /// End date, `YYYY-MM-DD`.
    #[schemars(description = "Optional end date in YYYY-MM-DD format")]
    pub to_date: Option<String>,
    /// Region ids to restrict the query to.
    #[schemars(
        description = "Optional list of region ids. Use wordstat_regions_tree to look up ids"
    )]
    pub regions: Option<Vec<i64>>,
    /// Device-class filter: all, desktop, phone, or tablet.
    #[schemars(description = "Device-class filter: all, desktop, phone, or tablet (default all)")]
    pub devices: Option<String>,
}

// ── wordstat_regions ──

/// Parameters for the `wordstat_regions` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RegionsToolParams {
    /// Keyword or phrase to analyze.
    #[schemars(description = "Keyword or phrase to analyze")]
    pub phrase: String,
}

// wordstat_regions_tree and wordstat_user_info take no parameters.
