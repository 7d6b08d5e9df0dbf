//! Wordstat API client library.
//!
//! Provides [`WordstatClient`] — an authenticated HTTP gateway to the Yandex
//! Wordstat keyword-research API — and [`TtlCache`], an in-process response
//! cache with per-entry expiry used to avoid refetching the slow-changing
//! region tree. Protocol surfaces (MCP, CLI) live in consumer crates.

pub mod cache;
pub mod client;
pub mod error;
pub mod types;

pub use cache::{TtlCache, REGIONS_TREE_CACHE_KEY, REGIONS_TREE_TTL};
pub use client::WordstatClient;
pub use error::{ClientError, ClientResult};
pub use types::{
    Devices, DynamicsParams, DynamicsResponse, Period, RegionsParams, RegionsResponse,
    RegionsTreeResponse, TopRequestsParams, TopRequestsResponse, UserInfoResponse,
};
