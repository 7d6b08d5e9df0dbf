//! Tool handler implementations.
//!
//! Async functions that take the shared [`WordstatClient`] and param structs,
//! returning JSON strings. A failing upstream call becomes an `error_json`
//! payload; it never propagates as a panic or crosses the protocol as a
//! transport failure.

use std::time::Duration;

use wordstat_client::{
    Devices, DynamicsParams, Period, RegionsParams, RegionsTreeResponse, TtlCache, WordstatClient,
    REGIONS_TREE_CACHE_KEY,
};

use super::helpers::error_json;
use super::params::{DynamicsToolParams, RegionsToolParams, TopRequestsToolParams};

pub async fn top_requests(client: &WordstatClient, params: TopRequestsToolParams) -> String {
    match client.top_requests(&params.into()).await {
        Ok(response) => serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| error_json("serialization_error", &e.to_string())),
        Err(e) => error_json("api_error", &e.to_string()),
    }
}

pub async fn dynamics(client: &WordstatClient, params: DynamicsToolParams) -> String {
    let period: Period = match params.period.parse() {
        Ok(p) => p,
        Err(e) => return error_json("invalid_period", &e),
    };
    let devices: Option<Devices> = match params.devices.as_deref() {
        Some(s) => match s.parse() {
            Ok(d) => Some(d),
            Err(e) => return error_json("invalid_devices", &e),
        },
        None => None,
    };

    let request = DynamicsParams {
        phrase: params.phrase,
        period,
        from_date: params.from_date,
        to_date: params.to_date,
        regions: params.regions,
        devices,
    };

    match client.dynamics(&request).await {
        Ok(response) => serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| error_json("serialization_error", &e.to_string())),
        Err(e) => error_json("api_error", &e.to_string()),
    }
}

pub async fn regions(client: &WordstatClient, params: RegionsToolParams) -> String {
    let request = RegionsParams {
        phrase: params.phrase,
    };
    match client.regions(&request).await {
        Ok(response) => serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| error_json("serialization_error", &e.to_string())),
        Err(e) => error_json("api_error", &e.to_string()),
    }
}

/// Region-tree handler: the sole cache consumer.
///
/// A cache hit annotates the payload with a `_cached` marker before
/// returning — the marker is presentation-layer state owned here, not by
/// the cache or the client.
pub async fn regions_tree(
    client: &WordstatClient,
    cache: &TtlCache<RegionsTreeResponse>,
    ttl: Duration,
) -> String {
    if let Some(tree) = cache.get(REGIONS_TREE_CACHE_KEY) {
        tracing::debug!("regions tree served from cache");
        return match serde_json::to_value(&*tree) {
            Ok(mut value) => {
                if let Some(obj) = value.as_object_mut() {
                    obj.insert("_cached".to_string(), serde_json::json!(true));
                    obj.insert(
                        "_cache_info".to_string(),
                        serde_json::json!("Served from in-process cache (TTL: 24 hours)"),
                    );
                }
                serde_json::to_string_pretty(&value)
                    .unwrap_or_else(|e| error_json("serialization_error", &e.to_string()))
            }
            Err(e) => error_json("serialization_error", &e.to_string()),
        };
    }

    match client.regions_tree().await {
        Ok(tree) => {
            let rendered = serde_json::to_string_pretty(&tree)
                .unwrap_or_else(|e| error_json("serialization_error", &e.to_string()));
            cache.insert(REGIONS_TREE_CACHE_KEY, tree, ttl);
            rendered
        }
        Err(e) => error_json("api_error", &e.to_string()),
    }
}

pub async fn user_info(client: &WordstatClient) -> String {
    match client.user_info().await {
        Ok(response) => serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| error_json("serialization_error", &e.to_string())),
        Err(e) => error_json("api_error", &e.to_string()),
    }
}
