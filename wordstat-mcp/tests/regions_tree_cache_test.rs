//! Caching behavior of the region-tree tool.
//!
//! The first call within the TTL window performs exactly one upstream call
//! and returns the payload without a cache marker; a second call performs
//! zero upstream calls and carries the `_cached` annotation; a call after
//! the TTL expires refetches.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wordstat_client::{RegionsTreeResponse, TtlCache, WordstatClient, REGIONS_TREE_TTL};
use wordstat_mcp::tools::handlers;

fn tree_body() -> serde_json::Value {
    json!({
        "regions": [{
            "id": 225,
            "name": "Russia",
            "children": [{"id": 213, "name": "Moscow", "parentId": 225}]
        }]
    })
}

#[tokio::test]
async fn second_call_within_ttl_is_served_from_cache() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/getRegionsTree"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tree_body()))
        .expect(1)
        .mount(&upstream)
        .await;

    let client = WordstatClient::with_base_url("test-token", upstream.uri()).unwrap();
    let cache: TtlCache<RegionsTreeResponse> = TtlCache::new();

    let first = handlers::regions_tree(&client, &cache, REGIONS_TREE_TTL).await;
    let first: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(first["regions"][0]["id"], 225);
    assert!(first.get("_cached").is_none(), "fresh fetch must not carry the cache marker");

    let second = handlers::regions_tree(&client, &cache, REGIONS_TREE_TTL).await;
    let second: serde_json::Value = serde_json::from_str(&second).unwrap();
    assert_eq!(second["_cached"], true);
    assert_eq!(second["regions"], first["regions"]);

    // expect(1) on the mock asserts no second upstream call was made.
    upstream.verify().await;
}

#[tokio::test]
async fn expired_ttl_triggers_a_fresh_upstream_call() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/getRegionsTree"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tree_body()))
        .expect(2)
        .mount(&upstream)
        .await;

    let client = WordstatClient::with_base_url("test-token", upstream.uri()).unwrap();
    let cache: TtlCache<RegionsTreeResponse> = TtlCache::new();
    let ttl = Duration::from_millis(20);

    let first = handlers::regions_tree(&client, &cache, ttl).await;
    assert!(serde_json::from_str::<serde_json::Value>(&first).unwrap()["_cached"].is_null());

    tokio::time::sleep(Duration::from_millis(50)).await;

    let refetched = handlers::regions_tree(&client, &cache, ttl).await;
    let refetched: serde_json::Value = serde_json::from_str(&refetched).unwrap();
    assert!(refetched.get("_cached").is_none(), "post-expiry fetch is not cache-served");

    upstream.verify().await;
}

#[tokio::test]
async fn upstream_failure_is_not_cached() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/getRegionsTree"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&upstream)
        .await;

    let client = WordstatClient::with_base_url("test-token", upstream.uri()).unwrap();
    let cache: TtlCache<RegionsTreeResponse> = TtlCache::new();

    let first = handlers::regions_tree(&client, &cache, REGIONS_TREE_TTL).await;
    let first: serde_json::Value = serde_json::from_str(&first).unwrap();
    assert_eq!(first["error"], "api_error");
    assert_eq!(first["message"], "Wordstat API error (500): boom");

    // A failure leaves the cache empty, so the next call retries upstream.
    let second = handlers::regions_tree(&client, &cache, REGIONS_TREE_TTL).await;
    let second: serde_json::Value = serde_json::from_str(&second).unwrap();
    assert_eq!(second["error"], "api_error");

    upstream.verify().await;
}
