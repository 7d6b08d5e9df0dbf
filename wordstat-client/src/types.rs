//! Request parameter and response types for the Wordstat API.
//!
//! Field names follow the upstream wire contract (camelCase). Optional
//! request fields use `skip_serializing_if` so a parameter the caller did
//! not supply is omitted from the body entirely — the upstream API treats
//! an explicit null differently from an absent key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Request parameters ──

/// Parameters for `/v1/topRequests`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRequestsParams {
    pub phrase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_phrases: Option<u32>,
}

/// Parameters for `/v1/dynamics`.
///
/// The upstream expects `from_date` aligned to the period: first day of the
/// month for [`Period::Monthly`], a Monday for [`Period::Weekly`]. The
/// client does not validate alignment; misaligned dates surface as an
/// upstream error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicsParams {
    pub phrase: String,
    pub period: Period,
    /// Start date in `YYYY-MM-DD` format.
    pub from_date: String,
    /// End date in `YYYY-MM-DD` format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Devices>,
}

/// Parameters for `/v1/regions`.
#[derive(Debug, Clone, Serialize)]
pub struct RegionsParams {
    pub phrase: String,
}

/// Aggregation period for dynamics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Monthly,
    Weekly,
    Daily,
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Period::Monthly),
            "weekly" => Ok(Period::Weekly),
            "daily" => Ok(Period::Daily),
            other => Err(format!(
                "unknown period '{other}', expected one of: monthly, weekly, daily"
            )),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Monthly => "monthly",
            Period::Weekly => "weekly",
            Period::Daily => "daily",
        };
        write!(f, "{s}")
    }
}

/// Device-class filter for dynamics queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Devices {
    All,
    Desktop,
    Phone,
    Tablet,
}

impl FromStr for Devices {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Devices::All),
            "desktop" => Ok(Devices::Desktop),
            "phone" => Ok(Devices::Phone),
            "tablet" => Ok(Devices::Tablet),
            other => Err(format!(
                "unknown device class '{other}', expected one of: all, desktop, phone, tablet"
            )),
        }
    }
}

impl fmt::Display for Devices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Devices::All => "all",
            Devices::Desktop => "desktop",
            Devices::Phone => "phone",
            Devices::Tablet => "tablet",
        };
        write!(f, "{s}")
    }
}

// ── Responses ──

/// A related phrase with its 30-day frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: u64,
}

/// Response from `/v1/topRequests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRequestsResponse {
    pub phrase: String,
    pub count: u64,
    pub including_phrases: Vec<PhraseCount>,
    pub similar_phrases: Vec<PhraseCount>,
}

/// One point in a dynamics series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicsPoint {
    pub date: String,
    pub count: u64,
    pub share: f64,
}

/// Response from `/v1/dynamics`: a time-ordered frequency series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicsResponse {
    pub phrase: String,
    pub dynamics: Vec<DynamicsPoint>,
}

/// Per-region statistics for a phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStat {
    pub region_id: i64,
    pub count: u64,
    pub share: f64,
    pub affinity_index: f64,
}

/// Response from `/v1/regions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsResponse {
    pub phrase: String,
    pub regions: Vec<RegionStat>,
}

/// A node in the region hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Region>>,
}

/// Response from `/v1/getRegionsTree`: the full administrative hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsTreeResponse {
    pub regions: Vec<Region>,
}

/// Response from `/v1/userInfo`: account login and quota status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub login: String,
    pub quota_limit: u64,
    pub quota_used: u64,
    pub quota_remaining: u64,
}

/// Structured error body the upstream may return on non-2xx responses.
///
/// All fields are best-effort; bodies that fail to parse as this shape fall
/// back to raw-text error messages.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_requests_params_omit_optional_fields() {
        let params = TopRequestsParams {
            phrase: "rust".to_string(),
            regions: None,
            num_phrases: None,
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({"phrase": "rust"}));
    }

    #[test]
    fn test_top_requests_params_include_supplied_fields() {
        let params = TopRequestsParams {
            phrase: "rust".to_string(),
            regions: Some(vec![213, 2]),
            num_phrases: Some(10),
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"phrase": "rust", "regions": [213, 2], "numPhrases": 10})
        );
    }

    #[test]
    fn test_dynamics_params_wire_format() {
        let params = DynamicsParams {
            phrase: "rust".to_string(),
            period: Period::Monthly,
            from_date: "2024-01-01".to_string(),
            to_date: None,
            regions: None,
            devices: Some(Devices::Phone),
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "phrase": "rust",
                "period": "monthly",
                "fromDate": "2024-01-01",
                "devices": "phone"
            })
        );
    }

    #[test]
    fn test_period_round_trip() {
        for (s, p) in [
            ("monthly", Period::Monthly),
            ("weekly", Period::Weekly),
            ("daily", Period::Daily),
        ] {
            assert_eq!(s.parse::<Period>().unwrap(), p);
            assert_eq!(p.to_string(), s);
        }
        assert!("yearly".parse::<Period>().is_err());
    }

    #[test]
    fn test_devices_round_trip() {
        for (s, d) in [
            ("all", Devices::All),
            ("desktop", Devices::Desktop),
            ("phone", Devices::Phone),
            ("tablet", Devices::Tablet),
        ] {
            assert_eq!(s.parse::<Devices>().unwrap(), d);
            assert_eq!(d.to_string(), s);
        }
        assert!("tv".parse::<Devices>().is_err());
    }

    #[test]
    fn test_regions_tree_recursive_deserialization() {
        let json = serde_json::json!({
            "regions": [{
                "id": 225,
                "name": "Russia",
                "children": [
                    {"id": 213, "name": "Moscow", "parentId": 225}
                ]
            }]
        });
        let tree: RegionsTreeResponse = serde_json::from_value(json).unwrap();
        assert_eq!(tree.regions.len(), 1);
        let root = &tree.regions[0];
        assert_eq!(root.id, 225);
        assert!(root.parent_id.is_none());
        let children = root.children.as_ref().unwrap();
        assert_eq!(children[0].parent_id, Some(225));
    }

    #[test]
    fn test_api_error_body_partial_fields() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"quota exceeded","code":429}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("quota exceeded"));
        assert!(body.error.is_none());
        assert_eq!(body.code, Some(429));
    }
}
