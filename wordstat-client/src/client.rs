//! Authenticated gateway to the Wordstat API.
//!
//! One method per capability; every method goes through the shared
//! [`WordstatClient::request`] helper, which owns authentication, body
//! serialization, and error normalization. The client never retries: quota
//! (429) and server (5xx) failures surface to the caller unchanged.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::types::{
    ApiErrorBody, DynamicsParams, DynamicsResponse, RegionsParams, RegionsResponse,
    RegionsTreeResponse, TopRequestsParams, TopRequestsResponse, UserInfoResponse,
};

const API_BASE_URL: &str = "https://api.wordstat.yandex.net";

/// HTTP client for the Wordstat API.
///
/// Holds the bearer token for the process lifetime. Construction fails if
/// the token is empty; there is no deferred validation and no per-call
/// credential handling.
#[derive(Debug, Clone)]
pub struct WordstatClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl WordstatClient {
    /// Create a client for the production Wordstat endpoint.
    pub fn new(token: impl Into<String>) -> ClientResult<Self> {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Create a client against a custom base URL (mock servers in tests).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> ClientResult<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(ClientError::config_error("WORDSTAT_API_TOKEN is required"));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        })
    }

    /// POST to `path` and parse the JSON response.
    ///
    /// `body: None` sends an empty body with the JSON content type (the
    /// parameterless endpoints). Non-2xx responses are normalized into
    /// [`ClientError::Api`]: the status code plus the structured-body
    /// `message`/`error` field when the body parses as [`ApiErrorBody`],
    /// else the raw body text verbatim.
    async fn request<T, B>(&self, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "wordstat api request");

        let request = match body {
            Some(body) => self.http.post(&url).json(body),
            None => self
                .http
                .post(&url)
                .header(CONTENT_TYPE, "application/json"),
        };

        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|e| e.message.or(e.error))
                .unwrap_or(text);
            tracing::debug!(status = status.as_u16(), "wordstat api error");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        // A malformed 2xx body propagates as a decode error, not a special case.
        Ok(response.json::<T>().await?)
    }

    /// Top requests containing the phrase, plus similar phrases, with
    /// 30-day frequencies.
    pub async fn top_requests(
        &self,
        params: &TopRequestsParams,
    ) -> ClientResult<TopRequestsResponse> {
        self.request("/v1/topRequests", Some(params)).await
    }

    /// Frequency dynamics over time for a phrase.
    ///
    /// Date alignment (monthly periods start on day 1, weekly periods on a
    /// Monday) is an upstream rule and is not enforced here.
    pub async fn dynamics(&self, params: &DynamicsParams) -> ClientResult<DynamicsResponse> {
        self.request("/v1/dynamics", Some(params)).await
    }

    /// Regional distribution of a phrase's frequency.
    pub async fn regions(&self, params: &RegionsParams) -> ClientResult<RegionsResponse> {
        self.request("/v1/regions", Some(params)).await
    }

    /// The full region hierarchy. Does not consume the daily quota upstream.
    pub async fn regions_tree(&self) -> ClientResult<RegionsTreeResponse> {
        self.request::<_, ()>("/v1/getRegionsTree", None).await
    }

    /// Account login and quota status.
    pub async fn user_info(&self) -> ClientResult<UserInfoResponse> {
        self.request::<_, ()>("/v1/userInfo", None).await
    }
}
