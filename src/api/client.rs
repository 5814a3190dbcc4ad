use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use yansi::Paint;

use super::error::ApiError;
use super::instances::{parse_instance_metadata, parse_instance_statuses};
use super::source::InstanceSource;
use crate::models::{InstanceMap, InstanceMetadata, InstanceStatus, Warnings, WithWarnings};

/// Response header carrying advisory warnings.
pub const WARNINGS_HEADER: &str = "X-Cf-Warnings";

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
}

/// Split a warnings header value into its entries, each query-unescaped
/// (`+` is a space) and trimmed.
pub fn parse_warnings_header(raw: &str) -> Warnings {
    raw.split(',')
        .map(|entry| {
            let unplussed = entry.replace('+', " ");
            match urlencoding::decode(&unplussed) {
                Ok(decoded) => decoded.trim().to_string(),
                Err(e) => {
                    tracing::debug!(%e, entry, "Keeping undecodable warning as received");
                    unplussed.trim().to_string()
                }
            }
        })
        .filter(|s| !s.is_empty())
        .collect()
}

fn warnings_from_headers(headers: &HeaderMap) -> Warnings {
    let mut warnings = Warnings::new();
    for value in headers.get_all(WARNINGS_HEADER) {
        if let Ok(raw) = value.to_str() {
            warnings.append(parse_warnings_header(raw));
        }
    }
    warnings
}

fn not_found_description(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("description").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// HTTP client for the Cloud Controller v2 per-instance endpoints.
pub struct CloudControllerClient {
    client: reqwest::Client,
    api_base_url: String,
    api_token: String,
}

impl CloudControllerClient {
    pub fn new(api_base_url: &str, api_token: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("appstat/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self::with_client(client, api_base_url, api_token))
    }

    pub fn with_client(client: reqwest::Client, api_base_url: &str, api_token: &str) -> Self {
        Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn log_request(&self, url: &str) {
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
        if !self.api_token.is_empty() {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Authorization: bearer [PRIVATE DATA HIDDEN]'").fg(yansi::Color::Magenta)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
    }

    /// GET `endpoint` and return its JSON body with any header warnings.
    async fn get(&self, endpoint: &str) -> WithWarnings<Value, ApiError> {
        let url = format!("{}{}", self.api_base_url, endpoint);
        self.log_request(&url);

        let mut req = self.client.get(&url).header(ACCEPT, "application/json");
        if !self.api_token.is_empty() {
            req = req.header(AUTHORIZATION, format!("bearer {}", self.api_token));
        }

        let response = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(%e, %url, "Request failed");
                return WithWarnings::err(ApiError::Network(e.to_string()), Warnings::new());
            }
        };

        let warnings = warnings_from_headers(response.headers());
        let status = response.status();
        let text = match response.text().await {
            Ok(t) => t,
            Err(e) => return WithWarnings::err(ApiError::Network(e.to_string()), warnings),
        };

        if !status.is_success() {
            log_output(format!(
                "Response:\n{}",
                Paint::new(format!("HTTP {}: {}", status, text)).fg(yansi::Color::Red)
            ));
            let err = if status == StatusCode::NOT_FOUND {
                ApiError::ResourceNotFound(not_found_description(&text))
            } else {
                ApiError::UnexpectedResponse { status: status.as_u16(), body: text }
            };
            return WithWarnings::err(err, warnings);
        }

        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));

        match serde_json::from_str(&text) {
            Ok(body) => WithWarnings::ok(body, warnings),
            Err(e) => WithWarnings::err(ApiError::Decode(e.to_string()), warnings),
        }
    }
}

#[async_trait]
impl InstanceSource for CloudControllerClient {
    async fn fetch_instance_statuses(
        &self,
        application_id: &str,
    ) -> WithWarnings<InstanceMap<InstanceStatus>, ApiError> {
        let endpoint = format!("/v2/apps/{}/stats", urlencoding::encode(application_id));
        let WithWarnings { result, warnings } = self.get(&endpoint).await;
        WithWarnings { result: result.and_then(parse_instance_statuses), warnings }
    }

    async fn fetch_instance_metadata(
        &self,
        application_id: &str,
    ) -> WithWarnings<InstanceMap<InstanceMetadata>, ApiError> {
        let endpoint = format!("/v2/apps/{}/instances", urlencoding::encode(application_id));
        let WithWarnings { result, warnings } = self.get(&endpoint).await;
        WithWarnings { result: result.and_then(parse_instance_metadata), warnings }
    }
}
