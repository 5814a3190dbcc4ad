use std::env;
use std::path::Path;
use std::time::Duration;

use crate::actor::InstanceOrder;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_API_TOKEN: &str = "";
pub const DEFAULT_INSTANCE_ORDER: InstanceOrder = InstanceOrder::Ascending;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Failed to load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_default())
}

pub fn get_api_token() -> String {
    env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
}

pub fn get_instance_order() -> InstanceOrder {
    match env::var("INSTANCE_ORDER") {
        Ok(raw) if !raw.trim().is_empty() => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("{}; using {}", e, DEFAULT_INSTANCE_ORDER);
            DEFAULT_INSTANCE_ORDER
        }),
        _ => DEFAULT_INSTANCE_ORDER,
    }
}

pub fn get_request_timeout() -> Duration {
    let secs = env::var("REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&s| s > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Settings for one CLI invocation.
#[derive(Clone, Debug)]
pub struct Settings {
    pub api_base_url: String,
    pub api_token: String,
    pub instance_order: InstanceOrder,
    pub request_timeout: Duration,
}

impl Settings {
    pub fn from_env(env_file: Option<&str>) -> Self {
        load_env_file(env_file);
        Self {
            api_base_url: get_api_base_url(),
            api_token: get_api_token(),
            instance_order: get_instance_order(),
            request_timeout: get_request_timeout(),
        }
    }
}
