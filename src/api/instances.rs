//! Wire types for the per-instance endpoints and their conversion into the
//! index-keyed models.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{InstanceIndex, InstanceMap, InstanceMetadata, InstanceState, InstanceStatus};

/// One entry of `GET /v2/apps/:guid/stats`
#[derive(Debug, Deserialize)]
struct RawInstanceStatus {
    #[serde(default)]
    stats: Option<RawStats>,
}

// Every field is optional: a key may be missing or explicitly null.
#[derive(Debug, Default, Deserialize)]
struct RawStats {
    #[serde(default)]
    usage: Option<RawUsage>,
    #[serde(default)]
    disk_quota: Option<u64>,
    #[serde(default)]
    mem_quota: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawUsage {
    #[serde(default)]
    cpu: Option<f64>,
    #[serde(default)]
    disk: Option<u64>,
    #[serde(default)]
    mem: Option<u64>,
}

/// One entry of `GET /v2/apps/:guid/instances`
#[derive(Debug, Deserialize)]
struct RawInstanceMetadata {
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    since: Option<f64>,
    #[serde(default)]
    state: Option<String>,
}

impl From<RawInstanceStatus> for InstanceStatus {
    fn from(raw: RawInstanceStatus) -> Self {
        let stats = raw.stats.unwrap_or_default();
        let usage = stats.usage.unwrap_or_default();
        Self {
            cpu: usage.cpu.unwrap_or_default(),
            disk: usage.disk.unwrap_or_default(),
            disk_quota: stats.disk_quota.unwrap_or_default(),
            memory: usage.mem.unwrap_or_default(),
            memory_quota: stats.mem_quota.unwrap_or_default(),
        }
    }
}

impl From<RawInstanceMetadata> for InstanceMetadata {
    fn from(raw: RawInstanceMetadata) -> Self {
        Self {
            details: raw.details.unwrap_or_default(),
            since: raw.since.unwrap_or_default(),
            state: InstanceState::new(raw.state.unwrap_or_default()),
        }
    }
}

fn parse_index_keyed<R, T>(body: Value) -> Result<InstanceMap<T>, ApiError>
where
    R: DeserializeOwned,
    T: From<R>,
{
    let raw: BTreeMap<String, R> =
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let mut out = InstanceMap::new();
    for (key, entry) in raw {
        let index: InstanceIndex = key
            .parse()
            .map_err(|e| ApiError::Decode(format!("invalid instance index '{}': {}", key, e)))?;
        if out.insert(index, T::from(entry)).is_some() {
            return Err(ApiError::Decode(format!("duplicate instance index '{}'", key)));
        }
    }
    Ok(out)
}

/// Decode a stats payload into statuses keyed by instance index.
pub fn parse_instance_statuses(body: Value) -> Result<InstanceMap<InstanceStatus>, ApiError> {
    parse_index_keyed::<RawInstanceStatus, InstanceStatus>(body)
}

/// Decode an instances payload into lifecycle records keyed by instance index.
pub fn parse_instance_metadata(body: Value) -> Result<InstanceMap<InstanceMetadata>, ApiError> {
    parse_index_keyed::<RawInstanceMetadata, InstanceMetadata>(body)
}
