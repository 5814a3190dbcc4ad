#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use appstat::api::{ApiError, InstanceSource};
use appstat::models::{
    InstanceIndex, InstanceMap, InstanceMetadata, InstanceState, InstanceStatus, Warnings, WithWarnings,
};

/// Scripted stand-in for the remote API that records which fetches ran.
pub struct ScriptedSource {
    statuses: Result<InstanceMap<InstanceStatus>, ApiError>,
    status_warnings: Vec<String>,
    metadata: Result<InstanceMap<InstanceMetadata>, ApiError>,
    metadata_warnings: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            statuses: Ok(InstanceMap::new()),
            status_warnings: vec![],
            metadata: Ok(InstanceMap::new()),
            metadata_warnings: vec![],
            calls: Mutex::new(vec![]),
        }
    }

    pub fn statuses(mut self, statuses: Result<InstanceMap<InstanceStatus>, ApiError>, warnings: &[&str]) -> Self {
        self.statuses = statuses;
        self.status_warnings = warnings.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn metadata(mut self, metadata: Result<InstanceMap<InstanceMetadata>, ApiError>, warnings: &[&str]) -> Self {
        self.metadata = metadata;
        self.metadata_warnings = warnings.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InstanceSource for ScriptedSource {
    async fn fetch_instance_statuses(&self, application_id: &str) -> WithWarnings<InstanceMap<InstanceStatus>, ApiError> {
        self.calls.lock().unwrap().push(format!("statuses:{}", application_id));
        WithWarnings {
            result: self.statuses.clone(),
            warnings: Warnings::from(self.status_warnings.clone()),
        }
    }

    async fn fetch_instance_metadata(&self, application_id: &str) -> WithWarnings<InstanceMap<InstanceMetadata>, ApiError> {
        self.calls.lock().unwrap().push(format!("metadata:{}", application_id));
        WithWarnings {
            result: self.metadata.clone(),
            warnings: Warnings::from(self.metadata_warnings.clone()),
        }
    }
}

pub fn status(cpu: f64) -> InstanceStatus {
    InstanceStatus {
        cpu,
        disk: 10 * 1024 * 1024,
        disk_quota: 1024 * 1024 * 1024,
        memory: 32 * 1024 * 1024,
        memory_quota: 256 * 1024 * 1024,
    }
}

pub fn metadata(details: &str, state: &str) -> InstanceMetadata {
    InstanceMetadata {
        details: details.to_string(),
        since: 1_403_140_717.0,
        state: InstanceState::new(state),
    }
}

pub fn status_map(entries: &[(u32, f64)]) -> InstanceMap<InstanceStatus> {
    entries.iter().map(|&(i, cpu)| (InstanceIndex(i), status(cpu))).collect()
}

pub fn metadata_map(entries: &[(u32, &str, &str)]) -> InstanceMap<InstanceMetadata> {
    entries
        .iter()
        .map(|&(i, details, state)| (InstanceIndex(i), metadata(details, state)))
        .collect()
}
