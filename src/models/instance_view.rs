use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::instance_index::InstanceIndex;
use crate::models::instance_metadata::{InstanceMetadata, InstanceState};
use crate::models::instance_status::InstanceStatus;

/// Appended to the details of a view that only one source reported on.
pub const INCOMPLETE_DETAILS: &str = "(Unable to retrieve information)";

/// Which sources reported on an index. There is no variant for neither.
#[derive(Clone, Copy, Debug)]
pub enum Sources<'a> {
    Both(&'a InstanceStatus, &'a InstanceMetadata),
    StatusOnly(&'a InstanceStatus),
    MetadataOnly(&'a InstanceMetadata),
}

/// Unified view of one running instance.
///
/// Built in one step by [`InstanceView::from_sources`] and read-only
/// afterwards. Fields from a missing source default to zero or empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InstanceView {
    index: InstanceIndex,
    cpu: f64,
    disk: u64,
    disk_quota: u64,
    memory: u64,
    memory_quota: u64,
    details: String,
    since: f64,
    state: InstanceState,
    incomplete: bool,
}

impl InstanceView {
    pub fn from_sources(index: InstanceIndex, sources: Sources<'_>) -> Self {
        let (status, metadata) = match sources {
            Sources::Both(status, metadata) => (Some(status), Some(metadata)),
            Sources::StatusOnly(status) => (Some(status), None),
            Sources::MetadataOnly(metadata) => (None, Some(metadata)),
        };
        let incomplete = status.is_none() || metadata.is_none();

        let status = status.cloned().unwrap_or_default();
        let metadata = metadata.cloned().unwrap_or_default();

        let details = if incomplete {
            format!("{} {}", metadata.details, INCOMPLETE_DETAILS)
                .trim()
                .to_string()
        } else {
            metadata.details
        };

        Self {
            index,
            cpu: status.cpu,
            disk: status.disk,
            disk_quota: status.disk_quota,
            memory: status.memory,
            memory_quota: status.memory_quota,
            details,
            since: metadata.since,
            state: metadata.state,
            incomplete,
        }
    }

    pub fn index(&self) -> InstanceIndex {
        self.index
    }

    pub fn cpu(&self) -> f64 {
        self.cpu
    }

    pub fn disk(&self) -> u64 {
        self.disk
    }

    pub fn disk_quota(&self) -> u64 {
        self.disk_quota
    }

    pub fn memory(&self) -> u64 {
        self.memory
    }

    pub fn memory_quota(&self) -> u64 {
        self.memory_quota
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Creation time in Unix epoch seconds, as reported.
    pub fn since(&self) -> f64 {
        self.since
    }

    pub fn state(&self) -> &InstanceState {
        &self.state
    }

    /// True when only one of the two sources reported on this index.
    pub fn is_incomplete(&self) -> bool {
        self.incomplete
    }

    /// Creation time truncated to whole seconds. `None` if out of range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        if !self.since.is_finite() {
            return None;
        }
        DateTime::<Utc>::from_timestamp(self.since.trunc() as i64, 0)
    }
}
