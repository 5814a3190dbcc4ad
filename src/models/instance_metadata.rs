use std::fmt;

use serde::Serialize;

/// Lifecycle state as reported by the platform (`RUNNING`, `STARTING`,
/// `CRASHED`, `DOWN`, ...). Case is kept exactly as received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstanceState(String);

impl InstanceState {
    pub fn new(state: impl Into<String>) -> Self {
        Self(state.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle record reported for one instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceMetadata {
    pub details: String,
    /// Creation time in Unix epoch seconds.
    pub since: f64,
    pub state: InstanceState,
}
