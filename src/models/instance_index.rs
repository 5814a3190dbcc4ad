use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Serialize;

/// Ordinal of one instance slot of an application.
///
/// Indices are not guaranteed to be contiguous or stable between calls; they
/// only join the status and metadata responses of a single reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InstanceIndex(pub u32);

impl InstanceIndex {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for InstanceIndex {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

impl fmt::Display for InstanceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index-keyed response from one source. Iterates ascending by index.
pub type InstanceMap<T> = BTreeMap<InstanceIndex, T>;
