use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::models::{InstanceIndex, InstanceMap, InstanceMetadata, InstanceStatus, InstanceView, Sources};

/// Order of the views returned by [`merge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstanceOrder {
    /// Views for indices with a status first, then views for indices that
    /// only have metadata. Each group follows its map's ascending order, so
    /// the list as a whole is not sorted.
    #[default]
    Unordered,
    /// Every view sorted by index.
    Ascending,
}

impl InstanceOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceOrder::Unordered => "unordered",
            InstanceOrder::Ascending => "ascending",
        }
    }

    fn apply(self, views: &mut [InstanceView]) {
        if self == InstanceOrder::Ascending {
            views.sort_by_key(InstanceView::index);
        }
    }
}

impl FromStr for InstanceOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unordered" => Ok(InstanceOrder::Unordered),
            "ascending" | "asc" => Ok(InstanceOrder::Ascending),
            other => Err(format!("unknown instance order: {}", other)),
        }
    }
}

impl fmt::Display for InstanceOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join statuses and metadata into one view per distinct index.
///
/// An index present in only one map produces an incomplete view.
pub fn merge(
    statuses: &InstanceMap<InstanceStatus>,
    metadata: &InstanceMap<InstanceMetadata>,
    order: InstanceOrder,
) -> Vec<InstanceView> {
    let mut views = Vec::with_capacity(statuses.len() + metadata.len());
    let mut seen: HashSet<InstanceIndex> = HashSet::with_capacity(statuses.len());

    for (&index, status) in statuses {
        seen.insert(index);
        let sources = match metadata.get(&index) {
            Some(meta) => Sources::Both(status, meta),
            None => Sources::StatusOnly(status),
        };
        views.push(InstanceView::from_sources(index, sources));
    }

    // instances that are missing stats
    for (&index, meta) in metadata {
        if !seen.contains(&index) {
            views.push(InstanceView::from_sources(index, Sources::MetadataOnly(meta)));
        }
    }

    order.apply(&mut views);
    views
}
