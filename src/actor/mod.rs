//! Instance reconciliation
//!
//! Fetches runtime statistics and lifecycle metadata for an application's
//! instances and merges them into one [`InstanceView`] per instance index.
//!
//! The two fetches run strictly in sequence. A missing application surfaces
//! as [`ActorError::NotFound`] from the status fetch, and the metadata fetch
//! is skipped. Any other failure aborts the whole call without partial
//! results. Warnings from every fetch that ran are always returned.

mod error;
pub mod reconcile;

pub use error::ActorError;
pub use reconcile::{merge, InstanceOrder};

use crate::api::{ApiError, InstanceSource};
use crate::models::{InstanceMap, InstanceMetadata, InstanceStatus, InstanceView, WithWarnings};

pub struct Actor<S> {
    source: S,
    order: InstanceOrder,
}

impl<S: InstanceSource> Actor<S> {
    pub fn new(source: S) -> Self {
        Self { source, order: InstanceOrder::default() }
    }

    pub fn with_order(mut self, order: InstanceOrder) -> Self {
        self.order = order;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Status fetch. Translates a missing resource into [`ActorError::NotFound`].
    pub async fn fetch_statuses(
        &self,
        application_id: &str,
    ) -> WithWarnings<InstanceMap<InstanceStatus>, ActorError> {
        tracing::debug!(application_id, "Fetching instance statuses");
        let WithWarnings { result, warnings } =
            self.source.fetch_instance_statuses(application_id).await;

        let result = result.map_err(|e| match e {
            ApiError::ResourceNotFound(reason) => {
                tracing::debug!(application_id, %reason, "Application instances not found");
                ActorError::NotFound { application_id: application_id.to_string() }
            }
            other => {
                tracing::error!(application_id, e = %other, "Failed to fetch instance statuses");
                ActorError::Passthrough(other)
            }
        });
        WithWarnings { result, warnings }
    }

    /// Metadata fetch. Errors pass through unchanged.
    pub async fn fetch_metadata(
        &self,
        application_id: &str,
    ) -> WithWarnings<InstanceMap<InstanceMetadata>, ActorError> {
        tracing::debug!(application_id, "Fetching instance metadata");
        let WithWarnings { result, warnings } =
            self.source.fetch_instance_metadata(application_id).await;
        let result = result.map_err(|e| {
            tracing::error!(application_id, %e, "Failed to fetch instance metadata");
            ActorError::from(e)
        });
        WithWarnings { result, warnings }
    }

    /// Fetch both sources and merge them into one view per instance.
    ///
    /// Returns the status warnings followed by the metadata warnings (when
    /// that fetch ran), on success and on failure alike.
    pub async fn reconcile_instances(
        &self,
        application_id: &str,
    ) -> WithWarnings<Vec<InstanceView>, ActorError> {
        let WithWarnings { result, mut warnings } = self.fetch_statuses(application_id).await;
        let statuses = match result {
            Ok(statuses) => statuses,
            Err(e) => return WithWarnings::err(e, warnings),
        };

        let WithWarnings { result, warnings: metadata_warnings } =
            self.fetch_metadata(application_id).await;
        warnings.append(metadata_warnings);
        let metadata = match result {
            Ok(metadata) => metadata,
            Err(e) => return WithWarnings::err(e, warnings),
        };

        let views = merge(&statuses, &metadata, self.order);
        for view in views.iter().filter(|v| v.is_incomplete()) {
            tracing::warn!(application_id, index = %view.index(), "Instance is missing status or metadata");
        }
        tracing::info!(
            application_id,
            instances = views.len(),
            warnings = warnings.len(),
            order = %self.order,
            "Reconciled application instances"
        );

        WithWarnings::ok(views, warnings)
    }
}
