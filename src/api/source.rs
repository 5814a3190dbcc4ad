use async_trait::async_trait;

use super::error::ApiError;
use crate::models::{InstanceMap, InstanceMetadata, InstanceStatus, WithWarnings};

/// The two index-keyed fetches the reconciler is built on.
///
/// Both calls return their warnings whether or not they succeed.
#[async_trait]
pub trait InstanceSource: Send + Sync {
    /// Runtime statistics for every instance of the application.
    /// A missing application is reported as [`ApiError::ResourceNotFound`].
    async fn fetch_instance_statuses(
        &self,
        application_id: &str,
    ) -> WithWarnings<InstanceMap<InstanceStatus>, ApiError>;

    /// Lifecycle records for every instance of the application.
    async fn fetch_instance_metadata(
        &self,
        application_id: &str,
    ) -> WithWarnings<InstanceMap<InstanceMetadata>, ApiError>;
}
