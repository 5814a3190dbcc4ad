use thiserror::Error;

use crate::api::ApiError;

/// Failure of a reconciliation.
///
/// Missing data for a single instance is not an error; it shows up as an
/// incomplete view instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActorError {
    /// The application has no retrievable instance statuses.
    #[error("Application instances '{application_id}' not found.")]
    NotFound { application_id: String },

    /// Any other failure of either fetch, unchanged.
    #[error(transparent)]
    Passthrough(#[from] ApiError),
}
