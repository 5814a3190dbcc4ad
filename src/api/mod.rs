pub mod client;
pub mod error;
pub mod instances;
pub mod source;

pub use client::{parse_warnings_header, set_silent, CloudControllerClient, WARNINGS_HEADER};
pub use error::ApiError;
pub use instances::{parse_instance_metadata, parse_instance_statuses};
pub use source::InstanceSource;
