pub mod instance_index;
pub mod instance_status;
pub mod instance_metadata;
pub mod instance_view;
pub mod warnings;

pub use instance_index::{InstanceIndex, InstanceMap};
pub use instance_status::InstanceStatus;
pub use instance_metadata::{InstanceMetadata, InstanceState};
pub use instance_view::{InstanceView, Sources, INCOMPLETE_DETAILS};
pub use warnings::{Warnings, WithWarnings};
