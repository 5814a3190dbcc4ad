// Display formatting for the CLI
pub mod byte_size;
pub mod status_formatter;

pub use byte_size::byte_size;
pub use status_formatter::{format_cpu, format_since, format_state};
