// Common types and utilities shared across the application

pub mod datetime;
pub mod error;
pub mod mutations;
pub mod types;

pub use datetime::format_start_time;
pub use error::*;
pub use types::*;
