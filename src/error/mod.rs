//! Error handling
//!
//! Defines error types and their conversions.

pub mod handlers;
pub mod types;

pub use handlers::error_to_errno;
pub use types::*;
