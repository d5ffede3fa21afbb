//! Remote failures
//!
//! The remote-failure capability and the catalog of exception names it carries.

pub mod exceptions;
pub mod failure;

pub use failure::{RemoteError, RemoteFailure};
