//! HDFS remote exception classification
//!
//! Translates Java exceptions raised by HDFS namenodes and datanodes into
//! local file-system error codes.

pub mod classify;
pub mod config;
pub mod error;
pub mod remote;
pub mod replay;

pub use classify::{classify, classify_create};
pub use error::{HdfsError, LocalErrorCode};
pub use remote::{RemoteError, RemoteFailure};
