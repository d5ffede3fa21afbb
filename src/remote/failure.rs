//! Remote failure values
//!
//! Describes a Java exception raised by a remote namenode or datanode, as
//! handed over by the RPC layer once a failed response has been decoded.

use serde::Deserialize;
use std::fmt;

/// Capability exposed by errors that originate from a remote HDFS service
pub trait RemoteFailure: fmt::Debug + fmt::Display {
    /// RPC method that encountered the error (for example `getFileInfo`)
    fn method(&self) -> &str;

    /// Long form of the error code (for example `ERROR_APPLICATION`)
    fn desc(&self) -> &str;

    /// Java exception class name (for example `java.io.FileNotFoundException`)
    fn exception(&self) -> &str;

    /// Full error message, complete with the Java traceback
    fn message(&self) -> &str;
}

/// Remote exception as reported in an RPC response header
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    method: String,
    #[serde(default)]
    desc: String,
    exception: String,
    #[serde(default)]
    message: String,
}

impl RemoteError {
    pub fn new(
        method: impl Into<String>,
        desc: impl Into<String>,
        exception: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            desc: desc.into(),
            exception: exception.into(),
            message: message.into(),
        }
    }
}

impl RemoteFailure for RemoteError {
    fn method(&self) -> &str {
        &self.method
    }

    fn desc(&self) -> &str {
        &self.desc
    }

    fn exception(&self) -> &str {
        &self.exception
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} call failed with {} ({})",
            self.method, self.desc, self.exception
        )
    }
}

impl std::error::Error for RemoteError {}
