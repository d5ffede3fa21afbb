//! Error conversions
//!
//! Hands classified errors over to `std::io` based callers.

use std::io;

use crate::error::types::{HdfsError, LocalErrorCode};

impl From<LocalErrorCode> for io::Error {
    fn from(code: LocalErrorCode) -> Self {
        io::Error::from_raw_os_error(code.errno())
    }
}

impl From<HdfsError> for io::Error {
    fn from(err: HdfsError) -> Self {
        match err {
            HdfsError::Local(code) => code.into(),
            HdfsError::Remote(e) => io::Error::other(e),
            HdfsError::Io(e) => e,
            HdfsError::Other(msg) => io::Error::other(msg),
        }
    }
}

/// Convert error to errno, when it maps to one
pub fn error_to_errno(err: &HdfsError) -> Option<i32> {
    match err {
        HdfsError::Local(code) => Some(code.errno()),
        HdfsError::Io(e) => e.raw_os_error(),
        HdfsError::Remote(_) | HdfsError::Other(_) => None,
    }
}
