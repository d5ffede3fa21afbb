//! Classification operations
//!
//! Translates errors returned by remote calls into local error codes.
//! Both entry points are pure: no logging, no retries, no shared state
//! beyond the read-only table.

use crate::classify::table::lookup;
use crate::error::{HdfsError, LocalErrorCode};
use crate::remote::exceptions;

/// Translates a remote exception into its local error code
///
/// Errors that are not remote failures, and remote failures whose exception
/// has no entry in the table, are returned unchanged so callers can still
/// branch on the original exception.
pub fn classify(err: HdfsError) -> HdfsError {
    match err.as_remote().and_then(|remote| lookup(remote.exception())) {
        Some(code) => HdfsError::Local(code),
        None => err,
    }
}

/// Like [`classify`], for file creation
///
/// A create-without-overwrite that races another writer fails with
/// `AlreadyBeingCreatedException`, which is reported as already-exists.
pub fn classify_create(err: HdfsError) -> HdfsError {
    let being_created = err
        .as_remote()
        .is_some_and(|remote| remote.exception() == exceptions::ALREADY_BEING_CREATED);

    if being_created {
        return HdfsError::Local(LocalErrorCode::AlreadyExists);
    }

    classify(err)
}
