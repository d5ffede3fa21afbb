//! Classification table
//!
//! Static mapping from remote exception class names to local error codes.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::LocalErrorCode;
use crate::remote::exceptions;

/// Exception class name to local error code, built on first use
pub(crate) static CLASSIFICATION_TABLE: LazyLock<HashMap<&'static str, LocalErrorCode>> =
    LazyLock::new(|| {
        let mut table = HashMap::new();
        table.insert(exceptions::FILE_NOT_FOUND, LocalErrorCode::NotFound);
        table.insert(exceptions::PERMISSION_DENIED, LocalErrorCode::PermissionDenied);
        table.insert(
            exceptions::PATH_IS_NOT_EMPTY_DIRECTORY,
            LocalErrorCode::DirectoryNotEmpty,
        );
        table.insert(exceptions::FILE_ALREADY_EXISTS, LocalErrorCode::AlreadyExists);
        table.insert(exceptions::INVALID_PATH, LocalErrorCode::NoSuchEntry);
        table.insert(exceptions::SAFE_MODE, LocalErrorCode::ReadOnlyFilesystem);
        table.insert(exceptions::DS_QUOTA_EXCEEDED, LocalErrorCode::QuotaExceeded);
        table.insert(exceptions::NS_QUOTA_EXCEEDED, LocalErrorCode::QuotaExceeded);
        table.insert(exceptions::PARENT_NOT_DIRECTORY, LocalErrorCode::NoSuchEntry);
        table.insert(exceptions::UNRESOLVED_LINK, LocalErrorCode::BrokenLink);
        table.insert(exceptions::NOT_REPLICATED_YET, LocalErrorCode::ProtocolError);
        table.insert(exceptions::ILLEGAL_ARGUMENT, LocalErrorCode::InvalidArgument);
        // HopsFS reports internal runtime faults as a plain IOException.
        table.insert(exceptions::IO, LocalErrorCode::InvalidArgument);
        table.insert(exceptions::NOT_A_LEADER, LocalErrorCode::TryAgain);
        table
    });

/// The full classification table
pub fn classification_table() -> &'static HashMap<&'static str, LocalErrorCode> {
    &CLASSIFICATION_TABLE
}

/// Looks up the local error code for a remote exception class name
pub fn lookup(exception: &str) -> Option<LocalErrorCode> {
    CLASSIFICATION_TABLE.get(exception).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_every_catalogued_exception() {
        assert_eq!(classification_table().len(), 14);
    }

    #[test]
    fn test_already_being_created_has_no_entry() {
        assert_eq!(lookup(exceptions::ALREADY_BEING_CREATED), None);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert_eq!(lookup("FileNotFoundException"), None);
        assert_eq!(lookup("java.io.filenotfoundexception"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(
            lookup("java.io.FileNotFoundException"),
            Some(LocalErrorCode::NotFound)
        );
    }

    #[test]
    fn test_quota_exceptions_share_code() {
        assert_eq!(
            lookup(exceptions::DS_QUOTA_EXCEEDED),
            lookup(exceptions::NS_QUOTA_EXCEEDED)
        );
        assert_eq!(
            lookup(exceptions::DS_QUOTA_EXCEEDED),
            Some(LocalErrorCode::QuotaExceeded)
        );
    }
}
