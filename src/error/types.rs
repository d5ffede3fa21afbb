//! Error types
//!
//! Defines the local error vocabulary, the error value passed through the
//! classifier, and the errors raised by the replay tool.

use std::fmt;
use std::io;

use crate::remote::{RemoteError, RemoteFailure};

/// Local file-system error codes that remote exceptions translate into
///
/// `NotFound` and `NoSuchEntry` share `ENOENT` but stay distinct: the former
/// answers a missing file, the latter a path that can never resolve (invalid
/// name, parent is not a directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalErrorCode {
    NotFound,
    PermissionDenied,
    DirectoryNotEmpty,
    AlreadyExists,
    NoSuchEntry,
    ReadOnlyFilesystem,
    QuotaExceeded,
    BrokenLink,
    ProtocolError,
    InvalidArgument,
    TryAgain,
}

impl LocalErrorCode {
    /// Raw errno value on the host platform
    pub const fn errno(self) -> i32 {
        match self {
            LocalErrorCode::NotFound | LocalErrorCode::NoSuchEntry => libc::ENOENT,
            LocalErrorCode::PermissionDenied => libc::EACCES,
            LocalErrorCode::DirectoryNotEmpty => libc::ENOTEMPTY,
            LocalErrorCode::AlreadyExists => libc::EEXIST,
            LocalErrorCode::ReadOnlyFilesystem => libc::EROFS,
            LocalErrorCode::QuotaExceeded => libc::EDQUOT,
            LocalErrorCode::BrokenLink => libc::ENOLINK,
            LocalErrorCode::ProtocolError => libc::EPROTO,
            LocalErrorCode::InvalidArgument => libc::EINVAL,
            LocalErrorCode::TryAgain => libc::EAGAIN,
        }
    }

    /// Symbolic errno name
    pub const fn name(self) -> &'static str {
        match self {
            LocalErrorCode::NotFound | LocalErrorCode::NoSuchEntry => "ENOENT",
            LocalErrorCode::PermissionDenied => "EACCES",
            LocalErrorCode::DirectoryNotEmpty => "ENOTEMPTY",
            LocalErrorCode::AlreadyExists => "EEXIST",
            LocalErrorCode::ReadOnlyFilesystem => "EROFS",
            LocalErrorCode::QuotaExceeded => "EDQUOT",
            LocalErrorCode::BrokenLink => "ENOLINK",
            LocalErrorCode::ProtocolError => "EPROTO",
            LocalErrorCode::InvalidArgument => "EINVAL",
            LocalErrorCode::TryAgain => "EAGAIN",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            LocalErrorCode::NotFound => "file does not exist",
            LocalErrorCode::PermissionDenied => "permission denied",
            LocalErrorCode::DirectoryNotEmpty => "directory not empty",
            LocalErrorCode::AlreadyExists => "file already exists",
            LocalErrorCode::NoSuchEntry => "no such file or directory",
            LocalErrorCode::ReadOnlyFilesystem => "read-only file system",
            LocalErrorCode::QuotaExceeded => "disk quota exceeded",
            LocalErrorCode::BrokenLink => "link has been severed",
            LocalErrorCode::ProtocolError => "protocol error",
            LocalErrorCode::InvalidArgument => "invalid argument",
            LocalErrorCode::TryAgain => "resource temporarily unavailable",
        }
    }
}

impl fmt::Display for LocalErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LocalErrorCode {}

/// Error returned by HDFS client operations
#[derive(Debug)]
pub enum HdfsError {
    /// Translated into the local error vocabulary
    Local(LocalErrorCode),
    /// Remote exception with no local translation
    Remote(RemoteError),
    /// Transport or local I/O failure
    Io(io::Error),
    Other(String),
}

impl HdfsError {
    /// View this error as a remote failure, if it is one
    pub fn as_remote(&self) -> Option<&dyn RemoteFailure> {
        match self {
            HdfsError::Remote(e) => Some(e as &dyn RemoteFailure),
            _ => None,
        }
    }

    /// Local error code, once the error has been translated
    pub fn local_code(&self) -> Option<LocalErrorCode> {
        match self {
            HdfsError::Local(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for HdfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HdfsError::Local(code) => write!(f, "{}", code),
            HdfsError::Remote(e) => write!(f, "{}", e),
            HdfsError::Io(e) => write!(f, "I/O error: {}", e),
            HdfsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HdfsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HdfsError::Local(code) => Some(code),
            HdfsError::Remote(e) => Some(e),
            HdfsError::Io(e) => Some(e),
            HdfsError::Other(_) => None,
        }
    }
}

impl From<LocalErrorCode> for HdfsError {
    fn from(code: LocalErrorCode) -> Self {
        HdfsError::Local(code)
    }
}

impl From<RemoteError> for HdfsError {
    fn from(error: RemoteError) -> Self {
        HdfsError::Remote(error)
    }
}

impl From<io::Error> for HdfsError {
    fn from(error: io::Error) -> Self {
        HdfsError::Io(error)
    }
}

/// Replay tool errors
#[derive(Debug)]
pub enum ReplayError {
    Config(config::ConfigError),
    EmptyBatch,
    InvalidFailure { index: usize, reason: String },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Config(e) => write!(f, "Configuration error: {}", e),
            ReplayError::EmptyBatch => write!(f, "No recorded failures to classify"),
            ReplayError::InvalidFailure { index, reason } => {
                write!(f, "Invalid failure #{}: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<config::ConfigError> for ReplayError {
    fn from(error: config::ConfigError) -> Self {
        ReplayError::Config(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_and_no_such_entry_share_errno() {
        assert_eq!(
            LocalErrorCode::NotFound.errno(),
            LocalErrorCode::NoSuchEntry.errno()
        );
        assert_ne!(LocalErrorCode::NotFound, LocalErrorCode::NoSuchEntry);
        assert_ne!(
            LocalErrorCode::NotFound.message(),
            LocalErrorCode::NoSuchEntry.message()
        );
    }

    #[test]
    fn test_as_remote_only_for_remote_variant() {
        let remote = HdfsError::from(RemoteError::new("create", "", "x.Y", "msg"));
        assert_eq!(remote.as_remote().map(|r| r.exception()), Some("x.Y"));

        assert!(HdfsError::from(LocalErrorCode::TryAgain).as_remote().is_none());
        assert!(HdfsError::Other("closed".into()).as_remote().is_none());
        let io_err = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        assert!(HdfsError::from(io_err).as_remote().is_none());
    }

    #[test]
    fn test_display_local_uses_message() {
        let err = HdfsError::Local(LocalErrorCode::QuotaExceeded);
        assert_eq!(err.to_string(), "disk quota exceeded");
        assert_eq!(err.local_code(), Some(LocalErrorCode::QuotaExceeded));
    }

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError::InvalidFailure {
            index: 2,
            reason: "missing exception".into(),
        };
        assert_eq!(err.to_string(), "Invalid failure #2: missing exception");
    }
}
