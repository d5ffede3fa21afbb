//! Remote exception catalog
//!
//! Fully-qualified Java class names reported by namenodes and datanodes
//! in the exception field of a failed RPC response.

pub const FILE_NOT_FOUND: &str = "java.io.FileNotFoundException";
pub const PERMISSION_DENIED: &str = "org.apache.hadoop.security.AccessControlException";
pub const PATH_IS_NOT_EMPTY_DIRECTORY: &str =
    "org.apache.hadoop.fs.PathIsNotEmptyDirectoryException";
pub const FILE_ALREADY_EXISTS: &str = "org.apache.hadoop.fs.FileAlreadyExistsException";
pub const ALREADY_BEING_CREATED: &str =
    "org.apache.hadoop.hdfs.protocol.AlreadyBeingCreatedException";
pub const INVALID_PATH: &str = "org.apache.hadoop.fs.InvalidPathException";
pub const SAFE_MODE: &str = "org.apache.hadoop.hdfs.server.namenode.SafeModeException";

/// Disk space quota exceeded
pub const DS_QUOTA_EXCEEDED: &str = "org.apache.hadoop.hdfs.protocol.DSQuotaExceededException";

/// Namespace (file and directory count) quota exceeded
pub const NS_QUOTA_EXCEEDED: &str = "org.apache.hadoop.hdfs.protocol.NSQuotaExceededException";

pub const PARENT_NOT_DIRECTORY: &str = "org.apache.hadoop.fs.ParentNotDirectoryException";
pub const UNRESOLVED_LINK: &str = "org.apache.hadoop.fs.UnresolvedLinkException";
pub const NOT_REPLICATED_YET: &str =
    "org.apache.hadoop.hdfs.server.namenode.NotReplicatedYetException";
pub const ILLEGAL_ARGUMENT: &str = "org.apache.hadoop.HadoopIllegalArgumentException";
pub const NOT_A_LEADER: &str = "org.apache.hadoop.ipc.NotALeaderException";

/// Generic I/O exception. HopsFS rethrows internal runtime faults under this name.
pub const IO: &str = "java.io.IOException";
