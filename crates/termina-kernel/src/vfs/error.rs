//! VFS error taxonomy.

use thiserror::Error;

/// Result type for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS operation errors.
///
/// `Display` renders the strerror phrase only; commands wrap it with their
/// own name and the offending path (`cd: foo: No such file or directory`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("No such file or directory")]
    NotFound,
    #[error("Not a directory")]
    NotADirectory,
    #[error("Is a directory")]
    IsADirectory,
    #[error("File exists")]
    AlreadyExists,
    #[error("Directory not empty")]
    NotEmpty,
    /// The root directory cannot be removed.
    #[error("Device or resource busy")]
    Busy,
}
