use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for tag-release operations
///
/// Every variant is fatal: the binary prints it and exits non-zero.
#[derive(Error, Debug)]
pub enum TagReleaseError {
    #[error("Must make release from clean repo")]
    DirtyRepository,

    #[error("The unreleased notes file {} does not exist", .path.display())]
    MissingReleaseNotes { path: PathBuf },

    #[error("The unreleased notes file {} should not be empty", .path.display())]
    EmptyReleaseNotes { path: PathBuf },

    #[error("Invalid release version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Git release tag already exists: {tag}")]
    DuplicateTag { tag: String },

    #[error("New version {version} is not greater than existing tag {existing_tag}")]
    VersionNotGreater {
        version: String,
        existing_tag: String,
    },

    #[error("Release notes already exist: {}", .path.display())]
    ReleaseNotesExist { path: PathBuf },

    #[error("Git commit failed: working tree still dirty after committing")]
    CommitFailed,

    #[error("Git tag failed: {tag} not found after creating it")]
    TagFailed { tag: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-release
pub type Result<T> = std::result::Result<T, TagReleaseError>;

impl TagReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagReleaseError::Config(msg.into())
    }

    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        TagReleaseError::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }
}
