//! Git operations abstraction layer
//!
//! The release workflow only needs a handful of repository operations. They
//! are collected in the [Repository] trait so the workflow can run against a
//! real repository or an in-memory one:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use tag_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> tag_release::Result<()> {
//! if !repo.is_dirty()? {
//!     let oid = repo.commit_index("Release version 1.0.0")?;
//!     repo.create_tag("v1.0.0", oid)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::Path;

use crate::error::Result;
use git2::Oid;

/// Repository operations used by the release workflow
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) into [crate::error::TagReleaseError].
pub trait Repository {
    /// Root of the working tree
    fn workdir(&self) -> &Path;

    /// Get all tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Whether tracked files have staged or unstaged changes
    ///
    /// Untracked files do not make the repository dirty.
    fn is_dirty(&self) -> Result<bool>;

    /// Stage a path into the index
    ///
    /// # Arguments
    /// * `path` - Path relative to [Repository::workdir]
    fn stage_path(&self, path: &Path) -> Result<()>;

    /// Commit the current index on top of HEAD
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the new commit
    fn commit_index(&self, message: &str) -> Result<Oid>;

    /// Create a lightweight tag at the given commit
    ///
    /// Never overwrites an existing tag of the same name.
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;

    /// Whether a tag with this exact name exists
    fn has_tag(&self, name: &str) -> Result<bool> {
        Ok(self.list_tags()?.iter().any(|tag| tag == name))
    }
}
