//! Release notes file pair.
//!
//! A release notes directory holds one mutable `unreleased.rst` that
//! accumulates pending notes, and one `<version>.rst` per release.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{Result, TagReleaseError};
use crate::version::Version;

/// Content of an unreleased notes file with nothing pending.
pub const UNRELEASED_EMPTY: &str = "Nothing here yet.\n";

pub const UNRELEASED_FILE_NAME: &str = "unreleased.rst";

/// Locates the release notes files of one repository.
///
/// `directory` is relative to `root` (the repository work tree) so that the
/// same paths can be handed to the git index.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNotes {
    root: PathBuf,
    directory: PathBuf,
}

impl ReleaseNotes {
    pub fn new(root: impl Into<PathBuf>, directory: impl Into<PathBuf>) -> Self {
        ReleaseNotes {
            root: root.into(),
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> PathBuf {
        self.root.join(&self.directory)
    }

    /// Path of `unreleased.rst` relative to the work tree
    pub fn unreleased_relative(&self) -> PathBuf {
        self.directory.join(UNRELEASED_FILE_NAME)
    }

    /// Path of `<version>.rst` relative to the work tree
    pub fn versioned_relative(&self, version: &Version) -> PathBuf {
        self.directory.join(format!("{}.rst", version))
    }

    pub fn unreleased_path(&self) -> PathBuf {
        self.root.join(self.unreleased_relative())
    }

    pub fn versioned_path(&self, version: &Version) -> PathBuf {
        self.root.join(self.versioned_relative(version))
    }

    /// Read the pending notes.
    ///
    /// A missing file is reported as [`TagReleaseError::MissingReleaseNotes`]
    /// rather than a bare I/O error.
    pub fn read_unreleased(&self) -> Result<String> {
        let path = self.unreleased_path();
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TagReleaseError::MissingReleaseNotes { path },
            _ => TagReleaseError::Io(e),
        })
    }

    /// Fail unless `unreleased.rst` holds real notes.
    pub fn ensure_unreleased_has_content(&self) -> Result<()> {
        let content = self.read_unreleased()?;
        if is_placeholder(&content) {
            return Err(TagReleaseError::EmptyReleaseNotes {
                path: self.unreleased_path(),
            });
        }
        Ok(())
    }

    /// Rename `unreleased.rst` to `<version>.rst` and start a fresh
    /// placeholder `unreleased.rst`.
    ///
    /// Returns the work-tree-relative paths of both files, in that order:
    /// the new unreleased file, then the versioned file.
    pub fn archive_unreleased(&self, version: &Version) -> Result<(PathBuf, PathBuf)> {
        let versioned = self.versioned_path(version);
        if versioned.exists() {
            return Err(TagReleaseError::ReleaseNotesExist { path: versioned });
        }

        let unreleased = self.unreleased_path();
        fs::rename(&unreleased, &versioned)?;
        fs::write(&unreleased, UNRELEASED_EMPTY)?;

        Ok((self.unreleased_relative(), self.versioned_relative(version)))
    }
}

/// True for content that counts as "no pending notes".
pub fn is_placeholder(content: &str) -> bool {
    content.is_empty() || content == UNRELEASED_EMPTY
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn notes_with(content: Option<&str>) -> (TempDir, ReleaseNotes) {
        let temp_dir = TempDir::new().unwrap();
        let notes = ReleaseNotes::new(temp_dir.path(), "doc/release_notes");
        fs::create_dir_all(notes.directory()).unwrap();
        if let Some(content) = content {
            fs::write(notes.unreleased_path(), content).unwrap();
        }
        (temp_dir, notes)
    }

    #[test]
    fn test_paths() {
        let notes = ReleaseNotes::new("/repo", "doc/release_notes");
        let v = Version::new(1, 3, 0);
        assert_eq!(
            notes.unreleased_relative(),
            PathBuf::from("doc/release_notes/unreleased.rst")
        );
        assert_eq!(
            notes.versioned_path(&v),
            PathBuf::from("/repo/doc/release_notes/1.3.0.rst")
        );
    }

    #[test]
    fn test_is_placeholder() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("Nothing here yet.\n"));
        assert!(!is_placeholder("Nothing here yet."));
        assert!(!is_placeholder("Fixed a bug.\n"));
    }

    #[test]
    fn test_ensure_content_rejects_placeholder() {
        let (_dir, notes) = notes_with(Some(UNRELEASED_EMPTY));
        assert!(matches!(
            notes.ensure_unreleased_has_content(),
            Err(TagReleaseError::EmptyReleaseNotes { .. })
        ));
    }

    #[test]
    fn test_ensure_content_rejects_empty_file() {
        let (_dir, notes) = notes_with(Some(""));
        assert!(matches!(
            notes.ensure_unreleased_has_content(),
            Err(TagReleaseError::EmptyReleaseNotes { .. })
        ));
    }

    #[test]
    fn test_missing_unreleased_file() {
        let (_dir, notes) = notes_with(None);
        assert!(matches!(
            notes.read_unreleased(),
            Err(TagReleaseError::MissingReleaseNotes { .. })
        ));
    }

    #[test]
    fn test_archive_unreleased() {
        let (_dir, notes) = notes_with(Some("Fixed a bug."));
        let v = Version::new(1, 3, 0);

        let (unreleased, versioned) = notes.archive_unreleased(&v).unwrap();

        assert_eq!(unreleased, notes.unreleased_relative());
        assert_eq!(versioned, notes.versioned_relative(&v));
        assert_eq!(
            fs::read_to_string(notes.versioned_path(&v)).unwrap(),
            "Fixed a bug."
        );
        assert_eq!(notes.read_unreleased().unwrap(), UNRELEASED_EMPTY);
    }

    #[test]
    fn test_archive_refuses_existing_versioned_file() {
        let (_dir, notes) = notes_with(Some("Fixed a bug."));
        let v = Version::new(1, 3, 0);
        fs::write(notes.versioned_path(&v), "Older notes.").unwrap();

        let err = notes.archive_unreleased(&v).unwrap_err();
        assert!(matches!(err, TagReleaseError::ReleaseNotesExist { .. }));

        // Nothing moved
        assert_eq!(notes.read_unreleased().unwrap(), "Fixed a bug.");
        assert_eq!(
            fs::read_to_string(notes.versioned_path(&v)).unwrap(),
            "Older notes."
        );
    }
}
