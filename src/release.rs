//! Release workflow
//!
//! A release runs three steps, each gating the next:
//! 1. [`verify_new_version_number`] checks every precondition without
//!    touching the repository
//! 2. [`move_release_notes`] archives `unreleased.rst` and stages the result
//! 3. [`commit_and_tag_release`] commits the index and tags the commit
//!
//! Any error ends the release. Nothing is rolled back: a failure in step 3
//! leaves the commit in place for the operator to inspect.
//!
//! [`run_release_with_progress`] runs all three and reports each step as a
//! [`ReleaseStep`] before it starts.

use std::path::PathBuf;

use git2::Oid;

use crate::error::{Result, TagReleaseError};
use crate::git::Repository;
use crate::notes::ReleaseNotes;
use crate::version::Version;
use crate::warning::ReleaseWarning;

/// Outcome of [`verify_new_version_number`]
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedRelease {
    pub version: Version,
    /// Tag name to create, e.g. "v1.3.0"
    pub tag: String,
    pub warnings: Vec<ReleaseWarning>,
}

/// Progress reported by [`run_release_with_progress`]
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseStep<'a> {
    /// About to check the preconditions for this version string
    Verify { version: &'a str },
    /// Non-fatal issue found while verifying
    Warning(&'a ReleaseWarning),
    /// About to move the notes; paths are relative to the work tree
    MoveNotes { from: PathBuf, to: PathBuf },
    /// About to commit and create this tag
    CommitAndTag { tag: &'a str },
}

/// Result of a complete release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    pub version: Version,
    pub tag: String,
    pub commit: Oid,
    /// Absolute path of the versioned release notes file
    pub notes_path: PathBuf,
    pub warnings: Vec<ReleaseWarning>,
}

/// Commit message used for a release commit.
pub fn release_commit_message(version: &Version) -> String {
    format!("Release version {}", version)
}

/// Check that `new_version` may be released.
///
/// Checks, in order: clean working tree, non-empty release notes, a valid
/// version string, no existing tag of the same name, and a version strictly
/// greater than every existing release tag. Tags that do not parse as
/// `<tag_prefix><version>` are skipped for ordering and reported as warnings.
pub fn verify_new_version_number<R: Repository>(
    repo: &R,
    notes: &ReleaseNotes,
    new_version: &str,
    tag_prefix: &str,
) -> Result<VerifiedRelease> {
    if repo.is_dirty()? {
        return Err(TagReleaseError::DirtyRepository);
    }

    notes.ensure_unreleased_has_content()?;

    let version = Version::parse(new_version)?;
    let new_tag = version.tag_name(tag_prefix);

    let existing_tags = repo.list_tags()?;
    if existing_tags.contains(&new_tag) {
        return Err(TagReleaseError::DuplicateTag { tag: new_tag });
    }

    let mut warnings = Vec::new();
    for existing_tag in existing_tags {
        let Some(existing_version) = Version::from_tag(&existing_tag, tag_prefix) else {
            warnings.push(ReleaseWarning::UnparsableTag {
                reason: format!("not of the form {}MAJOR.MINOR.PATCH", tag_prefix),
                tag: existing_tag,
            });
            continue;
        };

        if version <= existing_version {
            return Err(TagReleaseError::VersionNotGreater {
                version: version.to_string(),
                existing_tag,
            });
        }
    }

    Ok(VerifiedRelease {
        version,
        tag: new_tag,
        warnings,
    })
}

/// Move `unreleased.rst` to `<version>.rst`, recreate the placeholder and
/// stage both files. Makes no commit.
///
/// # Returns
/// Absolute path of the versioned release notes file
pub fn move_release_notes<R: Repository>(
    repo: &R,
    notes: &ReleaseNotes,
    version: &Version,
) -> Result<PathBuf> {
    let (unreleased, versioned) = notes.archive_unreleased(version)?;

    repo.stage_path(&unreleased)?;
    repo.stage_path(&versioned)?;

    Ok(notes.versioned_path(version))
}

/// Commit the staged release and tag the commit.
///
/// Fails with [`TagReleaseError::CommitFailed`] if the working tree is still
/// dirty after committing, and with [`TagReleaseError::TagFailed`] if the tag
/// cannot be found after creating it.
pub fn commit_and_tag_release<R: Repository>(
    repo: &R,
    version: &Version,
    tag: &str,
) -> Result<Oid> {
    let commit = repo.commit_index(&release_commit_message(version))?;
    if repo.is_dirty()? {
        return Err(TagReleaseError::CommitFailed);
    }

    repo.create_tag(tag, commit)?;
    if !repo.has_tag(tag)? {
        return Err(TagReleaseError::TagFailed {
            tag: tag.to_string(),
        });
    }

    Ok(commit)
}

/// Run all three release steps.
pub fn run_release<R: Repository>(
    repo: &R,
    notes: &ReleaseNotes,
    new_version: &str,
    tag_prefix: &str,
) -> Result<ReleaseOutcome> {
    run_release_with_progress(repo, notes, new_version, tag_prefix, |_| {})
}

/// Run all three release steps, calling `progress` before each one.
pub fn run_release_with_progress<R, F>(
    repo: &R,
    notes: &ReleaseNotes,
    new_version: &str,
    tag_prefix: &str,
    mut progress: F,
) -> Result<ReleaseOutcome>
where
    R: Repository,
    F: FnMut(ReleaseStep<'_>),
{
    progress(ReleaseStep::Verify {
        version: new_version,
    });
    let verified = verify_new_version_number(repo, notes, new_version, tag_prefix)?;
    for warning in &verified.warnings {
        progress(ReleaseStep::Warning(warning));
    }

    progress(ReleaseStep::MoveNotes {
        from: notes.unreleased_relative(),
        to: notes.versioned_relative(&verified.version),
    });
    let notes_path = move_release_notes(repo, notes, &verified.version)?;

    progress(ReleaseStep::CommitAndTag {
        tag: &verified.tag,
    });
    let commit = commit_and_tag_release(repo, &verified.version, &verified.tag)?;

    Ok(ReleaseOutcome {
        version: verified.version,
        tag: verified.tag,
        commit,
        notes_path,
        warnings: verified.warnings,
    })
}
