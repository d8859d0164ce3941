use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TagReleaseError};

/// A release version identifier (`MAJOR.MINOR.PATCH`).
///
/// Ordering is semantic: components compare numerically, so `1.10.0` sorts
/// after `1.9.0`. Pre-release suffixes sort below the plain release.
///
/// A `Version` never carries build metadata, so the derived ordering is
/// semver precedence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version(semver::Version::new(major, minor, patch))
    }

    /// Parse a version string such as "1.2.3".
    ///
    /// Surrounding whitespace is ignored. A leading `v` is not accepted here;
    /// use [`Version::from_tag`] for tag names. Build metadata (`+...`) is
    /// rejected: it does not take part in precedence, so `1.2.0+hotfix` could
    /// not be ordered after `1.2.0`.
    pub fn parse(version: &str) -> Result<Self> {
        let parsed = semver::Version::parse(version.trim())
            .map_err(|e| TagReleaseError::invalid_version(version, e.to_string()))?;
        if !parsed.build.is_empty() {
            return Err(TagReleaseError::invalid_version(
                version,
                "build metadata is not allowed in a release version",
            ));
        }
        Ok(Version(parsed))
    }

    /// Recover the version from a tag name by stripping `prefix`.
    ///
    /// Returns `None` when the tag does not carry the prefix or the remainder
    /// is not a version. Build metadata on the tag is dropped since it does
    /// not affect precedence.
    pub fn from_tag(tag: &str, prefix: &str) -> Option<Self> {
        let suffix = tag.strip_prefix(prefix)?;
        let mut version = semver::Version::parse(suffix).ok()?;
        version.build = semver::BuildMetadata::EMPTY;
        Some(Version(version))
    }

    /// Tag name for this version, e.g. "v1.2.3".
    pub fn tag_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self)
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }
}

impl FromStr for Version {
    type Err = TagReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
