use std::fmt;

/// Non-fatal issues found while preparing a release.
/// These are reported to the operator but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// Existing tag that cannot be compared against the new version
    UnparsableTag { tag: String, reason: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::UnparsableTag { tag, reason } => {
                write!(f, "Ignoring tag '{}' for version ordering: {}", tag, reason)
            }
        }
    }
}
