//! Build provenance printed by `--version`.

use std::fmt;

/// Placeholder for values the build could not capture.
const UNKNOWN: &str = "?";

/// Revision, commit time and tree state of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Commit hash.
    pub revision: String,

    /// Commit timestamp (RFC 3339).
    pub timestamp: String,

    /// Whether the working tree had uncommitted changes.
    pub dirty: bool,
}

impl BuildInfo {
    /// Builds the info from values captured at compile time.
    ///
    /// Missing or empty values render as `?`; `dirty` is true only for
    /// `"true"`.
    #[must_use]
    pub fn new(revision: Option<&str>, timestamp: Option<&str>, dirty: Option<&str>) -> Self {
        let known = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(UNKNOWN)
                .to_string()
        };
        Self {
            revision: known(revision),
            timestamp: known(timestamp),
            dirty: dirty.is_some_and(|value| value.trim() == "true"),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dirty = if self.dirty { "(dirty)" } else { "" };
        write!(f, "Commit {} ({}) {}", self.revision, self.timestamp, dirty)
    }
}
