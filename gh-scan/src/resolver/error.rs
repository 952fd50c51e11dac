//! Current repository resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving the current repository.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// `git` could not be run or failed.
    #[error("git failed: {message}")]
    Git { message: String },

    /// No remote points at a GitHub host.
    #[error("none of the git remotes configured for this repository point to a known GitHub host")]
    NoGitHubRemote,

    /// `GH_REPO` is set but not "owner/name" or "host/owner/name".
    #[error("expected the \"[HOST/]OWNER/REPO\" format, got \"{value}\"")]
    InvalidOverride { value: String },
}

impl ResolveError {
    /// Returns true if the working directory has remotes but none on GitHub.
    #[must_use]
    pub fn is_no_github_remote(&self) -> bool {
        matches!(self, Self::NoGitHubRemote)
    }
}
