//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building a scan configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Both an organization and a user were given.
    #[error("Cannot scan organization '{org}' and user '{user}' at the same time")]
    ConflictingTargets { org: String, user: String },

    /// The repository is not in "owner/name" form.
    #[error("Invalid repository '{value}', expected 'owner/name'")]
    InvalidRepository { value: String },

    /// Page numbers start at 1.
    #[error("Invalid page number {page}, pages start at 1")]
    InvalidPage { page: u32 },
}
