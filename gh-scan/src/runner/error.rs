//! Runner error types.

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The current directory does not map to a GitHub repository.
    #[error(transparent)]
    Resolve(#[from] crate::resolver::ResolveError),

    /// The organization or user listing failed.
    #[error(transparent)]
    Listing(#[from] crate::listing::ListingError),
}

impl RunnerError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Resolve(_) => 1,
            Self::Listing(_) => 2,
            Self::Config(_) => 4,
        }
    }
}
