//! Repository listing error types.

use crate::github::ApiError;
use thiserror::Error;

/// Errors that can occur while listing repositories.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The listing request failed.
    #[error("Failed to list repositories of '{owner}': {source}")]
    Api {
        owner: String,
        #[source]
        source: ApiError,
    },
}
