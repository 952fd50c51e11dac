//! Access to the GitHub REST API.
//!
//! The scanner only ever issues `GET` requests, so the whole transport is
//! hidden behind [`RestClient::get_json`]. [`GitHubClient`] implements it on
//! top of `octocrab`; tests substitute an in-memory client.

mod auth;
mod error;
mod models;

pub use auth::{resolve_token, token_from_env, token_from_gh_cli, TOKEN_ENV_VARS};
pub use error::ApiError;
pub use models::{Collaborator, CommunityProfile, Owner, Readme, Repository};

use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Read-only access to REST routes.
///
/// Routes are relative to the API root (e.g. `/repos/acme/buzz`) and may
/// carry a query string.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Fetches `route` and returns the decoded JSON body.
    async fn get_json(&self, route: &str) -> Result<Value, ApiError>;
}

/// Fetches `route` and deserializes the body into `T`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not fit `T`, or whatever
/// error the client produced.
pub async fn get<T, C>(client: &C, route: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    C: RestClient + ?Sized,
{
    let value = client.get_json(route).await?;
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        route: route.to_string(),
        source,
    })
}

/// [`RestClient`] backed by `octocrab`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client, authenticated when a token is given.
    ///
    /// `base_uri` overrides `https://api.github.com` (GitHub Enterprise).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI is invalid or the HTTP client
    /// cannot be built.
    pub fn new(token: Option<String>, base_uri: Option<&str>) -> Result<Self, ApiError> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }
        if let Some(base_uri) = base_uri {
            builder = builder.base_uri(base_uri)?;
        }
        // Every request is sent exactly once
        builder = builder.add_retry_config(RetryConfig::None);
        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

#[async_trait]
impl RestClient for GitHubClient {
    async fn get_json(&self, route: &str) -> Result<Value, ApiError> {
        debug!(route, "GET");
        let value = self.octocrab.get::<Value, _, ()>(route, None).await?;
        Ok(value)
    }
}
