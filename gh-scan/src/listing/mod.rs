//! Repository listing for organizations and users.
//!
//! One page of repositories is fetched, sorted by full name, then
//! optionally narrowed to the repositories carrying a topic.

mod error;

pub use error::ListingError;

use crate::config::{ScanConfig, Target, REPOSITORIES_PER_PAGE};
use crate::github::{get, Repository, RestClient};
use tracing::{debug, info, info_span, Instrument};

/// Lists the repositories of the configured organization or user.
///
/// Returns an empty vector when the target is neither an organization nor
/// a user. Repositories keep the order returned by the API.
///
/// # Errors
///
/// Returns [`ListingError`] if the listing request fails. Nothing is retried.
pub async fn list_repositories<C>(
    client: &C,
    config: &ScanConfig,
) -> Result<Vec<Repository>, ListingError>
where
    C: RestClient + ?Sized,
{
    let (kind, owner) = match config.target() {
        Target::Organization(org) => ("orgs", org.as_str()),
        Target::User(user) => ("users", user.as_str()),
        Target::Repository(_) | Target::CurrentDirectory => return Ok(Vec::new()),
    };

    let span = info_span!("list", owner = %owner, page = config.page());

    async {
        let route = listing_route(kind, owner, config.page());
        debug!(route = %route, "Listing repositories");

        let repositories: Vec<Repository> = get(client, &route)
            .await
            .map_err(|source| ListingError::Api {
                owner: owner.to_string(),
                source,
            })?;
        let listed = repositories.len();

        let repositories = filter_by_topic(repositories, config.topic());
        info!(listed, kept = repositories.len(), "Listed repositories");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Keeps the repositories whose topics contain `topic` (exact,
/// case-sensitive). `None` keeps everything.
#[must_use]
pub fn filter_by_topic(repositories: Vec<Repository>, topic: Option<&str>) -> Vec<Repository> {
    match topic {
        Some(topic) => repositories
            .into_iter()
            .filter(|repository| repository.has_topic(topic))
            .collect(),
        None => repositories,
    }
}

/// Builds the listing route, e.g. `/orgs/python/repos?sort=full_name&per_page=100&page=1`.
fn listing_route(kind: &str, owner: &str, page: u32) -> String {
    format!("/{kind}/{owner}/repos?sort=full_name&per_page={REPOSITORIES_PER_PAGE}&page={page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository(name: &str, topics: &[&str]) -> Repository {
        Repository {
            name: name.to_string(),
            full_name: format!("acme/{name}"),
            topics: topics.iter().map(|topic| (*topic).to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_listing_route() {
        assert_eq!(
            listing_route("orgs", "python", 2),
            "/orgs/python/repos?sort=full_name&per_page=100&page=2"
        );
    }

    #[test]
    fn filter_keeps_order_of_matches() {
        let repositories = vec![
            repository("a", &["testing", "cli"]),
            repository("b", &["cli"]),
            repository("c", &["testing"]),
        ];

        let filtered = filter_by_topic(repositories, Some("testing"));

        let names: Vec<_> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let repositories = vec![repository("a", &["Testing"]), repository("b", &["testing-tools"])];

        assert!(filter_by_topic(repositories, Some("testing")).is_empty());
    }

    #[test]
    fn no_topic_keeps_everything() {
        let repositories = vec![repository("a", &[]), repository("b", &["cli"])];

        assert_eq!(filter_by_topic(repositories, None).len(), 2);
    }
}
