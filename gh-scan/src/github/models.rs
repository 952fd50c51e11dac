//! Response bodies of the REST endpoints the scanner reads.

use serde::{Deserialize, Serialize};

/// Owner of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Owner {
    /// Login of the user or organization.
    pub login: String,
}

/// Snapshot of a repository as returned by the repository and listing endpoints.
///
/// Fields absent from the response take their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Repository {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Repository owner.
    pub owner: Owner,

    /// Free-form description, `None` when unset.
    pub description: Option<String>,

    /// Topics attached to the repository.
    pub topics: Vec<String>,

    /// Visibility, usually `public`, `private` or `internal`.
    pub visibility: String,

    /// Whether the repository is a fork.
    pub fork: bool,
}

impl Repository {
    /// Returns true if the repository carries a non-empty description.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|description| !description.is_empty())
    }

    /// Returns true if at least one topic is set.
    #[must_use]
    pub fn has_topics(&self) -> bool {
        !self.topics.is_empty()
    }

    /// Returns true if `topic` is one of the repository topics (exact match).
    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// Returns true if the repository is publicly visible.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == "public"
    }
}

/// README metadata, only the name is needed to know one exists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Readme {
    pub name: String,
}

/// A repository collaborator. Only counted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Collaborator {
    pub login: String,
}

/// Community profile metrics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommunityProfile {
    /// Health score, from 0 to 100.
    pub health_percentage: i64,
}
