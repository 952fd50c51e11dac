//! Scan configuration.
//!
//! A [`ScanConfig`] is built once from the command line and only read
//! afterwards.

mod error;

pub use error::ConfigError;

/// Number of repositories requested per listing page.
pub const REPOSITORIES_PER_PAGE: u8 = 100;

/// What to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single repository in "owner/name" format.
    Repository(String),

    /// Every repository of an organization (one page).
    Organization(String),

    /// Every repository of a user (one page).
    User(String),

    /// The GitHub repository of the current working directory.
    CurrentDirectory,
}

impl Target {
    /// Picks the target from the optional selection flags.
    ///
    /// An explicit repository wins over an organization or user listing;
    /// with none of them set the current directory is scanned. Empty values
    /// count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingTargets`] when both an organization
    /// and a user are given, and [`ConfigError::InvalidRepository`] for a
    /// repository that is not "owner/name".
    pub fn select(
        repo: Option<String>,
        org: Option<String>,
        user: Option<String>,
    ) -> Result<Self, ConfigError> {
        let repo = repo.filter(|value| !value.is_empty());
        let org = org.filter(|value| !value.is_empty());
        let user = user.filter(|value| !value.is_empty());

        if let (Some(org), Some(user)) = (&org, &user) {
            return Err(ConfigError::ConflictingTargets {
                org: org.clone(),
                user: user.clone(),
            });
        }

        match (repo, org, user) {
            (Some(repo), _, _) => {
                validate_full_name(&repo)?;
                Ok(Self::Repository(repo))
            }
            (None, Some(org), _) => Ok(Self::Organization(org)),
            (None, None, Some(user)) => Ok(Self::User(user)),
            (None, None, None) => Ok(Self::CurrentDirectory),
        }
    }

    /// Returns true if the target was named explicitly on the command line.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        !matches!(self, Self::CurrentDirectory)
    }
}

/// Checks that `value` looks like "owner/name".
fn validate_full_name(value: &str) -> Result<(), ConfigError> {
    match value.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(ConfigError::InvalidRepository {
            value: value.to_string(),
        }),
    }
}

/// Configuration for a scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// What to scan.
    target: Target,
    /// Only keep listed repositories carrying this topic.
    topic: Option<String>,
    /// Listing page, starting at 1.
    page: u32,
    /// Several lines per repository instead of a one-liner.
    verbose: bool,
}

impl ScanConfig {
    /// Creates a compact-mode configuration for the first page of `target`.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self {
            target,
            topic: None,
            page: 1,
            verbose: false,
        }
    }

    /// Sets the topic filter. An empty topic disables filtering.
    #[must_use]
    pub fn with_topic(mut self, topic: Option<String>) -> Self {
        self.topic = topic.filter(|topic| !topic.is_empty());
        self
    }

    /// Sets the listing page.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Enables or disables verbose output.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Checks the configuration before a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPage`] for page 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page == 0 {
            return Err(ConfigError::InvalidPage { page: self.page });
        }
        Ok(())
    }

    /// Returns the scan target.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Returns the topic filter, if any.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Returns the listing page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns whether verbose output is enabled.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
