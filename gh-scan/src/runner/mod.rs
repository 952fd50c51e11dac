//! Orchestrates a scan run.
//!
//! An explicit repository is scanned on its own. Otherwise an organization
//! or user listing is scanned repository by repository, and without any
//! target the repository of the current directory is used. Requests are
//! issued one after another.

mod error;

pub use error::RunnerError;

use crate::config::{ScanConfig, Target};
use crate::github::RestClient;
use crate::listing::list_repositories;
use crate::resolver::{GitRemoteResolver, RepoResolver};
use crate::scan::{scan, ScanOutcome, ScanScope};
use crate::summary::RunSummary;
use tracing::info;

/// Everything a run produced.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// One outcome per scanned repository, in scan order.
    pub outcomes: Vec<ScanOutcome>,

    /// Counters for the run.
    pub summary: RunSummary,
}

/// Runs scans against a [`RestClient`].
pub struct Runner<C, R = GitRemoteResolver> {
    config: ScanConfig,
    client: C,
    resolver: R,
}

impl<C: RestClient> Runner<C> {
    /// Builds a runner resolving the current repository from git remotes.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the configuration is invalid.
    pub fn new(config: ScanConfig, client: C) -> Result<Self, RunnerError> {
        config.validate()?;
        Ok(Self {
            config,
            client,
            resolver: GitRemoteResolver::new(),
        })
    }
}

impl<C: RestClient, R: RepoResolver> Runner<C, R> {
    /// Replaces the current repository resolver.
    #[must_use]
    pub fn with_resolver<T: RepoResolver>(self, resolver: T) -> Runner<C, T> {
        Runner {
            config: self.config,
            client: self.client,
            resolver,
        }
    }

    /// Executes the run and collects every outcome.
    ///
    /// # Errors
    ///
    /// See [`Runner::run_with`].
    pub async fn run(&self) -> Result<RunReport, RunnerError> {
        self.run_with(|_| {}).await
    }

    /// Executes the run, handing each outcome to `on_outcome` as soon as the
    /// repository is scanned.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Listing`] if the organization or user listing
    /// fails and [`RunnerError::Resolve`] if the current repository cannot
    /// be determined. Per-repository failures are part of the outcomes.
    pub async fn run_with<F>(&self, mut on_outcome: F) -> Result<RunReport, RunnerError>
    where
        F: FnMut(&ScanOutcome),
    {
        let mut report = RunReport::default();
        let mut record = |outcome: ScanOutcome, report: &mut RunReport| {
            on_outcome(&outcome);
            report.summary.record_outcome(&outcome);
            report.outcomes.push(outcome);
        };

        match self.config.target() {
            Target::Organization(_) | Target::User(_) => {
                let repositories = list_repositories(&self.client, &self.config).await?;
                report.summary.repositories_listed = repositories.len();

                for repository in &repositories {
                    let outcome = scan(
                        &self.client,
                        &self.config,
                        &repository.full_name,
                        ScanScope::Listing,
                    )
                    .await;
                    record(outcome, &mut report);
                }
            }
            Target::Repository(full_name) => {
                let outcome = scan(
                    &self.client,
                    &self.config,
                    full_name,
                    ScanScope::SingleRepository,
                )
                .await;
                record(outcome, &mut report);
            }
            Target::CurrentDirectory => {
                if self.config.verbose() {
                    println!("(current repo)");
                }
                let full_name = self.resolver.resolve().await?;
                let outcome = scan(
                    &self.client,
                    &self.config,
                    &full_name,
                    ScanScope::SingleRepository,
                )
                .await;
                record(outcome, &mut report);
            }
        }

        info!(
            listed = report.summary.repositories_listed,
            scanned = report.summary.repositories_scanned,
            invalid = report.summary.repositories_invalid,
            "Run complete"
        );
        Ok(report)
    }
}
