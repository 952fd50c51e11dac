//! Repository scan aggregation.
//!
//! A scan issues, in a fixed order, the README, repository, collaborators
//! and community profile requests for one repository and turns the answers
//! into [`Signal`] fragments. Expected negative answers (README 404,
//! collaborators 403) are signals, not errors. Other failures are logged and
//! the affected fragment is left out; only a failed repository lookup marks
//! the scan invalid.

mod outcome;
mod signal;

pub use outcome::{ScanOutcome, ScanScope};
pub use signal::{header, Signal};

use crate::config::ScanConfig;
use crate::github::{get, Collaborator, CommunityProfile, Readme, Repository, RestClient};
use tracing::{debug, info_span, warn, Instrument};

/// Scans one repository and gathers every signal.
///
/// Collaborators are only counted for a valid repository. The community
/// profile is only requested for public repositories, and for a single
/// repository only when it is not a fork.
pub async fn scan<C>(
    client: &C,
    config: &ScanConfig,
    full_name: &str,
    scope: ScanScope,
) -> ScanOutcome
where
    C: RestClient + ?Sized,
{
    let span = info_span!("scan", repo = %full_name);

    async {
        let mut outcome = scan_repository(client, config, full_name, scope).await;
        if !outcome.valid {
            return outcome;
        }
        let wants_score = outcome
            .repository
            .as_ref()
            .is_some_and(|repository| wants_community_score(repository, scope));

        let collaborators = scan_collaborators(client, config, full_name).await;
        outcome.signals.push_str(&collaborators);

        if wants_score {
            let score = scan_community_score(client, config, full_name).await;
            outcome.signals.push_str(&score);
        }

        debug!(valid = outcome.valid, "Scan complete");
        outcome
    }
    .instrument(span)
    .await
}

/// Checks the README, then fetches the repository metadata.
///
/// The outcome is invalid, and keeps only the README signal, when the
/// repository lookup fails.
pub async fn scan_repository<C>(
    client: &C,
    config: &ScanConfig,
    full_name: &str,
    scope: ScanScope,
) -> ScanOutcome
where
    C: RestClient + ?Sized,
{
    let verbose = config.verbose();
    let mut outcome = ScanOutcome::new(full_name, header(full_name, config), scope);

    match get::<Readme, _>(client, &format!("/repos/{full_name}/readme")).await {
        Ok(readme) => {
            let present = !readme.name.is_empty();
            outcome
                .signals
                .push_str(&Signal::Readme { present }.render(verbose));
        }
        Err(e) if e.is_not_found() => {
            outcome
                .signals
                .push_str(&Signal::Readme { present: false }.render(verbose));
        }
        Err(e) => {
            warn!(repo = %full_name, error = %e, "Failed to check README");
        }
    }

    let repository: Repository = match get(client, &format!("/repos/{full_name}")).await {
        Ok(repository) => repository,
        Err(e) => {
            warn!(repo = %full_name, error = %e, "Failed to fetch repository");
            return outcome;
        }
    };

    if repository.has_description() {
        outcome.signals.push_str(&Signal::Description.render(verbose));
    }
    if repository.has_topics() {
        outcome.signals.push_str(&Signal::Topics.render(verbose));
    }

    outcome.repository = Some(repository);
    outcome.valid = true;
    outcome
}

/// Counts collaborators.
///
/// Returns an empty fragment when the list is not visible to the caller
/// (403) or cannot be fetched.
pub async fn scan_collaborators<C>(client: &C, config: &ScanConfig, full_name: &str) -> String
where
    C: RestClient + ?Sized,
{
    let route = format!("/repos/{full_name}/collaborators");
    match get::<Vec<Collaborator>, _>(client, &route).await {
        Ok(collaborators) => Signal::Collaborators(collaborators.len()).render(config.verbose()),
        Err(e) if e.is_forbidden() => {
            debug!(repo = %full_name, "Collaborators not visible, skipping");
            String::new()
        }
        Err(e) => {
            warn!(repo = %full_name, error = %e, "Failed to list collaborators");
            String::new()
        }
    }
}

/// Fetches the community profile health percentage.
///
/// Returns an empty fragment if the profile cannot be fetched.
pub async fn scan_community_score<C>(client: &C, config: &ScanConfig, full_name: &str) -> String
where
    C: RestClient + ?Sized,
{
    let route = format!("/repos/{full_name}/community/profile");
    match get::<CommunityProfile, _>(client, &route).await {
        Ok(profile) => Signal::CommunityScore(profile.health_percentage).render(config.verbose()),
        Err(e) => {
            warn!(repo = %full_name, error = %e, "Failed to fetch community profile");
            String::new()
        }
    }
}

/// Community profiles exist for public repositories; a single repository
/// additionally has to be a source repository.
fn wants_community_score(repository: &Repository, scope: ScanScope) -> bool {
    match scope {
        ScanScope::Listing => repository.is_public(),
        ScanScope::SingleRepository => repository.is_public() && !repository.fork,
    }
}
