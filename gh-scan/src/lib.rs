#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod build_info;
pub mod config;
pub mod github;
pub mod listing;
pub mod resolver;
pub mod runner;
pub mod scan;
pub mod summary;

pub use build_info::BuildInfo;
pub use config::{ConfigError, ScanConfig, Target, REPOSITORIES_PER_PAGE};
pub use github::{
    get, resolve_token, ApiError, Collaborator, CommunityProfile, GitHubClient, Owner, Readme,
    Repository, RestClient,
};
pub use listing::{filter_by_topic, list_repositories, ListingError};
pub use resolver::{GitRemoteResolver, RepoResolver, ResolveError};
pub use runner::{RunReport, Runner, RunnerError};
pub use scan::{
    scan, scan_collaborators, scan_community_score, scan_repository, ScanOutcome, ScanScope,
    Signal,
};
pub use summary::RunSummary;
