//! CLI for gh-scan.
//!
//! Scans GitHub repositories for a README, a description, topics,
//! collaborators and a community profile score. Results are printed as text
//! or browsed in an interactive table.

mod tui;

use clap::Parser;
use gh_scan::{
    resolve_token, BuildInfo, GitHubClient, GitRemoteResolver, RunReport, Runner, RunnerError,
    ScanConfig, Target,
};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tui::TableModel;

/// Hint printed when the working directory has no GitHub remote.
const NO_REMOTE_HINT: &str = "If current folder is related to a GitHub repository, please check 'gh auth status' and 'gh config list'.";

/// Exit code for failures before any request is made.
const SETUP_FAILURE: u8 = 3;

/// gh-scan - Report the hygiene of GitHub repositories.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Repository to scan, as "owner/name".
    #[arg(long, value_name = "OWNER/NAME")]
    repo: Option<String>,

    /// Scan the repositories of an organization.
    #[arg(long, conflicts_with = "user")]
    org: Option<String>,

    /// Scan the repositories of a user.
    #[arg(long)]
    user: Option<String>,

    /// Only scan listed repositories carrying this topic.
    #[arg(long)]
    topic: Option<String>,

    /// Listing page (100 repositories per page).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// One line per signal instead of a one-liner.
    #[arg(long)]
    verbose: bool,

    /// Show results in an interactive table.
    #[arg(long)]
    table: bool,

    /// Print build information and exit.
    #[arg(long)]
    version: bool,

    /// GitHub token. Falls back to GITHUB_TOKEN, then `gh auth token`.
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL (GitHub Enterprise).
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    if args.version {
        println!("{}", build_info());
        return ExitCode::SUCCESS;
    }

    // octocrab's rustls needs a process-wide crypto provider
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let runner = match build_runner(&args).await {
        Ok(runner) => runner,
        Err(code) => return code,
    };

    let result = if args.table {
        run_table(&runner).await
    } else {
        runner
            .run_with(|outcome| {
                if let Some(block) = outcome.text_block() {
                    print!("{block}");
                }
            })
            .await
            .map(|report| {
                warn_on_failures(&report);
                ExitCode::SUCCESS
            })
    };

    result.unwrap_or_else(|e| {
        error!(error = %e, "Scan failed");
        if let RunnerError::Resolve(resolve) = &e {
            if resolve.is_no_github_remote() {
                eprintln!("{NO_REMOTE_HINT}");
            }
        }
        ExitCode::from(e.exit_code())
    })
}

/// Initializes tracing with environment filter support.
///
/// Logs are compact single lines without module paths. `RUST_LOG` sets the
/// level and defaults to "warn" so text output stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn build_info() -> BuildInfo {
    BuildInfo::new(
        option_env!("GH_SCAN_REVISION"),
        option_env!("GH_SCAN_COMMIT_TIME"),
        option_env!("GH_SCAN_DIRTY"),
    )
}

/// Validates the flags and builds the API client and runner.
async fn build_runner(args: &Args) -> Result<Runner<GitHubClient>, ExitCode> {
    let target = Target::select(args.repo.clone(), args.org.clone(), args.user.clone())
        .map_err(|e| {
            error!(error = %e, "Invalid target");
            ExitCode::from(RunnerError::from(e).exit_code())
        })?;
    let config = ScanConfig::new(target)
        .with_topic(args.topic.clone())
        .with_page(args.page)
        .with_verbose(args.verbose);

    let token = resolve_token(args.token.clone()).await;
    let client = GitHubClient::new(token, args.api_url.as_deref()).map_err(|e| {
        error!(error = %e, "Failed to create GitHub client");
        ExitCode::from(SETUP_FAILURE)
    })?;

    let mut resolver = GitRemoteResolver::new();
    if let Some(api_url) = &args.api_url {
        resolver = resolver.with_api_url(api_url);
    }

    let runner = Runner::new(config, client).map_err(|e| {
        error!(error = %e, "Invalid configuration");
        ExitCode::from(e.exit_code())
    })?;
    Ok(runner.with_resolver(resolver))
}

/// Logs repositories that could not be scanned.
fn warn_on_failures(report: &RunReport) {
    let summary = &report.summary;
    if summary.has_failures() {
        warn!(
            invalid = summary.repositories_invalid,
            scanned = summary.repositories_scanned,
            "Some repositories could not be scanned"
        );
    }
}

/// Scans everything, then lets the user browse the results.
async fn run_table(runner: &Runner<GitHubClient>) -> Result<ExitCode, RunnerError> {
    let report = runner.run().await?;
    warn_on_failures(&report);
    let RunReport { outcomes, .. } = report;

    match tui::browse(TableModel::from_outcomes(&outcomes)) {
        Ok(model) => {
            for repository in &model.selected {
                println!("{repository}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Table display failed");
            Ok(ExitCode::from(SETUP_FAILURE))
        }
    }
}
