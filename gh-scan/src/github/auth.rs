//! Token lookup for the GitHub client.
//!
//! Authentication is delegated: the token comes from the environment the
//! same way the `gh` CLI reads it, or from `gh auth token` itself.

use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Returns the first non-empty token found in [`TOKEN_ENV_VARS`].
#[must_use]
pub fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Asks the `gh` CLI for the token of the logged-in account.
///
/// Returns `None` when `gh` is missing or not authenticated.
pub async fn token_from_gh_cli() -> Option<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        debug!(
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "gh auth token failed"
        );
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}

/// Resolves the token to use: explicit value, then environment, then `gh`.
pub async fn resolve_token(explicit: Option<String>) -> Option<String> {
    if let Some(token) = explicit.filter(|token| !token.trim().is_empty()) {
        return Some(token);
    }
    if let Some(token) = token_from_env() {
        debug!("Using token from environment");
        return Some(token);
    }
    let token = token_from_gh_cli().await;
    if token.is_some() {
        debug!("Using token from gh CLI");
    }
    token
}
