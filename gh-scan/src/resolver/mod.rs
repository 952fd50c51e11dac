//! Resolution of the GitHub repository behind the working directory.
//!
//! `GH_REPO` wins when set. Otherwise the git remotes are ranked
//! (`upstream`, `github`, `origin`, then the rest) and the first one on a
//! known GitHub host gives the repository.

mod error;
mod remote;

pub use error::ResolveError;
pub use remote::{normalize_host, parse_remote_url, parse_remotes, Remote, RemoteRepository};

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;
use url::Url;

/// Environment variable overriding the current repository.
pub const REPO_OVERRIDE_ENV: &str = "GH_REPO";

/// Default GitHub host.
pub const GITHUB_HOST: &str = "github.com";

/// Finds the repository to scan when none was named.
#[async_trait]
pub trait RepoResolver: Send + Sync {
    /// Returns the current repository as "owner/name".
    async fn resolve(&self) -> Result<String, ResolveError>;
}

/// Resolves the repository from `GH_REPO` or the git remotes.
#[derive(Debug, Clone)]
pub struct GitRemoteResolver {
    /// Directory `git` runs in, the process directory when `None`.
    working_dir: Option<PathBuf>,
    /// Hosts considered GitHub.
    hosts: Vec<String>,
}

impl Default for GitRemoteResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRemoteResolver {
    /// Creates a resolver for the process working directory and `github.com`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            working_dir: None,
            hosts: vec![GITHUB_HOST.to_string()],
        }
    }

    /// Runs `git` in `working_dir` instead of the process directory.
    #[must_use]
    pub fn with_working_dir(mut self, working_dir: PathBuf) -> Self {
        self.working_dir = Some(working_dir);
        self
    }

    /// Accepts remotes on an additional (enterprise) host.
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        let host = normalize_host(host);
        if !self.hosts.contains(&host) {
            self.hosts.push(host);
        }
        self
    }

    /// Accepts remotes on the host serving `api_url`.
    ///
    /// `https://ghe.example.com/api/v3` adds `ghe.example.com`; the
    /// `api.` prefix of hosted API domains is dropped. Unparsable URLs
    /// leave the host list unchanged.
    #[must_use]
    pub fn with_api_url(self, api_url: &str) -> Self {
        let Some(host) = Url::parse(api_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
        else {
            return self;
        };
        let host = host.strip_prefix("api.").unwrap_or(&host).to_string();
        self.with_host(&host)
    }

    /// Picks the best remote on a known host.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NoGitHubRemote`] if no remote matches.
    pub fn select(&self, remotes: &[Remote]) -> Result<String, ResolveError> {
        let mut ranked: Vec<&Remote> = remotes.iter().collect();
        ranked.sort_by_key(|remote| std::cmp::Reverse(remote.rank()));

        ranked
            .into_iter()
            .filter_map(|remote| parse_remote_url(&remote.url))
            .find(|repository| self.hosts.contains(&repository.host))
            .map(|repository| repository.full_name())
            .ok_or(ResolveError::NoGitHubRemote)
    }

    async fn list_remotes(&self) -> Result<Vec<Remote>, ResolveError> {
        let mut command = Command::new("git");
        command
            .args(["remote", "-v"])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|e| ResolveError::Git {
            message: format!("Failed to execute git remote: {e}"),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::Git {
                message: stderr.trim().to_string(),
            });
        }

        Ok(parse_remotes(&String::from_utf8_lossy(&output.stdout)))
    }
}

#[async_trait]
impl RepoResolver for GitRemoteResolver {
    async fn resolve(&self) -> Result<String, ResolveError> {
        if let Some(value) = std::env::var(REPO_OVERRIDE_ENV)
            .ok()
            .filter(|value| !value.is_empty())
        {
            debug!(value = %value, "Using GH_REPO override");
            return parse_override(&value);
        }

        let remotes = self.list_remotes().await?;
        debug!(count = remotes.len(), "Found git remotes");
        self.select(&remotes)
    }
}

/// Parses "owner/name" or "host/owner/name".
fn parse_override(value: &str) -> Result<String, ResolveError> {
    let parts: Vec<&str> = value.split('/').collect();
    match parts.as_slice() {
        [owner, name] | [_, owner, name] if !owner.is_empty() && !name.is_empty() => {
            Ok(format!("{owner}/{name}"))
        }
        _ => Err(ResolveError::InvalidOverride {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn remote(name: &str, url: &str) -> Remote {
        Remote {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn prefers_upstream_remote() {
        let remotes = [
            remote("origin", "git@github.com:coyote/buzz.git"),
            remote("upstream", "https://github.com/acme/buzz.git"),
        ];

        let resolved = GitRemoteResolver::new().select(&remotes).unwrap();

        assert_eq!(resolved, "acme/buzz");
    }

    #[test]
    fn skips_remotes_on_other_hosts() {
        let remotes = [
            remote("upstream", "https://gitlab.com/acme/buzz.git"),
            remote("mirror", "https://github.com/coyote/buzz.git"),
        ];

        let resolved = GitRemoteResolver::new().select(&remotes).unwrap();

        assert_eq!(resolved, "coyote/buzz");
    }

    #[test]
    fn no_github_remote() {
        let remotes = [remote("origin", "https://gitlab.com/acme/buzz.git")];

        let result = GitRemoteResolver::new().select(&remotes);

        assert!(result.unwrap_err().is_no_github_remote());
    }

    #[test]
    fn accepts_enterprise_host() {
        let remotes = [remote("origin", "git@git.example.com:team/tool.git")];

        let resolved = GitRemoteResolver::new()
            .with_host("git.example.com")
            .select(&remotes)
            .unwrap();

        assert_eq!(resolved, "team/tool");
    }

    #[test]
    fn api_url_adds_its_host() {
        let resolver = GitRemoteResolver::new()
            .with_api_url("https://ghe.example.com/api/v3")
            .with_api_url("https://api.github.com")
            .with_api_url("not a url");

        assert_eq!(resolver.hosts, ["github.com", "ghe.example.com"]);
    }

    #[test]
    fn parses_override_forms() {
        assert_eq!(parse_override("acme/buzz").unwrap(), "acme/buzz");
        assert_eq!(parse_override("github.com/acme/buzz").unwrap(), "acme/buzz");
        assert!(matches!(
            parse_override("buzz"),
            Err(ResolveError::InvalidOverride { .. })
        ));
        assert!(matches!(
            parse_override("acme/"),
            Err(ResolveError::InvalidOverride { .. })
        ));
    }

    #[test]
    fn override_wins_over_git() {
        let temp = TempDir::new().unwrap();
        let resolver = GitRemoteResolver::new().with_working_dir(temp.path().to_path_buf());

        temp_env::with_var(REPO_OVERRIDE_ENV, Some("acme/buzz"), || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let resolved = runtime.block_on(resolver.resolve()).unwrap();
            assert_eq!(resolved, "acme/buzz");
        });
    }

    #[test]
    fn fails_outside_a_repository() {
        let temp = TempDir::new().unwrap();
        let resolver = GitRemoteResolver::new().with_working_dir(temp.path().to_path_buf());

        temp_env::with_var_unset(REPO_OVERRIDE_ENV, || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            assert!(runtime.block_on(resolver.resolve()).is_err());
        });
    }
}
