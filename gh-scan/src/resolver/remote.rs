//! Git remote parsing.

use url::Url;

/// A git remote, as listed by `git remote -v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// Remote name (e.g. "origin").
    pub name: String,

    /// Fetch URL.
    pub url: String,
}

impl Remote {
    /// Preference when several remotes point at GitHub; higher wins.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self.name.as_str() {
            "upstream" => 3,
            "github" => 2,
            "origin" => 1,
            _ => 0,
        }
    }
}

/// A repository location parsed from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    /// Normalized host name.
    pub host: String,

    /// Repository owner.
    pub owner: String,

    /// Repository name, without a `.git` suffix.
    pub name: String,
}

impl RemoteRepository {
    /// Returns "owner/name".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Parses `git remote -v` output, keeping one fetch URL per remote.
#[must_use]
pub fn parse_remotes(output: &str) -> Vec<Remote> {
    let mut remotes: Vec<Remote> = Vec::new();

    for line in output.lines() {
        let mut fields = line.split_whitespace();
        let (Some(name), Some(url)) = (fields.next(), fields.next()) else {
            continue;
        };
        if fields.next().is_some_and(|kind| kind != "(fetch)") {
            continue;
        }
        if remotes.iter().any(|remote| remote.name == name) {
            continue;
        }
        remotes.push(Remote {
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    remotes
}

/// Parses an https, ssh or scp-like (`git@host:owner/name.git`) remote URL.
#[must_use]
pub fn parse_remote_url(remote_url: &str) -> Option<RemoteRepository> {
    let url = if remote_url.contains("://") {
        Url::parse(remote_url).ok()?
    } else {
        let (user_host, path) = remote_url.split_once(':')?;
        if user_host.contains('/') {
            return None;
        }
        Url::parse(&format!("ssh://{user_host}/{path}")).ok()?
    };

    let host = normalize_host(url.host_str()?);
    let segments: Vec<&str> = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .collect();

    let [owner, name] = segments.as_slice() else {
        return None;
    };
    let name = name.strip_suffix(".git").unwrap_or(*name);
    if name.is_empty() {
        return None;
    }

    Some(RemoteRepository {
        host,
        owner: (*owner).to_string(),
        name: name.to_string(),
    })
}

/// Lowercases a host and folds the GitHub aliases onto `github.com`.
#[must_use]
pub fn normalize_host(host: &str) -> String {
    let host = host.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host == "ssh.github.com" {
        "github.com".to_string()
    } else {
        host.to_string()
    }
}
