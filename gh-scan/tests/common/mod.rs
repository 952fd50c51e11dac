//! In-memory GitHub API used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use gh_scan::{ApiError, RepoResolver, ResolveError, RestClient};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers routes from a fixed table; unknown routes are 404.
#[derive(Default)]
pub struct FakeGitHub {
    responses: HashMap<String, Result<Value, u16>>,
    requests: Mutex<Vec<String>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, route: &str, body: Value) -> Self {
        self.responses.insert(route.to_string(), Ok(body));
        self
    }

    pub fn with_status(mut self, route: &str, status: u16) -> Self {
        self.responses.insert(route.to_string(), Err(status));
        self
    }

    /// Routes requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestClient for FakeGitHub {
    async fn get_json(&self, route: &str) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(route.to_string());
        match self.responses.get(route) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ApiError::Status {
                status: *status,
                message: status_text(*status).to_string(),
            }),
            None => Err(ApiError::Status {
                status: 404,
                message: "Not Found".to_string(),
            }),
        }
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Error",
    }
}

/// Resolver returning a fixed answer.
pub struct FixedResolver(pub Option<String>);

#[async_trait]
impl RepoResolver for FixedResolver {
    async fn resolve(&self) -> Result<String, ResolveError> {
        self.0.clone().ok_or(ResolveError::NoGitHubRemote)
    }
}

/// Repository body as returned by `GET /repos/{owner}/{repo}`.
pub fn repository_json(full_name: &str, description: Option<&str>, topics: &[&str]) -> Value {
    let (owner, name) = full_name.split_once('/').unwrap();
    json!({
        "name": name,
        "full_name": full_name,
        "owner": { "login": owner },
        "description": description,
        "topics": topics,
        "visibility": "public",
        "fork": false
    })
}
