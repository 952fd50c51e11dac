mod common;

use common::{repository_json, FakeGitHub, FixedResolver};
use gh_scan::{
    list_repositories, ConfigError, ListingError, Runner, RunnerError, ScanConfig, ScanScope,
    Target,
};
use serde_json::{json, Value};

const ORG_LISTING: &str = "/orgs/acme/repos?sort=full_name&per_page=100&page=1";
const USER_LISTING: &str = "/users/coyote/repos?sort=full_name&per_page=100&page=3";

fn org(topic: Option<&str>) -> ScanConfig {
    ScanConfig::new(Target::Organization("acme".to_string()))
        .with_topic(topic.map(str::to_string))
}

fn listing() -> Value {
    json!([
        repository_json("acme/anvil", Some("Heavy"), &["tools", "Iron"]),
        repository_json("acme/buzz", None, &["cartoon"]),
        repository_json("acme/rocket", None, &["tools"]),
    ])
}

#[tokio::test]
async fn lists_one_hundred_repositories_in_api_order() {
    let names: Vec<String> = (0..100).map(|i| format!("acme/repo-{:03}", 99 - i)).collect();
    let body = Value::Array(
        names
            .iter()
            .map(|name| repository_json(name, None, &[]))
            .collect(),
    );
    let client = FakeGitHub::new().with_json(ORG_LISTING, body);

    let repositories = list_repositories(&client, &org(None)).await.unwrap();

    let listed: Vec<&str> = repositories.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(listed.len(), 100);
    assert_eq!(listed, names);
}

#[tokio::test]
async fn topic_filter_is_exact() {
    let client = FakeGitHub::new().with_json(ORG_LISTING, listing());

    let tools = list_repositories(&client, &org(Some("tools"))).await.unwrap();
    let iron = list_repositories(&client, &org(Some("iron"))).await.unwrap();
    let absent = list_repositories(&client, &org(Some("space"))).await.unwrap();

    let names: Vec<&str> = tools.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["anvil", "rocket"]);
    assert!(iron.is_empty());
    assert!(absent.is_empty());
}

#[tokio::test]
async fn user_listing_uses_page() {
    let client = FakeGitHub::new().with_json(USER_LISTING, listing());
    let config = ScanConfig::new(Target::User("coyote".to_string())).with_page(3);

    let repositories = list_repositories(&client, &config).await.unwrap();

    assert_eq!(repositories.len(), 3);
    assert_eq!(client.requests(), [USER_LISTING]);
}

#[tokio::test]
async fn no_listing_without_org_or_user() {
    let client = FakeGitHub::new();

    let repositories = list_repositories(&client, &ScanConfig::new(Target::CurrentDirectory))
        .await
        .unwrap();

    assert!(repositories.is_empty());
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn listing_failure_is_propagated() {
    let client = FakeGitHub::new().with_status(ORG_LISTING, 500);

    let result = list_repositories(&client, &org(None)).await;

    let Err(ListingError::Api { owner, source }) = result else {
        panic!("expected a listing error");
    };
    assert_eq!(owner, "acme");
    assert_eq!(source.status(), Some(500));
}

#[tokio::test]
async fn runs_listing_scans_in_order() {
    let client = FakeGitHub::new()
        .with_json(ORG_LISTING, listing())
        .with_json("/repos/acme/anvil/readme", json!({ "name": "README" }))
        .with_json(
            "/repos/acme/anvil",
            repository_json("acme/anvil", Some("Heavy"), &["tools"]),
        )
        .with_status("/repos/acme/rocket", 500);
    let runner = Runner::new(org(Some("tools")), client).unwrap();

    let mut streamed = Vec::new();
    let report = runner
        .run_with(|outcome| streamed.push(outcome.full_name.clone()))
        .await
        .unwrap();

    assert_eq!(streamed, ["acme/anvil", "acme/rocket"]);
    assert_eq!(report.summary.repositories_listed, 2);
    assert_eq!(report.summary.repositories_scanned, 2);
    assert_eq!(report.summary.repositories_invalid, 1);

    let anvil = &report.outcomes[0];
    assert_eq!(anvil.scope, ScanScope::Listing);
    assert_eq!(
        anvil.text_block().unwrap(),
        "acme/anvil: README ☑️, description ☑️, topics ☑️, \n"
    );
    assert_eq!(report.outcomes[1].text_block().unwrap(), "\n");
}

#[tokio::test]
async fn explicit_repository_wins() {
    let client = FakeGitHub::new()
        .with_json("/repos/acme/buzz/readme", json!({ "name": "README" }))
        .with_json("/repos/acme/buzz", repository_json("acme/buzz", None, &[]));
    let target = Target::select(
        Some("acme/buzz".to_string()),
        Some("acme".to_string()),
        None,
    )
    .unwrap();
    let runner = Runner::new(ScanConfig::new(target), client)
        .unwrap()
        .with_resolver(FixedResolver(None));

    let report = runner.run().await.unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].message(), "acme/buzz: README ☑️, ");
    assert_eq!(report.summary.repositories_listed, 0);
}

#[tokio::test]
async fn current_directory_repository() {
    let client = FakeGitHub::new()
        .with_json("/repos/acme/buzz/readme", json!({ "name": "README" }))
        .with_json(
            "/repos/acme/buzz",
            repository_json("acme/buzz", None, &["cartoon"]),
        );
    let runner = Runner::new(ScanConfig::new(Target::CurrentDirectory), client)
        .unwrap()
        .with_resolver(FixedResolver(Some("acme/buzz".to_string())));

    let report = runner.run().await.unwrap();

    assert_eq!(
        report.outcomes[0].text_block().unwrap(),
        "README ☑️, topics ☑️, \n"
    );
}

#[tokio::test]
async fn unresolved_current_directory_exits_with_one() {
    let runner = Runner::new(ScanConfig::new(Target::CurrentDirectory), FakeGitHub::new())
        .unwrap()
        .with_resolver(FixedResolver(None));

    let error = runner.run().await.unwrap_err();

    assert!(matches!(error, RunnerError::Resolve(_)));
    assert_eq!(error.exit_code(), 1);
}

#[tokio::test]
async fn failed_listing_exits_with_two() {
    let client = FakeGitHub::new().with_status(ORG_LISTING, 500);
    let runner = Runner::new(org(None), client).unwrap();

    let error = runner.run().await.unwrap_err();

    assert!(matches!(error, RunnerError::Listing(_)));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn rejects_invalid_page() {
    let Err(error) = Runner::new(org(None).with_page(0), FakeGitHub::new()) else {
        panic!("page 0 must be rejected");
    };

    assert!(matches!(error, RunnerError::Config(ConfigError::InvalidPage { .. })));
    assert_eq!(error.exit_code(), 4);
}

#[test]
fn malformed_repository_has_its_own_exit_code() {
    let error = Target::select(Some("peps".to_string()), None, None).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidRepository { .. }));

    let error = RunnerError::from(error);
    assert_eq!(error.exit_code(), 4);
    assert_ne!(error.exit_code(), 2);
}
