//! CLI integration tests against a mock platform API.
//!
//! Each test runs the compiled binary with an isolated HOME so session
//! state never leaks between tests or into the real user's data dir.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary with an isolated HOME.
fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pawhub"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env_remove("PAWHUB_API");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

fn pet_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "name": name,
        "category": "cat",
        "shortDescription": "",
        "adopted": false
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_then_whoami_uses_stored_session() {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer cli-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u1",
            "name": "Alice",
            "email": "alice@example.com"
        })))
        .mount(&server)
        .await;

    let url = api_url(&server);
    run_cli_success(
        &["login", "--api", &url, "--token", "cli-token"],
        home.path(),
    );

    // Whoami picks the persisted credential back up.
    let stdout = run_cli_success(&["whoami"], home.path());
    assert!(stdout.contains("alice@example.com"));
    assert!(stdout.contains(&url));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejects_bad_credential() {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid token"
        })))
        .mount(&server)
        .await;

    let url = api_url(&server);
    let output = run_cli(&["login", "--api", &url, "--token", "bogus"], home.path());
    assert!(!output.status.success());

    // Nothing was persisted, so whoami still fails.
    let output = run_cli(&["whoami"], home.path());
    assert!(!output.status.success());
}

#[test]
fn test_no_session_error() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli(&["whoami"], home.path());
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No active session") || stderr.contains("login"),
        "Expected 'no session' error, got: {}",
        stderr
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pets_list_feeds_through_pages() {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/pets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [pet_json("p3", "Clover"), pet_json("p4", "Daisy")],
            "nextPage": null,
            "total": 4
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [pet_json("p1", "Apollo"), pet_json("p2", "Biscuit")],
            "nextPage": 2,
            "total": 4
        })))
        .mount(&server)
        .await;

    let url = api_url(&server);
    let stdout = run_cli_success(
        &["pets", "list", "--api", &url, "--pages", "2"],
        home.path(),
    );

    // One compact JSON line per pet, both pages accumulated in order.
    let names: Vec<_> = stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| {
            serde_json::from_str::<serde_json::Value>(l).unwrap()["name"]
                .as_str()
                .unwrap()
                .to_string()
        })
        .collect();
    assert_eq!(names, ["Apollo", "Biscuit", "Clover", "Daisy"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pets_list_stops_at_page_budget() {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [pet_json("p1", "Apollo")],
            "nextPage": 2,
            "total": 9
        })))
        .mount(&server)
        .await;

    let url = api_url(&server);
    let output = run_cli(&["pets", "list", "--api", &url], home.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| !l.is_empty()).count(), 1);

    // Only the first page was requested.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("More available"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_campaign_show_renders_metrics() {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/donations/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "c1",
            "petName": "Mochi",
            "maxAmount": 500.0,
            "currentAmount": 125.0,
            "lastDate": "2099-12-31T00:00:00Z",
            "donations": [
                {"_id": "d1", "amount": 125.0, "donorName": "Sam", "refundRequested": false}
            ]
        })))
        .mount(&server)
        .await;

    let url = api_url(&server);
    let stdout = run_cli_success(
        &["campaigns", "show", "c1", "--api", &url],
        home.path(),
    );

    assert!(stdout.contains("Mochi"));
    assert!(stdout.contains("$125.00 of $500.00 (25%)"));
    assert!(stdout.contains("Sam"));
}
