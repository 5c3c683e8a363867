//! End-to-end tests for the `contributions` command against a mock calendar host.

use contribs_lib::Host;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CALENDAR_FIXTURE: &str = include_str!("fixtures/calendar.html");

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, _code: i32) {}
}

async fn calendar_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/contributions"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_console_output() {
    let server = calendar_server(ResponseTemplate::new(200).set_body_string(CALENDAR_FIXTURE)).await;
    let uri = server.uri();

    let mut host = TestHost::new();
    let result = contribs_lib::run(
        &mut host,
        ["contribs", "contributions", "octocat", "--base-url", &uri, "--no-cache", "--color", "never"],
    )
    .await;

    assert!(result.is_ok(), "contributions command failed: {result:?}");

    let output = host.output_str();
    assert!(output.starts_with("30 contributions in the last year for octocat\n"), "unexpected output:\n{output}");
    assert!(output.contains("Current streak: 1 day"));
    assert!(output.contains("Longest streak: 4 days"));
    assert!(output.contains("Less"));
    assert!(host.error_str().is_empty());
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_file_reports_suppress_console() {
    let server = calendar_server(ResponseTemplate::new(200).set_body_string(CALENDAR_FIXTURE)).await;
    let uri = server.uri();

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let json_path = temp_dir.path().join("calendar.json");
    let html_path = temp_dir.path().join("calendar.html");
    let cache_dir = temp_dir.path().join("cache");

    let mut host = TestHost::new();
    let result = contribs_lib::run(
        &mut host,
        [
            "contribs",
            "contributions",
            "octocat",
            "--base-url",
            &uri,
            "--cache-dir",
            cache_dir.to_str().expect("valid path"),
            "--json",
            json_path.to_str().expect("valid path"),
            "--html",
            html_path.to_str().expect("valid path"),
        ],
    )
    .await;

    assert!(result.is_ok(), "contributions command failed: {result:?}");
    assert!(host.output_str().is_empty(), "console output should be suppressed");

    let json_content = std::fs::read_to_string(&json_path).expect("read JSON");
    let parsed: serde_json::Value = serde_json::from_str(&json_content).expect("valid JSON");
    assert_eq!(parsed["username"], "octocat");
    assert_eq!(parsed["source"], "network");
    assert_eq!(parsed["totalContributions"], 30);
    assert_eq!(parsed["currentStreak"], 1);
    assert_eq!(parsed["longestStreak"], 4);
    assert_eq!(parsed["weeks"].as_array().expect("weeks array").len(), 2);

    let html = std::fs::read_to_string(&html_path).expect("read HTML");
    assert!(html.contains("<title>Contributions of octocat</title>"));
    assert_eq!(html.matches("data-date=").count(), 10);

    let cached = std::fs::read_dir(&cache_dir).expect("cache dir should exist").count();
    assert_eq!(cached, 1);
}

#[tokio::test]
async fn test_unreachable_host_shows_sample_data() {
    let server = calendar_server(ResponseTemplate::new(503)).await;
    let uri = server.uri();

    let mut host = TestHost::new();
    let result = contribs_lib::run(
        &mut host,
        ["contribs", "contributions", "octocat", "--base-url", &uri, "--no-cache", "--color", "never"],
    )
    .await;

    assert!(result.is_ok(), "contributions command failed: {result:?}");
    assert!(host.error_str().contains("showing sample data"));
    assert!(host.output_str().contains("Current streak: 12 days   Longest streak: 47 days"));
}

#[tokio::test]
async fn test_invalid_base_url_is_an_error() {
    let mut host = TestHost::new();
    let result = contribs_lib::run(
        &mut host,
        ["contribs", "contributions", "octocat", "--base-url", "ftp://example.com", "--no-cache"],
    )
    .await;

    assert!(result.is_err());
}
