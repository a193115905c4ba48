//! Tests for the library entry point.

mod helpers;

use std::time::Duration;

use helpers::{mount_page, RICH_PAGE};
use toolscout::{run_collection, Config, ExtractionProfile};
use wiremock::MockServer;

#[tokio::test]
async fn test_run_collection_writes_reports() {
    let server = MockServer::start().await;
    mount_page(&server, "/planform", RICH_PAGE, Duration::ZERO).await;

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tools.txt");
    std::fs::write(
        &input,
        format!(
            "# refresh list\nplanform {}/planform Planform\nbroken http://[oops.bad\n",
            server.uri()
        ),
    )
    .unwrap();

    let config = Config {
        input,
        output_dir: dir.path().join("out"),
        inter_batch_delay: Duration::ZERO,
        timeout_seconds: 5,
        profile: ExtractionProfile::Enhanced,
        ..Default::default()
    };
    let report = run_collection(config).await.unwrap();

    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.successful, 1);
    assert!(report.results_path.ends_with("collected_tool_info.json"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report.results_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["records"][0]["name"], "Planform");
    assert_eq!(json["records"][1]["tier"], 0);

    let markdown = std::fs::read_to_string(&report.markdown_path).unwrap();
    assert!(markdown.contains("### 1. Planform"));
    assert!(dir.path().join("out/collection_progress.json").exists());
}

#[tokio::test]
async fn test_run_collection_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("absent.json"),
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let error = run_collection(config).await.unwrap_err();
    assert!(format!("{error:#}").contains("Failed to load tool list"));
}
