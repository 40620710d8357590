//! Tests for the run pipeline against a mocked feed

use std::path::Path;
use std::sync::Arc;

use chrono::{Local, TimeZone};
use hotsearch_analyzer::analysis::{Clock, FixedClock};
use hotsearch_analyzer::commands::run::{execute, RunOptions};
use hotsearch_analyzer::fetch::{load_topics, FetcherConfig};
use hotsearch_analyzer::report::load_report;
use httpmock::prelude::*;
use serde_json::json;
use tempfile::tempdir;

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Local.with_ymd_and_hms(2025, 12, 22, 9, 30, 0).unwrap(),
    ))
}

fn options(url: String, out_dir: &Path) -> RunOptions {
    RunOptions {
        topics: 2,
        prefix: "weibo_analysis".to_string(),
        out_dir: out_dir.to_path_buf(),
        top_n: 5,
        html_template: None,
        fetcher: FetcherConfig {
            api_key: Some("test_key".to_string()),
            api_url: Some(url),
            timeout_secs: 5,
        },
    }
}

#[tokio::test]
async fn test_run_writes_all_artifacts() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/weibohot/index")
                .query_param("key", "test_key");
            then.status(200).json_body(json!({
                "code": 200,
                "msg": "success",
                "result": {"list": [
                    {"hotword": "法院判决", "hotwordnum": "300", "hottag": ""},
                    {"hotword": "华为发布新手机", "hotwordnum": "200", "hottag": "新"},
                    {"hotword": "成都地震", "hotwordnum": "100", "hottag": "沸"}
                ]}
            }));
        })
        .await;

    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("reports");
    let artifacts = execute(&options(server.url("/weibohot/index"), &out_dir), clock())
        .await
        .unwrap();

    assert_eq!(artifacts.fetched, 3);
    assert_eq!(
        artifacts.paths.data,
        out_dir.join("251222_weibo_analysis_data.json")
    );
    for path in [
        &artifacts.paths.data,
        &artifacts.paths.results,
        &artifacts.paths.html,
        &artifacts.paths.markdown,
    ] {
        assert!(path.exists(), "missing {}", path.display());
    }

    // The snapshot keeps every fetched topic; analysis honours the limit.
    assert_eq!(load_topics(&artifacts.paths.data).unwrap().len(), 3);
    let report = load_report(&artifacts.paths.results).unwrap();
    assert_eq!(report.total_topics, 2);
    assert_eq!(report.topics[0].idea.name, "华为配件管家");
    assert_eq!(report.topics[0].rank, 2);
    assert_eq!(report.topics[1].rank, 1);

    let html = std::fs::read_to_string(&artifacts.paths.html).unwrap();
    assert!(html.contains("2025年12月22日 09:30"));
    let md = std::fs::read_to_string(&artifacts.paths.markdown).unwrap();
    assert!(md.contains("华为配件管家"));
}

#[tokio::test]
async fn test_run_fails_on_empty_feed_without_writing() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/weibohot/index");
            then.status(200)
                .json_body(json!({"code": 200, "result": {"list": []}}));
        })
        .await;

    let dir = tempdir().unwrap();
    let result = execute(&options(server.url("/weibohot/index"), dir.path()), clock()).await;

    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_run_fails_on_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/weibohot/index");
            then.status(200)
                .json_body(json!({"code": 230, "msg": "key错误或为空"}));
        })
        .await;

    let dir = tempdir().unwrap();
    let err = execute(&options(server.url("/weibohot/index"), dir.path()), clock())
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("230"));
}

#[tokio::test]
async fn test_run_rejects_template_without_topics_slot() {
    let dir = tempdir().unwrap();
    let template = dir.path().join("bad.html");
    std::fs::write(&template, "<html>{{date}}</html>").unwrap();

    let mut opts = options("http://127.0.0.1:9/unused".to_string(), dir.path());
    opts.html_template = Some(template);

    let err = execute(&opts, clock()).await.unwrap_err();
    assert!(format!("{:#}", err).contains("{{topics}}"));
}
