//! Tests for analyze command

use hotsearch_analyzer::commands::analyze::analyze_file;
use hotsearch_analyzer::report::load_report;
use tempfile::tempdir;

#[test]
fn test_analyze_mock_feed_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("251222_weibo_analysis_data.json");
    std::fs::write(
        &input,
        r#"{"fetch_time": "2025-12-22T09:30:00", "total_count": 3, "data": [
            {"title": "个税新政策", "heat": 100, "tags": "", "rank": 1},
            {"title": "高铁春运抢票", "heat": "2,000", "tags": null, "rank": 2},
            {"title": "无关话题", "heat": 5, "rank": 3}
        ]}"#,
    )
    .unwrap();

    let (report, output) = analyze_file(&input, None, 20).unwrap();

    assert_eq!(output, dir.path().join("251222_weibo_analysis_results.json"));
    assert_eq!(report.total_topics, 3);
    assert_eq!(report.topics[0].idea.name, "智能旅行助手");
    assert_eq!(report.topics[0].heat, 2000);
    assert_eq!(load_report(&output).unwrap(), report);
}

#[test]
fn test_analyze_respects_topic_limit_and_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("feed.json");
    std::fs::write(&input, r#"[{"title": "a"}, {"title": "b"}, {"title": "c"}]"#).unwrap();
    let output = dir.path().join("out.json");

    let (report, written) = analyze_file(&input, Some(output.clone()), 2).unwrap();
    assert_eq!(written, output);
    assert_eq!(report.total_topics, 2);
}

#[test]
fn test_analyze_missing_input_fails() {
    let dir = tempdir().unwrap();
    assert!(analyze_file(&dir.path().join("nope.json"), None, 20).is_err());
}
