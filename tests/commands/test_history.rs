//! Tests for history command

use hotsearch_analyzer::commands::analyze::analyze_file;
use hotsearch_analyzer::commands::history::collect;
use tempfile::tempdir;

#[test]
fn test_history_lists_analyzed_runs() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("251222_weibo_analysis_data.json");
    std::fs::write(&input, r#"[{"title": "华为发布新手机"}, {"title": "法院判决"}]"#).unwrap();
    analyze_file(&input, None, 20).unwrap();

    let entries = collect(dir.path(), 3).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].total_topics, 2);
    assert_eq!(entries[0].avg_score, 86.5);
    assert_eq!(entries[0].top_idea.as_deref(), Some("华为配件管家"));
}

#[test]
fn test_history_empty_dir() {
    let dir = tempdir().unwrap();
    assert!(collect(dir.path(), 3).unwrap().is_empty());
}
