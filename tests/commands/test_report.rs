//! Tests for report command

use std::path::Path;
use std::sync::Arc;

use chrono::{Local, TimeZone};
use hotsearch_analyzer::analysis::{AnalyzerConfig, FixedClock, Topic, TopicAnalyzer};
use hotsearch_analyzer::commands::report::{render, ReportOptions};
use hotsearch_analyzer::report::save_report;
use tempfile::tempdir;

fn write_results(path: &Path) {
    let clock = FixedClock(Local.with_ymd_and_hms(2025, 12, 22, 9, 30, 0).unwrap());
    let report = TopicAnalyzer::with_clock(AnalyzerConfig::default(), Arc::new(clock))
        .analyze_all(&[
            Topic::new("华为发布新手机", 10, "", 1),
            Topic::new("福原爱离婚", 5, "", 2),
        ]);
    save_report(&report, path).unwrap();
}

fn options(input: &Path) -> ReportOptions {
    ReportOptions {
        input: input.to_path_buf(),
        html: None,
        markdown: None,
        csv: None,
        top_n: 5,
        html_template: None,
    }
}

#[test]
fn test_report_defaults_to_html_and_markdown_siblings() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("251222_weibo_analysis_results.json");
    write_results(&input);

    let written = render(&options(&input)).unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("251222_weibo_analysis_report.html"),
            dir.path().join("251222_weibo_analysis_summary.md"),
        ]
    );
    let md = std::fs::read_to_string(&written[1]).unwrap();
    assert!(md.contains("福原爱事件追踪"));
}

#[test]
fn test_report_csv_only() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.json");
    write_results(&input);

    let mut opts = options(&input);
    opts.csv = Some(dir.path().join("ranking.csv"));
    let written = render(&opts).unwrap();

    assert_eq!(written, vec![dir.path().join("ranking.csv")]);
    let csv = std::fs::read_to_string(&written[0]).unwrap();
    assert!(csv.starts_with("rank,title,heat,category,product_name"));
    assert!(csv.contains("celebrity_scandal"));
}

#[test]
fn test_report_custom_template() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.json");
    write_results(&input);
    let template = dir.path().join("tpl.html");
    std::fs::write(&template, "<p>{{total_topics}}</p>{{topics}}").unwrap();

    let mut opts = options(&input);
    opts.html = Some(dir.path().join("out.html"));
    opts.html_template = Some(template);
    render(&opts).unwrap();

    let html = std::fs::read_to_string(dir.path().join("out.html")).unwrap();
    assert!(html.starts_with("<p>2</p>"));
}
