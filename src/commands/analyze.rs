//! Analyze a saved snapshot into a results file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::analysis::{AnalysisReport, AnalyzerConfig, TopicAnalyzer};
use crate::fetch::load_topics;
use crate::metrics;
use crate::report::save_report;

/// `x_data.json` → `x_results.json`; other names get `_results.json` appended to the stem.
pub fn default_results_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let results = match name.strip_suffix("_data.json") {
        Some(stem) => format!("{stem}_results.json"),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "hotsearch".to_string());
            format!("{stem}_results.json")
        }
    };
    input.with_file_name(results)
}

/// Analyze `input` and write the report; returns the report and its path.
pub fn analyze_file(
    input: &Path,
    output: Option<PathBuf>,
    topics: usize,
) -> Result<(AnalysisReport, PathBuf)> {
    let data = load_topics(input)
        .with_context(|| format!("Failed to load topics from {}", input.display()))?;

    let report = TopicAnalyzer::new(AnalyzerConfig { limit: topics }).analyze_all(&data);
    metrics::record_report(&report);

    let output = output.unwrap_or_else(|| default_results_path(input));
    save_report(&report, &output)?;
    Ok((report, output))
}

pub fn run(input: &Path, output: Option<PathBuf>, topics: usize) -> Result<()> {
    let (report, output) = analyze_file(input, output, topics)?;

    println!("\n✅ 分析完成: {} 个话题", report.total_topics);
    println!(
        "   优秀 {} / 良好 {} / 一般 {}，平均得分 {:.1}",
        report.excellent_count, report.good_count, report.fair_count, report.avg_score
    );
    println!("📁 结果已保存到: {}", output.display());
    Ok(())
}
