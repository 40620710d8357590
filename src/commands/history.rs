//! List previous analysis runs found under an output directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::warn;
use walkdir::WalkDir;

use crate::report::load_report;

const RESULTS_SUFFIX: &str = "_results.json";

/// Summary of one saved results file.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub path: PathBuf,
    pub analysis_time: DateTime<Local>,
    pub total_topics: usize,
    pub avg_score: f64,
    pub top_idea: Option<String>,
}

/// Collect results files under `dir`, oldest first.
///
/// An unreadable `dir` is an error; entries below it that cannot be read
/// or parsed are skipped with a warning.
pub fn collect(dir: &Path, max_depth: usize) -> Result<Vec<HistoryEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).max_depth(max_depth).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(crate::Error::from(err).into()),
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };
        let path = entry.path();
        let is_results = entry.file_type().is_file()
            && path
                .file_name()
                .map_or(false, |n| n.to_string_lossy().ends_with(RESULTS_SUFFIX));
        if !is_results {
            continue;
        }

        match load_report(path) {
            Ok(report) => entries.push(HistoryEntry {
                path: path.to_path_buf(),
                analysis_time: report.analysis_time,
                total_topics: report.total_topics,
                avg_score: report.avg_score,
                top_idea: report.topics.first().map(|r| r.idea.name.clone()),
            }),
            Err(err) => warn!(path = %path.display(), "Skipping unreadable results: {}", err),
        }
    }

    entries.sort_by_key(|e| e.analysis_time);
    Ok(entries)
}

pub fn run(dir: &Path) -> Result<()> {
    let entries = collect(dir, 3)?;

    if entries.is_empty() {
        println!("No *{} files found under {}", RESULTS_SUFFIX, dir.display());
        return Ok(());
    }

    println!("\n📚 历史分析记录 ({}):\n", entries.len());
    for entry in &entries {
        println!(
            "  {}  {:>3} 个话题  平均 {:>5.1}  {}  [{}]",
            entry.analysis_time.format("%Y-%m-%d %H:%M"),
            entry.total_topics,
            entry.avg_score,
            entry.top_idea.as_deref().unwrap_or("-"),
            entry.path.display()
        );
    }
    Ok(())
}
