//! Report persistence and rendering
//!
//! Every run produces four artifacts sharing a `{yymmdd}_{prefix}` stem:
//! the raw snapshot, the results JSON, an HTML report and a Markdown summary.

pub mod csv_export;
pub mod html;
pub mod markdown;
pub mod results;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

pub use csv_export::{render_csv, write_csv};
pub use html::HtmlRenderer;
pub use markdown::{render_markdown, write_markdown, DEFAULT_TOP_N};
pub use results::{load_report, save_report};

/// File stem for a run: `{yymmdd}_{prefix}`.
pub fn file_stem(date: &DateTime<Local>, prefix: &str) -> String {
    format!("{}_{}", date.format("%y%m%d"), prefix)
}

/// Output file set for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub data: PathBuf,
    pub results: PathBuf,
    pub html: PathBuf,
    pub markdown: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, date: &DateTime<Local>, prefix: &str) -> Self {
        let stem = file_stem(date, prefix);
        Self {
            data: dir.join(format!("{stem}_data.json")),
            results: dir.join(format!("{stem}_results.json")),
            html: dir.join(format!("{stem}_report.html")),
            markdown: dir.join(format!("{stem}_summary.md")),
        }
    }
}

/// Keep at most `max` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
