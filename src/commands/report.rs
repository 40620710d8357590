//! Render a saved results file to HTML, Markdown and CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::run::html_renderer;
use crate::report::{load_report, write_csv, write_markdown};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub html: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub top_n: usize,
    pub html_template: Option<PathBuf>,
}

/// Sibling path sharing the results file stem, e.g. `x_results.json` → `x_report.html`.
pub fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = name
        .strip_suffix("_results.json")
        .map(str::to_string)
        .or_else(|| input.file_stem().map(|s| s.to_string_lossy().to_string()))
        .unwrap_or_else(|| "hotsearch".to_string());
    input.with_file_name(format!("{stem}{suffix}"))
}

/// Render the requested outputs; with none requested, HTML and Markdown are
/// written next to the input.
pub fn render(options: &ReportOptions) -> Result<Vec<PathBuf>> {
    let report = load_report(&options.input)
        .with_context(|| format!("Failed to load results from {}", options.input.display()))?;

    let (html, markdown) =
        if options.html.is_none() && options.markdown.is_none() && options.csv.is_none() {
            (
                Some(sibling_path(&options.input, "_report.html")),
                Some(sibling_path(&options.input, "_summary.md")),
            )
        } else {
            (options.html.clone(), options.markdown.clone())
        };

    let mut written = Vec::new();
    if let Some(path) = html {
        html_renderer(options.html_template.as_deref())?.write(&report, &path)?;
        written.push(path);
    }
    if let Some(path) = markdown {
        write_markdown(&report, options.top_n, &path)?;
        written.push(path);
    }
    if let Some(path) = options.csv.clone() {
        write_csv(&report, &path)?;
        written.push(path);
    }
    Ok(written)
}

pub fn run(options: ReportOptions) -> Result<()> {
    let written = render(&options)?;
    println!("\n✅ 报告已生成:");
    for path in written {
        println!("   • {}", path.display());
    }
    Ok(())
}
