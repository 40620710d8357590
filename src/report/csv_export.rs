//! Ranking export as CSV.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::analysis::models::{AnalysisReport, AnalysisResult};
use crate::{Error, Result};

#[derive(Debug, Serialize)]
struct RankingRow<'a> {
    rank: u32,
    title: &'a str,
    heat: u64,
    category: &'a str,
    product_name: &'a str,
    interestingness: u8,
    usefulness: u8,
    total_score: u8,
    score_tier: &'static str,
}

impl<'a> From<&'a AnalysisResult> for RankingRow<'a> {
    fn from(result: &'a AnalysisResult) -> Self {
        Self {
            rank: result.rank,
            title: &result.title,
            heat: result.heat,
            category: result.category.as_str(),
            product_name: &result.idea.name,
            interestingness: result.idea.score.interestingness(),
            usefulness: result.idea.score.usefulness(),
            total_score: result.total_score(),
            score_tier: result.idea.score_tier().as_str(),
        }
    }
}

fn write_rows<W: std::io::Write>(writer: &mut csv::Writer<W>, report: &AnalysisReport) -> Result<()> {
    for result in &report.topics {
        writer.serialize(RankingRow::from(result))?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the ranking in report order.
pub fn render_csv(report: &AnalysisReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(&mut writer, report)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::CsvError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::CsvError(e.to_string()))
}

pub fn write_csv(report: &AnalysisReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, report)?;
    info!(path = %path.display(), rows = report.topics.len(), "CSV exported");
    Ok(())
}
