//! Results JSON persistence.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::analysis::models::AnalysisReport;
use crate::Result;

/// Write the report as pretty-printed UTF-8 JSON.
pub fn save_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!(path = %path.display(), topics = report.total_topics, "Results saved");
    Ok(())
}

pub fn load_report(path: &Path) -> Result<AnalysisReport> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalyzerConfig, FixedClock, Topic, TopicAnalyzer};
    use chrono::{Local, TimeZone};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn report() -> AnalysisReport {
        let clock = FixedClock(Local.with_ymd_and_hms(2025, 12, 22, 9, 30, 0).unwrap());
        TopicAnalyzer::with_clock(AnalyzerConfig::default(), Arc::new(clock)).analyze_all(&[
            Topic::new("华为发布新手机", 1000, "", 1),
            Topic::new("成都地震", 900, "", 2),
        ])
    }

    #[test]
    fn saved_report_is_readable_and_unescaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        let report = report();

        save_report(&report, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("华为配件管家"));
        assert!(text.contains("\"total_score\": 92"));
        assert!(text.contains("\"score_tier\": \"excellent\""));

        assert_eq!(load_report(&path).unwrap(), report);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_report(&path),
            Err(crate::Error::SerializationError(_))
        ));
    }
}
