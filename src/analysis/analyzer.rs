//! Batch analysis pipeline: classify, extract, synthesize, score, rank.

use std::sync::Arc;

use tracing::{debug, info};

use super::background::BackgroundSynthesizer;
use super::category::classify;
use super::clock::{Clock, SystemClock};
use super::entities::EntityExtractor;
use super::idea::IdeaSynthesizer;
use super::models::{AnalysisReport, AnalysisResult, ScoreTier, Topic};

/// Default number of topics analyzed per run.
pub const DEFAULT_TOPIC_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Maximum number of leading topics to analyze
    pub limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOPIC_LIMIT,
        }
    }
}

/// Runs the full per-topic pipeline over a batch of hot-search entries.
#[derive(Clone)]
pub struct TopicAnalyzer {
    config: AnalyzerConfig,
    clock: Arc<dyn Clock>,
    extractor: EntityExtractor,
    background: BackgroundSynthesizer,
    ideas: IdeaSynthesizer,
}

impl Default for TopicAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl TopicAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build an analyzer whose timestamps come from `clock`.
    pub fn with_clock(config: AnalyzerConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            background: BackgroundSynthesizer::new(Arc::clone(&clock)),
            clock,
            extractor: EntityExtractor::new(),
            ideas: IdeaSynthesizer::new(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one topic at the given 1-based rank.
    pub fn analyze_topic(&self, topic: &Topic, rank: u32) -> AnalysisResult {
        let (category, label) = classify(&topic.title, &topic.tags);
        let entities = self.extractor.extract(&topic.title);
        let background = self.background.synthesize(&topic.title, category, &entities);
        let idea = self.ideas.synthesize(&topic.title, category, &entities);

        debug!(
            rank,
            title = %topic.title,
            category = %category,
            product = %idea.name,
            score = idea.total_score(),
            "Analyzed topic"
        );

        AnalysisResult {
            rank,
            title: topic.title.clone(),
            heat: topic.heat,
            tags: topic.tags.clone(),
            category,
            category_label: label.to_string(),
            background,
            idea,
        }
    }

    /// Analyze the leading `limit` topics and aggregate the results.
    ///
    /// Ranks reflect input position. The returned topics are ordered by
    /// total score, highest first; equal scores keep input order.
    pub fn analyze_all(&self, topics: &[Topic]) -> AnalysisReport {
        let mut results: Vec<AnalysisResult> = topics
            .iter()
            .take(self.config.limit)
            .enumerate()
            .map(|(i, topic)| self.analyze_topic(topic, (i + 1) as u32))
            .collect();

        let mut excellent_count = 0;
        let mut good_count = 0;
        let mut fair_count = 0;
        for result in &results {
            match result.idea.score_tier() {
                ScoreTier::Excellent => excellent_count += 1,
                ScoreTier::Good => good_count += 1,
                ScoreTier::Fair => fair_count += 1,
            }
        }

        let avg_score = average_score(&results);

        // sort_by is stable, so ties keep their input order.
        results.sort_by(|a, b| b.total_score().cmp(&a.total_score()));

        info!(
            total = results.len(),
            excellent = excellent_count,
            good = good_count,
            fair = fair_count,
            avg_score,
            "Analysis complete"
        );

        AnalysisReport {
            analysis_time: self.clock.now(),
            total_topics: results.len(),
            excellent_count,
            good_count,
            fair_count,
            avg_score,
            topics: results,
        }
    }
}

/// Mean total score rounded to one decimal; 0.0 for an empty batch.
///
/// Rounding works on the exact binary value of the mean with ties to even,
/// so 83.25 becomes 83.2 and 83.35 (stored just below) becomes 83.3.
pub fn average_score(results: &[AnalysisResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let sum: u64 = results.iter().map(|r| u64::from(r.total_score())).sum();
    let mean = sum as f64 / results.len() as f64;
    // Fixed-precision formatting is exact and rounds ties to even.
    format!("{mean:.1}").parse().unwrap_or(mean)
}
