//! Weibo Hot-Search Analyzer Library
//!
//! This library provides tools to:
//! - Fetch the Weibo hot-search list from TianAPI (or a compatible feed)
//! - Classify topics and extract locations, brands and people from titles
//! - Synthesize an event background and a scored product idea per topic
//! - Rank a batch of topics and render JSON, HTML, Markdown and CSV reports
//! - Expose Prometheus metrics for CLI runs

pub mod analysis;
pub mod config;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod report;

// Re-export common types
pub use analysis::{AnalysisReport, AnalysisResult, Category, ProductIdea, Topic, TopicAnalyzer};
pub use config::Config;
pub use error::{Error, Result};

// Commands module uses re-exported types, so it must be declared after the re-exports
pub mod commands;
