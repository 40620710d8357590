//! Hot-search topic analysis
//!
//! Provides tools for:
//! - Classifying topics into subject categories by keyword
//! - Extracting locations, brands and people from titles
//! - Synthesizing event backgrounds and scored product ideas
//! - Ranking a batch of topics into an aggregate report

pub mod analyzer;
pub mod background;
pub mod category;
pub mod clock;
pub mod entities;
pub mod idea;
pub mod models;
pub mod templates;

pub use analyzer::{AnalyzerConfig, TopicAnalyzer, DEFAULT_TOPIC_LIMIT};
pub use background::BackgroundSynthesizer;
pub use category::classify;
pub use clock::{Clock, FixedClock, SystemClock};
pub use entities::EntityExtractor;
pub use idea::IdeaSynthesizer;
pub use models::{
    AnalysisReport, AnalysisResult, Category, EntitySet, EntitySlot, EventBackground, IdeaScore,
    ProductIdea, ScoreTier, Topic,
};
