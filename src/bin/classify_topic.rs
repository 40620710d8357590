//! Offline topic classifier.
//!
//! Usage:
//!   cargo run --bin classify_topic -- "华为发布新手机" "成都地震"
//!   cargo run --bin classify_topic -- --json "个税新政策"

use anyhow::Result;
use clap::Parser;
use hotsearch_analyzer::analysis::{EntityExtractor, EntitySlot, Topic, TopicAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "classify_topic")]
#[command(about = "Classify hot-search titles and preview the generated product idea")]
struct Args {
    /// Topic titles to classify
    #[arg(required = true)]
    titles: Vec<String>,

    /// Tags applied to every title
    #[arg(long, default_value = "")]
    tags: String,

    /// Print full analysis results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let analyzer = TopicAnalyzer::default();
    let extractor = EntityExtractor::new();

    for (i, title) in args.titles.iter().enumerate() {
        let rank = i as u32 + 1;
        let result = analyzer.analyze_topic(&Topic::new(title.as_str(), 0, args.tags.as_str(), rank), rank);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            continue;
        }

        let entities = extractor.extract(title);
        println!("\n📌 {}", title);
        println!("   分类: {} ({})", result.category_label, result.category);
        for slot in EntitySlot::PRIORITY {
            if let Some(value) = entities.get(slot) {
                println!("   {:?}: {}", slot, value);
            }
        }
        println!(
            "   创意: {} [{}分, {}]",
            result.idea.name,
            result.total_score(),
            result.idea.score_tier().as_str()
        );
        println!("   口号: {}", result.idea.slogan);
    }

    Ok(())
}
