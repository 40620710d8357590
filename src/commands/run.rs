//! Full pipeline: fetch → snapshot → analyze → results → HTML → Markdown.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::analysis::{AnalysisReport, AnalyzerConfig, Clock, SystemClock, TopicAnalyzer};
use crate::config::Config;
use crate::fetch::{FetcherConfig, HotSearchFetcher, Snapshot};
use crate::metrics;
use crate::report::{save_report, truncate_chars, write_markdown, HtmlRenderer, OutputPaths};

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub topics: usize,
    pub prefix: String,
    pub out_dir: PathBuf,
    pub top_n: usize,
    pub html_template: Option<PathBuf>,
    pub fetcher: FetcherConfig,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            topics: config.topics,
            prefix: config.output_prefix.clone(),
            out_dir: config.output_dir.clone(),
            top_n: config.top_n,
            html_template: config.html_template.clone(),
            fetcher: FetcherConfig {
                api_key: config.api_key.clone(),
                api_url: config.api_url.clone(),
                timeout_secs: config.timeout_secs,
            },
        }
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunArtifacts {
    pub paths: OutputPaths,
    pub fetched: usize,
    pub report: AnalysisReport,
}

pub fn html_renderer(template: Option<&Path>) -> Result<HtmlRenderer> {
    match template {
        Some(path) => HtmlRenderer::from_file(path)
            .with_context(|| format!("Failed to load HTML template {}", path.display())),
        None => Ok(HtmlRenderer::new()),
    }
}

/// Execute the pipeline and write all four artifacts.
///
/// Fails when the fetch fails or yields no topics; nothing is written then.
pub async fn execute(options: &RunOptions, clock: Arc<dyn Clock>) -> Result<RunArtifacts> {
    let renderer = html_renderer(options.html_template.as_deref())?;
    let fetcher = HotSearchFetcher::new(options.fetcher.clone())?;

    let topics = fetcher.fetch().await.context("Failed to fetch hot-search data")?;
    if topics.is_empty() {
        bail!("Hot-search feed returned no topics; check the network or API key");
    }

    std::fs::create_dir_all(&options.out_dir).with_context(|| {
        format!("Failed to create output dir {}", options.out_dir.display())
    })?;
    let paths = OutputPaths::new(&options.out_dir, &clock.now(), &options.prefix);

    Snapshot::new(topics.clone(), clock.now()).save(&paths.data)?;

    let analyzer = TopicAnalyzer::with_clock(
        AnalyzerConfig {
            limit: options.topics,
        },
        Arc::clone(&clock),
    );
    let report = analyzer.analyze_all(&topics);
    metrics::record_report(&report);

    save_report(&report, &paths.results)?;
    renderer.write(&report, &paths.html)?;
    write_markdown(&report, options.top_n, &paths.markdown)?;

    info!(
        fetched = topics.len(),
        analyzed = report.total_topics,
        dir = %options.out_dir.display(),
        "Pipeline finished"
    );

    Ok(RunArtifacts {
        paths,
        fetched: topics.len(),
        report,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print run statistics and the leading ideas.
pub fn print_summary(artifacts: &RunArtifacts, top_n: usize) {
    let report = &artifacts.report;

    println!("\n{}", "=".repeat(60));
    println!("✅ 分析完成！");
    println!("{}", "=".repeat(60));
    println!("\n📈 分析统计:");
    println!("   • 获取热搜数: {}", artifacts.fetched);
    println!("   • 分析话题数: {}", report.total_topics);
    println!("   • 优秀创意(80分+): {}", report.excellent_count);
    println!("   • 良好创意(60-79分): {}", report.good_count);
    println!("   • 一般创意(60分以下): {}", report.fair_count);
    println!("   • 平均得分: {:.1}", report.avg_score);

    println!("\n🏆 Top {} 产品创意:", top_n);
    for (i, result) in report.topics.iter().take(top_n).enumerate() {
        println!("   {}. [{}分] {}", i + 1, result.total_score(), result.idea.name);
        println!("      来源: {}", truncate_chars(&result.title, 30));
        println!("      口号: {}", result.idea.slogan);
    }

    println!("\n📁 输出文件:");
    println!("   • 原始数据: {}", file_name(&artifacts.paths.data));
    println!("   • 分析结果: {}", file_name(&artifacts.paths.results));
    println!("   • HTML报告: {}", file_name(&artifacts.paths.html));
    println!("   • MD摘要: {}", file_name(&artifacts.paths.markdown));
    println!();
}

/// Run the full pipeline against the live feed.
pub async fn run(options: RunOptions) -> Result<()> {
    println!("\n🚀 微博热搜产品创意分析");
    println!("📡 获取微博热搜数据并分析前 {} 条...", options.topics);

    let artifacts = execute(&options, Arc::new(SystemClock)).await?;
    print_summary(&artifacts, options.top_n);
    Ok(())
}
