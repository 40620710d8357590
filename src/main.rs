//! Hot-search analyzer CLI - main entry point
//!
//! Fetches the Weibo hot-search list, turns each topic into a scored product
//! idea and renders JSON/HTML/Markdown/CSV reports.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use hotsearch_analyzer::commands::{self, ReportOptions, RunOptions};
use hotsearch_analyzer::fetch::FetcherConfig;
use hotsearch_analyzer::{metrics, Config};
use tracing::{error, warn};

#[derive(Parser)]
#[command(name = "hotsearch_analyzer")]
#[command(about = "Weibo hot-search analyzer and product idea generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to expose Prometheus metrics (e.g., 0.0.0.0:9898)
    #[arg(long, env = "METRICS_ADDR")]
    metrics_addr: Option<String>,

    /// Path to config.yml (default: ./config.yml, then ../config.yml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, analyze and write all reports
    Run {
        /// Number of leading topics to analyze
        #[arg(short, long)]
        topics: Option<usize>,

        /// Output file prefix
        #[arg(short, long)]
        prefix: Option<String>,

        /// Output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// TianAPI key (overrides config and TIANAPI_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Fetch the hot-search list and save the raw snapshot
    Fetch {
        /// Output file path
        #[arg(short, long, default_value = "hot_search_data.json")]
        output: PathBuf,

        /// Feed URL override (proxy or mock feed)
        #[arg(long)]
        api_url: Option<String>,

        /// TianAPI key (overrides config and TIANAPI_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Analyze a saved snapshot
    Analyze {
        /// Snapshot or feed JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Results file (default: derived from input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of leading topics to analyze
        #[arg(short, long)]
        topics: Option<usize>,
    },

    /// Render reports from a saved results file
    Report {
        /// Results JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// HTML report path
        #[arg(long)]
        html: Option<PathBuf>,

        /// Markdown summary path
        #[arg(long)]
        markdown: Option<PathBuf>,

        /// CSV ranking path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Ideas detailed in the Markdown summary
        #[arg(long)]
        top: Option<usize>,
    },

    /// List previous runs under the output directory
    History {
        /// Directory to scan (default: configured output dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Run { .. } => "run",
            Commands::Fetch { .. } => "fetch",
            Commands::Analyze { .. } => "analyze",
            Commands::Report { .. } => "report",
            Commands::History { .. } => "history",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development, from the current directory or its parent
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_filename("../.env");
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("hotsearch_analyzer=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    if let Some(addr) = cli.metrics_addr.as_deref() {
        match addr.parse::<SocketAddr>() {
            Ok(socket) => metrics::spawn_metrics_server(socket),
            Err(err) => warn!(%addr, "Invalid metrics address: {}", err),
        }
    }

    let config = Config::load(cli.config.as_deref())?;

    let command_name = cli.command.name();
    let timer = metrics::CommandTimer::start(command_name);

    let result = execute_command(cli.command, config).await;

    timer.finish(result.is_ok());

    if let Err(ref err) = result {
        error!(command = command_name, "Command failed: {:#}", err);
    }
    result
}

async fn execute_command(command: Commands, config: Config) -> anyhow::Result<()> {
    match command {
        Commands::Run {
            topics,
            prefix,
            out_dir,
            api_key,
        } => {
            let mut options = RunOptions::from_config(&config);
            if let Some(topics) = topics {
                options.topics = topics;
            }
            if let Some(prefix) = prefix {
                options.prefix = prefix;
            }
            if let Some(out_dir) = out_dir {
                options.out_dir = out_dir;
            }
            if api_key.is_some() {
                options.fetcher.api_key = api_key;
            }
            commands::run::run(options).await?;
        }
        Commands::Fetch {
            output,
            api_url,
            api_key,
        } => {
            let fetcher = FetcherConfig {
                api_key: api_key.or(config.api_key),
                api_url: api_url.or(config.api_url),
                timeout_secs: config.timeout_secs,
            };
            commands::fetch::run(fetcher, &output).await?;
        }
        Commands::Analyze {
            input,
            output,
            topics,
        } => {
            commands::analyze::run(&input, output, topics.unwrap_or(config.topics))?;
        }
        Commands::Report {
            input,
            html,
            markdown,
            csv,
            top,
        } => {
            commands::report::run(ReportOptions {
                input,
                html,
                markdown,
                csv,
                top_n: top.unwrap_or(config.top_n),
                html_template: config.html_template,
            })?;
        }
        Commands::History { dir } => {
            commands::history::run(&dir.unwrap_or(config.output_dir))?;
        }
    }

    Ok(())
}
