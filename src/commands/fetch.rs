//! Fetch the hot-search list and save the raw snapshot.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::fetch::{FetcherConfig, HotSearchFetcher, Snapshot};

pub async fn run(config: FetcherConfig, output: &Path) -> Result<()> {
    let fetcher = HotSearchFetcher::new(config)?;
    let topics = fetcher
        .fetch()
        .await
        .context("Failed to fetch hot-search data")?;

    let snapshot = Snapshot::new(topics, Local::now());
    snapshot.save(output)?;

    println!("\n✅ 成功抓取 {} 条热搜数据", snapshot.total_count);
    println!("📁 数据已保存到: {}", output.display());
    Ok(())
}
