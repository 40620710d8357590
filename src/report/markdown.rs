//! Markdown summary report.

use std::fs;
use std::path::Path;

use tracing::info;

use super::truncate_chars;
use crate::analysis::models::{AnalysisReport, AnalysisResult};
use crate::Result;

/// Number of ideas detailed in the summary.
pub const DEFAULT_TOP_N: usize = 5;

const TABLE_TITLE_CHARS: usize = 20;

fn push_list(out: &mut String, items: &[String], limit: usize) {
    for item in items.iter().take(limit) {
        out.push_str(&format!("- {}\n", item));
    }
}

fn push_topic_section(out: &mut String, position: usize, result: &AnalysisResult) {
    let idea = &result.idea;

    out.push_str(&format!(
        "\n### {}. {} ({}分)\n\n",
        position,
        idea.name,
        idea.total_score()
    ));
    out.push_str(&format!("**📰 来源热搜**: #{} {}\n\n", result.rank, result.title));
    out.push_str(&format!("**📂 分类**: {}\n\n", result.category_label));
    out.push_str(&format!("**🎯 产品口号**: \"{}\"\n\n", idea.slogan));
    out.push_str(&format!("**💡 核心功能**: {}\n\n", idea.core_function));
    out.push_str(&format!("**👥 目标用户**: {}\n\n", idea.target_users));

    out.push_str("#### 事件背景\n");
    out.push_str(&format!("{}\n\n", result.background.summary));

    out.push_str("#### 关键要点\n");
    push_list(out, &result.background.key_points, usize::MAX);

    out.push_str("\n#### 功能清单\n");
    push_list(out, &idea.feature_list, 4);

    out.push_str("\n#### 用户痛点\n");
    push_list(out, &idea.user_pain_points, 3);

    out.push_str(&format!("\n#### 解决方案\n{}\n\n", idea.solution));
    out.push_str(&format!("#### 商业模式\n{}\n\n", idea.business_model));

    out.push_str("#### 评分详情\n");
    out.push_str(&format!("- 有趣度: {}/80\n", idea.score.interestingness()));
    out.push_str(&format!("- 有用度: {}/20\n", idea.score.usefulness()));
    out.push_str(&format!("- **总分: {}/100**\n\n---\n\n", idea.total_score()));
}

/// Render the Markdown summary with the first `top_n` ideas detailed.
pub fn render_markdown(report: &AnalysisReport, top_n: usize) -> String {
    let mut out = String::from("# 微博热搜产品创意分析报告\n\n");

    out.push_str("## 📊 分析概况\n\n");
    out.push_str("| 指标 | 数值 |\n|------|------|\n");
    out.push_str(&format!(
        "| 分析时间 | {} |\n",
        report.analysis_time.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("| 分析话题数 | {} |\n", report.total_topics));
    out.push_str(&format!("| 优秀创意（80分+） | {} |\n", report.excellent_count));
    out.push_str(&format!("| 良好创意（60-79分） | {} |\n", report.good_count));
    out.push_str(&format!("| 一般创意（60分以下） | {} |\n", report.fair_count));
    out.push_str(&format!("| 平均得分 | {:.1} |\n\n---\n\n", report.avg_score));

    out.push_str(&format!("## 🏆 Top {} 产品创意\n", top_n));
    for (i, result) in report.topics.iter().take(top_n).enumerate() {
        push_topic_section(&mut out, i + 1, result);
    }

    out.push_str("\n## 📋 完整话题列表\n\n");
    out.push_str("| 排名 | 话题 | 分类 | 产品创意 | 得分 |\n");
    out.push_str("|------|------|------|----------|------|\n");
    for result in &report.topics {
        out.push_str(&format!(
            "| #{} | {} | {} | {} | {}分 |\n",
            result.rank,
            truncate_chars(&result.title, TABLE_TITLE_CHARS).replace('|', "\\|"),
            result.category_label,
            result.idea.name,
            result.total_score()
        ));
    }

    out.push_str("\n\n---\n\n");
    out.push_str("> 本报告由热搜分析引擎自动生成，仅供参考。\n");
    out.push_str("> 实际产品开发需进行进一步的市场调研、用户访谈和可行性分析。\n");
    out
}

pub fn write_markdown(report: &AnalysisReport, top_n: usize, path: &Path) -> Result<()> {
    fs::write(path, render_markdown(report, top_n))?;
    info!(path = %path.display(), "Markdown summary written");
    Ok(())
}
