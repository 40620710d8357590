//! HTML report rendering.
//!
//! Templates use `{{name}}` placeholders for the aggregate fields and a single
//! `{{topics}}` slot that receives the rendered topic cards.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::analysis::models::{AnalysisReport, AnalysisResult};
use crate::{Error, Result};

const BUILTIN_TEMPLATE: &str = include_str!("report_template.html");
const TOPICS_SLOT: &str = "{{topics}}";

/// Escape text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

fn render_topic(result: &AnalysisResult) -> String {
    let idea = &result.idea;
    let background = &result.background;
    let tier = idea.score_tier().as_str();

    let mut card = format!("  <div class=\"topic-card tier-{}\">\n", tier);
    card.push_str(&format!(
        "    <div class=\"topic-header\"><span class=\"rank\">#{}</span><h2>{}</h2>\
         <span class=\"score-badge score-{}\">{}分</span></div>\n",
        result.rank,
        escape_html(&result.title),
        tier,
        idea.total_score()
    ));
    card.push_str(&format!(
        "    <div class=\"meta\">🔥 热度 {} · 📂 {}</div>\n",
        result.heat,
        escape_html(&result.category_label)
    ));

    card.push_str("    <div class=\"section\"><h3>📰 事件背景</h3><div class=\"event-timeline\">\n");
    card.push_str(&format!("      <p>{}</p>\n", escape_html(&background.summary)));
    card.push_str(&format!("      <ul>{}</ul>\n", list_items(&background.key_points)));
    card.push_str(&format!("      <ol>{}</ol>\n", list_items(&background.timeline)));
    card.push_str(&format!(
        "      <p>💬 {}</p>\n",
        escape_html(&background.public_opinion)
    ));
    card.push_str("    </div></div>\n");

    card.push_str("    <div class=\"section\"><h3>💡 产品创意</h3><div class=\"product-idea\">\n");
    card.push_str(&format!(
        "      <div class=\"product-name\">{}</div>\n",
        escape_html(&idea.name)
    ));
    card.push_str(&format!(
        "      <div class=\"slogan\">“{}”</div>\n",
        escape_html(&idea.slogan)
    ));
    for (label, value) in [
        ("核心功能", &idea.core_function),
        ("目标用户", &idea.target_users),
        ("解决方案", &idea.solution),
        ("商业模式", &idea.business_model),
        ("竞争优势", &idea.competitive_advantage),
    ] {
        card.push_str(&format!(
            "      <p><strong>{}：</strong>{}</p>\n",
            label,
            escape_html(value)
        ));
    }
    card.push_str(&format!(
        "      <p><strong>功能清单：</strong></p><ul>{}</ul>\n",
        list_items(&idea.feature_list)
    ));
    card.push_str(&format!(
        "      <p><strong>用户痛点：</strong></p><ul>{}</ul>\n",
        list_items(&idea.user_pain_points)
    ));
    card.push_str(&format!(
        "      <p><strong>实施步骤：</strong></p><ol>{}</ol>\n",
        list_items(&idea.implementation_steps)
    ));
    card.push_str("    </div></div>\n");

    card.push_str(&format!(
        "    <div class=\"section\"><h3>📊 评分</h3><div class=\"score-breakdown\">\
         <span>有趣度 {}/80</span><span>有用度 {}/20</span><span>总分 {}/100</span></div></div>\n",
        idea.score.interestingness(),
        idea.score.usefulness(),
        idea.total_score()
    ));
    card.push_str("  </div>\n");
    card
}

/// Renders reports into an HTML page template.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    template: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            template: BUILTIN_TEMPLATE.to_string(),
        }
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom template. It must contain the `{{topics}}` slot.
    pub fn with_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(TOPICS_SLOT) {
            return Err(Error::TemplateError(format!(
                "template is missing the {} placeholder",
                TOPICS_SLOT
            )));
        }
        Ok(Self { template })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let template = fs::read_to_string(path)?;
        Self::with_template(template)
    }

    pub fn render(&self, report: &AnalysisReport) -> String {
        let topics: String = report.topics.iter().map(render_topic).collect();
        let date = report.analysis_time.format("%Y年%m月%d日 %H:%M").to_string();

        // Topic cards go in last so their content is never re-scanned.
        self.template
            .replace("{{date}}", &date)
            .replace("{{total_topics}}", &report.total_topics.to_string())
            .replace("{{excellent_count}}", &report.excellent_count.to_string())
            .replace("{{good_count}}", &report.good_count.to_string())
            .replace("{{fair_count}}", &report.fair_count.to_string())
            .replace("{{avg_score}}", &format!("{:.1}", report.avg_score))
            .replace(TOPICS_SLOT, &topics)
    }

    pub fn write(&self, report: &AnalysisReport, path: &Path) -> Result<()> {
        fs::write(path, self.render(report))?;
        info!(path = %path.display(), "HTML report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalyzerConfig, FixedClock, Topic, TopicAnalyzer};
    use chrono::{Local, TimeZone};
    use std::sync::Arc;

    fn analyze(titles: &[&str]) -> AnalysisReport {
        let clock = FixedClock(Local.with_ymd_and_hms(2025, 12, 22, 9, 30, 0).unwrap());
        let topics: Vec<Topic> = titles.iter().map(|t| Topic::new(*t, 100, "", 0)).collect();
        TopicAnalyzer::with_clock(AnalyzerConfig::default(), Arc::new(clock)).analyze_all(&topics)
    }

    #[test]
    fn escape_html_covers_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("普通文本"), "普通文本");
    }

    #[test]
    fn builtin_template_fills_every_placeholder() {
        let html = HtmlRenderer::new().render(&analyze(&["华为发布新手机", "成都地震"]));
        assert!(!html.contains("{{"));
        assert!(html.contains("2025年12月22日 09:30"));
        assert!(html.contains("华为配件管家"));
        assert!(html.contains("成都应急助手"));
        assert!(html.contains("score-badge score-excellent\">92分"));
        assert_eq!(html.matches("class=\"topic-card ").count(), 2);
    }

    #[test]
    fn titles_are_escaped() {
        let html = HtmlRenderer::new().render(&analyze(&["<script>alert(1)</script>"]));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn custom_template_requires_topics_slot() {
        let err = HtmlRenderer::with_template("<p>{{date}}</p>").unwrap_err();
        assert!(matches!(err, Error::TemplateError(_)));

        let renderer =
            HtmlRenderer::with_template("<h1>{{total_topics}} / {{avg_score}}</h1>{{topics}}")
                .unwrap();
        let html = renderer.render(&analyze(&["法院判决"]));
        assert!(html.starts_with("<h1>1 / 81.0</h1>"));
        assert!(html.contains("全民法律顾问"));
    }

    #[test]
    fn braces_in_titles_are_not_substituted() {
        let html = HtmlRenderer::new().render(&analyze(&["{{date}}话题"]));
        assert!(html.contains("{{date}}话题"));
    }

    #[test]
    fn from_file_reads_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tpl.html");
        fs::write(&path, "<main>{{topics}}</main>").unwrap();
        let html = HtmlRenderer::from_file(&path)
            .unwrap()
            .render(&analyze(&[]));
        assert_eq!(html, "<main></main>");
    }
}
