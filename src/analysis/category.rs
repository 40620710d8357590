//! Keyword-driven topic classification.
//!
//! The rule table is scanned in declaration order and the first category with
//! a matching keyword wins. Order is the tie-break: a title mentioning both an
//! earthquake and a phone is a disaster, not tech.

use super::models::Category;

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Classification rules in priority order.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Disaster,
        keywords: &[
            "地震", "震感", "台风", "暴雨", "洪水", "火灾", "爆炸", "事故", "灾害",
        ],
    },
    CategoryRule {
        category: Category::Entertainment,
        keywords: &[
            "明星", "演员", "歌手", "演唱会", "综艺", "剧集", "电影", "票房", "微博之夜", "晚会",
            "颁奖",
        ],
    },
    CategoryRule {
        category: Category::Tech,
        keywords: &[
            "华为", "苹果", "iPhone", "小米", "OPPO", "vivo", "手机", "AI", "人工智能", "芯片",
            "科技",
        ],
    },
    CategoryRule {
        category: Category::Finance,
        keywords: &[
            "个税", "税", "理财", "股票", "基金", "房价", "经济", "金融", "利率",
        ],
    },
    CategoryRule {
        category: Category::Law,
        keywords: &[
            "违法", "违规", "法律", "判决", "起诉", "法院", "律师", "犯罪",
        ],
    },
    CategoryRule {
        category: Category::Health,
        keywords: &[
            "健康", "医疗", "医院", "药", "疾病", "减肥", "养生", "癌症",
        ],
    },
    CategoryRule {
        category: Category::Social,
        keywords: &["微信", "社交", "朋友圈", "好友", "聊天", "信息"],
    },
    CategoryRule {
        category: Category::Travel,
        keywords: &["旅游", "高铁", "机票", "景区", "出行", "酒店", "航班"],
    },
    CategoryRule {
        category: Category::Auto,
        keywords: &["汽车", "造车", "新能源", "电车", "驾驶", "特斯拉", "比亚迪"],
    },
    CategoryRule {
        category: Category::Sports,
        keywords: &["体育", "足球", "篮球", "奥运", "世界杯", "冠军", "比赛"],
    },
    CategoryRule {
        category: Category::Food,
        keywords: &["美食", "餐厅", "饮食", "食物", "烧烤", "火锅", "奶茶"],
    },
    CategoryRule {
        category: Category::Military,
        keywords: &["军事", "军队", "武器", "国防", "战斗机", "航母"],
    },
    CategoryRule {
        category: Category::CelebrityScandal,
        keywords: &[
            "出轨", "离婚", "结婚", "恋情", "分手", "致歉", "道歉", "争议",
        ],
    },
];

/// Classify a topic by its title and tags.
///
/// Returns the category and its display label. Falls back to
/// [`Category::General`] when nothing matches.
pub fn classify(title: &str, tags: &str) -> (Category, &'static str) {
    let combined = format!("{} {}", title, tags).to_lowercase();

    let category = CATEGORY_RULES
        .iter()
        .find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| combined.contains(&keyword.to_lowercase()))
        })
        .map(|rule| rule.category)
        .unwrap_or(Category::General);

    (category, category.label())
}
