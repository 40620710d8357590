//! Data models for hot-search topic analysis

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One trending entry from the hot-search feed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Topic {
    /// Hot-search keyword / headline
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub title: String,
    /// Heat value reported by the feed
    #[serde(default, deserialize_with = "deserialize_heat")]
    pub heat: u64,
    /// Space-separated tags (may be empty)
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub tags: String,
    /// 1-based position in the feed (0 when unknown)
    #[serde(default)]
    pub rank: u32,
}

impl Topic {
    pub fn new(title: impl Into<String>, heat: u64, tags: impl Into<String>, rank: u32) -> Self {
        Self {
            title: title.into(),
            heat,
            tags: tags.into(),
            rank,
        }
    }
}

/// Parse a heat value such as `"1,234,567"` or `"1234 剧集"`.
///
/// Thousands separators are dropped and the first numeric token wins;
/// anything unparsable yields 0.
pub fn parse_heat(raw: &str) -> u64 {
    raw.replace(',', "")
        .split_whitespace()
        .find_map(|token| token.parse::<u64>().ok())
        .unwrap_or(0)
}

/// Accept `null`, strings and numbers, mapping `null` to an empty string.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Heat can arrive either as a JSON number or as a formatted string.
fn deserialize_heat<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(0),
        Some(serde_json::Value::Number(n)) => Ok(n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0)),
        Some(serde_json::Value::String(s)) => Ok(parse_heat(&s)),
        Some(other) => Err(D::Error::custom(format!(
            "expected heat as number or string, got {}",
            other
        ))),
    }
}

/// Subject domain assigned to a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Disaster,
    Entertainment,
    Tech,
    Finance,
    Law,
    Health,
    Social,
    Travel,
    Auto,
    Sports,
    Food,
    Military,
    CelebrityScandal,
    General,
}

impl Category {
    /// Stable machine key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Disaster => "disaster",
            Category::Entertainment => "entertainment",
            Category::Tech => "tech",
            Category::Finance => "finance",
            Category::Law => "law",
            Category::Health => "health",
            Category::Social => "social",
            Category::Travel => "travel",
            Category::Auto => "auto",
            Category::Sports => "sports",
            Category::Food => "food",
            Category::Military => "military",
            Category::CelebrityScandal => "celebrity_scandal",
            Category::General => "general",
        }
    }

    /// Human-readable label shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Disaster => "灾害/突发事件",
            Category::Entertainment => "娱乐/文化",
            Category::Tech => "科技/数码",
            Category::Finance => "财经/金融",
            Category::Law => "法律/法规",
            Category::Health => "健康/医疗",
            Category::Social => "社交/通讯",
            Category::Travel => "旅游/出行",
            Category::Auto => "汽车/出行",
            Category::Sports => "体育/运动",
            Category::Food => "美食/餐饮",
            Category::Military => "军事/国防",
            Category::CelebrityScandal => "名人动态",
            Category::General => "综合资讯",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named slot an entity can be extracted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntitySlot {
    Location,
    Brand,
    Celebrity,
    Destination,
}

impl EntitySlot {
    /// Priority order used when resolving product name placeholders.
    pub const PRIORITY: [EntitySlot; 4] = [
        EntitySlot::Location,
        EntitySlot::Brand,
        EntitySlot::Celebrity,
        EntitySlot::Destination,
    ];

    /// Placeholder token used in templates.
    pub fn placeholder(&self) -> &'static str {
        match self {
            EntitySlot::Location => "{location}",
            EntitySlot::Brand => "{brand}",
            EntitySlot::Celebrity => "{celebrity}",
            EntitySlot::Destination => "{destination}",
        }
    }

    /// Text used in narratives when the slot is empty.
    pub fn fallback(&self) -> &'static str {
        match self {
            EntitySlot::Location => "相关地区",
            EntitySlot::Brand => "相关科技产品",
            EntitySlot::Celebrity => "相关当事人",
            EntitySlot::Destination => "相关目的地",
        }
    }
}

/// Entities pulled out of a topic title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub location: Option<String>,
    pub brand: Option<String>,
    pub celebrity: Option<String>,
    pub destination: Option<String>,
}

impl EntitySet {
    pub fn get(&self, slot: EntitySlot) -> Option<&str> {
        match slot {
            EntitySlot::Location => self.location.as_deref(),
            EntitySlot::Brand => self.brand.as_deref(),
            EntitySlot::Celebrity => self.celebrity.as_deref(),
            EntitySlot::Destination => self.destination.as_deref(),
        }
    }

    pub fn set(&mut self, slot: EntitySlot, value: String) {
        let target = match slot {
            EntitySlot::Location => &mut self.location,
            EntitySlot::Brand => &mut self.brand,
            EntitySlot::Celebrity => &mut self.celebrity,
            EntitySlot::Destination => &mut self.destination,
        };
        *target = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        EntitySlot::PRIORITY.iter().all(|slot| self.get(*slot).is_none())
    }
}

/// Narrative context generated for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBackground {
    pub summary: String,
    pub key_points: Vec<String>,
    pub timeline: Vec<String>,
    pub public_opinion: String,
    pub related_topics: Vec<String>,
}

/// Three-way bucket derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
}

impl ScoreTier {
    pub const EXCELLENT_THRESHOLD: u8 = 80;
    pub const GOOD_THRESHOLD: u8 = 60;

    pub fn from_total(total: u8) -> Self {
        if total >= Self::EXCELLENT_THRESHOLD {
            ScoreTier::Excellent
        } else if total >= Self::GOOD_THRESHOLD {
            ScoreTier::Good
        } else {
            ScoreTier::Fair
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Fair => "fair",
        }
    }
}

/// Interestingness + usefulness pair.
///
/// The total and the tier are always derived, never stored, so they cannot
/// drift from their parts. Deserialization ignores any persisted total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdeaScore {
    interestingness: u8,
    usefulness: u8,
}

impl IdeaScore {
    pub const MAX_INTERESTINGNESS: u8 = 80;
    pub const MAX_USEFULNESS: u8 = 20;

    /// Build a score, clamping each part to its range.
    pub fn new(interestingness: u8, usefulness: u8) -> Self {
        Self {
            interestingness: interestingness.min(Self::MAX_INTERESTINGNESS),
            usefulness: usefulness.min(Self::MAX_USEFULNESS),
        }
    }

    pub fn interestingness(&self) -> u8 {
        self.interestingness
    }

    pub fn usefulness(&self) -> u8 {
        self.usefulness
    }

    pub fn total(&self) -> u8 {
        self.interestingness + self.usefulness
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_total(self.total())
    }
}

#[derive(Serialize)]
struct IdeaScoreRepr {
    interestingness_score: u8,
    usefulness_score: u8,
    total_score: u8,
    score_tier: ScoreTier,
}

#[derive(Deserialize)]
struct RawIdeaScore {
    interestingness_score: u8,
    usefulness_score: u8,
}

impl Serialize for IdeaScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        IdeaScoreRepr {
            interestingness_score: self.interestingness,
            usefulness_score: self.usefulness,
            total_score: self.total(),
            score_tier: self.tier(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IdeaScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawIdeaScore::deserialize(deserializer)?;
        Ok(IdeaScore::new(raw.interestingness_score, raw.usefulness_score))
    }
}

/// Product recommendation synthesized from a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIdea {
    pub name: String,
    pub slogan: String,
    pub core_function: String,
    pub feature_list: Vec<String>,
    pub target_users: String,
    pub user_pain_points: Vec<String>,
    pub solution: String,
    pub business_model: String,
    pub competitive_advantage: String,
    #[serde(flatten)]
    pub score: IdeaScore,
    pub market_analysis: String,
    pub implementation_steps: Vec<String>,
}

impl ProductIdea {
    pub fn total_score(&self) -> u8 {
        self.score.total()
    }

    pub fn score_tier(&self) -> ScoreTier {
        self.score.tier()
    }
}

/// Full analysis of a single topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub rank: u32,
    pub title: String,
    pub heat: u64,
    pub tags: String,
    pub category: Category,
    pub category_label: String,
    pub background: EventBackground,
    pub idea: ProductIdea,
}

impl AnalysisResult {
    pub fn total_score(&self) -> u8 {
        self.idea.total_score()
    }
}

/// Aggregate output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_time: DateTime<Local>,
    pub total_topics: usize,
    pub excellent_count: usize,
    pub good_count: usize,
    pub fair_count: usize,
    pub avg_score: f64,
    /// Sorted by total score, highest first
    pub topics: Vec<AnalysisResult>,
}
