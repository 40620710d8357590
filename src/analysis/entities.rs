//! Pattern-based entity extraction from topic titles.
//!
//! Each slot owns an ordered rule list; the first rule with a match fills the
//! slot. Slots are scanned independently, so the same text may land in more
//! than one slot (a city is both a location and a destination).

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{EntitySet, EntitySlot};

const CITY_PATTERN: &str =
    r"(北京|上海|广州|深圳|杭州|成都|重庆|武汉|西安|南京|天津|苏州|郑州|长沙|大同|石家庄|贵州)";
const ADMIN_REGION_PATTERN: &str = r"(\w{1,5}(?:省|市|县))";
const BRAND_PATTERN: &str = r"(?i)(华为|苹果|iPhone|小米|OPPO|vivo|三星|特斯拉|比亚迪|蔚来|理想|小鹏)";
const CELEBRITY_PATTERN: &str =
    r"(福原爱|魏建军|阿信|陈都灵|王影璐|[\x{4e00}-\x{9fa5}]{2,4}(?:明星|演员|歌手))";

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid entity pattern {p}: {e}")))
        .collect()
}

static LOCATION_RULES: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[CITY_PATTERN, ADMIN_REGION_PATTERN]));
static BRAND_RULES: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[BRAND_PATTERN]));
static CELEBRITY_RULES: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[CELEBRITY_PATTERN]));

/// Extracts location, brand, celebrity and destination mentions.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    fn rules(slot: EntitySlot) -> &'static [Regex] {
        match slot {
            // Destinations reuse the location rules.
            EntitySlot::Location | EntitySlot::Destination => &LOCATION_RULES,
            EntitySlot::Brand => &BRAND_RULES,
            EntitySlot::Celebrity => &CELEBRITY_RULES,
        }
    }

    /// First match of the slot's rules, in rule order.
    pub fn extract_slot(&self, slot: EntitySlot, title: &str) -> Option<String> {
        Self::rules(slot).iter().find_map(|rule| {
            rule.captures(title)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
    }

    /// Extract every slot from a title.
    pub fn extract(&self, title: &str) -> EntitySet {
        let mut entities = EntitySet::default();
        for slot in EntitySlot::PRIORITY {
            if let Some(value) = self.extract_slot(slot, title) {
                entities.set(slot, value);
            }
        }
        entities
    }
}
