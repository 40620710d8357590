//! Product idea synthesis: template lookup, name resolution and scoring.

use super::models::{Category, EntitySet, EntitySlot, IdeaScore, ProductIdea};
use super::templates::{idea_template_or_fallback, IdeaTemplate};

/// Turns a classified topic into a scored product idea.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdeaSynthesizer;

impl IdeaSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(&self, title: &str, category: Category, entities: &EntitySet) -> ProductIdea {
        let template = idea_template_or_fallback(category);

        ProductIdea {
            name: resolve_name(template, entities),
            slogan: template.slogan.to_string(),
            core_function: template.core_function.to_string(),
            feature_list: to_strings(template.features),
            target_users: template.target_users.to_string(),
            user_pain_points: to_strings(template.pain_points),
            solution: template.solution.to_string(),
            business_model: template.business_model.to_string(),
            competitive_advantage: template.competitive_advantage.to_string(),
            score: IdeaScore::new(template.interestingness, template.usefulness),
            market_analysis: market_analysis(title, template.business_model),
            implementation_steps: to_strings(template.implementation),
        }
    }
}

/// Resolve the product name.
///
/// Slots are checked in priority order; the first one whose placeholder
/// appears in the pattern and whose value was extracted is substituted.
/// Otherwise the default name is returned unchanged.
pub fn resolve_name(template: &IdeaTemplate, entities: &EntitySet) -> String {
    EntitySlot::PRIORITY
        .iter()
        .find_map(|slot| {
            let value = entities.get(*slot)?;
            template
                .name_pattern
                .contains(slot.placeholder())
                .then(|| template.name_pattern.replace(slot.placeholder(), value))
        })
        .unwrap_or_else(|| template.default_name.to_string())
}

/// Five-point market narrative around the topic.
pub fn market_analysis(title: &str, business_model: &str) -> String {
    format!(
        "基于【{title}】热点分析：\n\
         1. 用户需求验证：该话题的高热度表明用户对此类问题存在真实需求\n\
         2. 市场时机：趁热点窗口期推出相关产品，能获得大量免费流量\n\
         3. 竞品情况：目前市场上缺乏专门针对此类场景的解决方案\n\
         4. 商业潜力：{business_model}\n\
         5. 发展建议：快速MVP验证，持续迭代优化"
    )
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
