//! Event background synthesis from per-category narrative templates.

use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::models::{Category, EntitySet, EntitySlot, EventBackground};
use super::templates::{background_template, BackgroundTemplate, GENERIC_BACKGROUND};

/// Fills narrative templates with the title, entities and current time.
#[derive(Clone)]
pub struct BackgroundSynthesizer {
    clock: Arc<dyn Clock>,
}

impl Default for BackgroundSynthesizer {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl BackgroundSynthesizer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn synthesize(&self, title: &str, category: Category, entities: &EntitySet) -> EventBackground {
        let template: &BackgroundTemplate =
            background_template(category).unwrap_or(&GENERIC_BACKGROUND);
        let time = self.clock.now().format("%H:%M").to_string();
        let fill = |text: &str| fill_placeholders(text, title, &time, entities);

        EventBackground {
            summary: fill(template.summary),
            key_points: template.key_points.iter().copied().map(&fill).collect(),
            timeline: template.timeline.iter().copied().map(&fill).collect(),
            public_opinion: template.public_opinion.to_string(),
            related_topics: template
                .related_topics
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

/// Substitute `{title}`, `{time}` and entity placeholders.
///
/// Empty entity slots are replaced by the slot's fallback label.
fn fill_placeholders(text: &str, title: &str, time: &str, entities: &EntitySet) -> String {
    let mut out = text.replace("{time}", time);
    for slot in EntitySlot::PRIORITY {
        if out.contains(slot.placeholder()) {
            let value = entities.get(slot).unwrap_or(slot.fallback());
            out = out.replace(slot.placeholder(), value);
        }
    }
    // Title last, so braces inside a title are never treated as placeholders.
    out.replace("{title}", title)
}
