//! Category Text Selector
//!
//! Looks up category text, warnings, remedies and prescriptions in an
//! `AdvisoryTables` instance, applying the fallbacks:
//! - warnings: missing tier → balanced tier → empty
//! - remedies: needed element → category default → empty
//! - prescriptions: category without rows → wealth rows; element without a
//!   row → generic prescription

use crate::tables::categories::{
    AdvisoryTables, GENERIC_PRESCRIPTION, HIGH_SCORE_ADDENDUM, LOW_SCORE_ADDENDUM,
};
use crate::tables::{Element, FortuneCategory, Prescription, SurplusTier};

pub const HIGH_SCORE_ABOVE: u8 = 70;
pub const LOW_SCORE_BELOW: u8 = 30;

#[derive(Debug, Clone, Copy)]
pub struct CategoryTextSelector<'a> {
    tables: &'a AdvisoryTables,
}

impl Default for CategoryTextSelector<'static> {
    fn default() -> Self {
        Self::new(AdvisoryTables::standard())
    }
}

impl<'a> CategoryTextSelector<'a> {
    pub fn new(tables: &'a AdvisoryTables) -> Self {
        Self { tables }
    }

    /// Tier text, empty when the category has none
    pub fn text(&self, category: FortuneCategory, tier: SurplusTier) -> String {
        self.tables
            .tier_text(category, tier)
            .unwrap_or_default()
            .to_string()
    }

    /// Tier text plus a score addendum. A category with tier texts but none
    /// for this tier still gets the addendum; a category with no tier texts
    /// at all gets nothing.
    pub fn detail_text(&self, category: FortuneCategory, tier: SurplusTier, score: u8) -> String {
        if !self.tables.has_tier_texts_for(category) {
            return String::new();
        }
        let text = self.tables.tier_text(category, tier).unwrap_or_default();
        let addendum = if score > HIGH_SCORE_ABOVE {
            Some(HIGH_SCORE_ADDENDUM)
        } else if score < LOW_SCORE_BELOW {
            Some(LOW_SCORE_ADDENDUM)
        } else {
            None
        };
        match addendum {
            Some(addendum) if text.is_empty() => addendum.to_string(),
            Some(addendum) => format!("{} {}", text, addendum),
            None => text.to_string(),
        }
    }

    pub fn warnings(&self, category: FortuneCategory, tier: SurplusTier) -> Vec<String> {
        self.tables
            .warnings(category, tier)
            .or_else(|| self.tables.warnings(category, SurplusTier::Balanced))
            .map(to_owned_lines)
            .unwrap_or_default()
    }

    pub fn remedies(&self, category: FortuneCategory, needed: Option<Element>) -> Vec<String> {
        let Some(row) = self.tables.remedies(category) else {
            return Vec::new();
        };
        let by_element = needed.and_then(|element| {
            row.by_element
                .iter()
                .find(|(e, _)| *e == element)
                .map(|(_, lines)| *lines)
        });
        to_owned_lines(by_element.unwrap_or(row.default))
    }

    pub fn prescription(&self, category: FortuneCategory, needed: Option<Element>) -> Prescription {
        let group = if self.tables.has_prescriptions_for(category) {
            category
        } else {
            FortuneCategory::Wealth
        };
        needed
            .and_then(|element| self.tables.prescription(group, element))
            .unwrap_or(GENERIC_PRESCRIPTION)
    }
}

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
