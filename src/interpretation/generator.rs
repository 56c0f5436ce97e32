use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::time::Instant;

use super::monthly::build_monthly;
use super::sections::{
    build_greeting, build_lucky, build_overall, build_saju_summary, build_yong_shen_advice,
    year_guide_for,
};
use super::selector::CategoryTextSelector;
use super::types::*;
use crate::analysis::InteractionResult;
use crate::chart::{BirthInput, NormalizedChart};
use crate::tables::FortuneCategory;

/// Title of the long-form document
pub const REPORT_TITLE: &str = "2026 Byeong-O (丙午) Fortune & Health Report";

/// Categories that get a prescription on the final page
const PRESCRIPTION_CATEGORIES: [FortuneCategory; 2] =
    [FortuneCategory::Wealth, FortuneCategory::Health];

/// Builds one `Fortune` per chart and projects it into both views
pub struct InterpretationGenerator<'a> {
    selector: CategoryTextSelector<'a>,
}

impl Default for InterpretationGenerator<'static> {
    fn default() -> Self {
        Self::new(CategoryTextSelector::default())
    }
}

impl<'a> InterpretationGenerator<'a> {
    pub fn new(selector: CategoryTextSelector<'a>) -> Self {
        Self { selector }
    }

    /// Generate the fortune and both projections.
    ///
    /// `generated_at` comes from the request context so repeated runs over
    /// the same input differ only in that field.
    pub fn generate(
        &self,
        chart: &NormalizedChart,
        interactions: &InteractionResult,
        birth_input: Option<&BirthInput>,
        generated_at: DateTime<Utc>,
    ) -> Interpretation {
        let start = Instant::now();

        let fortune = self.build_fortune(chart, interactions);
        let summary = Self::summary(&fortune);
        let detail = Self::detail(&fortune, chart, interactions, birth_input, generated_at);

        tracing::info!(
            "Interpretation generated in {:.2} ms (score {})",
            start.elapsed().as_secs_f64() * 1000.0,
            fortune.fortune_score
        );

        Interpretation {
            fortune,
            summary,
            detail,
        }
    }

    pub fn build_fortune(&self, chart: &NormalizedChart, interactions: &InteractionResult) -> Fortune {
        let guide = year_guide_for(chart);
        let score = interactions.fortune_score;
        let tier = interactions.year2026.element_interaction.tier;
        let needed = chart.needed_element;

        let categories: BTreeMap<FortuneCategory, CategoryAdvisory> = FortuneCategory::ALL
            .into_iter()
            .map(|category| {
                let advisory = CategoryAdvisory {
                    id: category,
                    name: category.display_name().to_string(),
                    emoji: category.emoji().to_string(),
                    text: self.selector.text(category, tier),
                    detail_text: self.selector.detail_text(category, tier, score),
                    warnings: self.selector.warnings(category, tier),
                    remedies: self.selector.remedies(category, needed),
                };
                (category, advisory)
            })
            .collect();

        let prescriptions = PRESCRIPTION_CATEGORIES
            .into_iter()
            .map(|category| {
                let prescription = self.selector.prescription(category, needed);
                ExpertPrescription {
                    category,
                    name: category.display_name().to_string(),
                    emoji: category.emoji().to_string(),
                    action: prescription.action.to_string(),
                    tip: prescription.tip.to_string(),
                }
            })
            .collect();

        Fortune {
            greeting: build_greeting(chart),
            saju_summary: build_saju_summary(chart),
            overall: build_overall(chart, interactions, guide),
            categories,
            yong_shen_advice: build_yong_shen_advice(chart.yong_shen.as_ref()),
            monthly: build_monthly(score),
            lucky: build_lucky(chart.day_master.element, guide),
            prescriptions,
            fortune_score: score,
        }
    }

    pub fn summary(fortune: &Fortune) -> SummaryProjection {
        let all_categories = fortune
            .categories
            .iter()
            .map(|(id, advisory)| {
                (
                    *id,
                    SummaryCategory {
                        name: advisory.name.clone(),
                        emoji: advisory.emoji.clone(),
                        text: advisory.text.clone(),
                        visible: true,
                    },
                )
            })
            .collect();

        SummaryProjection {
            greeting: fortune.greeting.clone(),
            saju_summary: fortune.saju_summary.clone(),
            overall: fortune.overall.clone(),
            all_categories,
            lucky: fortune.lucky.clone(),
            fortune_score: fortune.fortune_score,
        }
    }

    pub fn detail(
        fortune: &Fortune,
        chart: &NormalizedChart,
        interactions: &InteractionResult,
        birth_input: Option<&BirthInput>,
        generated_at: DateTime<Utc>,
    ) -> DetailProjection {
        let categories = fortune
            .categories
            .iter()
            .map(|(id, advisory)| {
                (
                    *id,
                    DetailCategory {
                        advisory: advisory.clone(),
                        visible: true,
                    },
                )
            })
            .collect();

        DetailProjection {
            title: REPORT_TITLE.to_string(),
            subtitle: fortune.greeting.clone(),
            generated_at,
            saju_summary: fortune.saju_summary.clone(),
            pillars: chart.pillars.clone(),
            day_master: chart.day_master.clone(),
            elements: chart.elements.clone(),
            overall: fortune.overall.clone(),
            categories,
            monthly: fortune.monthly.clone(),
            interactions: interactions.clone(),
            yong_shen_advice: fortune.yong_shen_advice.clone(),
            yong_shen: chart.yong_shen.clone(),
            lucky: fortune.lucky.clone(),
            prescriptions: fortune.prescriptions.clone(),
            major_luck: chart.major_luck.clone(),
            yearly_luck: chart.yearly_luck.clone(),
            fortune_score: fortune.fortune_score,
            birth_input: birth_input.cloned(),
        }
    }
}
