use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::InteractionResult;
use crate::chart::{BirthInput, ChartPillars, DayMaster, ElementDistribution, RawYongShen};
use crate::tables::FortuneCategory;

/// Complete interpretation of one chart, built once per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fortune {
    pub greeting: String,
    pub saju_summary: Vec<String>,
    pub overall: Vec<String>,
    pub categories: BTreeMap<FortuneCategory, CategoryAdvisory>,
    pub yong_shen_advice: Vec<String>,
    pub monthly: Vec<MonthlyFortune>,
    pub lucky: LuckyAttributes,
    pub prescriptions: Vec<ExpertPrescription>,
    pub fortune_score: u8,
}

/// Advisory text for one life category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAdvisory {
    pub id: FortuneCategory,
    pub name: String,
    pub emoji: String,
    pub text: String,
    pub detail_text: String,
    pub warnings: Vec<String>,
    pub remedies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFortune {
    pub month: u8,
    /// 20..=95
    pub score: u8,
    pub keyword: String,
    pub theme: String,
    pub advice: String,
    pub good: String,
    pub bad: String,
    pub health: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyAttributes {
    pub direction: String,
    pub color: String,
    pub element: String,
    pub number: String,
    pub gem: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertPrescription {
    pub category: FortuneCategory,
    pub name: String,
    pub emoji: String,
    pub action: String,
    pub tip: String,
}

// ============================================================================
// Projections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCategory {
    pub name: String,
    pub emoji: String,
    pub text: String,
    pub visible: bool,
}

/// Screen summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryProjection {
    pub greeting: String,
    pub saju_summary: Vec<String>,
    pub overall: Vec<String>,
    pub all_categories: BTreeMap<FortuneCategory, SummaryCategory>,
    pub lucky: LuckyAttributes,
    pub fortune_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailCategory {
    #[serde(flatten)]
    pub advisory: CategoryAdvisory,
    pub visible: bool,
}

/// Long-form document and export view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailProjection {
    pub title: String,
    pub subtitle: String,
    pub generated_at: DateTime<Utc>,
    pub saju_summary: Vec<String>,
    pub pillars: ChartPillars,
    pub day_master: DayMaster,
    pub elements: ElementDistribution,
    pub overall: Vec<String>,
    pub categories: BTreeMap<FortuneCategory, DetailCategory>,
    pub monthly: Vec<MonthlyFortune>,
    pub interactions: InteractionResult,
    pub yong_shen_advice: Vec<String>,
    pub yong_shen: Option<RawYongShen>,
    pub lucky: LuckyAttributes,
    pub prescriptions: Vec<ExpertPrescription>,
    pub major_luck: serde_json::Value,
    pub yearly_luck: serde_json::Value,
    pub fortune_score: u8,
    pub birth_input: Option<BirthInput>,
}

/// Both projections of one `Fortune`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub fortune: Fortune,
    pub summary: SummaryProjection,
    pub detail: DetailProjection,
}
