//! Interaction analysis result types
//!
//! All of these serialize in camelCase and are embedded verbatim in the
//! detail projection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

use crate::chart::RawRelation;
use crate::tables::{
    Branch, BranchRelationKind, DayMasterCategory, Element, PillarPosition, ReferenceYear,
    RelationType, SurplusTier,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResult {
    pub relations: FormattedRelations,
    pub year2026: ReferenceYearAnalysis,
    pub element_balance: ElementBalance,
    pub fortune_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceYearAnalysis {
    pub year_info: ReferenceYear,
    pub day_master_interaction: Option<DayMasterInteraction>,
    pub element_interaction: ElementInteraction,
    pub branch_interactions: SmallVec<[BranchInteraction; 4]>,
    pub overall_impact: String,
    /// Clamped to [-3, 3]
    pub impact_level: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMasterInteraction {
    pub category: DayMasterCategory,
    pub label: String,
    pub description: String,
    pub impact: String,
    pub level: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInteraction {
    pub tier: SurplusTier,
    pub reference_count: u8,
    pub label: String,
    pub description: String,
    pub impact: String,
    pub level: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchInteraction {
    pub position: PillarPosition,
    pub branch: Branch,
    pub branch_korean: String,
    pub kind: BranchRelationKind,
    pub name: String,
    pub impact: i8,
    pub description: String,
}

// ============================================================================
// Element balance
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementStatus {
    Excess,
    Adequate,
    Deficient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDeviation {
    pub ratio: u8,
    pub deviation: u8,
    pub status: ElementStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceInterpretation {
    WellBalanced,
    PartialImbalance,
    StrongImbalance,
}

impl BalanceInterpretation {
    pub fn text(self) -> &'static str {
        match self {
            BalanceInterpretation::WellBalanced => "Your five elements are relatively well balanced.",
            BalanceInterpretation::PartialImbalance => {
                "Some elements are out of balance and would benefit from support."
            }
            BalanceInterpretation::StrongImbalance => {
                "Your elements are strongly imbalanced. Making use of your needed element (用神) matters."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBalance {
    pub deviations: BTreeMap<Element, ElementDeviation>,
    /// 0..=100
    pub balance_score: u8,
    pub interpretation: BalanceInterpretation,
    pub interpretation_text: String,
}

// ============================================================================
// Chart-internal relations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRelation {
    #[serde(flatten)]
    pub raw: RawRelation,
    pub relation_type: RelationType,
    pub type_name: String,
    pub type_description: String,
    pub positive: String,
    pub negative: String,
    /// "A–B name"
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRelations {
    pub combinations: Vec<ChartRelation>,
    pub clashes: Vec<ChartRelation>,
    pub harms: Vec<ChartRelation>,
    pub punishments: Vec<ChartRelation>,
    pub has_significant: bool,
}
