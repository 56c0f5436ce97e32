//! Reference Year Tables (2026, 丙午 Byeong-O)
//!
//! Every chart is analyzed against one fixed year. Its stem, branch and element,
//! the 12-entry branch-relation table against 午, the day-master category texts,
//! the surplus tier texts and the seven overall-impact texts all live here.
//! Analyzing a different year means replacing this table, not the algorithm.

use serde::{Deserialize, Serialize};

use super::symbols::{Branch, Element, Stem};

/// The fixed year every chart is analyzed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceYear {
    pub year: i32,
    pub stem: Stem,
    pub branch: Branch,
    pub element: Element,
}

impl ReferenceYear {
    /// Stem+branch symbols, e.g. "丙午"
    pub fn pillar(&self) -> String {
        format!("{}{}", self.stem.symbol(), self.branch.symbol())
    }

    /// Romanized name, e.g. "Byeong-O"
    pub fn display_name(&self) -> String {
        format!("{}-{}", self.stem.romanized(), self.branch.romanized())
    }
}

pub const REFERENCE_YEAR: ReferenceYear = ReferenceYear {
    year: 2026,
    stem: Stem::Byeong,
    branch: Branch::O,
    element: Element::Fire,
};

/// Intro paragraph used at the top of the overall fortune
pub const REFERENCE_YEAR_DESCRIPTION: &str = "2026 is the Byeong-O (丙午) year of the Red Horse. \
Both its heavenly stem and earthly branch carry yang fire, so the whole year burns with \
bright, fast-moving energy: a time for visibility and action, and for keeping a cool head.";

// ============================================================================
// Branch relations against the reference branch (午)
// ============================================================================

/// Kind of relation between a chart branch and the reference branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BranchRelationKind {
    Combination,
    Clash,
    Harm,
    Destruction,
    SelfPunishment,
}

/// One row of the branch-relation table
#[derive(Debug, Clone, Copy)]
pub struct BranchRelation {
    pub kind: BranchRelationKind,
    pub name: &'static str,
    pub impact: i8,
    pub description: &'static str,
}

/// Relations against 午, indexed by `Branch as usize`; `None` means no relation.
static O_BRANCH_RELATIONS: [Option<BranchRelation>; 12] = [
    // 子
    Some(BranchRelation {
        kind: BranchRelationKind::Clash,
        name: "Ja-O Clash (子午沖)",
        impact: -2,
        description: "A strong clash. Expect upheaval and conflict.",
    }),
    // 丑
    Some(BranchRelation {
        kind: BranchRelationKind::Harm,
        name: "Chuk-O Harm (丑午害)",
        impact: -1,
        description: "Subtle interference. Beware of petty people.",
    }),
    // 寅
    Some(BranchRelation {
        kind: BranchRelationKind::Combination,
        name: "In-O Combination (寅午合)",
        impact: 2,
        description: "Part of the fire triad. Strong energy for reaching your goals.",
    }),
    // 卯
    Some(BranchRelation {
        kind: BranchRelationKind::Destruction,
        name: "Myo-O Destruction (卯午破)",
        impact: -1,
        description: "Existing plans may run into setbacks.",
    }),
    // 辰
    None,
    // 巳
    None,
    // 午
    Some(BranchRelation {
        kind: BranchRelationKind::SelfPunishment,
        name: "O-O Self-Punishment (午午自刑)",
        impact: -1,
        description: "Guard against showing off.",
    }),
    // 未
    Some(BranchRelation {
        kind: BranchRelationKind::Combination,
        name: "O-Mi Combination (午未合)",
        impact: 2,
        description: "A good union. You may meet someone who helps you.",
    }),
    // 申
    None,
    // 酉
    None,
    // 戌
    Some(BranchRelation {
        kind: BranchRelationKind::Combination,
        name: "O-Sul Combination (午戌合)",
        impact: 2,
        description: "Part of the fire triad. Great achievements are possible.",
    }),
    // 亥
    None,
];

/// Look up the relation between a chart branch and a reference branch.
///
/// Only 午 carries a relation table; any other reference branch matches nothing.
pub fn branch_relation(branch: Branch, reference: Branch) -> Option<&'static BranchRelation> {
    let table = match reference {
        Branch::O => &O_BRANCH_RELATIONS,
        _ => return None,
    };
    table[branch as usize].as_ref()
}

// ============================================================================
// Day-master categories
// ============================================================================

/// How the day master's element relates to the reference element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayMasterCategory {
    PeerSupport,
    ResourceSupport,
    ExpressionOutput,
    WealthOpportunity,
    AuthorityPressure,
}

impl DayMasterCategory {
    pub fn impact(self) -> i8 {
        match self {
            DayMasterCategory::PeerSupport => 1,
            DayMasterCategory::ResourceSupport => 2,
            DayMasterCategory::ExpressionOutput => 1,
            DayMasterCategory::WealthOpportunity => 2,
            DayMasterCategory::AuthorityPressure => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayMasterCategory::PeerSupport => "Peer Support (比劫)",
            DayMasterCategory::ResourceSupport => "Resource Support (印星)",
            DayMasterCategory::ExpressionOutput => "Expression Output (食傷)",
            DayMasterCategory::WealthOpportunity => "Wealth Opportunity (財星)",
            DayMasterCategory::AuthorityPressure => "Authority Pressure (官星)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DayMasterCategory::PeerSupport => "The year shares your element and reinforces your strength.",
            DayMasterCategory::ResourceSupport => "The fire of the Byeong-O year generates your element.",
            DayMasterCategory::ExpressionOutput => "Your energy flows outward into the fire of the year.",
            DayMasterCategory::WealthOpportunity => "The Byeong-O year is an opportunity for wealth.",
            DayMasterCategory::AuthorityPressure => "The fire of the Byeong-O year presses down on you.",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            DayMasterCategory::PeerSupport => {
                "Confidence and drive rise, but keep excessive competitiveness in check."
            }
            DayMasterCategory::ResourceSupport => {
                "A lively year for study, certifications and help from seniors."
            }
            DayMasterCategory::ExpressionOutput => {
                "Expression and creativity peak, but watch how much energy you spend."
            }
            DayMasterCategory::WealthOpportunity => {
                "Wealth and business chances open up; avoid reckless investments."
            }
            DayMasterCategory::AuthorityPressure => {
                "Expect changes around work, exams and discipline. Look after your health."
            }
        }
    }
}

// ============================================================================
// Surplus tiers (count of the reference element in the chart)
// ============================================================================

/// Classification of how many chart symbols carry the reference element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurplusTier {
    Surplus,
    Balanced,
    Deficit,
}

/// Count at or above which the reference element is in surplus
pub const SURPLUS_THRESHOLD: u8 = 3;

impl SurplusTier {
    pub fn from_count(count: u8) -> Self {
        if count >= SURPLUS_THRESHOLD {
            SurplusTier::Surplus
        } else if count == 0 {
            SurplusTier::Deficit
        } else {
            SurplusTier::Balanced
        }
    }

    pub fn impact(self) -> i8 {
        match self {
            SurplusTier::Surplus => -2,
            SurplusTier::Balanced => 1,
            SurplusTier::Deficit => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SurplusTier::Surplus => "Fire Surplus (火過多)",
            SurplusTier::Balanced => "Fire in Harmony (火調和)",
            SurplusTier::Deficit => "Fire Replenished (火補充)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SurplusTier::Surplus => "Byeong-O fire is added to a chart that is already fire-heavy.",
            SurplusTier::Balanced => "A moderate amount of fire joins your chart and keeps it in balance.",
            SurplusTier::Deficit => "The Byeong-O year fills in the fire your chart is missing.",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            SurplusTier::Surplus => {
                "Beware of overheating. Manage your emotions and watch your heart and blood pressure."
            }
            SurplusTier::Balanced => "A year of stable yet progressive energy.",
            SurplusTier::Deficit => "Vitality and passion come alive. Take the initiative.",
        }
    }
}

// ============================================================================
// Overall impact tiers
// ============================================================================

pub const MIN_IMPACT_LEVEL: i8 = -3;
pub const MAX_IMPACT_LEVEL: i8 = 3;

/// Indexed by `level + 3`
static IMPACT_TEXTS: [&str; 7] = [
    "2026 is a year of considerable challenges. Act with care.",
    "2026 is a year that calls for change and adaptation.",
    "2026 brings minor obstacles, all of them surmountable.",
    "2026 is a relatively smooth year.",
    "2026 is a year of small but certain growth.",
    "2026 is a year in which good opportunities open up.",
    "2026 is a peak year in which you can leap forward!",
];

/// Overall impact text for a level; out-of-range levels are clamped first.
pub fn impact_text(level: i8) -> &'static str {
    let clamped = level.clamp(MIN_IMPACT_LEVEL, MAX_IMPACT_LEVEL);
    IMPACT_TEXTS[(clamped - MIN_IMPACT_LEVEL) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_year_constants() {
        assert_eq!(REFERENCE_YEAR.pillar(), "丙午");
        assert_eq!(REFERENCE_YEAR.element, Element::Fire);
        assert_eq!(REFERENCE_YEAR.stem.element(), REFERENCE_YEAR.element);
        assert_eq!(REFERENCE_YEAR.display_name(), "Byeong-O");
    }

    #[test]
    fn test_branch_table_covers_all_twelve_branches() {
        let matched: Vec<Branch> = Branch::ALL
            .into_iter()
            .filter(|b| branch_relation(*b, Branch::O).is_some())
            .collect();
        assert_eq!(matched.len(), 7);
        assert!(branch_relation(Branch::Jin, Branch::O).is_none());
        assert!(branch_relation(Branch::Hae, Branch::O).is_none());
    }

    #[test]
    fn test_rat_clash_and_dog_combination() {
        let clash = branch_relation(Branch::Ja, Branch::O).unwrap();
        assert_eq!(clash.kind, BranchRelationKind::Clash);
        assert_eq!(clash.impact, -2);
        assert!(clash.name.contains("子午"));

        let combo = branch_relation(Branch::Sul, Branch::O).unwrap();
        assert_eq!(combo.kind, BranchRelationKind::Combination);
        assert_eq!(combo.impact, 2);
    }

    #[test]
    fn test_surplus_tiers() {
        assert_eq!(SurplusTier::from_count(0), SurplusTier::Deficit);
        assert_eq!(SurplusTier::from_count(1), SurplusTier::Balanced);
        assert_eq!(SurplusTier::from_count(2), SurplusTier::Balanced);
        assert_eq!(SurplusTier::from_count(3), SurplusTier::Surplus);
        assert_eq!(SurplusTier::from_count(6), SurplusTier::Surplus);
    }

    #[test]
    fn test_impact_text_clamps() {
        assert_eq!(impact_text(-9), impact_text(-3));
        assert_eq!(impact_text(7), impact_text(3));
        assert_eq!(impact_text(0), "2026 is a relatively smooth year.");
    }
}
