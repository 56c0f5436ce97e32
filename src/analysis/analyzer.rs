//! Interaction Analyzer - combines the per-aspect analyses into one result
//!
//! Impact accumulation: day master + element surplus + every branch match,
//! then clamped to [-3, 3]. Only the clamped level leaves this module.

use tracing::debug;

use super::branches::analyze_branches;
use super::day_master::analyze_day_master;
use super::elements::{analyze_surplus, evaluate_balance};
use super::relations::format_relations;
use super::types::{InteractionResult, ReferenceYearAnalysis};
use crate::chart::NormalizedChart;
use crate::error::Result;
use crate::scorer::calculate_fortune_score;
use crate::tables::{impact_text, ReferenceYear, MAX_IMPACT_LEVEL, MIN_IMPACT_LEVEL, REFERENCE_YEAR};

/// Analyze a chart against the 2026 reference year
pub fn analyze_interactions(chart: &NormalizedChart) -> Result<InteractionResult> {
    analyze_against(chart, &REFERENCE_YEAR)
}

/// Analyze a chart against an arbitrary reference year.
///
/// Branch relations are tabulated for a 午 reference branch only; any other
/// reference branch contributes no branch interactions. Fails only when the element distribution could not come from an
/// 8-symbol chart.
pub fn analyze_against(chart: &NormalizedChart, year: &ReferenceYear) -> Result<InteractionResult> {
    chart.elements.validate()?;

    let relations = format_relations(&chart.relations);
    let year_analysis = analyze_reference_year(chart, year);
    let element_balance = evaluate_balance(&chart.elements);
    let fortune_score = calculate_fortune_score(&year_analysis, &element_balance, &relations);

    debug!(
        impact_level = year_analysis.impact_level,
        balance_score = element_balance.balance_score,
        fortune_score,
        "Interaction analysis complete"
    );

    Ok(InteractionResult {
        relations,
        year2026: year_analysis,
        element_balance,
        fortune_score,
    })
}

fn analyze_reference_year(chart: &NormalizedChart, year: &ReferenceYear) -> ReferenceYearAnalysis {
    let day_master_interaction = analyze_day_master(chart.day_master.element, year.element);
    let element_interaction = analyze_surplus(&chart.elements, year.element);
    let branch_interactions = analyze_branches(&chart.pillars, year.branch);

    let total: i32 = day_master_interaction.as_ref().map_or(0, |d| d.level as i32)
        + element_interaction.level as i32
        + branch_interactions.iter().map(|b| b.impact as i32).sum::<i32>();
    let impact_level = total.clamp(MIN_IMPACT_LEVEL as i32, MAX_IMPACT_LEVEL as i32) as i8;

    ReferenceYearAnalysis {
        year_info: *year,
        day_master_interaction,
        element_interaction,
        branch_interactions,
        overall_impact: impact_text(impact_level).to_string(),
        impact_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{normalize, ElementDistribution, RawChart, RawPillars};
    use crate::error::FortuneError;
    use crate::tables::{Branch, DayMasterCategory, Element, Stem, SurplusTier};

    fn chart(year: &str, month: &str, day: &str, hour: &str) -> NormalizedChart {
        normalize(&RawChart {
            pillars: RawPillars {
                year: year.into(),
                month: month.into(),
                day: day.into(),
                hour: hour.into(),
            },
            ..Default::default()
        })
    }

    #[test]
    fn test_metal_day_master_two_fire_no_branch_matches() {
        // 庚 metal day master; 丙 + 丁 = 2 fire; branches 辰 申 酉 亥 have no relation to 午
        let normalized = chart("丙辰", "丁亥", "庚申", "壬酉");
        let result = analyze_interactions(&normalized).unwrap();
        let year = &result.year2026;

        assert_eq!(
            year.day_master_interaction.as_ref().unwrap().category,
            DayMasterCategory::AuthorityPressure
        );
        assert_eq!(year.element_interaction.tier, SurplusTier::Balanced);
        assert!(year.branch_interactions.is_empty());
        // -1 + 1 + 0
        assert_eq!(year.impact_level, 0);
        assert_eq!(year.overall_impact, impact_text(0));
    }

    #[test]
    fn test_impact_clamped_high() {
        // Earth day master (+2), no fire (+2), 寅 戌 未 combinations (+6)
        let normalized = chart("甲寅", "壬戌", "戊戌", "癸未");
        let result = analyze_interactions(&normalized).unwrap();
        assert_eq!(result.year2026.impact_level, 3);
        assert_eq!(result.year2026.branch_interactions.len(), 4);
    }

    #[test]
    fn test_impact_clamped_low() {
        // Metal day master (-1), fire surplus (-2), 子 clashes (-4)
        let normalized = chart("丙子", "丁午", "庚子", "丙午");
        let result = analyze_interactions(&normalized).unwrap();
        assert_eq!(result.year2026.impact_level, -3);
        for b in &result.year2026.branch_interactions {
            assert!(b.impact < 0);
        }
    }

    #[test]
    fn test_unknown_day_master_contributes_nothing() {
        let normalized = chart("甲辰", "乙巳", "", "庚申");
        let result = analyze_interactions(&normalized).unwrap();
        assert!(result.year2026.day_master_interaction.is_none());
        // 巳 is fire: balanced tier +1
        assert_eq!(result.year2026.impact_level, 1);
    }

    #[test]
    fn test_other_reference_year_uses_its_own_branch() {
        // 壬子: water year. Two 午 branches would self-punish against 午 only.
        let water_year = ReferenceYear {
            year: 2032,
            stem: Stem::Im,
            branch: Branch::Ja,
            element: Element::Water,
        };
        let normalized = chart("甲午", "丙午", "戊辰", "庚申");

        let result = analyze_against(&normalized, &water_year).unwrap();
        assert!(result.year2026.branch_interactions.is_empty());
        assert_eq!(result.year2026.year_info, water_year);
        // earth day master dominates water (+2), no water symbols (+2)
        assert_eq!(
            result.year2026.day_master_interaction.as_ref().unwrap().category,
            DayMasterCategory::WealthOpportunity
        );
        assert_eq!(result.year2026.impact_level, 3);

        let against_o = analyze_interactions(&normalized).unwrap();
        assert_eq!(against_o.year2026.branch_interactions.len(), 2);
    }

    #[test]
    fn test_invalid_distribution_rejected() {
        let mut normalized = chart("甲辰", "乙巳", "丙午", "庚申");
        normalized.elements = ElementDistribution::from_counts([2, 2, 2, 1, 1]).unwrap();
        if let Some(share) = normalized.elements.shares.get_mut(&crate::tables::Element::Wood) {
            share.count = 6;
        }
        let err = analyze_interactions(&normalized).unwrap_err();
        assert!(matches!(err, FortuneError::InvalidDistribution(_)));
    }

    #[test]
    fn test_bounds_hold_for_all_day_stems() {
        for stem in ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"] {
            for branch in ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"] {
                let day = format!("{}{}", stem, branch);
                let normalized = chart("丙午", "甲子", &day, "戊戌");
                let result = analyze_interactions(&normalized).unwrap();
                assert!((-3..=3).contains(&result.year2026.impact_level));
                assert!(result.element_balance.balance_score <= 100);
                assert!(result.fortune_score <= 100);
            }
        }
    }
}
