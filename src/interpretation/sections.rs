//! Text builders for the fixed sections of a fortune

use crate::analysis::InteractionResult;
use crate::chart::{NormalizedChart, RawYongShen};
use crate::tables::year_guide::{DEFAULT_LUCKY_GEM, DEFAULT_LUCKY_NUMBER};
use crate::tables::{
    element_year_guide, Element, ElementYearGuide, REFERENCE_YEAR, REFERENCE_YEAR_DESCRIPTION,
};

use super::types::LuckyAttributes;

/// Fallback when an interaction result carries no overall text
const DEFAULT_OVERALL_IMPACT: &str = "A stable, comfortable year lies ahead.";

fn element_label(element: Element) -> String {
    format!("{} ({})", element.display_name(), element.hanja())
}

pub fn build_greeting(chart: &NormalizedChart) -> String {
    let year = &chart.pillars.year;
    match (year.stem, year.branch) {
        (Some(stem), Some(branch)) => format!(
            "Dear {} of the {}-{} ({}) year, here is your fortune for {}, the {} year.",
            branch.zodiac(),
            stem.romanized(),
            branch.romanized(),
            year.pillar,
            REFERENCE_YEAR.year,
            REFERENCE_YEAR.display_name(),
        ),
        _ => format!(
            "Here is your fortune for {}, the {} year.",
            REFERENCE_YEAR.year,
            REFERENCE_YEAR.display_name(),
        ),
    }
}

pub fn build_saju_summary(chart: &NormalizedChart) -> Vec<String> {
    let day_master = &chart.day_master;
    let day_element = day_master
        .element
        .map(|e| format!("{} {}", e.emoji(), element_label(e)))
        .unwrap_or_else(|| "unknown".to_string());

    let distribution = Element::ALL
        .into_iter()
        .map(|e| format!("{}{} {}%", e.emoji(), e.display_name(), chart.elements.ratio(e)))
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        format!("📋 Your four pillars: {}", chart.pillars.line()),
        format!(
            "🎯 Your innate energy: {}({}) · {}",
            day_master.symbol, day_master.korean, day_element
        ),
        format!("⚖️ Your energy state: {}", chart.strength.description()),
        format!("🔮 Five-element distribution: {}", distribution),
    ]
}

pub fn build_overall(
    chart: &NormalizedChart,
    interactions: &InteractionResult,
    guide: &ElementYearGuide,
) -> Vec<String> {
    let year = &interactions.year2026;
    let day_element = chart
        .day_master
        .element
        .map(element_label)
        .unwrap_or_else(|| "unknown".to_string());

    let mut lines = vec![
        REFERENCE_YEAR_DESCRIPTION.to_string(),
        String::new(),
        format!(
            "💫 Your innate energy {} ({}) and the {} year:",
            chart.day_master.symbol,
            day_element,
            REFERENCE_YEAR.display_name()
        ),
        format!("  {}", guide.relationship),
        String::new(),
        format!("✨ {}", guide.overall),
    ];

    if let Some(day_master) = &year.day_master_interaction {
        lines.push(String::new());
        lines.push(format!("🔍 {}", day_master.impact));
    }
    lines.push(format!("🌡️ {}", year.element_interaction.impact));

    if !year.branch_interactions.is_empty() {
        lines.push(String::new());
        lines.push("📌 How this year's animal meets your own:".to_string());
        for branch in &year.branch_interactions {
            let icon = if branch.impact > 0 { "✅" } else { "⚠️" };
            lines.push(format!(
                "  {} {} {}: {}",
                icon,
                branch.position.display_name(),
                branch.name,
                branch.description
            ));
        }
    }

    let overall = if year.overall_impact.is_empty() {
        DEFAULT_OVERALL_IMPACT
    } else {
        year.overall_impact.as_str()
    };
    lines.push(String::new());
    lines.push(format!("🎯 Overall: {}", overall));
    lines
}

pub fn build_yong_shen_advice(yong_shen: Option<&RawYongShen>) -> Vec<String> {
    let Some(yong_shen) = yong_shen else {
        return vec!["No needed-element (用神) analysis is available.".to_string()];
    };
    let Some(primary) = &yong_shen.primary else {
        return Vec::new();
    };

    let label = match primary.element() {
        Some(element) => format!("{} {}", element.emoji(), element_label(element)),
        None => primary.label().to_string(),
    };
    vec![
        format!("🌟 Your needed element (用神): {}", label),
        "The needed element is the one your chart lacks most.".to_string(),
        "Adding more of it improves both your health and your luck.".to_string(),
    ]
}

pub fn build_lucky(day_element: Option<Element>, guide: &ElementYearGuide) -> LuckyAttributes {
    let lucky_element = match day_element {
        Some(Element::Fire) | None => Element::Earth,
        Some(element) => element,
    };
    LuckyAttributes {
        direction: guide.lucky_direction.to_string(),
        color: guide.lucky_color.to_string(),
        element: element_label(lucky_element),
        number: guide.lucky_number.unwrap_or(DEFAULT_LUCKY_NUMBER).to_string(),
        gem: guide.lucky_gem.unwrap_or(DEFAULT_LUCKY_GEM).to_string(),
    }
}

/// Year guide for the chart's day master
pub fn year_guide_for(chart: &NormalizedChart) -> &'static ElementYearGuide {
    element_year_guide(chart.day_master.element)
}
