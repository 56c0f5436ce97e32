//! Chart Normalizer
//!
//! Turns a `RawChart` into a `NormalizedChart`:
//! - each pillar string is split into stem (first symbol) and branch (second)
//! - stem and branch elements are counted over the 8 chart symbols
//! - the day master, zodiac, strength level and needed element are derived
//!
//! Malformed pillar strings never fail; they become unknown pillars that
//! contribute nothing to the distribution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::raw::{RawChart, RawRelations, RawYongShen};
use crate::error::{FortuneError, Result};
use crate::tables::{Branch, Element, PillarPosition, Polarity, Stem};

/// Number of symbols in a chart (4 stems + 4 branches)
pub const CHART_SYMBOLS: u8 = 8;

// ============================================================================
// Pillars
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub position: PillarPosition,
    /// Pillar text as received, e.g. "甲子"
    pub pillar: String,
    pub stem_symbol: String,
    pub branch_symbol: String,
    pub stem: Option<Stem>,
    pub branch: Option<Branch>,
    pub stem_korean: String,
    pub branch_korean: String,
    pub stem_element: Option<Element>,
    pub branch_element: Option<Element>,
}

impl Pillar {
    pub fn parse(position: PillarPosition, text: &str) -> Self {
        let mut symbols = text.chars();
        match (symbols.next(), symbols.next()) {
            (Some(stem_char), Some(branch_char)) => {
                let stem = Stem::from_symbol(stem_char);
                let branch = Branch::from_symbol(branch_char);
                Self {
                    position,
                    pillar: text.to_string(),
                    stem_symbol: stem_char.to_string(),
                    branch_symbol: branch_char.to_string(),
                    stem,
                    branch,
                    stem_korean: stem.map_or_else(|| stem_char.to_string(), |s| s.korean().to_string()),
                    branch_korean: branch
                        .map_or_else(|| branch_char.to_string(), |b| b.korean().to_string()),
                    stem_element: stem.map(Stem::element),
                    branch_element: branch.map(Branch::element),
                }
            }
            _ => Self::unknown(position, text),
        }
    }

    fn unknown(position: PillarPosition, text: &str) -> Self {
        Self {
            position,
            pillar: text.to_string(),
            stem_symbol: String::new(),
            branch_symbol: String::new(),
            stem: None,
            branch: None,
            stem_korean: String::new(),
            branch_korean: String::new(),
            stem_element: None,
            branch_element: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.stem_symbol.is_empty() && self.branch_symbol.is_empty()
    }
}

/// The four pillars in analysis order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl ChartPillars {
    /// year → month → day → hour
    pub fn iter(&self) -> impl Iterator<Item = &Pillar> {
        [&self.year, &self.month, &self.day, &self.hour].into_iter()
    }

    /// Pillar texts joined with spaces, e.g. "庚子 戊寅 甲午 丙寅"
    pub fn line(&self) -> String {
        self.iter()
            .map(|p| p.pillar.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// Element distribution
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementShare {
    pub count: u8,
    /// Percentage of the 8 chart symbols, 0..=100
    pub ratio: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDistribution {
    /// Serialized inline, keyed by element symbol next to `strongest` and `weakest`
    #[serde(flatten)]
    pub shares: BTreeMap<Element, ElementShare>,
    pub strongest: Element,
    pub weakest: Element,
}

impl ElementDistribution {
    /// Build from per-element counts in `Element::ALL` order.
    ///
    /// Fails when the counts add up to more than the 8 chart symbols.
    pub fn from_counts(counts: [u8; 5]) -> Result<Self> {
        let total: u32 = counts.iter().map(|c| *c as u32).sum();
        if total > CHART_SYMBOLS as u32 {
            return Err(FortuneError::InvalidDistribution(format!(
                "counts sum to {} (max {})",
                total, CHART_SYMBOLS
            )));
        }
        Ok(Self::build(counts))
    }

    fn build(counts: [u8; 5]) -> Self {
        let shares = Element::ALL
            .into_iter()
            .map(|element| {
                let count = counts[element.index()];
                let ratio = (count as f64 / CHART_SYMBOLS as f64 * 100.0).round() as u8;
                (element, ElementShare { count, ratio })
            })
            .collect();

        // Ties go to the first element in enumeration order for both extremes
        let mut strongest = Element::Wood;
        let mut weakest = Element::Wood;
        for element in Element::ALL {
            let count = counts[element.index()];
            if count > counts[strongest.index()] {
                strongest = element;
            }
            if count < counts[weakest.index()] {
                weakest = element;
            }
        }

        Self {
            shares,
            strongest,
            weakest,
        }
    }

    pub fn share(&self, element: Element) -> ElementShare {
        self.shares.get(&element).copied().unwrap_or_default()
    }

    pub fn count(&self, element: Element) -> u8 {
        self.share(element).count
    }

    pub fn ratio(&self, element: Element) -> u8 {
        self.share(element).ratio
    }

    pub fn total_count(&self) -> u32 {
        self.shares.values().map(|s| s.count as u32).sum()
    }

    /// Reject distributions no 8-symbol chart could produce
    pub fn validate(&self) -> Result<()> {
        let total = self.total_count();
        if total > CHART_SYMBOLS as u32 {
            return Err(FortuneError::InvalidDistribution(format!(
                "counts sum to {} (max {})",
                total, CHART_SYMBOLS
            )));
        }
        if let Some((element, share)) = self.shares.iter().find(|(_, s)| s.ratio > 100) {
            return Err(FortuneError::InvalidDistribution(format!(
                "{} ratio {} exceeds 100",
                element.display_name(),
                share.ratio
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Day master, strength, normalized chart
// ============================================================================

/// The day pillar's stem: the "self" of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMaster {
    pub stem: Option<Stem>,
    pub symbol: String,
    pub korean: String,
    pub element: Option<Element>,
    pub polarity: Option<Polarity>,
}

impl DayMaster {
    fn from_pillar(day: &Pillar) -> Self {
        Self {
            stem: day.stem,
            symbol: day.stem_symbol.clone(),
            korean: day.stem_korean.clone(),
            element: day.stem_element,
            polarity: day.stem.map(Stem::polarity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Strong,
    Weak,
    Balanced,
}

impl StrengthLevel {
    /// Anything other than "strong" or "weak" reads as balanced
    pub fn parse(level: Option<&str>) -> Self {
        match level.map(str::trim) {
            Some(l) if l.eq_ignore_ascii_case("strong") => StrengthLevel::Strong,
            Some(l) if l.eq_ignore_ascii_case("weak") => StrengthLevel::Weak,
            _ => StrengthLevel::Balanced,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrengthLevel::Strong => "Abundant energy (身强)",
            StrengthLevel::Weak => "Benefits from added support (身弱)",
            StrengthLevel::Balanced => "Well balanced (中和)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedChart {
    pub pillars: ChartPillars,
    pub elements: ElementDistribution,
    pub day_master: DayMaster,
    /// Zodiac animal of the year branch; empty when unknown
    pub zodiac: String,
    pub gender: Option<String>,
    pub strength: StrengthLevel,
    pub strength_score: Option<f64>,
    pub yong_shen: Option<RawYongShen>,
    pub needed_element: Option<Element>,
    pub relations: RawRelations,
    pub major_luck: serde_json::Value,
    pub yearly_luck: serde_json::Value,
}

/// Normalize a calculator chart. Never fails.
pub fn normalize(raw: &RawChart) -> NormalizedChart {
    let pillars = ChartPillars {
        year: Pillar::parse(PillarPosition::Year, &raw.pillars.year),
        month: Pillar::parse(PillarPosition::Month, &raw.pillars.month),
        day: Pillar::parse(PillarPosition::Day, &raw.pillars.day),
        hour: Pillar::parse(PillarPosition::Hour, &raw.pillars.hour),
    };

    let mut counts = [0u8; 5];
    for pillar in pillars.iter() {
        for element in [pillar.stem_element, pillar.branch_element].into_iter().flatten() {
            counts[element.index()] += 1;
        }
    }
    let elements = ElementDistribution::build(counts);

    let day_master = DayMaster::from_pillar(&pillars.day);
    let zodiac = pillars
        .year
        .branch
        .map(|b| b.zodiac().to_string())
        .unwrap_or_default();

    let strength = raw.strength.as_ref();
    let needed_element = raw
        .yong_shen
        .as_ref()
        .and_then(|y| y.primary.as_ref())
        .and_then(|p| p.element());

    NormalizedChart {
        pillars,
        elements,
        day_master,
        zodiac,
        gender: raw.gender.clone(),
        strength: StrengthLevel::parse(strength.and_then(|s| s.level.as_deref())),
        strength_score: strength.and_then(|s| s.score),
        yong_shen: raw.yong_shen.clone(),
        needed_element,
        relations: raw.relations.clone().unwrap_or_default(),
        major_luck: raw.major_luck.clone(),
        yearly_luck: raw.yearly_luck.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::raw::RawPillars;

    fn chart(year: &str, month: &str, day: &str, hour: &str) -> RawChart {
        RawChart {
            pillars: RawPillars {
                year: year.into(),
                month: month.into(),
                day: day.into(),
                hour: hour.into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_pillar_split() {
        let pillar = Pillar::parse(PillarPosition::Day, "甲子");
        assert_eq!(pillar.stem, Some(Stem::Gap));
        assert_eq!(pillar.branch, Some(Branch::Ja));
        assert_eq!(pillar.stem_korean, "갑");
        assert_eq!(pillar.stem_element, Some(Element::Wood));
        assert_eq!(pillar.branch_element, Some(Element::Water));
    }

    #[test]
    fn test_short_pillar_is_unknown() {
        let pillar = Pillar::parse(PillarPosition::Hour, "甲");
        assert!(pillar.is_unknown());
        assert_eq!(pillar.stem_element, None);
        assert!(Pillar::parse(PillarPosition::Hour, "").is_unknown());
    }

    #[test]
    fn test_unrecognised_symbols_kept_without_element() {
        let pillar = Pillar::parse(PillarPosition::Year, "XY");
        assert!(!pillar.is_unknown());
        assert_eq!(pillar.stem_symbol, "X");
        assert_eq!(pillar.stem_korean, "X");
        assert_eq!(pillar.stem_element, None);
    }

    #[test]
    fn test_full_chart_counts_sum_to_eight() {
        let normalized = normalize(&chart("庚子", "戊寅", "甲午", "丙寅"));
        assert_eq!(normalized.elements.total_count(), 8);
        // 庚 metal, 子 water, 戊 earth, 寅 wood, 甲 wood, 午 fire, 丙 fire, 寅 wood
        assert_eq!(normalized.elements.count(Element::Wood), 3);
        assert_eq!(normalized.elements.count(Element::Fire), 2);
        assert_eq!(normalized.elements.ratio(Element::Wood), 38);
        assert_eq!(normalized.elements.ratio(Element::Fire), 25);
        assert_eq!(normalized.elements.strongest, Element::Wood);
        assert_eq!(normalized.zodiac, "Rat");
        assert_eq!(normalized.day_master.stem, Some(Stem::Gap));
        assert_eq!(normalized.day_master.polarity, Some(Polarity::Yang));
    }

    #[test]
    fn test_ratio_sum_within_tolerance() {
        let normalized = normalize(&chart("甲子", "乙丑", "丙寅", "丁卯"));
        let sum: u32 = normalized.elements.shares.values().map(|s| s.ratio as u32).sum();
        assert!((95..=105).contains(&sum), "ratio sum {}", sum);
    }

    #[test]
    fn test_ties_break_to_first_element() {
        let dist = ElementDistribution::from_counts([2, 2, 2, 1, 1]).unwrap();
        assert_eq!(dist.strongest, Element::Wood);
        assert_eq!(dist.weakest, Element::Metal);

        let empty = ElementDistribution::from_counts([0; 5]).unwrap();
        assert_eq!(empty.strongest, Element::Wood);
        assert_eq!(empty.weakest, Element::Wood);
    }

    #[test]
    fn test_unknown_pillars_reduce_total() {
        let normalized = normalize(&chart("庚子", "", "甲午", "丙"));
        assert_eq!(normalized.elements.total_count(), 4);
        assert_eq!(normalized.day_master.element, Some(Element::Wood));
    }

    #[test]
    fn test_invalid_counts_rejected() {
        assert!(ElementDistribution::from_counts([3, 3, 3, 0, 0]).is_err());
    }

    #[test]
    fn test_strength_level_parse() {
        assert_eq!(StrengthLevel::parse(Some("strong")), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::parse(Some("weak")), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::parse(Some("unknown")), StrengthLevel::Balanced);
        assert_eq!(StrengthLevel::parse(None), StrengthLevel::Balanced);
    }
}
