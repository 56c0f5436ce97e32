//! Day master vs reference element
//!
//! Rules are evaluated in fixed priority; the first match wins.

use super::types::DayMasterInteraction;
use crate::tables::{DayMasterCategory, Element};

type Rule = fn(day: Element, reference: Element) -> bool;

fn same_element(day: Element, reference: Element) -> bool {
    day == reference
}

fn reference_generates_day(day: Element, reference: Element) -> bool {
    reference.generates() == day
}

fn day_generates_reference(day: Element, reference: Element) -> bool {
    day.generates() == reference
}

fn day_dominates_reference(day: Element, reference: Element) -> bool {
    day.dominates() == reference
}

fn reference_dominates_day(day: Element, reference: Element) -> bool {
    reference.dominates() == day
}

static DAY_MASTER_RULES: [(Rule, DayMasterCategory); 5] = [
    (same_element, DayMasterCategory::PeerSupport),
    (reference_generates_day, DayMasterCategory::ResourceSupport),
    (day_generates_reference, DayMasterCategory::ExpressionOutput),
    (day_dominates_reference, DayMasterCategory::WealthOpportunity),
    (reference_dominates_day, DayMasterCategory::AuthorityPressure),
];

pub fn classify(day: Element, reference: Element) -> Option<DayMasterCategory> {
    DAY_MASTER_RULES
        .iter()
        .find(|(rule, _)| rule(day, reference))
        .map(|(_, category)| *category)
}

/// `None` when the day master's element is unknown
pub fn analyze_day_master(
    day_element: Option<Element>,
    reference: Element,
) -> Option<DayMasterInteraction> {
    let category = classify(day_element?, reference)?;
    Some(DayMasterInteraction {
        category,
        label: category.label().to_string(),
        description: category.description().to_string(),
        impact: category.advice().to_string(),
        level: category.impact(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_reference_categories() {
        let r = Element::Fire;
        assert_eq!(classify(Element::Fire, r), Some(DayMasterCategory::PeerSupport));
        assert_eq!(classify(Element::Earth, r), Some(DayMasterCategory::ResourceSupport));
        assert_eq!(classify(Element::Wood, r), Some(DayMasterCategory::ExpressionOutput));
        assert_eq!(classify(Element::Water, r), Some(DayMasterCategory::WealthOpportunity));
        assert_eq!(classify(Element::Metal, r), Some(DayMasterCategory::AuthorityPressure));
    }

    #[test]
    fn test_every_pair_classified() {
        for day in Element::ALL {
            for reference in Element::ALL {
                assert!(classify(day, reference).is_some());
            }
        }
    }

    #[test]
    fn test_same_element_is_peer_support_plus_one() {
        for element in Element::ALL {
            let interaction = analyze_day_master(Some(element), element).unwrap();
            assert_eq!(interaction.category, DayMasterCategory::PeerSupport);
            assert_eq!(interaction.level, 1);
        }
    }

    #[test]
    fn test_unknown_day_master() {
        assert!(analyze_day_master(None, Element::Fire).is_none());
    }
}
