//! Element surplus against the reference year, and overall element balance

use std::collections::BTreeMap;

use super::types::{
    BalanceInterpretation, ElementBalance, ElementDeviation, ElementInteraction, ElementStatus,
};
use crate::chart::ElementDistribution;
use crate::tables::{Element, SurplusTier};

/// Even share of each element (100 / 5)
pub const IDEAL_RATIO: u8 = 20;
const EXCESS_ABOVE: u8 = 30;
const DEFICIENT_BELOW: u8 = 10;

/// Classify how many chart symbols carry the reference element
pub fn analyze_surplus(elements: &ElementDistribution, reference: Element) -> ElementInteraction {
    let reference_count = elements.count(reference);
    let tier = SurplusTier::from_count(reference_count);
    ElementInteraction {
        tier,
        reference_count,
        label: tier.label().to_string(),
        description: tier.description().to_string(),
        impact: tier.advice().to_string(),
        level: tier.impact(),
    }
}

pub fn element_status(ratio: u8) -> ElementStatus {
    if ratio > EXCESS_ABOVE {
        ElementStatus::Excess
    } else if ratio < DEFICIENT_BELOW {
        ElementStatus::Deficient
    } else {
        ElementStatus::Adequate
    }
}

pub fn interpret_balance(balance_score: u8) -> BalanceInterpretation {
    if balance_score > 70 {
        BalanceInterpretation::WellBalanced
    } else if balance_score >= 40 {
        BalanceInterpretation::PartialImbalance
    } else {
        BalanceInterpretation::StrongImbalance
    }
}

/// Score how far the distribution sits from an even 20% per element
pub fn evaluate_balance(elements: &ElementDistribution) -> ElementBalance {
    let mut deviations = BTreeMap::new();
    let mut total_deviation: u32 = 0;

    for element in Element::ALL {
        let ratio = elements.ratio(element);
        let deviation = ratio.abs_diff(IDEAL_RATIO);
        total_deviation += deviation as u32;
        deviations.insert(
            element,
            ElementDeviation {
                ratio,
                deviation,
                status: element_status(ratio),
            },
        );
    }

    let balance_score = 100u32.saturating_sub(total_deviation) as u8;
    let interpretation = interpret_balance(balance_score);

    ElementBalance {
        deviations,
        balance_score,
        interpretation,
        interpretation_text: interpretation.text().to_string(),
    }
}
