//! Fortune Scorer - composite 0-100 score for a chart
//!
//! score = 50
//!       + impact_level × 8
//!       + (balance_score − 50) × 0.2
//!       − 5 if the chart has a clash or punishment
//!       + 3 × combination count
//!
//! rounded, then clamped to [0, 100]. Includes both sequential and parallel
//! (Rayon) batch implementations.

use rayon::prelude::*;
use tracing::info;

use crate::analysis::{analyze_interactions, ElementBalance, FormattedRelations, ReferenceYearAnalysis};
use crate::chart::NormalizedChart;
use crate::error::Result;

const BASE_SCORE: f64 = 50.0;
const IMPACT_WEIGHT: f64 = 8.0;
const BALANCE_PIVOT: f64 = 50.0;
const BALANCE_WEIGHT: f64 = 0.2;
const SIGNIFICANT_PENALTY: f64 = 5.0;
const COMBINATION_BONUS: f64 = 3.0;

/// Unrounded, unclamped score
pub fn raw_fortune_score(
    year: &ReferenceYearAnalysis,
    balance: &ElementBalance,
    relations: &FormattedRelations,
) -> f64 {
    let mut score = BASE_SCORE;
    score += year.impact_level as f64 * IMPACT_WEIGHT;
    score += (balance.balance_score as f64 - BALANCE_PIVOT) * BALANCE_WEIGHT;
    if relations.has_significant {
        score -= SIGNIFICANT_PENALTY;
    }
    score += relations.combinations.len() as f64 * COMBINATION_BONUS;
    score
}

pub fn calculate_fortune_score(
    year: &ReferenceYearAnalysis,
    balance: &ElementBalance,
    relations: &FormattedRelations,
) -> u8 {
    raw_fortune_score(year, balance, relations).round().clamp(0.0, 100.0) as u8
}

/// Score charts one after another
pub fn score_charts(charts: &[NormalizedChart]) -> Vec<Result<u8>> {
    charts
        .iter()
        .map(|chart| analyze_interactions(chart).map(|r| r.fortune_score))
        .collect()
}

/// Score charts across the Rayon pool; output order matches input order
pub fn score_charts_parallel(charts: &[NormalizedChart]) -> Vec<Result<u8>> {
    let start = std::time::Instant::now();
    let scores: Vec<Result<u8>> = charts
        .par_iter()
        .map(|chart| analyze_interactions(chart).map(|r| r.fortune_score))
        .collect();
    info!(
        charts = charts.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Parallel scoring complete"
    );
    scores
}
