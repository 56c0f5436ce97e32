//! Twelve-month breakdown
//!
//! Each month's score is the fortune score shifted by a deterministic
//! variation in [-10, 10] and clamped to [20, 95].

use super::types::MonthlyFortune;
use crate::tables::MONTHLY_DETAILS;

pub const MIN_MONTH_SCORE: i32 = 20;
pub const MAX_MONTH_SCORE: i32 = 95;

pub fn month_variation(month: u8, score: u8) -> i32 {
    ((month as i32 * 7 + score as i32) % 21) - 10
}

pub fn month_score(month: u8, score: u8) -> u8 {
    (score as i32 + month_variation(month, score)).clamp(MIN_MONTH_SCORE, MAX_MONTH_SCORE) as u8
}

pub fn build_monthly(score: u8) -> Vec<MonthlyFortune> {
    MONTHLY_DETAILS
        .iter()
        .map(|detail| MonthlyFortune {
            month: detail.month,
            score: month_score(detail.month, score),
            keyword: detail.keyword.to_string(),
            theme: detail.theme.to_string(),
            advice: detail.advice.to_string(),
            good: detail.good.to_string(),
            bad: detail.bad.to_string(),
            health: detail.health.to_string(),
        })
        .collect()
}
