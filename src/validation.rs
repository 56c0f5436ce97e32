//! Birth input and inquiry validation
//!
//! Every rule is checked and all failures are reported together.

use chrono::{Datelike, NaiveDate};

use crate::chart::BirthInput;
use crate::error::{FortuneError, Result};
use crate::inquiry::Inquiry;

pub const MIN_BIRTH_YEAR: i32 = 1900;
pub const MAX_BIRTH_YEAR: i32 = 2025;

/// Last day of a month on the Gregorian calendar
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
}

pub fn validate_birth_input(input: &BirthInput) -> Result<()> {
    let mut errors = Vec::new();

    if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&input.year) {
        errors.push(format!(
            "birth year must be between {} and {}",
            MIN_BIRTH_YEAR, MAX_BIRTH_YEAR
        ));
    }

    let month_valid = (1..=12).contains(&input.month);
    if !month_valid {
        errors.push("birth month must be between 1 and 12".to_string());
    }

    if !(1..=31).contains(&input.day) {
        errors.push("birth day must be between 1 and 31".to_string());
    } else if month_valid {
        if let Some(max_day) = days_in_month(input.year, input.month) {
            if input.day > max_day {
                errors.push(format!(
                    "{}-{:02} only has {} days",
                    input.year, input.month, max_day
                ));
            }
        }
    }

    if input.hour > 23 {
        errors.push("birth hour must be between 0 and 23".to_string());
    }

    if input.gender != "male" && input.gender != "female" {
        errors.push("gender must be \"male\" or \"female\"".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FortuneError::Validation(errors))
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a dot inside the
/// domain with text on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_inquiry(inquiry: &Inquiry) -> Result<()> {
    let mut errors = Vec::new();

    if inquiry.session_id.trim().is_empty() {
        errors.push("session id is required".to_string());
    }
    if !validate_email(inquiry.email.trim()) {
        errors.push(format!("\"{}\" is not a valid email address", inquiry.email));
    }
    if inquiry.question.trim().is_empty() {
        errors.push("question must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FortuneError::Validation(errors))
    }
}
