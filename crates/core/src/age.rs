//! Age calculation between a birth date and a reference day

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Birth date {birth} is after {today}")]
    FutureDate { birth: NaiveDate, today: NaiveDate },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
}

pub fn parse_date(input: &str) -> Result<NaiveDate, AgeError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| AgeError::InvalidDate(input.trim().to_string()))
}

/// Number of days in the month before `date`'s month.
fn days_in_previous_month(date: NaiveDate) -> i32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day() as i32)
        .unwrap_or(31)
}

/// Years, months and days from `birth` to `today`, borrowing a month (sized
/// as the month before `today`) when the day difference is negative.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> Result<Age, AgeError> {
    if birth > today {
        return Err(AgeError::FutureDate { birth, today });
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_previous_month(today);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(Age {
        years,
        months,
        days,
        total_days: (today - birth).num_days(),
    })
}
