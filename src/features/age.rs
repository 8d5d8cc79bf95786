//! Age calculator.
//!
//! Computes the calendar difference between a birth moment and a comparison
//! moment (years, months, days, hours, minutes, seconds) together with the
//! floored totals of the exact difference.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::error::DeskError;

/// Accepted input layouts, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Age split into calendar units plus running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_months: i64,
    pub total_days: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
}

impl AgeBreakdown {
    /// Age at `at` of someone born at `birth`.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` if `birth` is after `at`.
    pub fn between(birth: NaiveDateTime, at: NaiveDateTime) -> Result<Self, DeskError> {
        if birth > at {
            return Err(DeskError::InvalidInput(format!(
                "birth date {birth} is after comparison date {at}"
            )));
        }

        let mut years = i64::from(at.year() - birth.year());
        let mut months = i64::from(at.month()) - i64::from(birth.month());
        let mut days = i64::from(at.day()) - i64::from(birth.day());
        let mut hours = i64::from(at.hour()) - i64::from(birth.hour());
        let mut minutes = i64::from(at.minute()) - i64::from(birth.minute());
        let mut seconds = i64::from(at.second()) - i64::from(birth.second());

        if seconds < 0 {
            minutes -= 1;
            seconds += 60;
        }
        if minutes < 0 {
            hours -= 1;
            minutes += 60;
        }
        if hours < 0 {
            days -= 1;
            hours += 24;
        }
        // Borrow whole months, walking back from the month before `at`.
        let mut borrow_from = at.date();
        while days < 0 {
            months -= 1;
            borrow_from = first_of_previous_month(borrow_from);
            days += i64::from(days_in_month(borrow_from));
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }

        let diff = at - birth;
        Ok(Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            total_months: years * 12 + months,
            total_days: diff.num_days(),
            total_hours: diff.num_hours(),
            total_minutes: diff.num_minutes(),
            total_seconds: diff.num_seconds(),
        })
    }

    /// Age right now, in local time.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::InvalidInput` if `birth` is in the future.
    pub fn until_now(birth: NaiveDateTime) -> Result<Self, DeskError> {
        Self::between(birth, Local::now().naive_local())
    }
}

/// Parse `YYYY-MM-DD` (midnight) or `YYYY-MM-DD HH:MM[:SS]`.
///
/// # Errors
///
/// Returns `DeskError::InvalidInput` if no layout matches.
pub fn parse_moment(input: &str) -> Result<NaiveDateTime, DeskError> {
    let input = input.trim();

    if let Some(moment) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Ok(moment);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            DeskError::InvalidInput(format!(
                "'{input}' is not a date (expected YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS])"
            ))
        })
}

fn first_of_previous_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}
