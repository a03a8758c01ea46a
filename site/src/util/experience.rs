//! Years-of-experience figure shown on the hero card.
//!
//! Whole years are counted on the anniversary rule: the count only advances
//! once the current month/day reaches the start month/day.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use time::macros::{date, format_description};
use time::Date;

/// First day of professional work. Checked at compile time by `date!`.
pub const CAREER_START: Date = date!(2019 - 03 - 18);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceError {
    /// Input was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },
}

/// Completed whole years from `start` to `now`, never negative.
#[must_use]
pub fn years_between(start: Date, now: Date) -> u32 {
    let mut years = now.year() - start.year();
    let now_md = (u8::from(now.month()), now.day());
    let start_md = (u8::from(start.month()), start.day());
    if now_md < start_md {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `ExperienceError::InvalidDate` for malformed or out-of-range input.
pub fn parse_iso_date(raw: &str) -> Result<Date, ExperienceError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format)
        .map_err(|e| ExperienceError::InvalidDate { input: raw.to_owned(), reason: e.to_string() })
}

/// `years_between` over `YYYY-MM-DD` strings.
///
/// # Errors
///
/// Returns `ExperienceError::InvalidDate` if either date fails to parse.
pub fn years_between_iso(start: &str, now: &str) -> Result<u32, ExperienceError> {
    Ok(years_between(parse_iso_date(start)?, parse_iso_date(now)?))
}

/// Today's calendar date in the current environment.
#[must_use]
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or(CAREER_START.year());
        // `getMonth` is zero-based.
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        match (month, day) {
            (Some(month), Some(day)) => Date::from_calendar_date(year, month, day).unwrap_or(CAREER_START),
            _ => CAREER_START,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Whole years since `CAREER_START`.
#[must_use]
pub fn years_of_experience() -> u32 {
    years_between(CAREER_START, today())
}

/// Human label for a year count.
#[must_use]
pub fn experience_label(years: u32) -> String {
    match years {
        0 => "<1 year".to_owned(),
        1 => "1 year".to_owned(),
        n => format!("{n} years"),
    }
}
