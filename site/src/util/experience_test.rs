use super::*;

// =============================================================
// Anniversary rule
// =============================================================

#[test]
fn day_before_anniversary_counts_zero() {
    assert_eq!(years_between_iso("2022-06-01", "2023-05-31"), Ok(0));
}

#[test]
fn exact_anniversary_counts_one() {
    assert_eq!(years_between_iso("2022-06-01", "2023-06-01"), Ok(1));
}

#[test]
fn partial_year_after_anniversaries_is_floored() {
    assert_eq!(years_between_iso("2022-06-01", "2025-01-01"), Ok(2));
}

#[test]
fn same_month_earlier_day_has_not_reached_anniversary() {
    assert_eq!(years_between_iso("2020-03-18", "2024-03-17"), Ok(3));
    assert_eq!(years_between_iso("2020-03-18", "2024-03-18"), Ok(4));
}

#[test]
fn now_before_start_clamps_to_zero() {
    assert_eq!(years_between_iso("2022-06-01", "2020-01-01"), Ok(0));
    assert_eq!(years_between_iso("2022-06-01", "2022-05-31"), Ok(0));
}

#[test]
fn same_day_is_zero_years() {
    assert_eq!(years_between(CAREER_START, CAREER_START), 0);
}

#[test]
fn leap_day_start_advances_on_march_first() {
    assert_eq!(years_between_iso("2020-02-29", "2021-02-28"), Ok(0));
    assert_eq!(years_between_iso("2020-02-29", "2021-03-01"), Ok(1));
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_iso_date_reads_calendar_date() {
    let d = parse_iso_date("2022-06-01").unwrap();
    assert_eq!(d.year(), 2022);
    assert_eq!(u8::from(d.month()), 6);
    assert_eq!(d.day(), 1);
}

#[test]
fn parse_iso_date_rejects_malformed_input() {
    assert!(matches!(parse_iso_date("2022/06/01"), Err(ExperienceError::InvalidDate { .. })));
    assert!(parse_iso_date("2022-13-01").is_err());
    assert!(parse_iso_date("2023-02-29").is_err());
    assert!(parse_iso_date("").is_err());
}

#[test]
fn years_between_iso_reports_which_input_failed() {
    let err = years_between_iso("2022-06-01", "yesterday").unwrap_err();
    let ExperienceError::InvalidDate { input, .. } = err;
    assert_eq!(input, "yesterday");
}

// =============================================================
// Current date and label
// =============================================================

#[test]
fn years_of_experience_is_consistent_with_today() {
    assert_eq!(years_of_experience(), years_between(CAREER_START, today()));
    assert!(today() >= CAREER_START);
}

#[test]
fn experience_label_pluralizes() {
    assert_eq!(experience_label(0), "<1 year");
    assert_eq!(experience_label(1), "1 year");
    assert_eq!(experience_label(7), "7 years");
}
