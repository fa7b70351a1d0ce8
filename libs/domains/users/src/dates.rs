//! Strict `YYYY-MM-DD` parsing and the minimum-age rule.

use chrono::{Months, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{UserError, UserResult};

/// Four-digit year, two-digit month and day, nothing else
static CANONICAL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Parses a canonical date.
///
/// Out-of-range components are rejected rather than rolled over, so
/// `2000-20-20` and `2023-02-29` both fail with `InvalidDateFormat`.
pub fn parse_date(value: &str) -> UserResult<NaiveDate> {
    if !CANONICAL_DATE.is_match(value) {
        return Err(UserError::InvalidDateFormat);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| UserError::InvalidDateFormat)
}

/// True when at least `minimum_age` whole years separate `date_of_birth`
/// and `today`.
///
/// The birthday itself counts. A 29 February birthday is reached on
/// 1 March in non-leap years.
pub fn meets_minimum_age(date_of_birth: NaiveDate, today: NaiveDate, minimum_age: u32) -> bool {
    today
        .checked_sub_months(Months::new(minimum_age.saturating_mul(12)))
        .is_some_and(|latest_allowed| date_of_birth <= latest_allowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(parse_date("1990-01-31").unwrap(), date(1990, 1, 31));
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        assert_eq!(parse_date("2000-20-20"), Err(UserError::InvalidDateFormat));
        assert_eq!(parse_date("2001-02-29"), Err(UserError::InvalidDateFormat));
        assert_eq!(parse_date("2000-01-32"), Err(UserError::InvalidDateFormat));
    }

    #[test]
    fn test_parse_rejects_non_canonical_forms() {
        for input in ["2000-1-01", "20000-01-01", "01-01-2000", "2000/01/01", " 2000-01-01", "", "yesterday"] {
            assert_eq!(parse_date(input), Err(UserError::InvalidDateFormat), "{input:?}");
        }
    }

    #[test]
    fn test_minimum_age_inclusive_on_birthday() {
        let today = date(2024, 1, 1);

        assert!(meets_minimum_age(date(2006, 1, 1), today, 18));
        assert!(!meets_minimum_age(date(2006, 1, 2), today, 18));
        assert!(meets_minimum_age(date(1990, 1, 1), today, 18));
        assert!(!meets_minimum_age(date(2010, 1, 1), today, 18));
    }

    #[test]
    fn test_minimum_age_leap_day_birthday() {
        let born = date(2004, 2, 29);

        assert!(!meets_minimum_age(born, date(2022, 2, 28), 18));
        assert!(meets_minimum_age(born, date(2022, 3, 1), 18));
        assert!(meets_minimum_age(born, date(2022, 2, 28), 17));
    }

    #[test]
    fn test_zero_minimum_age_accepts_today() {
        let today = date(2024, 6, 15);
        assert!(meets_minimum_age(today, today, 0));
    }
}
