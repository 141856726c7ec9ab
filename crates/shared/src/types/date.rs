//! Calendar date helpers.
//!
//! Transaction dates carry no time of day. The wire format is strict
//! `YYYY-MM-DD`: four-digit year, zero-padded month and day.

use chrono::{Datelike, Days, Months, NaiveDate};

/// `chrono` format string for the wire date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date.
///
/// Returns `None` for anything else, including unpadded months or days
/// (`2023-5-1`) which `chrono` alone would accept.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Formats a date in the wire format.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns the date `months` calendar months before `date`.
///
/// Only the month moves; the day of month is kept and overflows into the
/// following month when the target month is shorter (2023-08-31 minus six
/// months is "2023-02-31", which is 2023-03-03).
#[must_use]
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_sub_months(Months::new(months)))
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::valid("2023-05-01", Some(ymd(2023, 5, 1)))]
    #[case::leap_day("2024-02-29", Some(ymd(2024, 2, 29)))]
    #[case::not_leap("2023-02-29", None)]
    #[case::unpadded("2023-5-1", None)]
    #[case::slashes("2023/05/01", None)]
    #[case::day_first("01-05-2023", None)]
    #[case::trailing_time("2023-05-01T00:00:00", None)]
    #[case::empty("", None)]
    fn test_parse_date(#[case] input: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_date(input), expected);
    }

    #[test]
    fn test_format_date_round_trip() {
        assert_eq!(format_date(ymd(2023, 5, 1)), "2023-05-01");
    }

    #[rstest]
    #[case::plain(ymd(2022, 5, 12), ymd(2021, 11, 12))]
    #[case::year_boundary(ymd(2023, 1, 2), ymd(2022, 7, 2))]
    #[case::same_length_month(ymd(2023, 7, 31), ymd(2023, 1, 31))]
    #[case::overflows_short_month(ymd(2023, 8, 31), ymd(2023, 3, 3))]
    #[case::overflows_leap_february(ymd(2024, 8, 31), ymd(2024, 3, 2))]
    #[case::overflows_thirty_day_month(ymd(2023, 12, 31), ymd(2023, 7, 1))]
    #[case::leap_day_kept(ymd(2024, 8, 29), ymd(2024, 2, 29))]
    fn test_six_months_before(#[case] date: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(months_before(date, 6), expected);
    }
}
