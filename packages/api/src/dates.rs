//! Best-effort parsing of user supplied date strings.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Formats probed in order during auto-detection. Day-first layouts come
/// before month-first, so `04/05/2023` reads as 4 May 2023.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%m-%d-%Y",
];

/// Parses a date out of free text, trying RFC 3339 and then the common
/// formats above. Datetime inputs are truncated to their calendar date.
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    FORMATS.iter().find_map(|fmt| {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            Some(dt.date())
        } else if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            Some(date)
        } else {
            None
        }
    })
}

/// Like [`parse_flexible`], but substitutes today's local date when the
/// input is missing or unreadable. Submissions are never rejected over a
/// bad date.
pub fn normalize(input: &str) -> NaiveDate {
    match parse_flexible(input) {
        Some(date) => date,
        None => {
            tracing::debug!(input, "unparseable date, substituting today");
            Local::now().date_naive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn iso_dates_parse() {
        assert_eq!(parse_flexible("2023-05-04"), Some(ymd(2023, 5, 4)));
    }

    #[test]
    fn slashed_dates_read_day_first() {
        assert_eq!(parse_flexible("04/05/2023"), Some(ymd(2023, 5, 4)));
        assert_eq!(parse_flexible("31/12/2024"), Some(ymd(2024, 12, 31)));
    }

    #[test]
    fn month_first_accepted_when_day_first_impossible() {
        assert_eq!(parse_flexible("12/31/2024"), Some(ymd(2024, 12, 31)));
    }

    #[test]
    fn dotted_and_dashed_layouts_parse() {
        assert_eq!(parse_flexible("04.05.2023"), Some(ymd(2023, 5, 4)));
        assert_eq!(parse_flexible("04-05-2023"), Some(ymd(2023, 5, 4)));
        assert_eq!(parse_flexible("2023/05/04"), Some(ymd(2023, 5, 4)));
    }

    #[test]
    fn datetime_inputs_truncate_to_their_date() {
        assert_eq!(parse_flexible("2023-05-04 10:30:00"), Some(ymd(2023, 5, 4)));
        assert_eq!(parse_flexible("2023-05-04T10:30:00"), Some(ymd(2023, 5, 4)));
        assert_eq!(
            parse_flexible("2023-05-04T10:30:00+10:00"),
            Some(ymd(2023, 5, 4))
        );
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(parse_flexible("  2023-05-04  "), Some(ymd(2023, 5, 4)));
    }

    #[test]
    fn unreadable_input_parses_to_none() {
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("   "), None);
        assert_eq!(parse_flexible("not a date"), None);
        assert_eq!(parse_flexible("99/99/2023"), None);
    }

    #[test]
    fn normalize_keeps_parseable_values() {
        assert_eq!(normalize("04/05/2023"), ymd(2023, 5, 4));
    }

    #[test]
    fn normalize_substitutes_today_for_garbage() {
        let before = Local::now().date_naive();
        let got = normalize("not a date");
        let after = Local::now().date_naive();
        assert!(got == before || got == after);
        assert_eq!(normalize(""), normalize("still not a date"));
    }
}
