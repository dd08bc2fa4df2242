//! Submission-date formatting.
//!
//! The stored value is a calendar date string (`YYYY-MM-DD`). It is parsed
//! as a [`chrono::NaiveDate`] - a plain calendar date with no time zone -
//! and formatted `DD-MM-YYYY`, so the result is the same on every machine.
//! Parsing the string through a zoned timestamp instead would implicitly
//! pin it to midnight UTC and shift it to the previous day in zones west
//! of UTC.

use crate::field::FieldKey;
use chrono::NaiveDate;

/// Format a raw submission-date value for display and export.
///
/// Empty input formats the built-in default date. A non-empty value that is
/// not a valid `YYYY-MM-DD` date is shown as typed.
pub fn format_submission_date(raw: &str) -> String {
    let value = if raw.is_empty() {
        FieldKey::SubmissionDate.default_value()
    } else {
        raw
    };

    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_date_as_day_month_year() {
        assert_eq!(format_submission_date("2025-08-17"), "17-08-2025");
        assert_eq!(format_submission_date("2024-01-02"), "02-01-2024");
    }

    #[test]
    fn empty_input_formats_the_default_date() {
        assert_eq!(format_submission_date(""), "17-08-2025");
    }

    #[test]
    fn unparsable_input_is_shown_as_typed() {
        assert_eq!(format_submission_date("sometime in August"), "sometime in August");
        assert_eq!(format_submission_date("2025-13-40"), "2025-13-40");
    }

    #[test]
    fn calendar_date_never_shifts_by_a_day() {
        // The formatted day/month/year must match the input calendar date
        // exactly; a timezone-dependent parse would be off by one west of
        // UTC.
        for (input, expected) in [
            ("2025-08-17", "17-08-2025"),
            ("2025-01-01", "01-01-2025"),
            ("2024-12-31", "31-12-2024"),
            ("2024-02-29", "29-02-2024"),
        ] {
            assert_eq!(format_submission_date(input), expected);
        }
    }
}
