//! Analysis window parsing for the `start-date` / `end-date` inputs.
//!
//! # Design
//! - Accept the `YYYY-MM-DD` shape produced by `<input type="date">`.
//! - Treat blank inputs as missing rather than invalid.
//! - Require the window to span at least one day.

use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form field name of the window start.
pub const START_FIELD: &str = "start-date";
/// Form field name of the window end.
pub const END_FIELD: &str = "end-date";

/// Validated analysis window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse and validate both inputs.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError`] when a field is blank or malformed, or when
    /// `start` is not strictly before `end`.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        let start = parse_field(START_FIELD, start)?;
        let end = parse_field(END_FIELD, end)?;
        if start >= end {
            return Err(DateRangeError::NotAscending { start, end });
        }
        Ok(Self { start, end })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<NaiveDate, DateRangeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DateRangeError::Missing { field });
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| DateRangeError::Malformed {
        field,
        value: trimmed.to_string(),
    })
}

/// Reasons an analysis window is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Field left blank.
    #[error("{field} is required")]
    Missing {
        /// Form field name.
        field: &'static str,
    },
    /// Field is not a `YYYY-MM-DD` date.
    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    Malformed {
        /// Form field name.
        field: &'static str,
        /// Rejected input.
        value: String,
    },
    /// Start is on or after end.
    #[error("start date {start} must be before end date {end}")]
    NotAscending {
        /// Parsed start.
        start: NaiveDate,
        /// Parsed end.
        end: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_window_parses() {
        let range = DateRange::parse("2020-01-01", " 2020-03-01 ").unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
    }

    #[test]
    fn blank_fields_are_missing() {
        assert_eq!(
            DateRange::parse("", "2020-01-01").unwrap_err(),
            DateRangeError::Missing { field: START_FIELD }
        );
        assert_eq!(
            DateRange::parse("2020-01-01", "   ").unwrap_err(),
            DateRangeError::Missing { field: END_FIELD }
        );
    }

    #[test]
    fn malformed_dates_name_the_field() {
        let err = DateRange::parse("2020-01-01", "03/01/2020").unwrap_err();
        assert_eq!(
            err.to_string(),
            "end-date must be a date (YYYY-MM-DD), got '03/01/2020'"
        );
    }

    #[test]
    fn window_must_ascend() {
        assert!(matches!(
            DateRange::parse("2021-01-01", "2021-01-01"),
            Err(DateRangeError::NotAscending { .. })
        ));
        assert!(matches!(
            DateRange::parse("2021-02-01", "2021-01-01"),
            Err(DateRangeError::NotAscending { .. })
        ));
    }
}
