//! Error types for the shift tracker core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure conditions that can occur while parsing dates and times,
//! rolling dates forward, and resolving workplace codes.
//!
//! Out-of-range field values (month 13, hour 25, and so on) are deliberately
//! NOT errors: [`crate::datetime::CalendarDate`] and
//! [`crate::datetime::TimeOfDay`] are always constructible and expose an
//! `is_valid` predicate instead, so callers can construct speculatively and
//! check before committing.

use thiserror::Error;

/// The main error type for the shift tracker core.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_tracker::error::TrackerError;
///
/// let error = TrackerError::DateFormat {
///     text: "not a date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "unrecognized date format: 'not a date' (expected M/D/Y or MMM DD, YYYY)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Date text did not match either accepted format.
    #[error("unrecognized date format: '{text}' (expected M/D/Y or MMM DD, YYYY)")]
    DateFormat {
        /// The text that failed to parse.
        text: String,
    },

    /// A month abbreviation was not one of the twelve three-letter codes.
    #[error("unknown month abbreviation: '{token}'")]
    UnknownMonth {
        /// The token that did not resolve to a month.
        token: String,
    },

    /// Time text did not match either accepted format.
    #[error("unrecognized time format: '{text}' (expected H:MM or H:MM AM/PM)")]
    TimeFormat {
        /// The text that failed to parse.
        text: String,
    },

    /// A negative offset was passed to a date-rolling operation.
    ///
    /// This indicates a caller bug rather than bad user input, so it is
    /// surfaced as a hard error instead of a validity predicate.
    #[error("negative {name} argument to jump_ahead: {value}")]
    NegativeArgument {
        /// The name of the offending parameter.
        name: &'static str,
        /// The value that was passed.
        value: i32,
    },

    /// A location code or name did not resolve to a known workplace.
    #[error("unknown location: '{token}'")]
    UnknownLocation {
        /// The code or name that did not resolve.
        token: String,
    },

    /// A job code or name did not resolve to a job at the given location.
    #[error("unknown job '{token}' at location '{location}'")]
    UnknownJob {
        /// The location whose job catalog was searched.
        location: String,
        /// The code or name that did not resolve.
        token: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format_displays_text() {
        let error = TrackerError::DateFormat {
            text: "13-01-2022".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unrecognized date format: '13-01-2022' (expected M/D/Y or MMM DD, YYYY)"
        );
    }

    #[test]
    fn test_unknown_month_displays_token() {
        let error = TrackerError::UnknownMonth {
            token: "JANUARY".to_string(),
        };
        assert_eq!(error.to_string(), "unknown month abbreviation: 'JANUARY'");
    }

    #[test]
    fn test_time_format_displays_text() {
        let error = TrackerError::TimeFormat {
            text: "noon".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unrecognized time format: 'noon' (expected H:MM or H:MM AM/PM)"
        );
    }

    #[test]
    fn test_negative_argument_displays_name_and_value() {
        let error = TrackerError::NegativeArgument {
            name: "days",
            value: -3,
        };
        assert_eq!(error.to_string(), "negative days argument to jump_ahead: -3");
    }

    #[test]
    fn test_unknown_job_displays_location_and_token() {
        let error = TrackerError::UnknownJob {
            location: "Market".to_string(),
            token: "BARISTA".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unknown job 'BARISTA' at location 'Market'"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TrackerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_date_format() -> TrackerResult<()> {
            Err(TrackerError::DateFormat {
                text: "bad".to_string(),
            })
        }

        fn propagates_error() -> TrackerResult<()> {
            returns_date_format()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
