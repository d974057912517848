//! Calendar date value type with parsing, validation, and date rolling.

use std::cmp::Ordering;
use std::fmt;

use crate::datetime::Month;
use crate::error::{TrackerError, TrackerResult};

/// A calendar date in the common month/day/year system.
///
/// The fields are stored raw: a `CalendarDate` built from out-of-range
/// integers is representable but reports `false` from [`is_valid`], it never
/// panics. This lets a caller construct speculatively from untrusted input
/// and check validity before committing (re-prompting instead of crashing).
///
/// Instances are immutable; [`jump_ahead`] produces a new date rather than
/// mutating in place.
///
/// [`is_valid`]: CalendarDate::is_valid
/// [`jump_ahead`]: CalendarDate::jump_ahead
///
/// # Examples
///
/// ```
/// use shift_tracker::datetime::CalendarDate;
///
/// let date = CalendarDate::parse("3/18/2022").unwrap();
/// assert!(date.is_valid());
/// assert_eq!(date.to_string(), "MAR 18, 2022");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    /// Month number, 1 through 12 when valid.
    month: i32,
    /// Day of the month, 1 through the month's length when valid.
    day: i32,
    /// Four-digit year; negative years are representable but invalid.
    year: i32,
}

impl CalendarDate {
    /// Creates a date from raw month, day, and year values.
    ///
    /// No range checking is performed here; use [`CalendarDate::is_valid`].
    pub fn new(month: i32, day: i32, year: i32) -> CalendarDate {
        CalendarDate { month, day, year }
    }

    /// Parses a date from either accepted textual format.
    ///
    /// The numeric slash form `"M/D/Y"` is attempted first (no leading
    /// zeros required). If its three fields do not parse as integers, the
    /// text is re-split on whitespace and read as `"MMM DD, YYYY"` with a
    /// three-letter month abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownMonth`] when the abbreviated form
    /// carries an unrecognized month token, and [`TrackerError::DateFormat`]
    /// when neither pattern matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::datetime::CalendarDate;
    ///
    /// assert_eq!(
    ///     CalendarDate::parse("3/18/2022").unwrap(),
    ///     CalendarDate::parse("MAR 18, 2022").unwrap()
    /// );
    /// assert!(CalendarDate::parse("18-03-2022").is_err());
    /// ```
    pub fn parse(text: &str) -> TrackerResult<CalendarDate> {
        let slash: Vec<&str> = text.split('/').collect();
        if slash.len() == 3 {
            let fields: Vec<i32> = slash
                .iter()
                .filter_map(|tok| tok.trim().parse::<i32>().ok())
                .collect();
            if let [month, day, year] = fields[..] {
                return Ok(CalendarDate::new(month, day, year));
            }
        }

        // Fall back to the abbreviated form "MMM DD, YYYY".
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if let [month_tok, day_tok, year_tok] = tokens[..] {
            let month = Month::from_abbrev(month_tok).ok_or_else(|| TrackerError::UnknownMonth {
                token: month_tok.to_string(),
            })?;
            let day = day_tok
                .trim_end_matches(',')
                .parse::<i32>()
                .map_err(|_| TrackerError::DateFormat {
                    text: text.to_string(),
                })?;
            let year = year_tok
                .parse::<i32>()
                .map_err(|_| TrackerError::DateFormat {
                    text: text.to_string(),
                })?;
            return Ok(CalendarDate::new(month.code(), day, year));
        }

        Err(TrackerError::DateFormat {
            text: text.to_string(),
        })
    }

    /// Returns true iff the stored fields name a real calendar date.
    ///
    /// The month must be in `1..=12`, the day must fit the month's length
    /// (leap-year aware for February), and the year must be non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::datetime::CalendarDate;
    ///
    /// assert!(CalendarDate::new(2, 29, 2024).is_valid());
    /// assert!(!CalendarDate::new(2, 29, 2023).is_valid());
    /// assert!(!CalendarDate::new(13, 1, 2022).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        let Some(month) = Month::from_code(self.month) else {
            return false;
        };
        self.year >= 0 && self.day >= 1 && self.day <= month.max_days(self.year)
    }

    /// Returns a new date advanced by the given month, day, and year offsets.
    ///
    /// Normalization is applied in a fixed order:
    /// 1. months of 12 or more fold into years;
    /// 2. the day offset is added to the current day of month;
    /// 3. while the running day count exceeds the length of the current
    ///    target month (re-evaluated each step, leap-year aware), that
    ///    month's length is subtracted and the month advances, rolling into
    ///    the next year past December;
    /// 4. the residual month and year offsets are added.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NegativeArgument`] for any negative offset;
    /// rolling only moves forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::datetime::CalendarDate;
    ///
    /// let jan1 = CalendarDate::new(1, 1, 2022);
    /// assert_eq!(jan1.jump_ahead(0, 13, 0).unwrap().to_string(), "JAN 14, 2022");
    /// assert_eq!(jan1.jump_ahead(0, 31, 0).unwrap().to_string(), "FEB 01, 2022");
    /// assert_eq!(jan1.jump_ahead(0, 365, 0).unwrap().to_string(), "JAN 01, 2023");
    /// assert_eq!(jan1.jump_ahead(12, 0, 0).unwrap().to_string(), "JAN 01, 2023");
    /// ```
    pub fn jump_ahead(&self, months: i32, days: i32, years: i32) -> TrackerResult<CalendarDate> {
        if months < 0 {
            return Err(TrackerError::NegativeArgument {
                name: "months",
                value: months,
            });
        }
        if days < 0 {
            return Err(TrackerError::NegativeArgument {
                name: "days",
                value: days,
            });
        }
        if years < 0 {
            return Err(TrackerError::NegativeArgument {
                name: "years",
                value: years,
            });
        }

        // Fold whole years out of the month offset up front.
        let mut extra_years = years + months / 12;
        let extra_months = months % 12;

        let mut month = self.month;
        let mut year = self.year;
        let mut day = self.day + days;

        // Roll the day overflow forward one month at a time, re-reading the
        // current month's length (and leap status) on every step.
        while let Some(current) = Month::from_code(month) {
            let max_days = current.max_days(year);
            if day <= max_days {
                break;
            }
            day -= max_days;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        month += extra_months;
        if month > 12 {
            month -= 12;
            extra_years += 1;
        }
        year += extra_years;

        Ok(CalendarDate::new(month, day, year))
    }

    /// Returns the month number.
    pub fn month(&self) -> i32 {
        self.month
    }

    /// Returns the day of the month.
    pub fn day(&self) -> i32 {
        self.day
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for CalendarDate {
    /// Formats as `"MMM DD, YYYY"` with a zero-padded day.
    ///
    /// A month outside `1..=12` has no abbreviation and is written as its
    /// raw number instead; such a date is invalid either way.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Month::from_code(self.month) {
            Some(month) => write!(f, "{} {:02}, {}", month.abbrev(), self.day, self.year),
            None => write!(f, "{} {:02}, {}", self.month, self.day, self.year),
        }
    }
}

impl Ord for CalendarDate {
    /// Dates order lexicographically on (year, month, day), not on the
    /// declaration order of the fields.
    fn cmp(&self, other: &CalendarDate) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &CalendarDate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
