//! Month enum with code and abbreviation lookup.

use serde::{Deserialize, Serialize};

/// The twelve months of the year.
///
/// Each month carries a numeric code in `1..=12` and a canonical
/// three-letter abbreviation. Both lookups are total and explicit:
/// an unknown code or abbreviation resolves to `None` rather than
/// falling through to an arbitrary variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    /// January (code 1).
    Jan = 1,
    /// February (code 2).
    Feb = 2,
    /// March (code 3).
    Mar = 3,
    /// April (code 4).
    Apr = 4,
    /// May (code 5).
    May = 5,
    /// June (code 6).
    Jun = 6,
    /// July (code 7).
    Jul = 7,
    /// August (code 8).
    Aug = 8,
    /// September (code 9).
    Sep = 9,
    /// October (code 10).
    Oct = 10,
    /// November (code 11).
    Nov = 11,
    /// December (code 12).
    Dec = 12,
}

/// All months in calendar order, used for code and name lookups.
const ALL: [Month; 12] = [
    Month::Jan,
    Month::Feb,
    Month::Mar,
    Month::Apr,
    Month::May,
    Month::Jun,
    Month::Jul,
    Month::Aug,
    Month::Sep,
    Month::Oct,
    Month::Nov,
    Month::Dec,
];

impl Month {
    /// Resolves a numeric month code in `1..=12`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::datetime::Month;
    ///
    /// assert_eq!(Month::from_code(3), Some(Month::Mar));
    /// assert_eq!(Month::from_code(13), None);
    /// ```
    pub fn from_code(code: i32) -> Option<Month> {
        ALL.into_iter().find(|m| m.code() == code)
    }

    /// Resolves a three-letter month abbreviation, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::datetime::Month;
    ///
    /// assert_eq!(Month::from_abbrev("MAR"), Some(Month::Mar));
    /// assert_eq!(Month::from_abbrev("dec"), Some(Month::Dec));
    /// assert_eq!(Month::from_abbrev("MARCH"), None);
    /// ```
    pub fn from_abbrev(token: &str) -> Option<Month> {
        ALL.into_iter().find(|m| m.abbrev().eq_ignore_ascii_case(token))
    }

    /// Returns the numeric code of the month, in `1..=12`.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns the canonical upper-case three-letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::May => "MAY",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AUG",
            Month::Sep => "SEP",
            Month::Oct => "OCT",
            Month::Nov => "NOV",
            Month::Dec => "DEC",
        }
    }

    /// Returns the number of days in this month for the given year.
    ///
    /// February has 29 days in a leap year and 28 otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::datetime::Month;
    ///
    /// assert_eq!(Month::Feb.max_days(2024), 29);
    /// assert_eq!(Month::Feb.max_days(2023), 28);
    /// assert_eq!(Month::Apr.max_days(2023), 30);
    /// assert_eq!(Month::Jan.max_days(2023), 31);
    /// ```
    pub fn max_days(self, year: i32) -> i32 {
        match self {
            Month::Feb => {
                if is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            Month::Apr | Month::Jun | Month::Sep | Month::Nov => 30,
            _ => 31,
        }
    }
}

/// Returns true for leap years under the Gregorian rule: divisible by 4,
/// except centuries, unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
