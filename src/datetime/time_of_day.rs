//! Time-of-day value type with 12h/24h parsing and duration math.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;

use crate::error::{TrackerError, TrackerResult};

/// A time of day, stored in 24-hour form regardless of input format.
///
/// Like [`crate::datetime::CalendarDate`], the fields are raw: hour 25 is
/// representable and simply reports `false` from [`is_valid`]. Instances
/// are immutable.
///
/// [`is_valid`]: TimeOfDay::is_valid
///
/// # Examples
///
/// ```
/// use shift_tracker::datetime::TimeOfDay;
///
/// let noon = TimeOfDay::parse("12:00 PM").unwrap();
/// assert_eq!(noon.hour(), 12);
/// assert_eq!(noon.to_string(), "12:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    /// Hour in 24-hour form, 0 through 23 when valid.
    hour: i32,
    /// Minute, 0 through 59 when valid.
    minute: i32,
}

impl TimeOfDay {
    /// Creates a time from raw hour and minute values.
    ///
    /// The hour is taken as already being in 24-hour form. No range
    /// checking is performed here; use [`TimeOfDay::is_valid`].
    pub fn new(hour: i32, minute: i32) -> TimeOfDay {
        TimeOfDay { hour, minute }
    }

    /// Parses a time from `"H:MM"` (24-hour) or `"H:MM AM/PM"` (12-hour).
    ///
    /// The meridiem is case-insensitive. Conversion to 24-hour form follows
    /// the clock-face rule: hour 12 with AM becomes hour 0, hour 12 with PM
    /// stays 12, any other hour is unchanged with AM and gains 12 with PM.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TimeFormat`] on a wrong token count, a
    /// non-numeric field, or an unrecognized meridiem.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::datetime::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::parse("12:00 AM").unwrap().hour(), 0);
    /// assert_eq!(TimeOfDay::parse("12:00 PM").unwrap().hour(), 12);
    /// assert_eq!(TimeOfDay::parse("1:00 PM").unwrap().hour(), 13);
    /// assert_eq!(TimeOfDay::parse("13:45").unwrap().hour(), 13);
    /// ```
    pub fn parse(text: &str) -> TrackerResult<TimeOfDay> {
        let format_error = || TrackerError::TimeFormat {
            text: text.to_string(),
        };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let (clock, meridiem) = match tokens[..] {
            [clock] => (clock, None),
            [clock, meridiem] => (clock, Some(meridiem)),
            _ => return Err(format_error()),
        };

        let mut fields = clock.split(':');
        let (Some(hour_tok), Some(minute_tok), None) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(format_error());
        };
        let raw_hour: i32 = hour_tok.parse().map_err(|_| format_error())?;
        let minute: i32 = minute_tok.parse().map_err(|_| format_error())?;

        let hour = match meridiem {
            None => raw_hour,
            Some(m) if m.eq_ignore_ascii_case("am") => {
                // Midnight is 12 AM on the clock face but hour 0 internally.
                if raw_hour == 12 { 0 } else { raw_hour }
            }
            Some(m) if m.eq_ignore_ascii_case("pm") => {
                // Noon is already hour 12; every other PM hour gains 12.
                if raw_hour == 12 { 12 } else { raw_hour + 12 }
            }
            Some(_) => return Err(format_error()),
        };

        Ok(TimeOfDay::new(hour, minute))
    }

    /// Returns true iff hour is in `0..=23` and minute is in `0..=59`.
    pub fn is_valid(&self) -> bool {
        (0..=23).contains(&self.hour) && (0..=59).contains(&self.minute)
    }

    /// Calculates the fractional hours between two times on the same day.
    ///
    /// When the end minute is smaller than the start minute a full hour was
    /// not completed, so one hour is borrowed into minutes. The result is
    /// `hour_delta + minute_delta / 60` as an exact [`Decimal`].
    ///
    /// The result is negative when `end` is earlier than `start`; rejecting
    /// that case is left to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use shift_tracker::datetime::TimeOfDay;
    ///
    /// let quarter_past = TimeOfDay::parse("01:15").unwrap();
    /// let half_past_two = TimeOfDay::parse("02:30").unwrap();
    /// assert_eq!(
    ///     TimeOfDay::difference(quarter_past, half_past_two),
    ///     Decimal::new(125, 2) // 1.25
    /// );
    /// ```
    pub fn difference(start: TimeOfDay, end: TimeOfDay) -> Decimal {
        let mut hour_delta = end.hour - start.hour;
        let minute_delta = match end.minute.cmp(&start.minute) {
            Ordering::Less => {
                hour_delta -= 1;
                60 + end.minute - start.minute
            }
            Ordering::Greater => end.minute - start.minute,
            Ordering::Equal => 0,
        };

        Decimal::from(hour_delta) + Decimal::from(minute_delta) / Decimal::from(60)
    }

    /// Returns the hour in 24-hour form.
    pub fn hour(&self) -> i32 {
        self.hour
    }

    /// Returns the minute.
    pub fn minute(&self) -> i32 {
        self.minute
    }
}

impl fmt::Display for TimeOfDay {
    /// Formats as zero-padded 24-hour `"HH:MM"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &TimeOfDay) -> Ordering {
        (self.hour, self.minute).cmp(&(other.hour, other.minute))
    }
}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &TimeOfDay) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
