//! Shift model: one clock-in/clock-out at an hourly rate.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::datetime::{CalendarDate, TimeOfDay};
use crate::error::TrackerResult;
use crate::models::Position;

/// One worked shift: a date, a clock-in and clock-out time, an hourly
/// rate, and optionally the position (location/job) worked.
///
/// The worked duration and the pay are derived, not stored. Two shifts are
/// equal only when every field matches, including the position and rate;
/// that full identity is what [`crate::models::PayPeriod`] uses to detect
/// duplicates.
///
/// A shift whose clock-out precedes its clock-in is representable and
/// yields a negative duration; screening that out is a caller concern,
/// checked before construction by whatever collects the input.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::models::Shift;
///
/// let shift = Shift::new("3/19/2022", "12:42 PM", "3:44 PM", Decimal::from(14)).unwrap();
/// assert_eq!(shift.pay().round_dp(2), Decimal::new(4247, 2)); // 42.47
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shift {
    date: CalendarDate,
    clock_in: TimeOfDay,
    clock_out: TimeOfDay,
    hourly_rate: Decimal,
    position: Option<Position>,
}

impl Shift {
    /// Parses a shift from raw date, clock-in, and clock-out text, with no
    /// position tag.
    ///
    /// # Errors
    ///
    /// Propagates the parse errors of [`CalendarDate::parse`] and
    /// [`TimeOfDay::parse`].
    pub fn new(
        date_text: &str,
        clock_in_text: &str,
        clock_out_text: &str,
        hourly_rate: Decimal,
    ) -> TrackerResult<Shift> {
        Ok(Shift {
            date: CalendarDate::parse(date_text)?,
            clock_in: TimeOfDay::parse(clock_in_text)?,
            clock_out: TimeOfDay::parse(clock_out_text)?,
            hourly_rate,
            position: None,
        })
    }

    /// Parses a shift from raw text, tagged with the position worked.
    pub fn with_position(
        date_text: &str,
        clock_in_text: &str,
        clock_out_text: &str,
        hourly_rate: Decimal,
        position: Position,
    ) -> TrackerResult<Shift> {
        let mut shift = Shift::new(date_text, clock_in_text, clock_out_text, hourly_rate)?;
        shift.position = Some(position);
        Ok(shift)
    }

    /// Builds a shift from already-constructed component values.
    pub fn from_parts(
        date: CalendarDate,
        clock_in: TimeOfDay,
        clock_out: TimeOfDay,
        hourly_rate: Decimal,
        position: Option<Position>,
    ) -> Shift {
        Shift {
            date,
            clock_in,
            clock_out,
            hourly_rate,
            position,
        }
    }

    /// Returns the hours worked as the clock-in/clock-out difference.
    pub fn duration_hours(&self) -> Decimal {
        TimeOfDay::difference(self.clock_in, self.clock_out)
    }

    /// Returns the pay earned: worked hours times the hourly rate.
    pub fn pay(&self) -> Decimal {
        self.duration_hours() * self.hourly_rate
    }

    /// Returns the date worked.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the clock-in time.
    pub fn clock_in(&self) -> TimeOfDay {
        self.clock_in
    }

    /// Returns the clock-out time.
    pub fn clock_out(&self) -> TimeOfDay {
        self.clock_out
    }

    /// Returns the hourly pay rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the position worked, when one was recorded.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The chronological key pay periods order shifts by.
    pub(crate) fn sort_key(&self) -> (CalendarDate, TimeOfDay) {
        (self.date, self.clock_in)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(position) = self.position {
            write!(f, "{} {} ", position.location_name(), position.job_name())?;
        }
        write!(f, "{}, {} - {}", self.date, self.clock_in, self.clock_out)
    }
}

/// The persisted record shape for a shift:
/// `{ location, job, date, in, out, hourly }`.
#[derive(Serialize, Deserialize)]
struct ShiftRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    job: Option<String>,
    date: String,
    #[serde(rename = "in")]
    clock_in: String,
    #[serde(rename = "out")]
    clock_out: String,
    #[serde(with = "rust_decimal::serde::float")]
    hourly: Decimal,
}

impl Serialize for Shift {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ShiftRecord {
            location: self.position.map(|p| p.location_name().to_string()),
            job: self.position.map(|p| p.job_name().to_string()),
            date: self.date.to_string(),
            clock_in: self.clock_in.to_string(),
            clock_out: self.clock_out.to_string(),
            hourly: self.hourly_rate,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Shift {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Shift, D::Error> {
        use serde::de::Error;

        let record = ShiftRecord::deserialize(deserializer)?;
        let position = match (record.location, record.job) {
            (Some(location), Some(job)) => {
                Some(Position::from_names(&location, &job).map_err(D::Error::custom)?)
            }
            (None, None) => None,
            _ => {
                return Err(D::Error::custom(
                    "shift record must carry both location and job, or neither",
                ));
            }
        };

        let mut shift = Shift::new(
            &record.date,
            &record.clock_in,
            &record.clock_out,
            record.hourly,
        )
        .map_err(D::Error::custom)?;
        shift.position = position;
        Ok(shift)
    }
}
