//! Pay period aggregate: a two-week span of ordered shifts with running totals.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::datetime::CalendarDate;
use crate::error::TrackerResult;
use crate::models::Shift;

/// The two weeks of shifts that count towards one paycheck.
///
/// Shifts are kept sorted by (date, clock-in) and the hour and pay totals
/// are maintained incrementally: every add or remove either fully applies
/// (collection and totals together) or fully no-ops, so the totals always
/// equal the sum over the contained shifts.
///
/// Access is single-writer by design; callers serialize mutations against
/// one instance.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shift_tracker::models::{PayPeriod, Shift};
///
/// let mut period = PayPeriod::new("3/18/2022").unwrap();
/// assert_eq!(period.end().to_string(), "MAR 31, 2022");
///
/// let shift = Shift::new("3/19/2022", "12:42 PM", "3:44 PM", Decimal::from(14)).unwrap();
/// period.add_shift(shift);
/// assert_eq!(period.total_pay().round_dp(2), Decimal::new(4247, 2)); // 42.47
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PayPeriod {
    /// First day of the pay period.
    start: CalendarDate,
    /// Last day of the pay period, 13 days after the start unless both
    /// bounds were supplied explicitly.
    end: CalendarDate,
    /// Shifts worked, sorted by (date, clock-in).
    shifts: Vec<Shift>,
    /// Running total of hours worked.
    hours: Decimal,
    /// Running total of pay earned.
    pay: Decimal,
}

impl PayPeriod {
    /// Creates an empty pay period starting at the given date, ending 13
    /// days later (a fixed 14-day span).
    ///
    /// # Errors
    ///
    /// Propagates [`CalendarDate::parse`] failures on the start text.
    pub fn new(start_text: &str) -> TrackerResult<PayPeriod> {
        let start = CalendarDate::parse(start_text)?;
        let end = start.jump_ahead(0, 13, 0)?;
        Ok(PayPeriod::from_dates(start, end))
    }

    /// Creates an empty pay period with explicitly supplied bounds.
    pub fn with_bounds(start_text: &str, end_text: &str) -> TrackerResult<PayPeriod> {
        Ok(PayPeriod::from_dates(
            CalendarDate::parse(start_text)?,
            CalendarDate::parse(end_text)?,
        ))
    }

    /// Creates an empty pay period from already-parsed bounds.
    pub fn from_dates(start: CalendarDate, end: CalendarDate) -> PayPeriod {
        PayPeriod {
            start,
            end,
            shifts: Vec::new(),
            hours: Decimal::ZERO,
            pay: Decimal::ZERO,
        }
    }

    /// Adds a shift, keeping the collection ordered by (date, clock-in).
    ///
    /// A duplicate of an already-contained shift (full identity, every
    /// field equal) is a no-op so the totals never double-count. Returns
    /// whether the shift was inserted.
    pub fn add_shift(&mut self, shift: Shift) -> bool {
        if self.shifts.contains(&shift) {
            debug!(%shift, "duplicate shift ignored");
            return false;
        }

        let key = shift.sort_key();
        let index = self.shifts.partition_point(|s| s.sort_key() <= key);

        // Totals and collection change together, nowhere else, so the
        // sum-of-parts invariant cannot drift.
        self.hours += shift.duration_hours();
        self.pay += shift.pay();
        debug!(%shift, hours = %self.hours, pay = %self.pay, "shift added");
        self.shifts.insert(index, shift);
        true
    }

    /// Removes a shift matching the given one by full identity.
    ///
    /// Removing a shift that is not present is a no-op with the totals
    /// unaffected. Returns whether a shift was removed.
    pub fn remove_shift(&mut self, shift: &Shift) -> bool {
        let Some(index) = self.shifts.iter().position(|s| s == shift) else {
            debug!(%shift, "shift not present, nothing removed");
            return false;
        };

        let removed = self.shifts.remove(index);
        self.hours -= removed.duration_hours();
        self.pay -= removed.pay();
        debug!(shift = %removed, hours = %self.hours, pay = %self.pay, "shift removed");
        true
    }

    /// Iterates the shifts in ascending (date, clock-in) order.
    ///
    /// The iterator is restartable (call again for a fresh pass) and
    /// reflects the current collection state.
    pub fn shifts(&self) -> std::slice::Iter<'_, Shift> {
        self.shifts.iter()
    }

    /// Returns the number of shifts worked this period.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true when no shifts have been recorded.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Returns the first day of the pay period.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last day of the pay period.
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns the total hours worked this period.
    pub fn total_hours(&self) -> Decimal {
        self.hours
    }

    /// Returns the total pay earned this period.
    pub fn total_pay(&self) -> Decimal {
        self.pay
    }

    /// Returns the summary plus one line per shift worked.
    pub fn detailed_string(&self) -> String {
        let mut text = self.to_string();
        for shift in &self.shifts {
            text.push('\t');
            text.push_str(&shift.to_string());
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for PayPeriod {
    /// Formats the span, shift count, and totals to two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - {}", self.start, self.end)?;
        writeln!(f, "\tShifts: {}", self.shifts.len())?;
        writeln!(f, "\tHours: {:.2}", self.hours.round_dp(2))?;
        writeln!(f, "\tEarned: {:.2}", self.pay.round_dp(2))
    }
}

/// The persisted record shape for a pay period:
/// `{ start, end, hours, pay, shifts }` with totals rounded to two
/// decimal places.
#[derive(Serialize, Deserialize)]
struct PayPeriodRecord {
    start: String,
    end: String,
    hours: f64,
    pay: f64,
    shifts: Vec<Shift>,
}

impl Serialize for PayPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PayPeriodRecord {
            start: self.start.to_string(),
            end: self.end.to_string(),
            hours: self.hours.round_dp(2).to_f64().unwrap_or_default(),
            pay: self.pay.round_dp(2).to_f64().unwrap_or_default(),
            shifts: self.shifts.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PayPeriod {
    /// Rebuilds the period by re-adding each shift, so the totals are
    /// recomputed exactly rather than trusted from the rounded record.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<PayPeriod, D::Error> {
        use serde::de::Error;

        let record = PayPeriodRecord::deserialize(deserializer)?;
        let mut period =
            PayPeriod::with_bounds(&record.start, &record.end).map_err(D::Error::custom)?;
        for shift in record.shifts {
            period.add_shift(shift);
        }
        Ok(period)
    }
}
