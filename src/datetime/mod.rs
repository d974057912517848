//! Calendar and clock value types.
//!
//! This module contains the validated value objects the tracker is built
//! on: [`CalendarDate`] for month/day/year dates with forward date-rolling
//! arithmetic, [`TimeOfDay`] for clock-in/clock-out times with 12h/24h
//! parsing and duration math, and the [`Month`] enum backing both the
//! month-length table and the abbreviated date format.

mod calendar_date;
mod month;
mod time_of_day;

pub use calendar_date::CalendarDate;
pub use month::{Month, is_leap_year};
pub use time_of_day::TimeOfDay;
