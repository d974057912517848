//! Core domain models for the shift tracker.
//!
//! This module contains the aggregates built on top of the
//! [`crate::datetime`] value types: individual worked [`Shift`]s, the
//! [`PayPeriod`] that collects them, and the [`Position`] catalog of
//! locations and jobs.

mod pay_period;
mod position;
mod shift;

pub use pay_period::PayPeriod;
pub use position::{CgJob, Location, MarketJob, Position};
pub use shift::Shift;
