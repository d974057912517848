//! Shift tracker core: calendar arithmetic and pay-period aggregation.
//!
//! This crate records work shifts (date, clock-in, clock-out, hourly rate)
//! and aggregates them into two-week pay periods with incrementally
//! maintained hour and pay totals. It performs no I/O: raw text flows in
//! through the parsers in [`datetime`], becomes [`models::Shift`] values,
//! and is aggregated by [`models::PayPeriod`]; canonical string forms flow
//! back out for display and persistence.

#![warn(missing_docs)]

pub mod datetime;
pub mod error;
pub mod models;
