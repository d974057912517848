//! Integration tests for the shift tracker core.
//!
//! This suite covers:
//! - the end-to-end pay period scenario (parse, aggregate, format)
//! - persistence-shaped JSON round trips
//! - property tests for the incremental-totals and ordering invariants

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shift_tracker::datetime::{CalendarDate, Month, TimeOfDay};
use shift_tracker::models::{MarketJob, PayPeriod, Position, Shift};

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_single_shift_pay_period_end_to_end() {
    let mut period = PayPeriod::new("3/18/2022").unwrap();
    assert_eq!(period.start().to_string(), "MAR 18, 2022");
    assert_eq!(period.end().to_string(), "MAR 31, 2022");

    let shift = Shift::with_position(
        "03/19/2022",
        "12:42 PM",
        "3:44 PM",
        Decimal::from(14),
        Position::Market(MarketJob::Cashier),
    )
    .unwrap();
    assert_eq!(shift.duration_hours().round_dp(4), decimal("3.0333"));
    assert_eq!(shift.pay().round_dp(2), decimal("42.47"));

    assert!(period.add_shift(shift.clone()));
    assert_eq!(period.total_hours(), shift.duration_hours());
    assert_eq!(period.total_pay(), shift.pay());

    assert_eq!(
        period.to_string(),
        "MAR 18, 2022 - MAR 31, 2022\n\tShifts: 1\n\tHours: 3.03\n\tEarned: 42.47\n"
    );
    assert!(
        period
            .detailed_string()
            .contains("MARKET CASHIER MAR 19, 2022, 12:42 - 15:44")
    );
}

#[test]
fn test_two_week_period_with_shifts_across_both_weeks() {
    let mut period = PayPeriod::new("12/24/2021").unwrap();
    assert_eq!(period.end().to_string(), "JAN 06, 2022");

    // Deliberately added out of order, across the year boundary.
    period.add_shift(Shift::new("1/3/2022", "8:00 AM", "4:00 PM", Decimal::from(14)).unwrap());
    period.add_shift(Shift::new("12/27/2021", "9:00", "17:30", Decimal::from(14)).unwrap());
    period.add_shift(Shift::new("12/31/2021", "11:15", "13:45", Decimal::from(15)).unwrap());

    let dates: Vec<String> = period.shifts().map(|s| s.date().to_string()).collect();
    assert_eq!(dates, vec!["DEC 27, 2021", "DEC 31, 2021", "JAN 03, 2022"]);

    // 8.5 + 2.5 + 8 hours; 14 * 16.5 + 15 * 2.5 pay.
    assert_eq!(period.total_hours(), decimal("19.0"));
    assert_eq!(period.total_pay(), decimal("268.50"));
}

#[test]
fn test_persistence_round_trip_preserves_everything() {
    let mut period = PayPeriod::new("3/18/2022").unwrap();
    period.add_shift(
        Shift::with_position(
            "3/19/2022",
            "12:42 PM",
            "3:44 PM",
            Decimal::from(14),
            Position::Market(MarketJob::Cashier),
        )
        .unwrap(),
    );
    period.add_shift(Shift::new("3/21/2022", "9:00", "17:00", decimal("14.50")).unwrap());

    let json = serde_json::to_string_pretty(&period).unwrap();
    let restored: PayPeriod = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, period);
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.total_hours(), period.total_hours());
    assert_eq!(restored.total_pay(), period.total_pay());
}

#[test]
fn test_construct_then_check_pipeline_for_invalid_input() {
    // Out-of-range values parse fine and are caught by the validity
    // predicates, the way a prompting front end re-checks input.
    let date = CalendarDate::parse("2/30/2022").unwrap();
    assert!(!date.is_valid());

    let time = TimeOfDay::parse("24:00").unwrap();
    assert!(!time.is_valid());

    // Outright garbage fails at the parse step instead.
    assert!(CalendarDate::parse("soon").is_err());
    assert!(TimeOfDay::parse("midnight").is_err());
}

// =============================================================================
// Property tests
// =============================================================================

/// Any valid calendar date within a March 2022 pay window.
fn shift_strategy() -> impl Strategy<Value = Shift> {
    (
        18..=31i32,
        0..=23i32,
        0..=59i32,
        0..=23i32,
        0..=59i32,
        1..=30i64,
    )
        .prop_map(|(day, in_hour, in_minute, out_hour, out_minute, rate)| {
            Shift::from_parts(
                CalendarDate::new(3, day, 2022),
                TimeOfDay::new(in_hour, in_minute),
                TimeOfDay::new(out_hour, out_minute),
                Decimal::from(rate),
                None,
            )
        })
}

proptest! {
    /// Totals equal the sum over contained shifts after every mutation,
    /// for any interleaving of adds and removes (including removes of
    /// shifts that were never added).
    #[test]
    fn prop_totals_always_equal_sum_of_parts(
        pool in prop::collection::vec(shift_strategy(), 1..8),
        ops in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 1..40),
    ) {
        let mut period = PayPeriod::new("3/18/2022").unwrap();

        for (add, index) in ops {
            let shift = pool[index.index(pool.len())].clone();
            if add {
                period.add_shift(shift);
            } else {
                period.remove_shift(&shift);
            }

            let hours: Decimal = period.shifts().map(Shift::duration_hours).sum();
            let pay: Decimal = period.shifts().map(Shift::pay).sum();
            prop_assert_eq!(period.total_hours(), hours);
            prop_assert_eq!(period.total_pay(), pay);
        }
    }

    /// Shifts iterate in non-decreasing (date, clock-in) order no matter
    /// the insertion order.
    #[test]
    fn prop_shifts_stay_ordered(
        pool in prop::collection::vec(shift_strategy(), 1..12),
    ) {
        let mut period = PayPeriod::new("3/18/2022").unwrap();
        for shift in pool {
            period.add_shift(shift);
        }

        let ordered = period
            .shifts()
            .zip(period.shifts().skip(1))
            .all(|(a, b)| (a.date(), a.clock_in()) <= (b.date(), b.clock_in()));
        prop_assert!(ordered);
    }

    /// Every valid date survives a format/parse round trip.
    #[test]
    fn prop_calendar_date_round_trips(
        month_code in 1..=12i32,
        day_seed in 1..=31i32,
        year in 0..=9999i32,
    ) {
        let month = Month::from_code(month_code).unwrap();
        let day = day_seed.min(month.max_days(year));
        let date = CalendarDate::new(month_code, day, year);

        prop_assert!(date.is_valid());
        prop_assert_eq!(CalendarDate::parse(&date.to_string()).unwrap(), date);
    }

    /// Every valid time survives a format/parse round trip.
    #[test]
    fn prop_time_of_day_round_trips(hour in 0..=23i32, minute in 0..=59i32) {
        let time = TimeOfDay::new(hour, minute);
        prop_assert!(time.is_valid());
        prop_assert_eq!(TimeOfDay::parse(&time.to_string()).unwrap(), time);
    }

    /// jump_ahead by days alone always lands on a valid date and never
    /// moves backwards.
    #[test]
    fn prop_jump_ahead_days_stays_valid(
        month_code in 1..=12i32,
        day_seed in 1..=31i32,
        year in 1900..=2100i32,
        days in 0..=800i32,
    ) {
        let month = Month::from_code(month_code).unwrap();
        let day = day_seed.min(month.max_days(year));
        let date = CalendarDate::new(month_code, day, year);

        let rolled = date.jump_ahead(0, days, 0).unwrap();
        prop_assert!(rolled.is_valid());
        prop_assert!(rolled >= date);
    }
}
