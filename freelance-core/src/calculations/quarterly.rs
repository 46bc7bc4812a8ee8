//! Quarterly estimated payment scheduling.
//!
//! Splits a year's total tax into the four IRS estimated payments.
//! Due dates follow the statutory Apr 15 / Jun 15 / Sep 15 / Jan 15
//! pattern, rolled forward to Monday when they land on a weekend
//! (for 2025 this yields Jun 16).

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// One estimated payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlyPayment {
    pub quarter: u8,
    pub due_date: NaiveDate,
    pub amount: Decimal,
}

/// The four estimated payments for one tax year.
///
/// The amounts always sum exactly to `total_tax`: the per-quarter
/// figure is rounded down to cents and the remainder (at most three
/// cents) is carried in the first payment, which keeps every payment
/// non-negative even for sub-dime totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlySchedule {
    pub tax_year: i32,
    pub total_tax: Decimal,
    pub payments: Vec<QuarterlyPayment>,
}

/// Builds the estimated payment schedule for a year's total tax.
///
/// Non-positive total tax yields a schedule with four zero payments,
/// consistent with the engine's zero-breakdown empty state.
pub fn build_quarterly_schedule(tax_year: i32, total_tax: Decimal) -> QuarterlySchedule {
    let total = round_half_up(total_tax.max(Decimal::ZERO));
    // Round down so the first payment, which absorbs the remainder,
    // stays >= the others instead of going negative on tiny totals.
    let quarter_amount = (total / Decimal::from(4))
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::ToZero);
    let first_amount = total - quarter_amount * Decimal::from(3);

    let amounts = [first_amount, quarter_amount, quarter_amount, quarter_amount];
    let payments = due_dates(tax_year)
        .into_iter()
        .zip(amounts)
        .enumerate()
        .map(|(index, (due_date, amount))| QuarterlyPayment {
            quarter: index as u8 + 1,
            due_date,
            amount,
        })
        .collect();

    QuarterlySchedule {
        tax_year,
        total_tax: total,
        payments,
    }
}

/// Statutory due dates for a tax year, weekend-adjusted.
///
/// The fourth payment falls in January of the following year.
fn due_dates(tax_year: i32) -> [NaiveDate; 4] {
    [
        statutory_date(tax_year, 4, 15),
        statutory_date(tax_year, 6, 15),
        statutory_date(tax_year, 9, 15),
        statutory_date(tax_year + 1, 1, 15),
    ]
}

fn statutory_date(year: i32, month: u32, day: u32) -> NaiveDate {
    // The 15th of a month always exists, so the fallback is unreachable.
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
    next_business_day(date)
}

/// Rolls Saturday/Sunday dates forward to Monday. Federal holidays are
/// out of scope for this estimate.
fn next_business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + chrono::Days::new(2),
        Weekday::Sun => date + chrono::Days::new(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn due_dates_for_2025_include_weekend_adjustment() {
        let schedule = build_quarterly_schedule(2025, dec!(20000.00));

        let dates: Vec<NaiveDate> = schedule.payments.iter().map(|p| p.due_date).collect();
        assert_eq!(
            dates,
            vec![
                ymd(2025, 4, 15),
                // Jun 15 2025 is a Sunday
                ymd(2025, 6, 16),
                ymd(2025, 9, 15),
                ymd(2026, 1, 15),
            ]
        );
    }

    #[test]
    fn payments_sum_exactly_to_total() {
        let schedule = build_quarterly_schedule(2025, dec!(14129.55));

        let sum: Decimal = schedule.payments.iter().map(|p| p.amount).sum();
        assert_eq!(sum, dec!(14129.55));
    }

    #[test]
    fn rounding_remainder_lands_in_first_payment() {
        // 100.01 / 4 = 25.0025, rounds down to 25.00 per quarter
        let schedule = build_quarterly_schedule(2025, dec!(100.01));

        assert_eq!(schedule.payments[0].amount, dec!(25.01));
        assert_eq!(schedule.payments[1].amount, dec!(25.00));
        assert_eq!(schedule.payments[2].amount, dec!(25.00));
        assert_eq!(schedule.payments[3].amount, dec!(25.00));
    }

    #[test]
    fn tiny_totals_never_produce_negative_payments() {
        for total in [dec!(0.01), dec!(0.02), dec!(0.03), dec!(0.05)] {
            let schedule = build_quarterly_schedule(2025, total);

            let sum: Decimal = schedule.payments.iter().map(|p| p.amount).sum();
            assert_eq!(sum, total);
            for payment in &schedule.payments {
                assert!(
                    payment.amount >= dec!(0),
                    "negative payment at total {total}"
                );
            }
        }
    }

    #[test]
    fn even_total_splits_evenly() {
        let schedule = build_quarterly_schedule(2025, dec!(10000.00));

        for payment in &schedule.payments {
            assert_eq!(payment.amount, dec!(2500.00));
        }
    }

    #[test]
    fn zero_total_yields_zero_payments() {
        let schedule = build_quarterly_schedule(2025, dec!(0.00));

        assert_eq!(schedule.payments.len(), 4);
        for payment in &schedule.payments {
            assert_eq!(payment.amount, dec!(0.00));
        }
    }

    #[test]
    fn negative_total_clamps_to_zero() {
        let schedule = build_quarterly_schedule(2025, dec!(-500.00));

        assert_eq!(schedule.total_tax, dec!(0.00));
    }

    #[test]
    fn quarters_are_numbered_one_through_four() {
        let schedule = build_quarterly_schedule(2025, dec!(4000.00));

        let quarters: Vec<u8> = schedule.payments.iter().map(|p| p.quarter).collect();
        assert_eq!(quarters, vec![1, 2, 3, 4]);
    }

    #[test]
    fn saturday_statutory_date_rolls_to_monday() {
        // Apr 15 2028 is a Saturday
        let schedule = build_quarterly_schedule(2028, dec!(1000.00));

        assert_eq!(schedule.payments[0].due_date, ymd(2028, 4, 17));
    }
}
