//! Required hourly rate calculation.
//!
//! Works backwards from a desired annual take-home figure: the
//! break-even solver finds the gross revenue that nets the target after
//! taxes and business expenses, and that gross is spread over the
//! planned billable hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::break_even::solve_break_even_gross;
use crate::calculations::common::round_half_up;
use crate::models::{FilingStatus, TaxYearConstants};

const WEEKS_PER_YEAR: u32 = 52;

/// Parameters for the hourly-rate calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRateInput {
    /// Desired annual take-home pay after taxes and expenses.
    pub desired_take_home: Decimal,
    /// Annual business expenses the revenue must cover.
    pub annual_expenses: Decimal,
    pub billable_hours_per_week: Decimal,
    pub weeks_off: u32,
    pub filing_status: FilingStatus,
    pub state_code: String,
}

/// Result of the hourly-rate calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRateResult {
    /// Gross annual revenue required to net the target.
    pub required_gross: Decimal,
    pub annual_billable_hours: Decimal,
    /// `required_gross / annual_billable_hours`, rounded to cents.
    pub hourly_rate: Decimal,
}

/// Computes the hourly rate needed to reach a take-home target.
///
/// Zero billable hours (or a zero target with zero expenses) yields a
/// zero rate rather than an error; the calling surface decides how to
/// present degenerate inputs.
pub fn compute_hourly_rate(
    input: &HourlyRateInput,
    constants: &TaxYearConstants,
) -> HourlyRateResult {
    let working_weeks = Decimal::from(WEEKS_PER_YEAR.saturating_sub(input.weeks_off));
    let annual_billable_hours =
        (input.billable_hours_per_week.max(Decimal::ZERO) * working_weeks).round_dp(2);

    let required_gross = solve_break_even_gross(
        input.desired_take_home,
        input.annual_expenses,
        input.filing_status,
        &input.state_code,
        constants,
    );

    let hourly_rate = if annual_billable_hours > Decimal::ZERO {
        round_half_up(required_gross / annual_billable_hours)
    } else {
        warn!("no billable hours; hourly rate is zero");
        Decimal::ZERO
    };

    HourlyRateResult {
        required_gross,
        annual_billable_hours,
        hourly_rate,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::test_support::constants_2025_sample;

    use super::*;

    fn input() -> HourlyRateInput {
        HourlyRateInput {
            desired_take_home: dec!(80000.00),
            annual_expenses: dec!(6000.00),
            billable_hours_per_week: dec!(25),
            weeks_off: 4,
            filing_status: FilingStatus::Single,
            state_code: "TX".to_string(),
        }
    }

    #[test]
    fn billable_hours_account_for_weeks_off() {
        let constants = constants_2025_sample();

        let result = compute_hourly_rate(&input(), &constants);

        // 25 hours × (52 - 4) weeks
        assert_eq!(result.annual_billable_hours, dec!(1200.00));
    }

    #[test]
    fn rate_equals_gross_over_hours() {
        let constants = constants_2025_sample();

        let result = compute_hourly_rate(&input(), &constants);

        assert_eq!(
            result.hourly_rate,
            round_half_up(result.required_gross / dec!(1200))
        );
        // Grossing up for taxes and expenses pushes the rate well above
        // the naive take-home ÷ hours figure (~66.67).
        assert!(result.hourly_rate > dec!(80));
    }

    #[test]
    fn zero_billable_hours_yields_zero_rate() {
        let constants = constants_2025_sample();
        let mut input = input();
        input.billable_hours_per_week = dec!(0);

        let result = compute_hourly_rate(&input, &constants);

        assert_eq!(result.hourly_rate, dec!(0));
        assert!(result.required_gross > dec!(0));
    }

    #[test]
    fn weeks_off_exceeding_year_saturates() {
        let constants = constants_2025_sample();
        let mut input = input();
        input.weeks_off = 60;

        let result = compute_hourly_rate(&input, &constants);

        assert_eq!(result.annual_billable_hours, dec!(0));
        assert_eq!(result.hourly_rate, dec!(0));
    }

    #[test]
    fn higher_state_rate_raises_required_rate() {
        let constants = constants_2025_sample();
        let texas = compute_hourly_rate(&input(), &constants);

        let mut california = input();
        california.state_code = "CA".to_string();
        let california = compute_hourly_rate(&california, &constants);

        assert!(california.hourly_rate > texas.hourly_rate);
    }
}
