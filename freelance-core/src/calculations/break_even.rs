//! Break-even gross income solver.
//!
//! Inverts the breakdown calculation: finds the 1099 gross income whose
//! take-home pay, after subtracting fixed annual costs the contractor
//! self-funds (health insurance, retirement), equals a target net
//! figure. The underlying tax function is monotonic, so the root is
//! unique; a damped fixed-point update converges without oscillation.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::breakdown::BreakdownCalculator;
use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::{FilingStatus, TaxInput, TaxYearConstants};

/// Convergence tolerance, in currency units.
const TOLERANCE: Decimal = Decimal::ONE;

/// Iteration cap. Generous for the income range the calculators
/// support; hitting it returns the last guess rather than erroring.
const MAX_ITERATIONS: u32 = 50;

/// Solves for the gross contract income whose net-after-costs equals
/// `target_net_take_home`.
///
/// The starting guess is `target × 1.25` (contract rates typically run
/// about 25% above an equivalent W-2 salary) and each step applies
/// `guess -= error / (1 - 0.35)`, damping by an approximate combined
/// marginal tax-plus-cost rate. This is a planning estimate: if the cap
/// is reached before `|error| < 1`, the last guess is returned with a
/// warning rather than an error. The result is clamped to >= 0.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use freelance_core::FilingStatus;
/// use freelance_core::calculations::solve_break_even_gross;
///
/// # let constants = freelance_core::calculations::se_tax::doc_constants();
/// let gross = solve_break_even_gross(
///     dec!(70000.00),
///     dec!(12000.00),
///     FilingStatus::Single,
///     "TX",
///     &constants,
/// );
///
/// assert!(gross > dec!(82000.00));
/// ```
pub fn solve_break_even_gross(
    target_net_take_home: Decimal,
    fixed_annual_costs: Decimal,
    filing_status: FilingStatus,
    state_code: &str,
    constants: &TaxYearConstants,
) -> Decimal {
    if target_net_take_home <= Decimal::ZERO && fixed_annual_costs <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let calculator = BreakdownCalculator::new(constants);
    // Empirical damping divisor: 1 - 0.35 marginal combined rate.
    let damping = Decimal::ONE - Decimal::new(35, 2);

    let mut guess = target_net_take_home * Decimal::new(125, 2);

    for iteration in 0..MAX_ITERATIONS {
        let input = TaxInput::new(guess, filing_status, state_code);
        let net_after_costs = calculator.calculate(&input).take_home_pay - fixed_annual_costs;
        let error = net_after_costs - target_net_take_home;

        debug!(iteration, %guess, %error, "break-even iteration");

        if error.abs() < TOLERANCE {
            return clamp_non_negative(round_half_up(guess));
        }

        guess -= error / damping;
    }

    warn!(
        %guess,
        %target_net_take_home,
        "break-even solver hit iteration cap; returning last estimate"
    );
    clamp_non_negative(round_half_up(guess))
}
