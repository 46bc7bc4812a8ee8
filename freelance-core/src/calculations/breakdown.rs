//! Full tax breakdown orchestration.
//!
//! Ties the SE tax, federal bracket tax, and state flat rate together
//! into the [`TaxBreakdown`] shape every calculator surface renders.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::bracket_tax::compute_bracket_tax;
use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::calculations::se_tax::SeTaxCalculator;
use crate::models::{TaxBreakdown, TaxInput, TaxYearConstants};

/// Orchestrator for a complete gross-income-to-take-home calculation.
///
/// Borrows an already-validated [`TaxYearConstants`]. Infallible: any
/// non-positive gross income returns [`TaxBreakdown::zero`], and an
/// unrecognized state code contributes a zero rate.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use freelance_core::{FilingStatus, TaxInput};
/// use freelance_core::calculations::BreakdownCalculator;
///
/// # let constants = freelance_core::calculations::se_tax::doc_constants();
/// let calculator = BreakdownCalculator::new(&constants);
/// let input = TaxInput::new(dec!(100000.00), FilingStatus::Single, "TX");
///
/// let breakdown = calculator.calculate(&input);
///
/// assert_eq!(breakdown.self_employment_tax, dec!(14129.55));
/// assert_eq!(breakdown.state_income_tax, dec!(0.00));
/// ```
#[derive(Debug, Clone)]
pub struct BreakdownCalculator<'a> {
    constants: &'a TaxYearConstants,
}

impl<'a> BreakdownCalculator<'a> {
    pub fn new(constants: &'a TaxYearConstants) -> Self {
        Self { constants }
    }

    /// Computes the full breakdown for one input.
    pub fn calculate(&self, input: &TaxInput) -> TaxBreakdown {
        if input.gross_income <= Decimal::ZERO {
            return TaxBreakdown::zero();
        }

        let se = SeTaxCalculator::new(self.constants)
            .calculate(input.gross_income, input.filing_status);

        let agi = clamp_non_negative(input.gross_income - se.deduction - input.extra_deductions);
        let taxable_income = clamp_non_negative(
            agi - *self.constants.standard_deduction.get(input.filing_status),
        );

        let federal_income_tax = round_half_up(compute_bracket_tax(
            taxable_income,
            self.constants.income_brackets.get(input.filing_status),
        ));

        // States in this model tax gross minus deductions, not the
        // federal taxable figure: no SE deduction, no standard deduction.
        let state_base = clamp_non_negative(input.gross_income - input.extra_deductions);
        let state_income_tax =
            round_half_up(state_base * self.constants.state_rate(&input.state_code));

        let total_tax = se.total + federal_income_tax + state_income_tax;
        let take_home_pay = input.gross_income - total_tax;
        let effective_rate = total_tax / input.gross_income;

        debug!(
            gross = %input.gross_income,
            %taxable_income,
            se_tax = %se.total,
            federal = %federal_income_tax,
            state = %state_income_tax,
            "computed breakdown"
        );

        TaxBreakdown {
            gross_income: input.gross_income,
            self_employment_tax: se.total,
            se_tax_deduction: se.deduction,
            federal_income_tax,
            state_income_tax,
            total_tax,
            effective_rate,
            take_home_pay,
        }
    }
}
