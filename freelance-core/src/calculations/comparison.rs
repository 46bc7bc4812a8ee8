//! 1099-vs-W2 comparison.
//!
//! Answers the question "what contract gross matches this salary?":
//! computes the W-2 employee's take-home pay, then finds the 1099 gross
//! whose take-home covers that figure plus the benefits the contractor
//! must self-fund (health insurance, retirement match).
//!
//! The W-2 side reuses the same federal and state tables with
//! employee-side FICA: half the combined social security and Medicare
//! rates, no SE adjustment factor, and no SE-tax deduction. The
//! additional Medicare surtax is withheld entirely from the employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::bracket_tax::compute_bracket_tax;
use crate::calculations::break_even::solve_break_even_gross;
use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::{FilingStatus, TaxYearConstants};

/// Parameters for a salary-to-contract comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub w2_salary: Decimal,
    /// Annual cost of benefits the contractor covers out of pocket.
    pub self_funded_costs: Decimal,
    pub filing_status: FilingStatus,
    pub state_code: String,
}

/// Result of a salary-to-contract comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The W-2 employee's annual take-home pay.
    pub w2_take_home: Decimal,
    /// Contract gross whose net-after-costs matches `w2_take_home`.
    pub required_contract_gross: Decimal,
    /// `(required_contract_gross - w2_salary) / w2_salary`; zero for a
    /// zero salary.
    pub premium_over_salary: Decimal,
}

/// Calculator for the 1099-vs-W2 comparison.
#[derive(Debug, Clone)]
pub struct ComparisonCalculator<'a> {
    constants: &'a TaxYearConstants,
}

impl<'a> ComparisonCalculator<'a> {
    pub fn new(constants: &'a TaxYearConstants) -> Self {
        Self { constants }
    }

    /// Runs the comparison. A non-positive salary yields a zero result.
    pub fn calculate(&self, input: &ComparisonInput) -> ComparisonResult {
        if input.w2_salary <= Decimal::ZERO {
            return ComparisonResult {
                w2_take_home: Decimal::ZERO,
                required_contract_gross: Decimal::ZERO,
                premium_over_salary: Decimal::ZERO,
            };
        }

        let w2_take_home = self.w2_take_home(input);

        let required_contract_gross = solve_break_even_gross(
            w2_take_home,
            input.self_funded_costs,
            input.filing_status,
            &input.state_code,
            self.constants,
        );

        let premium_over_salary =
            (required_contract_gross - input.w2_salary) / input.w2_salary;

        ComparisonResult {
            w2_take_home,
            required_contract_gross,
            premium_over_salary,
        }
    }

    fn w2_take_home(&self, input: &ComparisonInput) -> Decimal {
        let salary = input.w2_salary;
        let half = Decimal::new(5, 1);

        let social_security = round_half_up(
            salary.min(self.constants.social_security_wage_base)
                * self.constants.social_security_rate
                * half,
        );
        let medicare = round_half_up(salary * self.constants.medicare_rate * half);

        let threshold = *self
            .constants
            .additional_medicare_threshold
            .get(input.filing_status);
        let additional_medicare = round_half_up(
            clamp_non_negative(salary - threshold) * self.constants.additional_medicare_rate,
        );

        let taxable = clamp_non_negative(
            salary - *self.constants.standard_deduction.get(input.filing_status),
        );
        let federal = round_half_up(compute_bracket_tax(
            taxable,
            self.constants.income_brackets.get(input.filing_status),
        ));

        let state = round_half_up(salary * self.constants.state_rate(&input.state_code));

        salary - social_security - medicare - additional_medicare - federal - state
    }
}
