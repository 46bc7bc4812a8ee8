//! Self-employment tax calculation.
//!
//! Computes the three payroll-style components owed by a self-employed
//! filer: the capped social security portion, the uncapped Medicare
//! portion, and the additional Medicare surtax above the filing-status
//! threshold. Statutory asymmetries preserved exactly:
//!
//! - the social security wage-base cap applies to *adjusted* earnings
//!   (gross × 0.9235), not gross income;
//! - the additional Medicare surtax base is *gross* income, not
//!   adjusted earnings.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use freelance_core::FilingStatus;
//! use freelance_core::calculations::SeTaxCalculator;
//!
//! # let constants = freelance_core::calculations::se_tax::doc_constants();
//! let calculator = SeTaxCalculator::new(&constants);
//! let result = calculator.calculate(dec!(100000.00), FilingStatus::Single);
//!
//! // 100000 × 0.9235 × 0.153, no cap triggered
//! assert_eq!(result.total, dec!(14129.55));
//! assert_eq!(result.deduction, dec!(7064.78));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::{FilingStatus, TaxYearConstants};

/// Result of a self-employment tax calculation.
///
/// Intermediate values are kept for transparency in calling surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeTaxResult {
    /// Gross income × the SE adjustment factor.
    pub net_se_earnings: Decimal,

    /// Social security portion, capped at the wage base.
    pub social_security: Decimal,

    /// Medicare portion, uncapped.
    pub medicare: Decimal,

    /// Additional Medicare surtax on gross income above the threshold.
    pub additional_medicare: Decimal,

    /// Sum of the three portions.
    pub total: Decimal,

    /// Federal above-the-line deduction: half of the total.
    pub deduction: Decimal,
}

impl SeTaxResult {
    /// Zero-valued result for non-positive income. A valid empty state,
    /// not an error.
    fn zero() -> Self {
        Self {
            net_se_earnings: Decimal::ZERO,
            social_security: Decimal::ZERO,
            medicare: Decimal::ZERO,
            additional_medicare: Decimal::ZERO,
            total: Decimal::ZERO,
            deduction: Decimal::ZERO,
        }
    }
}

/// Calculator for self-employment tax.
///
/// Borrows an already-validated [`TaxYearConstants`]; all methods are
/// pure and infallible.
#[derive(Debug, Clone)]
pub struct SeTaxCalculator<'a> {
    constants: &'a TaxYearConstants,
}

impl<'a> SeTaxCalculator<'a> {
    pub fn new(constants: &'a TaxYearConstants) -> Self {
        Self { constants }
    }

    /// Calculates all SE tax components for the given gross income.
    ///
    /// Zero or negative income yields an all-zero result.
    pub fn calculate(&self, gross_income: Decimal, filing_status: FilingStatus) -> SeTaxResult {
        if gross_income <= Decimal::ZERO {
            warn!(%gross_income, "gross income is zero or negative; no SE tax due");
            return SeTaxResult::zero();
        }

        let net_se_earnings = self.net_se_earnings(gross_income);
        let social_security = self.social_security_portion(net_se_earnings);
        let medicare = self.medicare_portion(net_se_earnings);
        let additional_medicare = self.additional_medicare_portion(gross_income, filing_status);

        let total = round_half_up(social_security + medicare + additional_medicare);
        let deduction = round_half_up(total * Decimal::new(5, 1));

        SeTaxResult {
            net_se_earnings,
            social_security,
            medicare,
            additional_medicare,
            total,
            deduction,
        }
    }

    /// Gross income × the SE adjustment factor, rounded to cents.
    fn net_se_earnings(&self, gross_income: Decimal) -> Decimal {
        round_half_up(gross_income * self.constants.se_adjustment_factor)
    }

    /// Social security portion: adjusted earnings up to the wage base.
    fn social_security_portion(&self, net_se_earnings: Decimal) -> Decimal {
        let taxable = net_se_earnings.min(self.constants.social_security_wage_base);
        round_half_up(taxable * self.constants.social_security_rate)
    }

    /// Medicare portion: adjusted earnings, no cap.
    fn medicare_portion(&self, net_se_earnings: Decimal) -> Decimal {
        round_half_up(net_se_earnings * self.constants.medicare_rate)
    }

    /// Additional Medicare surtax: gross income above the threshold.
    fn additional_medicare_portion(
        &self,
        gross_income: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        let threshold = *self.constants.additional_medicare_threshold.get(filing_status);
        let excess = clamp_non_negative(gross_income - threshold);
        round_half_up(excess * self.constants.additional_medicare_rate)
    }
}

/// Constants table for doc examples. Not part of the public contract.
#[doc(hidden)]
pub fn doc_constants() -> TaxYearConstants {
    crate::models::test_support::constants_2025_sample()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::test_support::constants_2025_sample;

    use super::*;

    #[test]
    fn calculate_standard_case_without_cap() {
        let constants = constants_2025_sample();
        let calculator = SeTaxCalculator::new(&constants);

        let result = calculator.calculate(dec!(100000.00), FilingStatus::Single);

        // Net SE earnings: 100000 × 0.9235 = 92350
        assert_eq!(result.net_se_earnings, dec!(92350.00));
        // SS: 92350 × 0.124 = 11451.40 (92350 < 176100, no cap)
        assert_eq!(result.social_security, dec!(11451.40));
        // Medicare: 92350 × 0.029 = 2678.15
        assert_eq!(result.medicare, dec!(2678.15));
        // Below the 200000 threshold
        assert_eq!(result.additional_medicare, dec!(0.00));
        assert_eq!(result.total, dec!(14129.55));
        // 14129.55 × 0.5 = 7064.775, rounds half-up
        assert_eq!(result.deduction, dec!(7064.78));
    }

    #[test]
    fn calculate_caps_social_security_at_wage_base() {
        let constants = constants_2025_sample();
        let calculator = SeTaxCalculator::new(&constants);

        let result = calculator.calculate(dec!(200000.00), FilingStatus::Single);

        // Net SE earnings: 200000 × 0.9235 = 184700 > 176100
        assert_eq!(result.net_se_earnings, dec!(184700.00));
        // SS capped: 176100 × 0.124 = 21836.40
        assert_eq!(result.social_security, dec!(21836.40));
        // Medicare uncapped: 184700 × 0.029 = 5356.30
        assert_eq!(result.medicare, dec!(5356.30));
        // Surtax base is gross income: 200000 - 200000 = 0
        assert_eq!(result.additional_medicare, dec!(0.00));
    }

    #[test]
    fn social_security_is_flat_above_the_cap() {
        let constants = constants_2025_sample();
        let calculator = SeTaxCalculator::new(&constants);

        let at_300k = calculator.calculate(dec!(300000.00), FilingStatus::Single);
        let at_500k = calculator.calculate(dec!(500000.00), FilingStatus::Single);

        assert_eq!(at_300k.social_security, dec!(21836.40));
        assert_eq!(at_500k.social_security, dec!(21836.40));
    }

    #[test]
    fn additional_medicare_applies_to_gross_above_threshold() {
        let constants = constants_2025_sample();
        let calculator = SeTaxCalculator::new(&constants);

        let result = calculator.calculate(dec!(250000.00), FilingStatus::Single);

        // (250000 - 200000) × 0.009 = 450
        assert_eq!(result.additional_medicare, dec!(450.00));
    }

    #[test]
    fn additional_medicare_uses_filing_status_threshold() {
        let constants = constants_2025_sample();
        let calculator = SeTaxCalculator::new(&constants);

        let result = calculator.calculate(dec!(250000.00), FilingStatus::MarriedFilingJointly);

        // MFJ threshold is 250000, so no surtax yet
        assert_eq!(result.additional_medicare, dec!(0.00));
    }

    #[test]
    fn calculate_returns_zero_for_zero_income() {
        let constants = constants_2025_sample();
        let calculator = SeTaxCalculator::new(&constants);

        let result = calculator.calculate(dec!(0.00), FilingStatus::Single);

        assert_eq!(result, SeTaxResult::zero());
    }

    #[test]
    fn calculate_returns_zero_for_negative_income() {
        let constants = constants_2025_sample();
        let calculator = SeTaxCalculator::new(&constants);

        let result = calculator.calculate(dec!(-5000.00), FilingStatus::Single);

        assert_eq!(result, SeTaxResult::zero());
    }

    #[test]
    fn total_is_sum_of_portions() {
        let constants = constants_2025_sample();
        let calculator = SeTaxCalculator::new(&constants);

        let result = calculator.calculate(dec!(321456.78), FilingStatus::Single);

        assert_eq!(
            result.total,
            result.social_security + result.medicare + result.additional_medicare
        );
    }
}
