//! Marginal bracket tax computation.

use rust_decimal::Decimal;

use crate::models::TaxBracket;

/// Computes tax over an ascending marginal bracket schedule.
///
/// For each bracket whose `lower_bound` is strictly below the taxable
/// income, the chunk `min(taxable_income, upper_bound) - lower_bound`
/// is taxed at that bracket's rate. Income exactly at a boundary is
/// taxed entirely at the lower bracket's rate. No rounding happens
/// here; formatting is a presentation concern.
///
/// The caller supplies a schedule already validated by
/// [`TaxYearConstants::validate`](crate::models::TaxYearConstants::validate)
/// and a taxable income already clamped to >= 0; zero input returns zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use freelance_core::TaxBracket;
/// use freelance_core::calculations::compute_bracket_tax;
///
/// let brackets = vec![
///     TaxBracket::new(dec!(0), Some(dec!(11925)), dec!(0.10)),
///     TaxBracket::new(dec!(11925), Some(dec!(48475)), dec!(0.12)),
///     TaxBracket::new(dec!(48475), None, dec!(0.22)),
/// ];
///
/// // 11925 × 0.10 + (30000 - 11925) × 0.12
/// assert_eq!(compute_bracket_tax(dec!(30000), &brackets), dec!(3361.50));
/// ```
pub fn compute_bracket_tax(taxable_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;

    for bracket in brackets {
        if taxable_income <= bracket.lower_bound {
            break;
        }

        let chunk_top = match bracket.upper_bound {
            Some(upper) => taxable_income.min(upper),
            None => taxable_income,
        };
        tax += (chunk_top - bracket.lower_bound) * bracket.rate;
    }

    tax
}
