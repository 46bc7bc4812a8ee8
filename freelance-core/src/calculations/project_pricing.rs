//! Project pricing.
//!
//! Turns an hours estimate into a quote: base fee plus a contingency
//! margin for scope creep, with a tax set-aside at the freelancer's
//! effective rate so the after-tax value of the project is visible up
//! front.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{clamp_non_negative, round_half_up};

/// Parameters for a project quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPricingInput {
    pub estimated_hours: Decimal,
    pub hourly_rate: Decimal,
    /// Fraction added on top of the base fee for scope creep
    /// (e.g. 0.15 for 15%).
    pub contingency: Decimal,
    /// The freelancer's effective tax rate, typically taken from a
    /// [`TaxBreakdown`](crate::models::TaxBreakdown).
    pub effective_tax_rate: Decimal,
}

/// A priced project quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectQuote {
    pub base_fee: Decimal,
    pub contingency_amount: Decimal,
    /// `base_fee + contingency_amount`.
    pub quoted_price: Decimal,
    /// `quoted_price × effective_tax_rate`.
    pub tax_set_aside: Decimal,
    /// `quoted_price - tax_set_aside`.
    pub after_tax: Decimal,
}

/// Prices a project. Negative inputs are clamped to zero; a zero quote
/// is the valid empty state.
pub fn price_project(input: &ProjectPricingInput) -> ProjectQuote {
    let hours = clamp_non_negative(input.estimated_hours);
    let rate = clamp_non_negative(input.hourly_rate);
    let contingency = clamp_non_negative(input.contingency);
    let tax_rate = clamp_non_negative(input.effective_tax_rate).min(Decimal::ONE);

    let base_fee = round_half_up(hours * rate);
    let contingency_amount = round_half_up(base_fee * contingency);
    let quoted_price = base_fee + contingency_amount;
    let tax_set_aside = round_half_up(quoted_price * tax_rate);
    let after_tax = quoted_price - tax_set_aside;

    ProjectQuote {
        base_fee,
        contingency_amount,
        quoted_price,
        tax_set_aside,
        after_tax,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn quote_includes_contingency_and_set_aside() {
        let quote = price_project(&ProjectPricingInput {
            estimated_hours: dec!(40),
            hourly_rate: dec!(95.00),
            contingency: dec!(0.15),
            effective_tax_rate: dec!(0.26),
        });

        assert_eq!(quote.base_fee, dec!(3800.00));
        assert_eq!(quote.contingency_amount, dec!(570.00));
        assert_eq!(quote.quoted_price, dec!(4370.00));
        assert_eq!(quote.tax_set_aside, dec!(1136.20));
        assert_eq!(quote.after_tax, dec!(3233.80));
    }

    #[test]
    fn price_components_always_reconcile() {
        let quote = price_project(&ProjectPricingInput {
            estimated_hours: dec!(37.5),
            hourly_rate: dec!(112.34),
            contingency: dec!(0.1),
            effective_tax_rate: dec!(0.31),
        });

        assert_eq!(quote.quoted_price, quote.base_fee + quote.contingency_amount);
        assert_eq!(quote.after_tax, quote.quoted_price - quote.tax_set_aside);
    }

    #[test]
    fn zero_hours_yields_zero_quote() {
        let quote = price_project(&ProjectPricingInput {
            estimated_hours: dec!(0),
            hourly_rate: dec!(150.00),
            contingency: dec!(0.2),
            effective_tax_rate: dec!(0.3),
        });

        assert_eq!(quote.quoted_price, dec!(0.00));
        assert_eq!(quote.after_tax, dec!(0.00));
    }

    #[test]
    fn negative_inputs_are_clamped() {
        let quote = price_project(&ProjectPricingInput {
            estimated_hours: dec!(-10),
            hourly_rate: dec!(100.00),
            contingency: dec!(-0.5),
            effective_tax_rate: dec!(-0.3),
        });

        assert_eq!(quote.quoted_price, dec!(0.00));
        assert_eq!(quote.tax_set_aside, dec!(0.00));
    }

    #[test]
    fn tax_rate_above_one_is_capped() {
        let quote = price_project(&ProjectPricingInput {
            estimated_hours: dec!(10),
            hourly_rate: dec!(100.00),
            contingency: dec!(0),
            effective_tax_rate: dec!(1.5),
        });

        assert_eq!(quote.tax_set_aside, dec!(1000.00));
        assert_eq!(quote.after_tax, dec!(0.00));
    }
}
