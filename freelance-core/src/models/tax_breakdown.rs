use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The engine's sole output shape for a full calculation.
///
/// Invariants maintained by the orchestrator:
/// `total_tax = self_employment_tax + federal_income_tax + state_income_tax`,
/// `take_home_pay = gross_income - total_tax`, and
/// `effective_rate = total_tax / gross_income` (zero when gross is zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub gross_income: Decimal,
    pub self_employment_tax: Decimal,
    /// Half of SE tax, the federal above-the-line deduction.
    pub se_tax_deduction: Decimal,
    pub federal_income_tax: Decimal,
    pub state_income_tax: Decimal,
    pub total_tax: Decimal,
    pub effective_rate: Decimal,
    pub take_home_pay: Decimal,
}

impl TaxBreakdown {
    /// The valid empty state returned for non-positive gross income.
    pub fn zero() -> Self {
        Self {
            gross_income: Decimal::ZERO,
            self_employment_tax: Decimal::ZERO,
            se_tax_deduction: Decimal::ZERO,
            federal_income_tax: Decimal::ZERO,
            state_income_tax: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            effective_rate: Decimal::ZERO,
            take_home_pay: Decimal::ZERO,
        }
    }
}
