use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;

/// Parameters for one breakdown calculation.
///
/// Transient value object: created per call and discarded. The calling
/// surface is responsible for sanitizing free-text input; the engine
/// treats any non-positive `gross_income` as the valid empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub gross_income: Decimal,
    pub filing_status: FilingStatus,
    /// Two-letter state code (plus "DC"), normalized to uppercase.
    pub state_code: String,
    /// Above-the-line deductions beyond half of SE tax. Reduces the
    /// federal taxable base, not the SE tax base.
    pub extra_deductions: Decimal,
}

impl TaxInput {
    pub fn new(gross_income: Decimal, filing_status: FilingStatus, state_code: &str) -> Self {
        Self {
            gross_income,
            filing_status,
            state_code: state_code.trim().to_ascii_uppercase(),
            extra_deductions: Decimal::ZERO,
        }
    }

    pub fn with_extra_deductions(mut self, extra_deductions: Decimal) -> Self {
        self.extra_deductions = extra_deductions;
        self
    }
}
