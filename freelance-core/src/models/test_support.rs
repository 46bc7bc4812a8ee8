//! Sample 2025 constants for tests and doc examples.
//!
//! The real versioned table ships in the data crate; this copy exists
//! so the engine's own tests and examples need no cross-crate fixture.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{StatusMap, TaxBracket, TaxYearConstants};

fn pct(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

fn bracket(lower: i64, upper: Option<i64>, rate_bp: i64) -> TaxBracket {
    TaxBracket::new(
        Decimal::from(lower),
        upper.map(Decimal::from),
        pct(rate_bp, 2),
    )
}

/// A full 2025 constants table matching the shipped data artifact.
pub fn constants_2025_sample() -> TaxYearConstants {
    let single_brackets = vec![
        bracket(0, Some(11_925), 10),
        bracket(11_925, Some(48_475), 12),
        bracket(48_475, Some(103_350), 22),
        bracket(103_350, Some(197_300), 24),
        bracket(197_300, Some(250_525), 32),
        bracket(250_525, Some(626_350), 35),
        bracket(626_350, None, 37),
    ];
    let mfj_brackets = vec![
        bracket(0, Some(23_850), 10),
        bracket(23_850, Some(96_950), 12),
        bracket(96_950, Some(206_700), 22),
        bracket(206_700, Some(394_600), 24),
        bracket(394_600, Some(501_050), 32),
        bracket(501_050, Some(751_600), 35),
        bracket(751_600, None, 37),
    ];

    let state_rates = HashMap::from([
        ("TX".to_string(), Decimal::ZERO),
        ("FL".to_string(), Decimal::ZERO),
        ("WA".to_string(), Decimal::ZERO),
        ("CA".to_string(), pct(930, 4)),
        ("NY".to_string(), pct(685, 4)),
        ("PA".to_string(), pct(307, 4)),
        ("IL".to_string(), pct(495, 4)),
        ("CO".to_string(), pct(440, 4)),
    ]);

    TaxYearConstants {
        tax_year: 2025,
        se_adjustment_factor: pct(9235, 4),
        social_security_rate: pct(124, 3),
        medicare_rate: pct(29, 3),
        additional_medicare_rate: pct(9, 3),
        social_security_wage_base: Decimal::from(176_100),
        additional_medicare_threshold: StatusMap {
            single: Decimal::from(200_000),
            married_filing_jointly: Decimal::from(250_000),
        },
        income_brackets: StatusMap {
            single: single_brackets,
            married_filing_jointly: mfj_brackets,
        },
        standard_deduction: StatusMap {
            single: Decimal::from(15_000),
            married_filing_jointly: Decimal::from(30_000),
        },
        state_rates,
    }
}
