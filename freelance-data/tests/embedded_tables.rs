//! Integration tests over the shipped 2025 tables.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use freelance_core::{FilingStatus, TaxInput};
use freelance_core::calculations::BreakdownCalculator;
use freelance_data::{constants_2025, state_name};

#[test]
fn embedded_tables_load_and_validate() {
    let constants = constants_2025();

    assert_eq!(constants.tax_year, 2025);
    assert_eq!(constants.validate(), Ok(()));
}

#[test]
fn brackets_cover_both_filing_statuses() {
    let constants = constants_2025();

    assert_eq!(constants.income_brackets.single.len(), 7);
    assert_eq!(constants.income_brackets.married_filing_jointly.len(), 7);
    assert_eq!(
        constants.income_brackets.single.last().unwrap().rate,
        dec!(0.37)
    );
}

#[test]
fn state_table_has_fifty_one_entries() {
    let constants = constants_2025();

    assert_eq!(constants.state_rates.len(), 51);
    assert_eq!(constants.state_rate("TX"), dec!(0));
    assert_eq!(constants.state_rate("PA"), dec!(0.0307));
}

#[test]
fn state_names_resolve_for_display() {
    assert_eq!(state_name("tx"), Some("Texas"));
    assert_eq!(state_name("DC"), Some("District of Columbia"));
    assert_eq!(state_name("XX"), None);
}

#[test]
fn hundred_k_single_texas_against_shipped_tables() {
    let constants = constants_2025();
    let input = TaxInput::new(dec!(100000.00), FilingStatus::Single, "TX");

    let breakdown = BreakdownCalculator::new(constants).calculate(&input);

    assert_eq!(breakdown.self_employment_tax, dec!(14129.55));
    assert_eq!(breakdown.se_tax_deduction, dec!(7064.78));
    assert_eq!(breakdown.state_income_tax, dec!(0.00));
}

#[test]
fn two_hundred_k_single_caps_social_security() {
    let constants = constants_2025();
    let calculator = freelance_core::calculations::SeTaxCalculator::new(constants);

    let result = calculator.calculate(dec!(200000.00), FilingStatus::Single);

    assert_eq!(result.social_security, dec!(21836.40));
    assert_eq!(result.medicare, dec!(5356.30));
    assert_eq!(result.additional_medicare, dec!(0.00));
}
