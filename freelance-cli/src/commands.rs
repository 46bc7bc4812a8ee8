//! Subcommand runners.
//!
//! Each runner takes already-parsed values, calls into the engine, and
//! returns the rendered report as a string so output can be asserted on
//! in tests.

use std::fmt::Write;

use rust_decimal::Decimal;

use freelance_core::calculations::{
    BreakdownCalculator, ComparisonCalculator, ComparisonInput, HourlyRateInput,
    ProjectPricingInput, SeTaxCalculator, build_quarterly_schedule, compute_hourly_rate,
    price_project, solve_break_even_gross,
};
use freelance_core::{FilingStatus, TaxInput, TaxYearConstants};
use freelance_data::state_name;

use crate::format::{format_currency, format_percent};

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<26}{value:>16}");
}

fn state_label(code: &str) -> String {
    match state_name(code) {
        Some(name) => format!("{name} ({code})"),
        None => format!("{code} (no rate on file)"),
    }
}

/// Full gross-to-take-home breakdown.
pub fn run_breakdown(
    gross: Decimal,
    status: FilingStatus,
    state: &str,
    extra_deductions: Decimal,
    constants: &TaxYearConstants,
) -> String {
    let input =
        TaxInput::new(gross, status, state).with_extra_deductions(extra_deductions);
    let breakdown = BreakdownCalculator::new(constants).calculate(&input);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tax breakdown for {} gross, {} filer, {}",
        format_currency(gross),
        status,
        state_label(&input.state_code)
    );
    out.push('\n');
    line(&mut out, "Self-employment tax", &format_currency(breakdown.self_employment_tax));
    line(&mut out, "SE tax deduction", &format_currency(breakdown.se_tax_deduction));
    line(&mut out, "Federal income tax", &format_currency(breakdown.federal_income_tax));
    line(&mut out, "State income tax", &format_currency(breakdown.state_income_tax));
    line(&mut out, "Total tax", &format_currency(breakdown.total_tax));
    line(&mut out, "Effective rate", &format_percent(breakdown.effective_rate));
    line(&mut out, "Take-home pay", &format_currency(breakdown.take_home_pay));
    out
}

/// Self-employment tax components only.
pub fn run_se_tax(
    gross: Decimal,
    status: FilingStatus,
    constants: &TaxYearConstants,
) -> String {
    let result = SeTaxCalculator::new(constants).calculate(gross, status);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Self-employment tax for {} gross, {} filer",
        format_currency(gross),
        status
    );
    out.push('\n');
    line(&mut out, "Net SE earnings", &format_currency(result.net_se_earnings));
    line(&mut out, "Social security", &format_currency(result.social_security));
    line(&mut out, "Medicare", &format_currency(result.medicare));
    line(&mut out, "Additional Medicare", &format_currency(result.additional_medicare));
    line(&mut out, "Total SE tax", &format_currency(result.total));
    line(&mut out, "Deductible half", &format_currency(result.deduction));
    out
}

/// Break-even 1099 gross for a target net take-home.
pub fn run_break_even(
    target_net: Decimal,
    fixed_costs: Decimal,
    status: FilingStatus,
    state: &str,
    constants: &TaxYearConstants,
) -> String {
    let state = state.trim().to_ascii_uppercase();
    let gross = solve_break_even_gross(target_net, fixed_costs, status, &state, constants);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Break-even contract gross for {} net after {} in self-funded costs",
        format_currency(target_net),
        format_currency(fixed_costs)
    );
    out.push('\n');
    line(&mut out, "Required gross", &format_currency(gross));
    out
}

/// Quarterly estimated payment schedule for a gross income.
pub fn run_quarterly(
    gross: Decimal,
    status: FilingStatus,
    state: &str,
    constants: &TaxYearConstants,
) -> String {
    let input = TaxInput::new(gross, status, state);
    let breakdown = BreakdownCalculator::new(constants).calculate(&input);
    let schedule = build_quarterly_schedule(constants.tax_year, breakdown.total_tax);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Estimated payments for {} ({} total tax on {} gross)",
        schedule.tax_year,
        format_currency(schedule.total_tax),
        format_currency(gross)
    );
    out.push('\n');
    for payment in &schedule.payments {
        let label = format!("Q{} due {}", payment.quarter, payment.due_date);
        line(&mut out, &label, &format_currency(payment.amount));
    }
    out
}

/// Required hourly rate for a take-home target.
#[allow(clippy::too_many_arguments)]
pub fn run_hourly_rate(
    desired_take_home: Decimal,
    annual_expenses: Decimal,
    hours_per_week: Decimal,
    weeks_off: u32,
    status: FilingStatus,
    state: &str,
    constants: &TaxYearConstants,
) -> String {
    let input = HourlyRateInput {
        desired_take_home,
        annual_expenses,
        billable_hours_per_week: hours_per_week,
        weeks_off,
        filing_status: status,
        state_code: state.trim().to_ascii_uppercase(),
    };
    let result = compute_hourly_rate(&input, constants);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Hourly rate to take home {} after taxes and {} in expenses",
        format_currency(desired_take_home),
        format_currency(annual_expenses)
    );
    out.push('\n');
    line(&mut out, "Annual billable hours", &format!("{}", result.annual_billable_hours));
    line(&mut out, "Required gross", &format_currency(result.required_gross));
    line(&mut out, "Hourly rate", &format_currency(result.hourly_rate));
    out
}

/// Project quote with contingency and tax set-aside.
pub fn run_project(
    hours: Decimal,
    rate: Decimal,
    contingency: Decimal,
    effective_tax_rate: Decimal,
) -> String {
    let quote = price_project(&ProjectPricingInput {
        estimated_hours: hours,
        hourly_rate: rate,
        contingency,
        effective_tax_rate,
    });

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Project quote: {} hours at {}",
        hours,
        format_currency(rate)
    );
    out.push('\n');
    line(&mut out, "Base fee", &format_currency(quote.base_fee));
    line(&mut out, "Contingency", &format_currency(quote.contingency_amount));
    line(&mut out, "Quoted price", &format_currency(quote.quoted_price));
    line(&mut out, "Tax set-aside", &format_currency(quote.tax_set_aside));
    line(&mut out, "After tax", &format_currency(quote.after_tax));
    out
}

/// 1099-vs-W2 comparison for a salary.
pub fn run_compare(
    w2_salary: Decimal,
    self_funded_costs: Decimal,
    status: FilingStatus,
    state: &str,
    constants: &TaxYearConstants,
) -> String {
    let input = ComparisonInput {
        w2_salary,
        self_funded_costs,
        filing_status: status,
        state_code: state.trim().to_ascii_uppercase(),
    };
    let result = ComparisonCalculator::new(constants).calculate(&input);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "1099 equivalent of a {} W-2 salary ({} in self-funded benefits)",
        format_currency(w2_salary),
        format_currency(self_funded_costs)
    );
    out.push('\n');
    line(&mut out, "W-2 take-home", &format_currency(result.w2_take_home));
    line(&mut out, "Required 1099 gross", &format_currency(result.required_contract_gross));
    line(&mut out, "Premium over salary", &format_percent(result.premium_over_salary));
    out
}
