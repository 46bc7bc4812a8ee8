//! Calculation modules for the freelancer tax engine.
//!
//! Every function here is pure and infallible for runtime numeric
//! input: the constants table is validated at load time, and degenerate
//! inputs (zero or negative income) yield zero-valued results.

pub mod bracket_tax;
pub mod break_even;
pub mod breakdown;
pub mod common;
pub mod comparison;
pub mod hourly_rate;
pub mod project_pricing;
pub mod quarterly;
pub mod se_tax;

pub use bracket_tax::compute_bracket_tax;
pub use break_even::solve_break_even_gross;
pub use breakdown::BreakdownCalculator;
pub use comparison::{ComparisonCalculator, ComparisonInput, ComparisonResult};
pub use hourly_rate::{HourlyRateInput, HourlyRateResult, compute_hourly_rate};
pub use project_pricing::{ProjectPricingInput, ProjectQuote, price_project};
pub use quarterly::{QuarterlyPayment, QuarterlySchedule, build_quarterly_schedule};
pub use se_tax::{SeTaxCalculator, SeTaxResult};
