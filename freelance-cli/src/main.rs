use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use freelance_cli::commands;
use freelance_cli::format::parse_currency;
use freelance_core::FilingStatus;
use freelance_data::constants_2025;

/// Tax estimators for freelancers: breakdowns, break-even rates,
/// quarterly schedules, and pricing, over the 2025 IRS tables.
///
/// All amounts accept free-text currency input such as `$85,000` or
/// `85000.50`. These are planning estimates, not tax advice.
#[derive(Debug, Parser)]
#[command(name = "freelance-tax", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Full gross-to-take-home tax breakdown.
    Breakdown {
        /// Gross 1099 income for the year.
        #[arg(long)]
        gross: String,

        /// Filing status: single or married.
        #[arg(long, default_value = "single")]
        status: FilingStatus,

        /// Two-letter state code (e.g. TX, CA).
        #[arg(long)]
        state: String,

        /// Extra above-the-line deductions.
        #[arg(long, default_value = "0")]
        deductions: String,
    },

    /// Self-employment tax components only.
    SeTax {
        #[arg(long)]
        gross: String,

        #[arg(long, default_value = "single")]
        status: FilingStatus,
    },

    /// 1099 gross needed to net a target take-home figure.
    BreakEven {
        /// Target net take-home for the year.
        #[arg(long)]
        target: String,

        /// Annual self-funded costs (health insurance, retirement).
        #[arg(long, default_value = "0")]
        costs: String,

        #[arg(long, default_value = "single")]
        status: FilingStatus,

        #[arg(long)]
        state: String,
    },

    /// Quarterly estimated payment schedule for a gross income.
    Quarterly {
        #[arg(long)]
        gross: String,

        #[arg(long, default_value = "single")]
        status: FilingStatus,

        #[arg(long)]
        state: String,
    },

    /// Hourly rate needed to reach a take-home target.
    HourlyRate {
        /// Desired annual take-home pay.
        #[arg(long)]
        target: String,

        /// Annual business expenses.
        #[arg(long, default_value = "0")]
        expenses: String,

        /// Billable hours per week.
        #[arg(long, default_value_t = 25.0)]
        hours: f64,

        /// Unbilled weeks per year (vacation, admin, dry spells).
        #[arg(long, default_value_t = 4)]
        weeks_off: u32,

        #[arg(long, default_value = "single")]
        status: FilingStatus,

        #[arg(long)]
        state: String,
    },

    /// Price a project from an hours estimate.
    Project {
        #[arg(long)]
        hours: f64,

        /// Hourly rate to bill at.
        #[arg(long)]
        rate: String,

        /// Contingency fraction for scope creep (0.15 = 15%).
        #[arg(long, default_value_t = 0.15)]
        contingency: f64,

        /// Effective tax rate to set aside (from `breakdown`).
        #[arg(long, default_value_t = 0.25)]
        tax_rate: f64,
    },

    /// Compare a W-2 salary against its 1099 equivalent.
    Compare {
        /// Annual W-2 salary to match.
        #[arg(long)]
        salary: String,

        /// Annual benefits cost the contractor self-funds.
        #[arg(long, default_value = "0")]
        costs: String,

        #[arg(long, default_value = "single")]
        status: FilingStatus,

        #[arg(long)]
        state: String,
    },
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn money(raw: &str, flag: &str) -> Result<rust_decimal::Decimal> {
    parse_currency(raw).with_context(|| format!("could not parse --{flag}"))
}

fn decimal_arg(value: f64, flag: &str) -> Result<rust_decimal::Decimal> {
    rust_decimal::Decimal::try_from(value)
        .with_context(|| format!("could not represent --{flag} as a decimal"))
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let constants = constants_2025();

    let report = match cli.command {
        Command::Breakdown {
            gross,
            status,
            state,
            deductions,
        } => commands::run_breakdown(
            money(&gross, "gross")?,
            status,
            &state,
            money(&deductions, "deductions")?,
            constants,
        ),
        Command::SeTax { gross, status } => {
            commands::run_se_tax(money(&gross, "gross")?, status, constants)
        }
        Command::BreakEven {
            target,
            costs,
            status,
            state,
        } => commands::run_break_even(
            money(&target, "target")?,
            money(&costs, "costs")?,
            status,
            &state,
            constants,
        ),
        Command::Quarterly {
            gross,
            status,
            state,
        } => commands::run_quarterly(money(&gross, "gross")?, status, &state, constants),
        Command::HourlyRate {
            target,
            expenses,
            hours,
            weeks_off,
            status,
            state,
        } => commands::run_hourly_rate(
            money(&target, "target")?,
            money(&expenses, "expenses")?,
            decimal_arg(hours, "hours")?,
            weeks_off,
            status,
            &state,
            constants,
        ),
        Command::Project {
            hours,
            rate,
            contingency,
            tax_rate,
        } => commands::run_project(
            decimal_arg(hours, "hours")?,
            money(&rate, "rate")?,
            decimal_arg(contingency, "contingency")?,
            decimal_arg(tax_rate, "tax-rate")?,
        ),
        Command::Compare {
            salary,
            costs,
            status,
            state,
        } => commands::run_compare(
            money(&salary, "salary")?,
            money(&costs, "costs")?,
            status,
            &state,
            constants,
        ),
    };

    print!("{report}");
    Ok(())
}
