//! Versioned tax constants artifacts for the freelancer tax engine.
//!
//! The 2025 tables ship as embedded CSV files; updating to a new tax
//! year means adding a new set of tables, not changing engine logic.
//! External table files can also be loaded through [`TaxTableLoader`].

mod loader;

use std::collections::HashMap;
use std::sync::OnceLock;

use freelance_core::TaxYearConstants;

pub use loader::{
    BracketRecord, StateRateRecord, TableLoadError, TaxTableLoader, YearConfigRecord,
};

const YEAR_CONFIG_2025: &str = include_str!("../data/year_config_2025.csv");
const FEDERAL_BRACKETS_2025: &str = include_str!("../data/federal_brackets_2025.csv");
const STATE_RATES_2025: &str = include_str!("../data/state_rates_2025.csv");

static CONSTANTS_2025: OnceLock<TaxYearConstants> = OnceLock::new();
static STATE_NAMES_2025: OnceLock<HashMap<String, String>> = OnceLock::new();

/// The validated 2025 constants table, parsed once per process.
///
/// Panics if the embedded tables are malformed; that is a defect in
/// this crate's shipped data, not a runtime condition.
pub fn constants_2025() -> &'static TaxYearConstants {
    CONSTANTS_2025.get_or_init(|| {
        TaxTableLoader::load(
            YEAR_CONFIG_2025.as_bytes(),
            FEDERAL_BRACKETS_2025.as_bytes(),
            STATE_RATES_2025.as_bytes(),
        )
        .expect("embedded 2025 tax tables are malformed")
    })
}

/// Display name for a state code, if recognized. Display-only data;
/// the engine itself consumes only the rate column.
pub fn state_name(code: &str) -> Option<&'static str> {
    let names = STATE_NAMES_2025.get_or_init(|| {
        TaxTableLoader::parse_state_rates(STATE_RATES_2025.as_bytes())
            .expect("embedded 2025 state table is malformed")
            .into_iter()
            .map(|record| (record.code.to_ascii_uppercase(), record.name))
            .collect()
    });
    names
        .get(&code.trim().to_ascii_uppercase())
        .map(String::as_str)
}
