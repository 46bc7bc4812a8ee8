//! Pure tax calculation engine for freelancer planning tools.
//!
//! Everything in this crate is synchronous, stateless, and free of I/O.
//! Callers supply a validated [`TaxYearConstants`] table and user-entered
//! numbers; the engine returns structured results and never errors on
//! runtime input (zero or negative income yields zero-valued results).

pub mod calculations;
pub mod models;

pub use models::{
    ConstantsError, FilingStatus, StatusMap, TaxBracket, TaxBreakdown, TaxInput, TaxYearConstants,
};
