mod constants;
mod filing_status;
mod tax_bracket;
mod tax_breakdown;
mod tax_input;

#[doc(hidden)]
pub mod test_support;

pub use constants::{ConstantsError, StatusMap, TaxYearConstants};
pub use filing_status::{FilingStatus, ParseFilingStatusError};
pub use tax_bracket::TaxBracket;
pub use tax_breakdown::TaxBreakdown;
pub use tax_input::TaxInput;
