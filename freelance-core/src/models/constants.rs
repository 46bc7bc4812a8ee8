use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::{FilingStatus, TaxBracket};

/// Errors produced when a constants table fails validation.
///
/// Validation runs once at load time; a table that passes is immutable
/// for the life of the process, so the calculation functions never see
/// a malformed schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstantsError {
    /// A filing status has no brackets at all.
    #[error("no income brackets for filing status '{0}'")]
    EmptyBrackets(&'static str),

    /// The first bracket must start at zero.
    #[error("first bracket for '{status}' starts at {lower_bound}, expected 0")]
    FirstBracketNotZero {
        status: &'static str,
        lower_bound: Decimal,
    },

    /// Adjacent brackets must be contiguous.
    #[error("brackets for '{status}' have a gap or overlap at index {index}: upper bound {upper_bound:?} != next lower bound {next_lower_bound}")]
    NonContiguousBrackets {
        status: &'static str,
        index: usize,
        upper_bound: Option<Decimal>,
        next_lower_bound: Decimal,
    },

    /// Only the final bracket may be unbounded, and it must be.
    #[error("last bracket for '{status}' has upper bound {upper_bound}, expected unbounded")]
    LastBracketBounded {
        status: &'static str,
        upper_bound: Decimal,
    },

    /// Marginal rates must be non-decreasing across the schedule.
    #[error("bracket rates for '{status}' decrease at index {index}: {rate} < {previous_rate}")]
    DecreasingRate {
        status: &'static str,
        index: usize,
        rate: Decimal,
        previous_rate: Decimal,
    },

    /// A rate or factor fell outside [0, 1].
    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange { name: &'static str, value: Decimal },

    /// The social security wage base must be positive.
    #[error("social security wage base must be positive, got {0}")]
    NonPositiveWageBase(Decimal),

    /// An additional-Medicare threshold must be positive.
    #[error("additional Medicare threshold for '{status}' must be positive, got {value}")]
    NonPositiveThreshold {
        status: &'static str,
        value: Decimal,
    },

    /// A standard deduction must be non-negative.
    #[error("standard deduction for '{status}' must be non-negative, got {value}")]
    NegativeStandardDeduction {
        status: &'static str,
        value: Decimal,
    },

    /// A state flat rate fell outside [0, 1].
    #[error("state rate for '{code}' must be between 0 and 1, got {rate}")]
    StateRateOutOfRange { code: String, rate: Decimal },
}

/// A value held per filing status.
///
/// Using a struct instead of a map makes a missing filing-status entry
/// unrepresentable, which is what lets calculation stay infallible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMap<T> {
    pub single: T,
    pub married_filing_jointly: T,
}

impl<T> StatusMap<T> {
    pub fn get(&self, status: FilingStatus) -> &T {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly => &self.married_filing_jointly,
        }
    }
}

/// The versioned per-year tax constants table.
///
/// Loaded once per process, validated with [`TaxYearConstants::validate`],
/// and never mutated afterwards. Updating to a new tax year means
/// swapping this table, not changing engine logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConstants {
    pub tax_year: i32,

    /// Fraction of gross self-employment income subject to SE tax
    /// (0.9235 for 2025).
    pub se_adjustment_factor: Decimal,

    /// Combined employer+employee social security rate (0.124).
    pub social_security_rate: Decimal,

    /// Combined employer+employee Medicare rate (0.029).
    pub medicare_rate: Decimal,

    /// Additional Medicare surtax rate above the threshold (0.009).
    pub additional_medicare_rate: Decimal,

    /// Ceiling on SE-adjusted earnings for the social security portion.
    pub social_security_wage_base: Decimal,

    /// Gross-income threshold above which the additional Medicare
    /// surtax applies.
    pub additional_medicare_threshold: StatusMap<Decimal>,

    /// Ordered marginal bracket schedules.
    pub income_brackets: StatusMap<Vec<TaxBracket>>,

    pub standard_deduction: StatusMap<Decimal>,

    /// Flat effective state rates keyed by two-letter code (plus DC).
    /// No-income-tax states carry an explicit 0.
    pub state_rates: HashMap<String, Decimal>,
}

impl TaxYearConstants {
    /// Validates the whole table, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        for (name, value) in [
            ("se adjustment factor", self.se_adjustment_factor),
            ("social security rate", self.social_security_rate),
            ("medicare rate", self.medicare_rate),
            ("additional medicare rate", self.additional_medicare_rate),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(ConstantsError::RateOutOfRange { name, value });
            }
        }

        if self.social_security_wage_base <= Decimal::ZERO {
            return Err(ConstantsError::NonPositiveWageBase(
                self.social_security_wage_base,
            ));
        }

        for status in [FilingStatus::Single, FilingStatus::MarriedFilingJointly] {
            let threshold = *self.additional_medicare_threshold.get(status);
            if threshold <= Decimal::ZERO {
                return Err(ConstantsError::NonPositiveThreshold {
                    status: status.as_str(),
                    value: threshold,
                });
            }

            let deduction = *self.standard_deduction.get(status);
            if deduction < Decimal::ZERO {
                return Err(ConstantsError::NegativeStandardDeduction {
                    status: status.as_str(),
                    value: deduction,
                });
            }

            Self::validate_brackets(status.as_str(), self.income_brackets.get(status))?;
        }

        for (code, rate) in &self.state_rates {
            if *rate < Decimal::ZERO || *rate > Decimal::ONE {
                return Err(ConstantsError::StateRateOutOfRange {
                    code: code.clone(),
                    rate: *rate,
                });
            }
        }

        Ok(())
    }

    fn validate_brackets(
        status: &'static str,
        brackets: &[TaxBracket],
    ) -> Result<(), ConstantsError> {
        let Some(first) = brackets.first() else {
            return Err(ConstantsError::EmptyBrackets(status));
        };

        if first.lower_bound != Decimal::ZERO {
            return Err(ConstantsError::FirstBracketNotZero {
                status,
                lower_bound: first.lower_bound,
            });
        }

        for (index, pair) in brackets.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);

            if current.upper_bound != Some(next.lower_bound) {
                return Err(ConstantsError::NonContiguousBrackets {
                    status,
                    index,
                    upper_bound: current.upper_bound,
                    next_lower_bound: next.lower_bound,
                });
            }

            if next.rate < current.rate {
                return Err(ConstantsError::DecreasingRate {
                    status,
                    index: index + 1,
                    rate: next.rate,
                    previous_rate: current.rate,
                });
            }
        }

        for bracket in brackets {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ConstantsError::RateOutOfRange {
                    name: "bracket rate",
                    value: bracket.rate,
                });
            }
        }

        // brackets.first() succeeded above, so last() is present
        if let Some(TaxBracket {
            upper_bound: Some(upper),
            ..
        }) = brackets.last()
        {
            return Err(ConstantsError::LastBracketBounded {
                status,
                upper_bound: *upper,
            });
        }

        Ok(())
    }

    /// Flat rate for a state code, or zero when the code is unknown.
    ///
    /// Unknown codes are a policy default, not an error: the engine
    /// always returns a plausible number and leaves input feedback to
    /// the calling surface.
    pub fn state_rate(&self, state_code: &str) -> Decimal {
        match self.state_rates.get(state_code) {
            Some(rate) => *rate,
            None => {
                warn!(state_code, "unknown state code; defaulting to zero rate");
                Decimal::ZERO
            }
        }
    }
}
