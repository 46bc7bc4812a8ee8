use std::collections::HashMap;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use freelance_core::{ConstantsError, StatusMap, TaxBracket, TaxYearConstants};

/// Errors that can occur when loading tax tables.
#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("year config file has no rows")]
    MissingYearConfig,

    #[error("unrecognized filing status in brackets file: {0}")]
    UnknownFilingStatus(String),

    #[error("bracket row for tax year {found} in a {expected} table")]
    YearMismatch { expected: i32, found: i32 },

    #[error("table failed validation: {0}")]
    Invalid(#[from] ConstantsError),
}

impl From<csv::Error> for TableLoadError {
    fn from(err: csv::Error) -> Self {
        TableLoadError::CsvParse(err.to_string())
    }
}

/// A row of the year config CSV (one row per tax year).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct YearConfigRecord {
    pub tax_year: i32,
    pub se_adjustment_factor: Decimal,
    pub social_security_rate: Decimal,
    pub medicare_rate: Decimal,
    pub additional_medicare_rate: Decimal,
    pub social_security_wage_base: Decimal,
    pub additional_medicare_threshold_single: Decimal,
    pub additional_medicare_threshold_mfj: Decimal,
    pub standard_deduction_single: Decimal,
    pub standard_deduction_mfj: Decimal,
}

/// A row of the federal brackets CSV.
///
/// An empty `upper_bound` column marks the unbounded top bracket.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub tax_year: i32,
    pub filing_status: String,
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// A row of the state rates CSV. The `name` column is display-only.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StateRateRecord {
    pub code: String,
    pub name: String,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for the versioned tax constants tables.
///
/// Reads the three CSV artifacts (year config, federal brackets, state
/// rates) from any `Read` source, assembles a [`TaxYearConstants`], and
/// runs its validation so a malformed table fails at load time rather
/// than at calculation time.
pub struct TaxTableLoader;

impl TaxTableLoader {
    /// Parses the year config CSV; the first row wins.
    pub fn parse_year_config<R: Read>(reader: R) -> Result<YearConfigRecord, TableLoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        csv_reader
            .deserialize()
            .next()
            .ok_or(TableLoadError::MissingYearConfig)?
            .map_err(Into::into)
    }

    /// Parses federal bracket rows.
    pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<BracketRecord>, TableLoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parses state rate rows.
    pub fn parse_state_rates<R: Read>(reader: R) -> Result<Vec<StateRateRecord>, TableLoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: StateRateRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assembles parsed records into a validated [`TaxYearConstants`].
    pub fn assemble(
        config: YearConfigRecord,
        brackets: Vec<BracketRecord>,
        state_rates: Vec<StateRateRecord>,
    ) -> Result<TaxYearConstants, TableLoadError> {
        let mut single = Vec::new();
        let mut married = Vec::new();

        for record in brackets {
            if record.tax_year != config.tax_year {
                return Err(TableLoadError::YearMismatch {
                    expected: config.tax_year,
                    found: record.tax_year,
                });
            }

            let bracket = TaxBracket::new(record.lower_bound, record.upper_bound, record.rate);
            match record.filing_status.as_str() {
                "single" => single.push(bracket),
                "married_filing_jointly" => married.push(bracket),
                other => return Err(TableLoadError::UnknownFilingStatus(other.to_string())),
            }
        }

        single.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));
        married.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

        let state_rates: HashMap<String, Decimal> = state_rates
            .into_iter()
            .map(|record| (record.code.to_ascii_uppercase(), record.rate))
            .collect();

        let constants = TaxYearConstants {
            tax_year: config.tax_year,
            se_adjustment_factor: config.se_adjustment_factor,
            social_security_rate: config.social_security_rate,
            medicare_rate: config.medicare_rate,
            additional_medicare_rate: config.additional_medicare_rate,
            social_security_wage_base: config.social_security_wage_base,
            additional_medicare_threshold: StatusMap {
                single: config.additional_medicare_threshold_single,
                married_filing_jointly: config.additional_medicare_threshold_mfj,
            },
            income_brackets: StatusMap {
                single,
                married_filing_jointly: married,
            },
            standard_deduction: StatusMap {
                single: config.standard_deduction_single,
                married_filing_jointly: config.standard_deduction_mfj,
            },
            state_rates,
        };

        constants.validate()?;
        Ok(constants)
    }

    /// Parses and assembles all three tables in one step.
    pub fn load<C: Read, B: Read, S: Read>(
        year_config: C,
        brackets: B,
        state_rates: S,
    ) -> Result<TaxYearConstants, TableLoadError> {
        let config = Self::parse_year_config(year_config)?;
        let brackets = Self::parse_brackets(brackets)?;
        let state_rates = Self::parse_state_rates(state_rates)?;
        Self::assemble(config, brackets, state_rates)
    }
}
