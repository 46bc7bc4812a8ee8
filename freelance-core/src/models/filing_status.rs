use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filing statuses supported by the engine.
///
/// Only the two statuses the constants tables carry thresholds for are
/// modeled. Other statuses (MFS, HOH, QSS) would need their own
/// additional-Medicare thresholds and bracket schedules before they can
/// be represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "married_filing_jointly",
        }
    }
}

/// Error returned when a string is not a recognized filing status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized filing status '{0}' (expected 'single' or 'married')")]
pub struct ParseFilingStatusError(pub String);

impl FromStr for FilingStatus {
    type Err = ParseFilingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "s" => Ok(Self::Single),
            "married" | "married_filing_jointly" | "mfj" => Ok(Self::MarriedFilingJointly),
            other => Err(ParseFilingStatusError(other.to_string())),
        }
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_canonical_and_short_forms() {
        assert_eq!("single".parse::<FilingStatus>(), Ok(FilingStatus::Single));
        assert_eq!("S".parse::<FilingStatus>(), Ok(FilingStatus::Single));
        assert_eq!(
            "married".parse::<FilingStatus>(),
            Ok(FilingStatus::MarriedFilingJointly)
        );
        assert_eq!(
            "MFJ".parse::<FilingStatus>(),
            Ok(FilingStatus::MarriedFilingJointly)
        );
    }

    #[test]
    fn parse_rejects_unknown_status() {
        let result = "hoh".parse::<FilingStatus>();

        assert_eq!(result, Err(ParseFilingStatusError("hoh".to_string())));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(FilingStatus::Single.to_string(), "single");
        assert_eq!(
            FilingStatus::MarriedFilingJointly.to_string(),
            "married_filing_jointly"
        );
    }
}
