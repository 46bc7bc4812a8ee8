//! Free-text currency parsing and display formatting.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use freelance_core::calculations::common::round_half_up;

/// Error returned when input cannot be parsed as a currency amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseCurrencyError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses user-entered currency text.
///
/// Accepts a leading `$`, comma thousands separators, and surrounding
/// whitespace. Empty input is treated as 0. Negative amounts are
/// clamped to 0 with a warning: the engine expects sanitized
/// non-negative numbers, and a negative amount in these calculators is
/// a typo, not a meaningful input.
pub fn parse_currency(s: &str) -> Result<Decimal, ParseCurrencyError> {
    let normalized = s.trim().trim_start_matches('$').replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        warn!(input = %s, "invalid currency amount: {}", e);
        ParseCurrencyError {
            input: s.to_string(),
            source: e,
        }
    })?;

    if value < Decimal::ZERO {
        warn!(input = %s, "negative amount clamped to zero");
        return Ok(Decimal::ZERO);
    }

    Ok(value)
}

/// Formats an amount as `$1,234.56` (rounded half-up to cents).
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// Formats a rate fraction as a percentage, e.g. `0.263` -> `26.30%`.
pub fn format_percent(rate: Decimal) -> String {
    format!("{:.2}%", (rate * Decimal::from(100)).round_dp(2))
}
