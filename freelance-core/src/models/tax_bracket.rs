use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single marginal tax bracket.
///
/// Brackets form a contiguous ascending schedule: each bracket's
/// `upper_bound` equals the next bracket's `lower_bound`, and the last
/// bracket's `upper_bound` is `None` (unbounded). Income exactly at a
/// boundary belongs to the lower bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(lower_bound: Decimal, upper_bound: Option<Decimal>, rate: Decimal) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
        }
    }
}
