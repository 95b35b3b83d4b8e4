//! Balance Classifier
//!
//! Compares the physical drawer count against the server-confirmed
//! cash-to-bank figure. Sub-unit differences are noise, not a
//! discrepancy: both operands are rounded to the whole currency unit
//! before comparison.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::util::round_unit;

/// Classification verdict for the drawer count
///
/// `Unclassified` is the defined "no authoritative figure yet" state:
/// a zero or negative expected cash-to-bank means the sync has not
/// resolved (or the section has nothing to deposit) and must not be
/// reported as a false shortage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "diff", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BalanceVerdict {
    Unclassified,
    Balanced,
    Shortage(Decimal),
    Excess(Decimal),
}

impl BalanceVerdict {
    /// Shortage or excess amount in whole currency units, zero otherwise
    pub fn diff(&self) -> Decimal {
        match self {
            Self::Shortage(diff) | Self::Excess(diff) => *diff,
            Self::Unclassified | Self::Balanced => Decimal::ZERO,
        }
    }
}

/// Classify the drawer count against the expected deposit.
///
/// Pure and idempotent: identical inputs always yield the identical
/// verdict.
pub fn classify(physical_total: Decimal, expected_cash_to_bank: Decimal) -> BalanceVerdict {
    if expected_cash_to_bank <= Decimal::ZERO {
        return BalanceVerdict::Unclassified;
    }

    let rounded_physical = round_unit(physical_total);
    let rounded_expected = round_unit(expected_cash_to_bank);
    let diff = rounded_physical - rounded_expected;

    if diff.is_zero() {
        BalanceVerdict::Balanced
    } else if diff < Decimal::ZERO {
        BalanceVerdict::Shortage(-diff)
    } else {
        BalanceVerdict::Excess(diff)
    }
}
