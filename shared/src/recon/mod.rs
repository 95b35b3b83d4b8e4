//! Shift-closing reconciliation engine
//!
//! Pure functions over explicit input structs: meter deltas, financial
//! aggregation, the physical cash tally, and the balance classifier.
//! The orchestrator in `station-client` wires these to input events and
//! backend figures; nothing in here does I/O or holds state.

pub mod aggregate;
pub mod classify;
pub mod meter;
pub mod tally;

pub use aggregate::{FinancialTotals, aggregate};
pub use classify::{BalanceVerdict, classify};
pub use meter::{MeterTotals, meter_totals};
pub use tally::{CashTally, tally};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuthoritativeFigures, DenominationCount, LineItemSet};

/// Full derived result for the active section
///
/// Recomputed from scratch on every relevant input change; never
/// persisted by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_credit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_collection: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expected_cash_to_bank: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub physical_total: Decimal,
    pub verdict: BalanceVerdict,
}

/// Compose the engine end to end for one section.
///
/// The aggregator consumes the server's meter total; the classifier
/// compares the drawer count against the server's cash-to-bank figure,
/// not the locally derived one.
pub fn reconcile(
    items: &LineItemSet,
    denominations: &[DenominationCount],
    figures: &AuthoritativeFigures,
) -> ReconciliationResult {
    let totals = aggregate(items, figures.meter_total);
    let cash = tally(denominations);
    let verdict = classify(cash.physical_total, figures.cash_to_bank);

    ReconciliationResult {
        total_credit: totals.total_credit,
        total_collection: totals.total_collection,
        expected_cash_to_bank: totals.expected_cash_to_bank,
        grand_total: totals.grand_total,
        physical_total: cash.physical_total,
        verdict,
    }
}
