//! Financial Totals Aggregator
//!
//! Sums the credit and collection catalogs and derives the expected
//! cash-to-bank and grand total. The meter total comes exclusively from
//! the Section Sync Client; this module never computes it locally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LineItemSet;
use crate::util::{round_money, round_unit};

/// Aggregated money figures for one section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_credit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_collection: Decimal,
    /// Whole-unit rounded (cash-facing display policy)
    #[serde(with = "rust_decimal::serde::float")]
    pub expected_cash_to_bank: Decimal,
    /// Whole-unit rounded, folded from the already-rounded
    /// cash-to-bank figure - see note below
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
}

/// Aggregate line items against the server-confirmed meter total.
///
/// `expected_cash_to_bank = meter_total - total_credit + total_collection`:
/// cash owed equals fuel revenue less amounts captured electronically or
/// on credit, plus ancillary cash collections.
///
/// The grand total folds in the whole-unit-rounded cash-to-bank figure,
/// not the raw one, so it is not an algebraic identity of the three
/// operands. Legacy closing sheets were reconciled on that basis and
/// stakeholders have not signed off on changing it.
pub fn aggregate(items: &LineItemSet, meter_total: Decimal) -> FinancialTotals {
    let total_credit = round_money(items.total_credit());
    let total_collection = round_money(items.total_collection());

    let expected_cash_to_bank = round_unit(meter_total - total_credit + total_collection);
    let grand_total = round_unit(total_credit + total_collection + expected_cash_to_bank);

    FinancialTotals {
        total_credit,
        total_collection,
        expected_cash_to_bank,
        grand_total,
    }
}
