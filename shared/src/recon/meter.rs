//! Meter Delta Calculator
//!
//! Converts opening/closing meter readings into liters sold and the
//! group's sale total. Super pairs deduct the GSA test draw; the diesel
//! quad deducts return-to-tank liters. Accumulation runs at full
//! precision; only the returned figures carry display rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::MeterGroup;
use crate::util::round_money;

/// Derived figures for one meter group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeterTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub liters_sold: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Liters sold at full precision (no display rounding, no clamping)
pub fn liters_sold(group: &MeterGroup) -> Decimal {
    group.gross_delta() - group.deduction()
}

/// Liters sold and sale total, rounded to 2 dp for display.
///
/// The total multiplies the full-precision liters figure before
/// rounding so repeated recomputation cannot compound rounding error.
pub fn meter_totals(group: &MeterGroup) -> MeterTotals {
    let liters = liters_sold(group);
    MeterTotals {
        liters_sold: round_money(liters),
        total: round_money(liters * group.unit_price()),
    }
}
