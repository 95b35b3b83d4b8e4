//! Physical cash denominations
//!
//! Paper notes and coins are counted separately; each entry is a
//! denomination value times a non-negative whole quantity. Quantity is
//! validated at this boundary - the engine never sees a negative or
//! fractional count.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Denomination class - paper notes and coins are tallied independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashClass {
    Paper,
    Coin,
}

/// One counted denomination in the physical drawer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DenominationCount {
    /// Face value of the note or coin
    #[serde(with = "rust_decimal::serde::float")]
    pub denom_value: Decimal,
    /// Counted quantity
    pub quantity: u32,
    pub class: CashClass,
}

impl DenominationCount {
    pub fn new(denom_value: Decimal, quantity: u32, class: CashClass) -> Self {
        Self {
            denom_value,
            quantity,
            class,
        }
    }

    /// Build from a raw quantity entry.
    ///
    /// Empty or non-numeric text counts as zero (same leniency as the
    /// rest of the sheet), but an explicit negative or fractional
    /// quantity is a rejected entry, not a coerced one.
    pub fn from_raw(denom_value: Decimal, raw_quantity: &str, class: CashClass) -> AppResult<Self> {
        let trimmed = raw_quantity.trim();
        if trimmed.is_empty() {
            return Ok(Self::new(denom_value, 0, class));
        }
        if let Ok(qty) = trimmed.parse::<i64>() {
            let qty = u32::try_from(qty)
                .map_err(|_| AppError::validation("Denomination quantity cannot be negative."))?;
            return Ok(Self::new(denom_value, qty, class));
        }
        if trimmed.parse::<f64>().is_ok() {
            return Err(AppError::validation(
                "Denomination quantity must be a whole number.",
            ));
        }
        Ok(Self::new(denom_value, 0, class))
    }

    /// Contribution to the drawer total
    pub fn amount(&self) -> Decimal {
        self.denom_value * Decimal::from(self.quantity)
    }
}
