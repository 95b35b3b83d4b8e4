//! Authoritative backend figures
//!
//! The meter total and expected cash-to-bank are server-computed per
//! section and fetched, never derived locally. Zero means "not yet
//! fetched / not applicable"; the classifier suppresses itself until a
//! positive expected figure arrives.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-confirmed figures for the active section
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthoritativeFigures {
    /// Fuel-sale revenue for the section's latest closing session
    #[serde(with = "crate::util::lenient_decimal")]
    pub meter_total: Decimal,
    /// Expected cash deposit the physical count is checked against
    #[serde(with = "crate::util::lenient_decimal")]
    pub cash_to_bank: Decimal,
}

impl AuthoritativeFigures {
    pub fn new(meter_total: Decimal, cash_to_bank: Decimal) -> Self {
        Self {
            meter_total,
            cash_to_bank,
        }
    }
}
