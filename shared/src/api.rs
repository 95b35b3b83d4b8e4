//! Wire contracts for the station backend
//!
//! Response shapes for the four endpoints the client consumes. Decimal
//! fields are lenient on the wire: numbers or numeric strings are
//! accepted, anything else becomes zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /get_meter_total?section=<SectionKey>`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeterTotalResponse {
    #[serde(with = "crate::util::lenient_decimal")]
    pub meter_total: Decimal,
}

/// `GET /get_cash_to_bank?section=<SectionKey>`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CashToBankResponse {
    #[serde(with = "crate::util::lenient_decimal")]
    pub cash_to_bank: Decimal,
}

/// `GET /get_meter_reading?date=<date>&section=<SectionKey>`
///
/// Supplies the prior shift's closing readings as this shift's opening
/// readings. Which opening fields are present depends on the section;
/// on `success: false` only `message` is populated and the caller
/// leaves its form untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeterReadingResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    // Super sections (S1S2 / S3S4)
    #[serde(
        default,
        with = "crate::util::lenient_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub super_1_opening: Option<Decimal>,
    #[serde(
        default,
        with = "crate::util::lenient_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub super_2_opening: Option<Decimal>,

    // Diesel section (D1D4)
    #[serde(
        default,
        with = "crate::util::lenient_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub d1_opening: Option<Decimal>,
    #[serde(
        default,
        with = "crate::util::lenient_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub d2_opening: Option<Decimal>,
    #[serde(
        default,
        with = "crate::util::lenient_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub d3_opening: Option<Decimal>,
    #[serde(
        default,
        with = "crate::util::lenient_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub d4_opening: Option<Decimal>,
}

impl MeterReadingResponse {
    /// Failure response carrying only the server message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

/// `POST /verify_pin` form body (access-gate collaborator)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinVerifyRequest {
    pub pin: String,
    pub csrf_token: String,
}

/// `POST /verify_pin` response
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PinVerifyResponse {
    pub valid: bool,
}
