//! Backend API contract
//!
//! The four endpoints the reconciliation core depends on, behind a
//! trait so the orchestrator can be driven by the real HTTP client or
//! an in-process test double.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::SectionKey;
use shared::api::MeterReadingResponse;

use crate::ClientResult;

/// Station backend interface
#[async_trait]
pub trait StationApi: Send + Sync {
    /// Authoritative fuel-sale revenue for the section
    async fn get_meter_total(&self, section: SectionKey) -> ClientResult<Decimal>;

    /// Authoritative expected cash deposit for the section
    async fn get_cash_to_bank(&self, section: SectionKey) -> ClientResult<Decimal>;

    /// Prior-shift closing readings for use as this shift's openings
    async fn get_meter_reading(
        &self,
        date: NaiveDate,
        section: SectionKey,
    ) -> ClientResult<MeterReadingResponse>;

    /// Access-gate PIN check (no reconciliation semantics)
    async fn verify_pin(&self, pin: &str) -> ClientResult<bool>;
}
