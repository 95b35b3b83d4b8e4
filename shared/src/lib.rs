//! Shared types for the forecourt reconciliation workspace
//!
//! Domain models, the pure shift-closing computation engine, wire DTOs
//! for the station backend, and the lenient-decimal utilities the whole
//! workspace parses attendant input with.

pub mod api;
pub mod error;
pub mod models;
pub mod recon;
pub mod util;
pub mod validate;

// Re-exports
pub use error::{AppError, AppResult};
pub use models::{
    AuthoritativeFigures, CashClass, CollectionField, CreditField, DenominationCount,
    DieselMeterForm, DieselReading, LineItemSet, MeterGroup, PumpReading, SectionKey,
    SuperMeterForm, SuperReading,
};
pub use recon::{
    BalanceVerdict, CashTally, FinancialTotals, MeterTotals, ReconciliationResult,
};
