//! Station Client - backend sync for shift-closing reconciliation
//!
//! Provides the HTTP client for the station backend's section-scoped
//! figures, the stale-response-safe sync state, and the stateful
//! orchestrator that wires attendant input to the engine in `shared`.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod sync;

pub use api::StationApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use orchestrator::{Reconciliation, SectionMeterTotals};
pub use sync::{FetchedFigures, SectionSync, SyncOutcome, SyncTicket, fetch_figures};

// Re-export shared types for convenience
pub use shared::{AuthoritativeFigures, BalanceVerdict, ReconciliationResult, SectionKey};
