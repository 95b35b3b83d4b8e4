//! Data models
//!
//! Shared between the station client and the backend API surface.
//! Raw form types keep attendant entry as typed-but-unparsed text;
//! reading types are the parsed decimal view the engine computes over.

pub mod cash;
pub mod figures;
pub mod line_items;
pub mod meter;
pub mod section;

// Re-exports
pub use cash::*;
pub use figures::*;
pub use line_items::*;
pub use meter::*;
pub use section::*;
