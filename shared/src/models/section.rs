//! Shift section keys
//!
//! A section is the active reconciliation scope: one of the two super
//! pump-pairs, the diesel quad, or the stock step. The key drives which
//! authoritative backend figures apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Active shift-reconciliation scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SectionKey {
    /// Super pumps 1 & 2
    #[default]
    #[serde(rename = "S1S2")]
    S1S2,
    /// Super pumps 3 & 4
    #[serde(rename = "S3S4")]
    S3S4,
    /// Diesel pumps 1-4
    #[serde(rename = "D1D4")]
    D1D4,
    /// Stock step (no meter group attached)
    #[serde(rename = "STOCK")]
    Stock,
}

impl SectionKey {
    /// All sections, in wizard-step order
    pub const ALL: [SectionKey; 4] = [Self::S1S2, Self::S3S4, Self::D1D4, Self::Stock];

    /// Backend query-parameter value for this section
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S1S2 => "S1S2",
            Self::S3S4 => "S3S4",
            Self::D1D4 => "D1D4",
            Self::Stock => "STOCK",
        }
    }

    /// Whether the section carries a fuel meter group at all
    pub fn has_meter_group(&self) -> bool {
        !matches!(self, Self::Stock)
    }

    /// Whether the section is the diesel pump-group
    pub fn is_diesel(&self) -> bool {
        matches!(self, Self::D1D4)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = AppError;

    // Case-insensitive: the backend compares sections uppercased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S1S2" => Ok(Self::S1S2),
            "S3S4" => Ok(Self::S3S4),
            "D1D4" => Ok(Self::D1D4),
            "STOCK" => Ok(Self::Stock),
            other => Err(AppError::invalid(format!("Unknown section: {other}"))),
        }
    }
}
