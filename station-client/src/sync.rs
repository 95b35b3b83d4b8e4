//! Section-scoped figure synchronization
//!
//! Authoritative figures are fetched on load and on every section
//! change. Responses are correlated with the request's originating
//! section through a monotonically increasing generation: a response
//! whose generation has been superseded is discarded on arrival
//! (last-section-wins, not last-response-wins). Fetch failures retain
//! the last-known figures - staleness is acceptable, a frozen sheet is
//! not.

use rust_decimal::Decimal;
use shared::{AuthoritativeFigures, SectionKey};

use crate::StationApi;

/// Correlates an in-flight fetch with the sync state that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTicket {
    section: SectionKey,
    generation: u64,
}

impl SyncTicket {
    /// Section this fetch was issued for
    pub fn section(&self) -> SectionKey {
        self.section
    }
}

/// Resolution outcome for a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Figures merged into current state
    Applied,
    /// Response belonged to a superseded request and was discarded
    Stale,
}

/// Per-field fetch result
///
/// `None` marks a failed fetch for that figure; the last-known value is
/// retained on apply.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchedFigures {
    pub meter_total: Option<Decimal>,
    pub cash_to_bank: Option<Decimal>,
}

/// Sync state: active section, request generation, last-known figures
#[derive(Debug, Clone)]
pub struct SectionSync {
    section: SectionKey,
    generation: u64,
    figures: AuthoritativeFigures,
}

impl SectionSync {
    pub fn new(section: SectionKey) -> Self {
        Self {
            section,
            generation: 0,
            figures: AuthoritativeFigures::default(),
        }
    }

    /// Currently active section
    pub fn section(&self) -> SectionKey {
        self.section
    }

    /// Last-known authoritative figures (zero until a fetch resolves)
    pub fn figures(&self) -> AuthoritativeFigures {
        self.figures
    }

    /// Record a section (re-)selection and issue a ticket for its fetch.
    ///
    /// Bumping the generation here is what invalidates every fetch still
    /// in flight for a previous selection.
    pub fn begin(&mut self, section: SectionKey) -> SyncTicket {
        self.section = section;
        self.generation += 1;
        SyncTicket {
            section,
            generation: self.generation,
        }
    }

    /// Resolve a completed fetch against the current generation.
    pub fn apply(&mut self, ticket: SyncTicket, fetched: FetchedFigures) -> SyncOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                section = %ticket.section,
                "Discarding stale figures response"
            );
            return SyncOutcome::Stale;
        }

        if let Some(meter_total) = fetched.meter_total {
            self.figures.meter_total = meter_total;
        }
        if let Some(cash_to_bank) = fetched.cash_to_bank {
            self.figures.cash_to_bank = cash_to_bank;
        }
        SyncOutcome::Applied
    }
}

/// Fetch both authoritative figures for a section.
///
/// The two GETs run concurrently; each failure is logged and swallowed
/// (fail-silent per-figure), never surfaced to the attendant.
pub async fn fetch_figures(api: &dyn StationApi, section: SectionKey) -> FetchedFigures {
    let (meter_total, cash_to_bank) = tokio::join!(
        api.get_meter_total(section),
        api.get_cash_to_bank(section)
    );

    FetchedFigures {
        meter_total: meter_total
            .inspect_err(|e| tracing::warn!(section = %section, error = %e, "meter total fetch failed"))
            .ok(),
        cash_to_bank: cash_to_bank
            .inspect_err(|e| tracing::warn!(section = %section, error = %e, "cash-to-bank fetch failed"))
            .ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn fetched(meter: &str, cash: &str) -> FetchedFigures {
        FetchedFigures {
            meter_total: Some(d(meter)),
            cash_to_bank: Some(d(cash)),
        }
    }

    #[test]
    fn test_apply_merges_current_generation() {
        let mut sync = SectionSync::new(SectionKey::S1S2);
        let ticket = sync.begin(SectionKey::S1S2);
        assert_eq!(sync.apply(ticket, fetched("500", "410")), SyncOutcome::Applied);
        assert_eq!(sync.figures().meter_total, d("500"));
        assert_eq!(sync.figures().cash_to_bank, d("410"));
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut sync = SectionSync::new(SectionKey::S1S2);
        let ticket_a = sync.begin(SectionKey::S1S2);
        let ticket_b = sync.begin(SectionKey::S3S4);

        // B resolves first, then A arrives late.
        assert_eq!(sync.apply(ticket_b, fetched("300", "250")), SyncOutcome::Applied);
        assert_eq!(sync.apply(ticket_a, fetched("500", "410")), SyncOutcome::Stale);

        assert_eq!(sync.section(), SectionKey::S3S4);
        assert_eq!(sync.figures().meter_total, d("300"));
        assert_eq!(sync.figures().cash_to_bank, d("250"));
    }

    #[test]
    fn test_failed_fetch_retains_last_known() {
        let mut sync = SectionSync::new(SectionKey::S1S2);
        let ticket = sync.begin(SectionKey::S1S2);
        sync.apply(ticket, fetched("500", "410"));

        let ticket = sync.begin(SectionKey::S1S2);
        let outcome = sync.apply(
            ticket,
            FetchedFigures {
                meter_total: None,
                cash_to_bank: Some(d("420")),
            },
        );
        assert_eq!(outcome, SyncOutcome::Applied);
        assert_eq!(sync.figures().meter_total, d("500"));
        assert_eq!(sync.figures().cash_to_bank, d("420"));
    }

    #[test]
    fn test_reissuing_same_section_still_supersedes() {
        let mut sync = SectionSync::new(SectionKey::D1D4);
        let first = sync.begin(SectionKey::D1D4);
        let second = sync.begin(SectionKey::D1D4);
        assert_eq!(sync.apply(first, fetched("1", "1")), SyncOutcome::Stale);
        assert_eq!(sync.apply(second, fetched("2", "2")), SyncOutcome::Applied);
        assert_eq!(sync.figures().meter_total, d("2"));
    }
}
