//! Reconciliation orchestrator
//!
//! The only stateful component: owns the three meter forms, the
//! credit/collection sheet, the counted drawer, and the section sync
//! state. Derived figures are recomputed from scratch on demand -
//! nothing is cached, so a figure arriving after the attendant has
//! already typed values is reflected by the next `result()`.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::recon::{self, MeterTotals, ReconciliationResult, meter_totals};
use shared::validate::validate_super_form;
use shared::{
    AppError, AppResult, AuthoritativeFigures, DenominationCount, DieselMeterForm, LineItemSet,
    SectionKey, SuperMeterForm,
};

use crate::sync::{FetchedFigures, SectionSync, SyncOutcome, SyncTicket, fetch_figures};
use crate::{ClientResult, StationApi};

/// Meter Delta Calculator output for all three groups
///
/// The groups are independent instances with no shared state; they are
/// bundled here only for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionMeterTotals {
    pub s1s2: MeterTotals,
    pub s3s4: MeterTotals,
    pub d1d4: MeterTotals,
}

/// Shift-closing reconciliation state for one attendant session
pub struct Reconciliation {
    api: Arc<dyn StationApi>,
    sync: SectionSync,
    s1s2: SuperMeterForm,
    s3s4: SuperMeterForm,
    d1d4: DieselMeterForm,
    line_items: LineItemSet,
    denominations: Vec<DenominationCount>,
}

impl Reconciliation {
    /// Create an orchestrator starting on the default section.
    ///
    /// No fetch is issued here; call [`Self::sync_now`] once the event
    /// loop is running (the "initial load" fetch).
    pub fn new(api: Arc<dyn StationApi>) -> Self {
        Self {
            api,
            sync: SectionSync::new(SectionKey::default()),
            s1s2: SuperMeterForm::default(),
            s3s4: SuperMeterForm::default(),
            d1d4: DieselMeterForm::default(),
            line_items: LineItemSet::new(),
            denominations: Vec::new(),
        }
    }

    /// Currently active section
    pub fn section(&self) -> SectionKey {
        self.sync.section()
    }

    /// Last-known authoritative figures
    pub fn figures(&self) -> AuthoritativeFigures {
        self.sync.figures()
    }

    // ========== Input state ==========

    pub fn s1s2_mut(&mut self) -> &mut SuperMeterForm {
        &mut self.s1s2
    }

    pub fn s3s4_mut(&mut self) -> &mut SuperMeterForm {
        &mut self.s3s4
    }

    pub fn d1d4_mut(&mut self) -> &mut DieselMeterForm {
        &mut self.d1d4
    }

    pub fn line_items_mut(&mut self) -> &mut LineItemSet {
        &mut self.line_items
    }

    /// Replace the counted drawer
    pub fn set_denominations(&mut self, denominations: Vec<DenominationCount>) {
        self.denominations = denominations;
    }

    // ========== Derived state ==========

    /// Liters sold and sale totals per meter group
    pub fn meter_totals(&self) -> SectionMeterTotals {
        SectionMeterTotals {
            s1s2: meter_totals(&self.s1s2.group()),
            s3s4: meter_totals(&self.s3s4.group()),
            d1d4: meter_totals(&self.d1d4.group()),
        }
    }

    /// Full reconciliation result from current inputs and figures
    pub fn result(&self) -> ReconciliationResult {
        recon::reconcile(&self.line_items, &self.denominations, &self.sync.figures())
    }

    // ========== Section sync ==========

    /// Record a section selection and issue a ticket for its fetch.
    ///
    /// Split from [`Self::apply_fetch`] so callers driving their own
    /// event loop can correlate late responses; [`Self::sync_now`] and
    /// [`Self::switch_section`] wrap the whole round trip.
    pub fn begin_section(&mut self, section: SectionKey) -> SyncTicket {
        self.sync.begin(section)
    }

    /// Resolve a completed figures fetch
    pub fn apply_fetch(&mut self, ticket: SyncTicket, fetched: FetchedFigures) -> SyncOutcome {
        self.sync.apply(ticket, fetched)
    }

    /// Re-fetch figures for the active section and recompute
    pub async fn sync_now(&mut self) -> ReconciliationResult {
        let section = self.sync.section();
        self.refresh(section).await
    }

    /// Switch the active section, fetch its figures, and recompute
    pub async fn switch_section(&mut self, section: SectionKey) -> ReconciliationResult {
        self.refresh(section).await
    }

    async fn refresh(&mut self, section: SectionKey) -> ReconciliationResult {
        let ticket = self.sync.begin(section);
        let fetched = fetch_figures(self.api.as_ref(), ticket.section()).await;
        self.sync.apply(ticket, fetched);
        self.result()
    }

    // ========== Prior-shift opening prefill ==========

    /// Copy the prior shift's closing readings into the active form's
    /// opening fields.
    ///
    /// On a `success: false` response the server message is surfaced
    /// and the form is left untouched.
    pub async fn load_opening_readings(&mut self, date: NaiveDate) -> AppResult<()> {
        let section = self.sync.section();
        if !section.has_meter_group() {
            return Err(AppError::invalid(format!(
                "Section {section} has no meter readings"
            )));
        }

        let resp = self
            .api
            .get_meter_reading(date, section)
            .await
            .map_err(|e| AppError::lookup(e.to_string()))?;

        if !resp.success {
            let message = resp.message.unwrap_or_else(|| {
                format!("No meter data found for {section} on that date.")
            });
            return Err(AppError::lookup(message));
        }

        if section.is_diesel() {
            let form = &mut self.d1d4;
            copy_opening(&mut form.d1_opening, resp.d1_opening);
            copy_opening(&mut form.d2_opening, resp.d2_opening);
            copy_opening(&mut form.d3_opening, resp.d3_opening);
            copy_opening(&mut form.d4_opening, resp.d4_opening);
        } else {
            let form = match section {
                SectionKey::S3S4 => &mut self.s3s4,
                _ => &mut self.s1s2,
            };
            copy_opening(&mut form.pump1_opening, resp.super_1_opening);
            copy_opening(&mut form.pump2_opening, resp.super_2_opening);
        }
        Ok(())
    }

    // ========== Submission ==========

    /// Validate the super forms before submission; first violation wins.
    pub fn validate_submission(&self) -> AppResult<()> {
        validate_super_form(&self.s1s2, ["S1", "S2"])?;
        validate_super_form(&self.s3s4, ["S3", "S4"])?;
        Ok(())
    }

    /// Access-gate PIN check (pass-through to the backend)
    pub async fn verify_pin(&self, pin: &str) -> ClientResult<bool> {
        self.api.verify_pin(pin).await
    }
}

// Normalized so a float round trip over the wire cannot leave a
// trailing ".0" in the attendant's field.
fn copy_opening(field: &mut Option<String>, value: Option<rust_decimal::Decimal>) {
    if let Some(value) = value {
        *field = Some(value.normalize().to_string());
    }
}
