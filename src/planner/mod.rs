//! Trip planner controller.
//!
//! Owns the draft configuration, keeps validation and pricing in step with
//! every edit, persists the draft through a [`KeyValueStore`], and drives
//! the Editing / SummaryVisible workflow.
//!
//! Every mutating call re-derives validation and the price breakdown
//! before it returns; there is no intermediate state to observe.

pub mod snapshot;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{PlannerConfig, DEFAULT_STORAGE_KEY};
use crate::pricing::{
    compute_price, validate_config, BookingPreview, Destination, HotelType, PriceBreakdown,
    PriceSummary, TripField, ValidationResult,
};
use crate::storage::KeyValueStore;

pub use snapshot::{clamp_days, clamp_travelers, TripDraft, DEFAULT_DAYS, DEFAULT_TRAVELERS};

/// Which part of the planner is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WorkflowState {
    #[default]
    Editing,
    SummaryVisible,
}

/// Read-only snapshot of everything the presentation layer renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannerView {
    pub destination: Option<Destination>,
    pub days: i32,
    pub travelers: i32,
    pub hotel_type: Option<HotelType>,
    pub errors: BTreeMap<TripField, String>,
    pub is_valid: bool,
    pub breakdown: Option<PriceBreakdown>,
    pub workflow_state: WorkflowState,
    pub can_generate: bool,
}

/// Stateful controller behind the trip planner form
pub struct TripPlanner<S: KeyValueStore> {
    store: S,
    storage_key: String,
    draft: TripDraft,
    validation: ValidationResult,
    breakdown: Option<PriceBreakdown>,
    workflow: WorkflowState,
}

impl<S: KeyValueStore> TripPlanner<S> {
    /// Create a planner using the default storage key
    pub fn new(store: S) -> Self {
        Self::with_storage_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Create a planner using the key from `config`
    pub fn with_config(store: S, config: &PlannerConfig) -> Self {
        Self::with_storage_key(store, config.storage_key.clone())
    }

    /// Create a planner, restoring any draft saved under `storage_key`.
    ///
    /// A missing or unreadable snapshot falls back to defaults.
    pub fn with_storage_key(store: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let draft = restore_draft(&store, &storage_key);

        let mut planner = Self {
            store,
            storage_key,
            draft,
            validation: ValidationResult::default(),
            breakdown: None,
            workflow: WorkflowState::Editing,
        };
        planner.recompute();
        planner
    }

    pub fn draft(&self) -> &TripDraft {
        &self.draft
    }

    pub fn destination(&self) -> Option<Destination> {
        self.draft.destination
    }

    pub fn days(&self) -> i32 {
        self.draft.days
    }

    pub fn travelers(&self) -> i32 {
        self.draft.travelers
    }

    pub fn hotel_type(&self) -> Option<HotelType> {
        self.draft.hotel_type
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn errors(&self) -> &BTreeMap<TripField, String> {
        &self.validation.errors
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    pub fn breakdown(&self) -> Option<&PriceBreakdown> {
        self.breakdown.as_ref()
    }

    pub fn workflow_state(&self) -> WorkflowState {
        self.workflow
    }

    pub fn is_summary_visible(&self) -> bool {
        self.workflow == WorkflowState::SummaryVisible
    }

    /// Whether `generate` would show the summary
    pub fn can_generate(&self) -> bool {
        self.validation.is_valid && self.breakdown.is_some()
    }

    pub fn set_destination(&mut self, destination: Destination) {
        self.draft.destination = Some(destination);
        self.after_edit();
    }

    /// Store the day count, clamped into 1..=10
    pub fn set_days(&mut self, days: i32) {
        self.draft.days = clamp_days(days);
        self.after_edit();
    }

    /// Store the traveler count, clamped into 1..=6
    pub fn set_travelers(&mut self, travelers: i32) {
        self.draft.travelers = clamp_travelers(travelers);
        self.after_edit();
    }

    pub fn set_hotel_type(&mut self, hotel_type: HotelType) {
        self.draft.hotel_type = Some(hotel_type);
        self.after_edit();
    }

    /// Show the booking summary. No-op unless the draft is valid and priced.
    pub fn generate(&mut self) {
        if self.can_generate() {
            self.workflow = WorkflowState::SummaryVisible;
            debug!(draft = ?self.draft, "Trip plan generated");
        } else {
            debug!("Generate ignored, draft is incomplete");
        }
    }

    /// Return to editing (the search button)
    pub fn search(&mut self) {
        self.workflow = WorkflowState::Editing;
    }

    pub fn close_summary(&mut self) {
        self.workflow = WorkflowState::Editing;
    }

    /// Restore defaults and forget the saved draft
    pub fn reset(&mut self) {
        self.draft = TripDraft::default();
        // Untouched form: no messages yet, nothing to generate
        self.validation = ValidationResult::default();
        self.breakdown = None;
        self.workflow = WorkflowState::Editing;

        if let Err(e) = self.store.remove(&self.storage_key) {
            warn!("Failed to clear saved trip config: {}", e);
        }
        info!("Trip planner reset");
    }

    pub fn view(&self) -> PlannerView {
        PlannerView {
            destination: self.draft.destination,
            days: self.draft.days,
            travelers: self.draft.travelers,
            hotel_type: self.draft.hotel_type,
            errors: self.validation.errors.clone(),
            is_valid: self.validation.is_valid,
            breakdown: self.breakdown.clone(),
            workflow_state: self.workflow,
            can_generate: self.can_generate(),
        }
    }

    /// Line items for the price card, while the draft is priced
    pub fn price_summary(&self) -> Option<PriceSummary> {
        if !self.validation.is_valid {
            return None;
        }
        let breakdown = self.breakdown.as_ref()?;
        Some(PriceSummary::from_breakdown(breakdown, self.draft.days))
    }

    /// Booking preview, only while the summary is showing
    pub fn booking_preview(&self) -> Option<BookingPreview> {
        if !self.is_summary_visible() {
            return None;
        }
        let config = self.draft.complete()?;
        let breakdown = self.breakdown.as_ref()?;
        Some(BookingPreview::new(&config, breakdown))
    }

    /// Give back the storage backend
    pub fn into_store(self) -> S {
        self.store
    }

    fn after_edit(&mut self) {
        self.workflow = WorkflowState::Editing;
        self.persist();
        self.recompute();
    }

    fn recompute(&mut self) {
        let validation = validate_config(&self.draft.as_partial());

        self.breakdown = match self.draft.complete() {
            Some(config) if validation.is_valid => Some(compute_price(&config)),
            _ => None,
        };
        self.validation = validation;

        debug!(
            is_valid = self.validation.is_valid,
            final_price = ?self.breakdown.as_ref().map(|b| b.final_price),
            "Trip draft recomputed"
        );
    }

    fn persist(&self) {
        let encoded = match self.draft.encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode trip config: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.storage_key, &encoded) {
            warn!("Failed to save trip config: {}", e);
        }
    }
}

fn restore_draft<S: KeyValueStore>(store: &S, key: &str) -> TripDraft {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return TripDraft::default(),
        Err(e) => {
            warn!("Failed to read saved trip config: {}", e);
            return TripDraft::default();
        }
    };

    match TripDraft::decode(&raw) {
        Ok(draft) => {
            info!(draft = ?draft, "Restored saved trip config");
            draft
        }
        Err(e) => {
            warn!("Failed to load saved trip config: {}", e);
            TripDraft::default()
        }
    }
}
