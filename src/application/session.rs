//! Scenario Session - the orchestration surface for the presentation layer.
//!
//! One session owns one scenario: the editable fields, the derived request
//! document, and the run lifecycle against the simulation engine. All
//! mutation funnels through the named operations here; the state itself is
//! never handed out mutably.
//!
//! # Concurrency
//!
//! State lives behind a mutex that is only ever held for synchronous
//! bookkeeping, never across the transport await. The run-status state
//! machine is the single-flight guard: `run` only proceeds from `Idle`, so
//! at most one request is in flight per session, and a re-entrant call is
//! ignored. There is no cancellation; a run stays `Running` until the
//! transport resolves.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::scenario::{
    apply_preset, CompareDocument, ComparisonSummary, FieldInput, Preset, RequestDocument,
    ScenarioField, ScenarioState, SimulationSummary, ViewMode,
};
use crate::ports::SimulationEngine;

/// Facade over one scenario and its runs.
///
/// Cheap to clone; clones share the same scenario state and engine.
#[derive(Clone)]
pub struct ScenarioSession {
    state: Arc<Mutex<ScenarioState>>,
    engine: Arc<dyn SimulationEngine>,
}

impl ScenarioSession {
    /// Creates a session holding the baseline scenario.
    pub fn new(engine: Arc<dyn SimulationEngine>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ScenarioState::baseline())),
            engine,
        }
    }

    fn state(&self) -> MutexGuard<'_, ScenarioState> {
        self.state.lock().expect("scenario state lock poisoned")
    }

    /// Writes one field's raw value.
    pub fn set_field(&self, field: ScenarioField, value: impl Into<FieldInput>) {
        self.state().set(field, value);
    }

    /// Reads one field's raw value.
    pub fn field(&self, field: ScenarioField) -> FieldInput {
        self.state().input(field).clone()
    }

    /// Which screen the session is presenting.
    pub fn view_mode(&self) -> ViewMode {
        self.state().view_mode
    }

    /// Switches the presented screen.
    pub fn set_view_mode(&self, mode: ViewMode) {
        self.state().view_mode = mode;
    }

    /// Applies a named preset. Unknown names are ignored.
    pub fn apply_preset(&self, name: &str) {
        apply_preset(&mut self.state(), name);
    }

    /// The request document derived from the current fields.
    pub fn request_document(&self) -> RequestDocument {
        RequestDocument::from_state(&self.state())
    }

    /// The request document pretty-printed for the preview pane.
    pub fn preview_json(&self) -> String {
        serde_json::to_string_pretty(&self.request_document())
            .expect("request document serializes to JSON")
    }

    /// True while a run or comparison is in flight.
    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    /// Message of the most recent failed run, if the last run failed.
    pub fn last_error(&self) -> Option<String> {
        self.state().last_error().map(str::to_string)
    }

    /// Result of the most recent successful run.
    pub fn last_result(&self) -> Option<SimulationSummary> {
        self.state().last_result().cloned()
    }

    /// Result of the most recent successful comparison.
    pub fn last_comparison(&self) -> Option<ComparisonSummary> {
        self.state().last_comparison().cloned()
    }

    /// A copy of the full scenario state.
    pub fn snapshot(&self) -> ScenarioState {
        self.state().clone()
    }

    /// Runs one simulation of the current scenario.
    ///
    /// Entering the run clears any previous outcome; when the transport
    /// resolves, exactly one of the result and error slots is filled and
    /// the session is idle again. A call made while a run is already in
    /// flight is ignored and does not issue a second request.
    pub async fn run(&self) {
        let document = {
            let mut state = self.state();
            if let Err(error) = state.begin_run() {
                tracing::warn!(%error, "simulation already in flight; run ignored");
                return;
            }
            RequestDocument::from_state(&state)
        };

        match self.engine.simulate(&document).await {
            Ok(summary) => {
                tracing::info!(
                    probability_of_ruin = summary.probability_of_ruin,
                    "simulation run succeeded"
                );
                self.state().complete_run(summary);
            }
            Err(error) => {
                tracing::warn!(error = %error, "simulation run failed");
                self.state().fail_run(error.to_string());
            }
        }
    }

    /// Runs a comparison of the current scenario against preset variants.
    ///
    /// Shares the run lifecycle (and therefore the single-flight guard)
    /// with [`run`](Self::run); a successful comparison fills the
    /// comparison slot instead of the result slot.
    pub async fn run_comparison(&self, variants: &[Preset]) {
        let document = {
            let mut state = self.state();
            if let Err(error) = state.begin_run() {
                tracing::warn!(%error, "simulation already in flight; comparison ignored");
                return;
            }
            CompareDocument::from_presets(&state, variants)
        };

        match self.engine.compare(&document).await {
            Ok(comparison) => {
                tracing::info!(
                    scenarios = comparison.scenarios.len(),
                    "comparison run succeeded"
                );
                self.state().complete_comparison(comparison);
            }
            Err(error) => {
                tracing::warn!(error = %error, "comparison run failed");
                self.state().fail_run(error.to_string());
            }
        }
    }

    /// Probes whether the simulation service is reachable.
    pub async fn service_reachable(&self) -> bool {
        match self.engine.health().await {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(error = %error, "health probe failed");
                false
            }
        }
    }
}
