//! Scenario model: user inputs, presets, wire documents, parsed outcomes.
//!
//! # Module Organization
//!
//! - `input` - Raw field capture with numeric coercion
//! - `state` - The scenario record owned by one session
//! - `presets` - Named scenario presets composed over the baseline
//! - `request` - Pure projection of the state into wire documents
//! - `outcome` - Parsed responses from the simulation service

mod input;
mod outcome;
mod presets;
mod request;
mod state;

pub use input::FieldInput;
pub use outcome::{ComparisonSummary, ScenarioOutcome, SimulationSummary};
pub use presets::{apply_preset, Preset};
pub use request::{
    AssumptionsDocument, CompareDocument, MonteCarloDocument, ProfileDocument, RequestDocument,
    SimulationMode, WireNumber,
};
pub use state::{
    AssumptionInputs, MonteCarloInputs, ProfileInputs, ScenarioField, ScenarioState, ViewMode,
};

/// Age the simulated profile starts at. The scenario screen does not expose
/// an age control; the service receives this fixed value.
pub const STARTING_AGE: u32 = 22;
