//! Parsed responses from the simulation service.

use serde::{Deserialize, Serialize};

/// Distribution summary of one Monte Carlo run.
///
/// The service promises the ruin probability; the percentile figures may be
/// absent, and the presenter substitutes a sentinel when they are. The
/// p10 <= median <= p90 ordering is the service's business and is not
/// re-verified here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Fraction of simulated paths that went insolvent, in [0, 1].
    pub probability_of_ruin: f64,
    /// 10th percentile of final net worth across paths.
    #[serde(default)]
    pub final_net_worth_p10: Option<f64>,
    /// Median final net worth across paths.
    #[serde(default)]
    pub final_net_worth_median: Option<f64>,
    /// 90th percentile of final net worth across paths.
    #[serde(default)]
    pub final_net_worth_p90: Option<f64>,
}

/// One named scenario's summary inside a comparison response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub summary: SimulationSummary,
}

/// Response of a baseline-versus-variants comparison.
///
/// The delta vectors are index-aligned with `scenarios` and carry each
/// variant's figure minus the baseline's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub baseline: ScenarioOutcome,
    pub scenarios: Vec<ScenarioOutcome>,
    #[serde(default)]
    pub delta_probability_of_ruin: Vec<f64>,
    #[serde(default)]
    pub delta_median_final_net_worth: Vec<f64>,
}
