//! Pure projection of scenario state into wire documents.
//!
//! Building a document never fails and never mutates: every field is coerced
//! to a number, and a coercion failure rides along as a null on the wire for
//! the service to reject. The projection reads only the three input blocks,
//! so two states that agree on those produce structurally equal documents no
//! matter what their run slots hold.

use serde::{Serialize, Serializer};

use super::presets::Preset;
use super::state::ScenarioState;
use super::STARTING_AGE;

/// A coerced numeric value as it appears on the wire.
///
/// Serializes integral values as JSON integers and everything else as a
/// float, except that a non-finite value (the coercion-failure marker)
/// becomes `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireNumber(f64);

impl WireNumber {
    /// The coerced value; NaN when the raw input did not parse.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl From<f64> for WireNumber {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Serialize for WireNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.0;
        if !value.is_finite() {
            serializer.serialize_unit()
        } else if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Discriminator for the service's simulation modes. The scenario screen
/// only drives Monte Carlo; the field exists on the wire for other modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    MonteCarlo,
}

/// `profile` block of the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileDocument {
    pub age: WireNumber,
    pub start_cash: WireNumber,
    pub start_investments: WireNumber,
    pub start_debt: WireNumber,
    pub monthly_income: WireNumber,
    pub rent: WireNumber,
    pub groceries: WireNumber,
    pub transport: WireNumber,
    pub subscriptions: WireNumber,
    pub misc: WireNumber,
}

/// `assumptions` block of the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssumptionsDocument {
    pub years: WireNumber,
    pub annual_return: WireNumber,
    pub annual_income_growth: WireNumber,
    pub annual_inflation: WireNumber,
    pub annual_debt_interest: WireNumber,
    pub monthly_debt_payment: WireNumber,
    pub invest_rate: WireNumber,
}

/// `monte_carlo` block of the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloDocument {
    pub simulations: WireNumber,
    pub return_volatility_annual: WireNumber,
    pub seed: WireNumber,
}

/// The immutable request payload for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDocument {
    pub profile: ProfileDocument,
    pub assumptions: AssumptionsDocument,
    pub mode: SimulationMode,
    pub monte_carlo: MonteCarloDocument,
}

impl RequestDocument {
    /// Projects the state's input fields into a request document.
    pub fn from_state(state: &ScenarioState) -> Self {
        let profile = &state.profile;
        let assumptions = &state.assumptions;
        let monte_carlo = &state.monte_carlo;

        Self {
            profile: ProfileDocument {
                age: WireNumber::from(f64::from(STARTING_AGE)),
                start_cash: WireNumber::from(profile.start_cash.as_number()),
                start_investments: WireNumber::from(profile.start_investments.as_number()),
                start_debt: WireNumber::from(profile.start_debt.as_number()),
                monthly_income: WireNumber::from(profile.monthly_income.as_number()),
                rent: WireNumber::from(profile.rent.as_number()),
                groceries: WireNumber::from(profile.groceries.as_number()),
                transport: WireNumber::from(profile.transport.as_number()),
                subscriptions: WireNumber::from(profile.subscriptions.as_number()),
                misc: WireNumber::from(profile.misc.as_number()),
            },
            assumptions: AssumptionsDocument {
                years: WireNumber::from(assumptions.years.as_number()),
                annual_return: WireNumber::from(assumptions.annual_return.as_number()),
                annual_income_growth: WireNumber::from(
                    assumptions.annual_income_growth.as_number(),
                ),
                annual_inflation: WireNumber::from(assumptions.annual_inflation.as_number()),
                annual_debt_interest: WireNumber::from(
                    assumptions.annual_debt_interest.as_number(),
                ),
                monthly_debt_payment: WireNumber::from(
                    assumptions.monthly_debt_payment.as_number(),
                ),
                invest_rate: WireNumber::from(assumptions.invest_rate.as_number()),
            },
            mode: SimulationMode::MonteCarlo,
            monte_carlo: MonteCarloDocument {
                simulations: WireNumber::from(monte_carlo.simulations.as_number()),
                return_volatility_annual: WireNumber::from(
                    monte_carlo.return_volatility_annual.as_number(),
                ),
                seed: WireNumber::from(monte_carlo.seed.as_number()),
            },
        }
    }
}

/// Request payload for a baseline-versus-variants comparison.
///
/// The baseline is the scenario as currently edited; each variant is a full
/// preset scenario (presets are absolute, so a variant does not inherit the
/// current edits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareDocument {
    pub baseline: RequestDocument,
    pub scenarios: Vec<RequestDocument>,
}

impl CompareDocument {
    /// Builds a comparison of the current scenario against preset variants.
    pub fn from_presets(state: &ScenarioState, variants: &[Preset]) -> Self {
        let scenarios = variants
            .iter()
            .map(|preset| {
                let mut variant = state.clone();
                preset.apply_to(&mut variant);
                RequestDocument::from_state(&variant)
            })
            .collect();

        Self {
            baseline: RequestDocument::from_state(state),
            scenarios,
        }
    }
}
