//! The scenario record owned by one session.

use crate::domain::run::{RunStatus, StateMachine, TransitionError};

use super::input::FieldInput;
use super::outcome::{ComparisonSummary, SimulationSummary};

/// The user-editable fields of a scenario.
///
/// `age` is deliberately absent: it is fixed at
/// [`STARTING_AGE`](super::STARTING_AGE) and not exposed as a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioField {
    StartCash,
    StartInvestments,
    StartDebt,
    MonthlyIncome,
    Rent,
    Groceries,
    Transport,
    Subscriptions,
    Misc,
    Years,
    AnnualReturn,
    AnnualIncomeGrowth,
    AnnualInflation,
    AnnualDebtInterest,
    MonthlyDebtPayment,
    InvestRate,
    Simulations,
    ReturnVolatilityAnnual,
    Seed,
}

impl ScenarioField {
    /// Every editable field, in document order.
    pub const ALL: [ScenarioField; 19] = [
        ScenarioField::StartCash,
        ScenarioField::StartInvestments,
        ScenarioField::StartDebt,
        ScenarioField::MonthlyIncome,
        ScenarioField::Rent,
        ScenarioField::Groceries,
        ScenarioField::Transport,
        ScenarioField::Subscriptions,
        ScenarioField::Misc,
        ScenarioField::Years,
        ScenarioField::AnnualReturn,
        ScenarioField::AnnualIncomeGrowth,
        ScenarioField::AnnualInflation,
        ScenarioField::AnnualDebtInterest,
        ScenarioField::MonthlyDebtPayment,
        ScenarioField::InvestRate,
        ScenarioField::Simulations,
        ScenarioField::ReturnVolatilityAnnual,
        ScenarioField::Seed,
    ];

    /// Wire-style name of the field, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioField::StartCash => "start_cash",
            ScenarioField::StartInvestments => "start_investments",
            ScenarioField::StartDebt => "start_debt",
            ScenarioField::MonthlyIncome => "monthly_income",
            ScenarioField::Rent => "rent",
            ScenarioField::Groceries => "groceries",
            ScenarioField::Transport => "transport",
            ScenarioField::Subscriptions => "subscriptions",
            ScenarioField::Misc => "misc",
            ScenarioField::Years => "years",
            ScenarioField::AnnualReturn => "annual_return",
            ScenarioField::AnnualIncomeGrowth => "annual_income_growth",
            ScenarioField::AnnualInflation => "annual_inflation",
            ScenarioField::AnnualDebtInterest => "annual_debt_interest",
            ScenarioField::MonthlyDebtPayment => "monthly_debt_payment",
            ScenarioField::InvestRate => "invest_rate",
            ScenarioField::Simulations => "simulations",
            ScenarioField::ReturnVolatilityAnnual => "return_volatility_annual",
            ScenarioField::Seed => "seed",
        }
    }
}

/// Starting financial position and monthly cashflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInputs {
    pub start_cash: FieldInput,
    pub start_investments: FieldInput,
    pub start_debt: FieldInput,
    pub monthly_income: FieldInput,
    pub rent: FieldInput,
    pub groceries: FieldInput,
    pub transport: FieldInput,
    pub subscriptions: FieldInput,
    pub misc: FieldInput,
}

impl Default for ProfileInputs {
    fn default() -> Self {
        Self {
            start_cash: FieldInput::from(5000.0),
            start_investments: FieldInput::from(0.0),
            start_debt: FieldInput::from(0.0),
            monthly_income: FieldInput::from(3000.0),
            rent: FieldInput::from(1200.0),
            groceries: FieldInput::from(350.0),
            transport: FieldInput::from(250.0),
            subscriptions: FieldInput::from(40.0),
            misc: FieldInput::from(200.0),
        }
    }
}

/// Macro assumptions the simulated world runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumptionInputs {
    pub years: FieldInput,
    pub annual_return: FieldInput,
    pub annual_income_growth: FieldInput,
    pub annual_inflation: FieldInput,
    pub annual_debt_interest: FieldInput,
    pub monthly_debt_payment: FieldInput,
    /// Fraction of free cash flow diverted to investment. The service
    /// expects [0, 1]; this layer does not enforce it.
    pub invest_rate: FieldInput,
}

impl Default for AssumptionInputs {
    fn default() -> Self {
        Self {
            years: FieldInput::from(30.0),
            annual_return: FieldInput::from(0.06),
            annual_income_growth: FieldInput::from(0.03),
            annual_inflation: FieldInput::from(0.02),
            annual_debt_interest: FieldInput::from(0.05),
            monthly_debt_payment: FieldInput::from(0.0),
            invest_rate: FieldInput::from(1.0),
        }
    }
}

/// Stochastic simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonteCarloInputs {
    pub simulations: FieldInput,
    pub return_volatility_annual: FieldInput,
    /// Deterministic-replay key for the service's random number generator.
    pub seed: FieldInput,
}

impl Default for MonteCarloInputs {
    fn default() -> Self {
        Self {
            simulations: FieldInput::from(1000.0),
            return_volatility_annual: FieldInput::from(0.15),
            seed: FieldInput::from(42.0),
        }
    }
}

/// Which screen the session is presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Single-scenario simulation.
    #[default]
    Simulate,
    /// Baseline-versus-variants comparison.
    Compare,
}

/// The full mutable scenario record: the three input blocks plus the
/// volatile run slots.
///
/// One session owns one `ScenarioState`; independent scenario editors get
/// independent instances. Input fields change through [`set`](Self::set)
/// and presets; the run slots change only through the run lifecycle methods,
/// which the session drives around a request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScenarioState {
    pub profile: ProfileInputs,
    pub assumptions: AssumptionInputs,
    pub monte_carlo: MonteCarloInputs,
    pub view_mode: ViewMode,
    status: RunStatus,
    last_error: Option<String>,
    last_result: Option<SimulationSummary>,
    last_comparison: Option<ComparisonSummary>,
}

impl ScenarioState {
    /// Creates a state holding the baseline scenario.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Writes one field's raw value.
    pub fn set(&mut self, field: ScenarioField, value: impl Into<FieldInput>) {
        *self.input_mut(field) = value.into();
    }

    /// Reads one field's raw value.
    pub fn input(&self, field: ScenarioField) -> &FieldInput {
        match field {
            ScenarioField::StartCash => &self.profile.start_cash,
            ScenarioField::StartInvestments => &self.profile.start_investments,
            ScenarioField::StartDebt => &self.profile.start_debt,
            ScenarioField::MonthlyIncome => &self.profile.monthly_income,
            ScenarioField::Rent => &self.profile.rent,
            ScenarioField::Groceries => &self.profile.groceries,
            ScenarioField::Transport => &self.profile.transport,
            ScenarioField::Subscriptions => &self.profile.subscriptions,
            ScenarioField::Misc => &self.profile.misc,
            ScenarioField::Years => &self.assumptions.years,
            ScenarioField::AnnualReturn => &self.assumptions.annual_return,
            ScenarioField::AnnualIncomeGrowth => &self.assumptions.annual_income_growth,
            ScenarioField::AnnualInflation => &self.assumptions.annual_inflation,
            ScenarioField::AnnualDebtInterest => &self.assumptions.annual_debt_interest,
            ScenarioField::MonthlyDebtPayment => &self.assumptions.monthly_debt_payment,
            ScenarioField::InvestRate => &self.assumptions.invest_rate,
            ScenarioField::Simulations => &self.monte_carlo.simulations,
            ScenarioField::ReturnVolatilityAnnual => &self.monte_carlo.return_volatility_annual,
            ScenarioField::Seed => &self.monte_carlo.seed,
        }
    }

    /// Reads one field coerced to a number.
    pub fn number(&self, field: ScenarioField) -> f64 {
        self.input(field).as_number()
    }

    fn input_mut(&mut self, field: ScenarioField) -> &mut FieldInput {
        match field {
            ScenarioField::StartCash => &mut self.profile.start_cash,
            ScenarioField::StartInvestments => &mut self.profile.start_investments,
            ScenarioField::StartDebt => &mut self.profile.start_debt,
            ScenarioField::MonthlyIncome => &mut self.profile.monthly_income,
            ScenarioField::Rent => &mut self.profile.rent,
            ScenarioField::Groceries => &mut self.profile.groceries,
            ScenarioField::Transport => &mut self.profile.transport,
            ScenarioField::Subscriptions => &mut self.profile.subscriptions,
            ScenarioField::Misc => &mut self.profile.misc,
            ScenarioField::Years => &mut self.assumptions.years,
            ScenarioField::AnnualReturn => &mut self.assumptions.annual_return,
            ScenarioField::AnnualIncomeGrowth => &mut self.assumptions.annual_income_growth,
            ScenarioField::AnnualInflation => &mut self.assumptions.annual_inflation,
            ScenarioField::AnnualDebtInterest => &mut self.assumptions.annual_debt_interest,
            ScenarioField::MonthlyDebtPayment => &mut self.assumptions.monthly_debt_payment,
            ScenarioField::InvestRate => &mut self.assumptions.invest_rate,
            ScenarioField::Simulations => &mut self.monte_carlo.simulations,
            ScenarioField::ReturnVolatilityAnnual => &mut self.monte_carlo.return_volatility_annual,
            ScenarioField::Seed => &mut self.monte_carlo.seed,
        }
    }

    /// Resets the three input blocks to the baseline scenario.
    ///
    /// Leaves the view mode and run slots untouched.
    pub(crate) fn reset_inputs(&mut self) {
        self.profile = ProfileInputs::default();
        self.assumptions = AssumptionInputs::default();
        self.monte_carlo = MonteCarloInputs::default();
    }

    /// Current run lifecycle status.
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// True while a request is in flight.
    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Message of the most recent failed run, if the last run failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Result of the most recent successful run, if the last run succeeded.
    pub fn last_result(&self) -> Option<&SimulationSummary> {
        self.last_result.as_ref()
    }

    /// Result of the most recent successful comparison, if the last run was
    /// a comparison and succeeded.
    pub fn last_comparison(&self) -> Option<&ComparisonSummary> {
        self.last_comparison.as_ref()
    }

    /// Clears every run outcome slot. A preset switch invalidates any
    /// prior run, and a starting run clears the slate the same way.
    pub(crate) fn clear_run_outcome(&mut self) {
        self.last_error = None;
        self.last_result = None;
        self.last_comparison = None;
    }

    /// Moves to `Running` and clears the outcome slots.
    ///
    /// Fails when a run is already in flight; the caller must not issue a
    /// second request in that case.
    pub(crate) fn begin_run(&mut self) -> Result<(), TransitionError> {
        self.status = self.status.transition_to(RunStatus::Running)?;
        self.clear_run_outcome();
        Ok(())
    }

    /// Records a successful simulation and settles back to `Idle`.
    pub(crate) fn complete_run(&mut self, summary: SimulationSummary) {
        self.last_result = Some(summary);
        self.settle(RunStatus::Succeeded);
    }

    /// Records a successful comparison and settles back to `Idle`.
    pub(crate) fn complete_comparison(&mut self, comparison: ComparisonSummary) {
        self.last_comparison = Some(comparison);
        self.settle(RunStatus::Succeeded);
    }

    /// Records a failed run and settles back to `Idle`.
    pub(crate) fn fail_run(&mut self, message: String) {
        self.last_error = Some(message);
        self.settle(RunStatus::Failed);
    }

    fn settle(&mut self, terminal: RunStatus) {
        // Terminal states are passed through synchronously; only the session
        // holding the lock ever observes them.
        debug_assert!(self.status.can_transition_to(&terminal));
        self.status = terminal;
        self.status = RunStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SimulationSummary {
        SimulationSummary {
            probability_of_ruin: 0.1,
            final_net_worth_p10: Some(1000.0),
            final_net_worth_median: Some(2000.0),
            final_net_worth_p90: Some(3000.0),
        }
    }

    #[test]
    fn baseline_matches_default() {
        assert_eq!(ScenarioState::baseline(), ScenarioState::default());
    }

    #[test]
    fn baseline_defaults_are_the_documented_scenario() {
        let state = ScenarioState::baseline();
        assert_eq!(state.number(ScenarioField::StartCash), 5000.0);
        assert_eq!(state.number(ScenarioField::MonthlyIncome), 3000.0);
        assert_eq!(state.number(ScenarioField::Rent), 1200.0);
        assert_eq!(state.number(ScenarioField::Years), 30.0);
        assert_eq!(state.number(ScenarioField::AnnualReturn), 0.06);
        assert_eq!(state.number(ScenarioField::InvestRate), 1.0);
        assert_eq!(state.number(ScenarioField::Simulations), 1000.0);
        assert_eq!(state.number(ScenarioField::Seed), 42.0);
        assert_eq!(state.view_mode, ViewMode::Simulate);
        assert!(!state.is_running());
        assert!(state.last_error().is_none());
        assert!(state.last_result().is_none());
    }

    #[test]
    fn set_and_read_every_field() {
        let mut state = ScenarioState::baseline();
        for (i, field) in ScenarioField::ALL.into_iter().enumerate() {
            state.set(field, i as f64);
        }
        for (i, field) in ScenarioField::ALL.into_iter().enumerate() {
            assert_eq!(state.number(field), i as f64, "field {}", field.name());
        }
    }

    #[test]
    fn set_keeps_unparseable_text_raw() {
        let mut state = ScenarioState::baseline();
        state.set(ScenarioField::Rent, "not a number");
        assert_eq!(state.input(ScenarioField::Rent).raw(), "not a number");
        assert!(state.number(ScenarioField::Rent).is_nan());
    }

    #[test]
    fn reset_inputs_restores_baseline_but_keeps_run_slots() {
        let mut state = ScenarioState::baseline();
        state.set(ScenarioField::Rent, 1750.0);
        state.begin_run().unwrap();
        state.fail_run("boom".to_string());

        state.reset_inputs();
        assert_eq!(state.number(ScenarioField::Rent), 1200.0);
        assert_eq!(state.last_error(), Some("boom"));
    }

    #[test]
    fn begin_run_clears_previous_outcome() {
        let mut state = ScenarioState::baseline();
        state.begin_run().unwrap();
        state.complete_run(summary());
        assert!(state.last_result().is_some());

        state.begin_run().unwrap();
        assert!(state.is_running());
        assert!(state.last_result().is_none());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn begin_run_rejected_while_running() {
        let mut state = ScenarioState::baseline();
        state.begin_run().unwrap();
        assert!(state.begin_run().is_err());
        assert!(state.is_running());
    }

    #[test]
    fn success_and_failure_slots_are_mutually_exclusive() {
        let mut state = ScenarioState::baseline();

        state.begin_run().unwrap();
        state.complete_run(summary());
        assert!(state.last_result().is_some());
        assert!(state.last_error().is_none());
        assert!(!state.is_running());

        state.begin_run().unwrap();
        state.fail_run("unreachable".to_string());
        assert!(state.last_result().is_none());
        assert_eq!(state.last_error(), Some("unreachable"));
        assert!(!state.is_running());
    }
}
