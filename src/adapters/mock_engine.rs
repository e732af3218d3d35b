//! Mock Simulation Engine for testing.
//!
//! Configurable implementation of the engine port so session tests can run
//! without a live service: queued outcomes, simulated latency, and call
//! recording for verification.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::scenario::{
    CompareDocument, ComparisonSummary, RequestDocument, ScenarioOutcome, SimulationSummary,
};
use crate::ports::{SimulationEngine, SimulationError};

/// Mock engine with queued outcomes and call tracking.
///
/// Outcomes are consumed in configuration order; once a queue is exhausted a
/// neutral success is returned.
#[derive(Debug, Clone, Default)]
pub struct MockSimulationEngine {
    simulate_outcomes: Arc<Mutex<VecDeque<Result<SimulationSummary, SimulationError>>>>,
    compare_outcomes: Arc<Mutex<VecDeque<Result<ComparisonSummary, SimulationError>>>>,
    delay: Duration,
    simulate_calls: Arc<Mutex<Vec<RequestDocument>>>,
    compare_calls: Arc<Mutex<Vec<CompareDocument>>>,
}

impl MockSimulationEngine {
    /// Creates a mock with empty queues and no latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful simulation outcome.
    pub fn with_summary(self, summary: SimulationSummary) -> Self {
        self.simulate_outcomes
            .lock()
            .unwrap()
            .push_back(Ok(summary));
        self
    }

    /// Queues a failed simulation outcome.
    pub fn with_error(self, error: SimulationError) -> Self {
        self.simulate_outcomes
            .lock()
            .unwrap()
            .push_back(Err(error));
        self
    }

    /// Queues a successful comparison outcome.
    pub fn with_comparison(self, comparison: ComparisonSummary) -> Self {
        self.compare_outcomes
            .lock()
            .unwrap()
            .push_back(Ok(comparison));
        self
    }

    /// Queues a failed comparison outcome.
    pub fn with_comparison_error(self, error: SimulationError) -> Self {
        self.compare_outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of simulation calls made.
    pub fn call_count(&self) -> usize {
        self.simulate_calls.lock().unwrap().len()
    }

    /// Number of comparison calls made.
    pub fn compare_call_count(&self) -> usize {
        self.compare_calls.lock().unwrap().len()
    }

    /// Every simulation request received, in order.
    pub fn simulate_requests(&self) -> Vec<RequestDocument> {
        self.simulate_calls.lock().unwrap().clone()
    }

    /// Every comparison request received, in order.
    pub fn compare_requests(&self) -> Vec<CompareDocument> {
        self.compare_calls.lock().unwrap().clone()
    }

    fn neutral_summary() -> SimulationSummary {
        SimulationSummary {
            probability_of_ruin: 0.0,
            final_net_worth_p10: Some(0.0),
            final_net_worth_median: Some(0.0),
            final_net_worth_p90: Some(0.0),
        }
    }

    fn neutral_comparison() -> ComparisonSummary {
        ComparisonSummary {
            baseline: ScenarioOutcome {
                name: "baseline".to_string(),
                summary: Self::neutral_summary(),
            },
            scenarios: Vec::new(),
            delta_probability_of_ruin: Vec::new(),
            delta_median_final_net_worth: Vec::new(),
        }
    }
}

#[async_trait]
impl SimulationEngine for MockSimulationEngine {
    async fn simulate(
        &self,
        request: &RequestDocument,
    ) -> Result<SimulationSummary, SimulationError> {
        self.simulate_calls.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.simulate_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Self::neutral_summary()))
    }

    async fn compare(
        &self,
        request: &CompareDocument,
    ) -> Result<ComparisonSummary, SimulationError> {
        self.compare_calls.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.compare_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Self::neutral_comparison()))
    }

    async fn health(&self) -> Result<(), SimulationError> {
        Ok(())
    }
}
