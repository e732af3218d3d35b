//! Run lifecycle state machine.
//!
//! A simulation run moves `Idle -> Running -> {Succeeded, Failed} -> Idle`.
//! The `Running` state doubles as the single-flight guard: a run may only
//! start from `Idle`, so at most one request is in flight per scenario state.

use std::fmt;

use thiserror::Error;

/// Rejected state transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot transition from {from} to {to}")]
pub struct TransitionError {
    /// State the machine was in.
    pub from: String,
    /// State that was requested.
    pub to: String,
}

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
pub trait StateMachine: Sized + Copy + PartialEq + fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, TransitionError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(TransitionError {
                from: format!("{:?}", self),
                to: format!("{:?}", target),
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

/// Status of the simulation run lifecycle.
///
/// The terminal states `Succeeded` and `Failed` are passed through
/// synchronously when a run resolves; observers polling the status only ever
/// see `Idle` or `Running`. The outcome itself lives in the scenario state's
/// result and error slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    /// No run in flight; a new run may start.
    #[default]
    Idle,
    /// A request is in flight with the simulation service.
    Running,
    /// The in-flight request resolved with a parsed result.
    Succeeded,
    /// The in-flight request resolved with an error.
    Failed,
}

impl RunStatus {
    /// Returns true while a request is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }
}

impl StateMachine for RunStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RunStatus::*;
        matches!(
            (self, target),
            (Idle, Running)
                | (Running, Succeeded)
                | (Running, Failed)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RunStatus::*;
        match self {
            Idle => vec![Running],
            Running => vec![Succeeded, Failed],
            Succeeded => vec![Idle],
            Failed => vec![Idle],
        }
    }
}
