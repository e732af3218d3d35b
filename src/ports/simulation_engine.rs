//! Simulation Engine Port - Interface to the external risk simulator.
//!
//! The Monte Carlo engine that evolves financial paths month by month is a
//! remote collaborator; this port is everything the orchestration layer
//! knows about it. Implementations translate the wire documents into the
//! service's transport and classify what comes back.
//!
//! # Error contract
//!
//! `Display` on [`SimulationError`] is the user-facing message the session
//! stores verbatim into its error slot: a service rejection displays exactly
//! the message extracted from the response body, and a transport failure
//! displays a fixed instruction naming the configured address.

use async_trait::async_trait;

use crate::domain::scenario::{
    CompareDocument, ComparisonSummary, RequestDocument, SimulationSummary,
};

/// Port for the external simulation service.
#[async_trait]
pub trait SimulationEngine: Send + Sync {
    /// Runs one Monte Carlo simulation of the given scenario.
    async fn simulate(
        &self,
        request: &RequestDocument,
    ) -> Result<SimulationSummary, SimulationError>;

    /// Runs a baseline-versus-variants comparison.
    async fn compare(
        &self,
        request: &CompareDocument,
    ) -> Result<ComparisonSummary, SimulationError>;

    /// Probes whether the service is up.
    async fn health(&self) -> Result<(), SimulationError>;
}

/// Failures of a simulation request.
///
/// Every variant degrades to a displayable message; nothing here is fatal
/// to the caller, and a single failed attempt is terminal until the user
/// triggers another run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// The service answered with a failure status.
    #[error("{message}")]
    Rejected {
        /// Message extracted from the response body.
        message: String,
    },

    /// No response was obtained from the service.
    #[error("could not reach the simulation service; verify it is running at {base_url}")]
    Unreachable {
        /// The configured address the user should check.
        base_url: String,
    },

    /// The service reported success but the body did not match the
    /// expected summary shape.
    #[error("unexpected response from the simulation service: {0}")]
    Malformed(String),
}

impl SimulationError {
    /// Creates a service-rejection error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a transport-failure error.
    pub fn unreachable(base_url: impl Into<String>) -> Self {
        Self::Unreachable {
            base_url: base_url.into(),
        }
    }

    /// Creates a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Returns true if the failure happened below the service (no response).
    pub fn is_transport(&self) -> bool {
        matches!(self, SimulationError::Unreachable { .. })
    }
}
