//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SimulationEngine` - Port for the external risk-simulation service

mod simulation_engine;

pub use simulation_engine::{SimulationEngine, SimulationError};
