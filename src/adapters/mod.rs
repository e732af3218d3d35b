//! Adapters - Implementations of port interfaces.
//!
//! - `http` - reqwest-backed client for the real simulation service
//! - `MockSimulationEngine` - Configurable mock for testing

pub mod http;
mod mock_engine;

pub use http::HttpSimulationEngine;
pub use mock_engine::MockSimulationEngine;
