//! HTTP adapter for the simulation service.

mod engine;

pub use engine::HttpSimulationEngine;
