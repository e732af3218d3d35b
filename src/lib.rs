//! LifeLedger - Scenario Orchestration for Stochastic Financial Simulation
//!
//! This crate turns a user-described financial scenario (starting balances,
//! monthly cashflow, macro assumptions, Monte Carlo parameters) into requests
//! for the external LifeLedger risk-simulation service and interprets its
//! probabilistic responses for display. The simulator itself is a remote
//! collaborator reached through the [`ports::SimulationEngine`] contract.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
