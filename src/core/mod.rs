//! Core data types for the query load simulator.
//!
//! - [`SimulationConfig`](config::SimulationConfig): immutable run settings
//! - [`QueryRange`](range::QueryRange): one randomly drawn reference interval
//! - [`TrialResult`](range::TrialResult): range length and summed elapsed time
//!
//! Per-trial state is never stored on the config; each range is passed
//! explicitly to the code that builds and times commands.

pub mod config;
pub mod range;
