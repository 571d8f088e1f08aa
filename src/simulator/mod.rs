//! Combat balance simulator for Monte Carlo analysis.
//!
//! Plays many seeded sessions against one location with a fixed action
//! policy to measure:
//! - Win and loss rates per class
//! - Turns per combat
//! - Levels and gold gained over a run
//!
//! Every run drives a real `GameSession`, so results match gameplay.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{choose_action, run_simulation};
