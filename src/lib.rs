//! Skirmish - turn-based RPG combat library
//!
//! Characters, encounters and a deferred-turn combat engine behind a single
//! [`GameSession`]. Presentation is left to the host: it drives the session
//! through its entry points and reads back snapshots and the message log.

pub mod character;
pub mod combat;
pub mod core;
pub mod simulator;
pub mod world;

pub use crate::core::{GameConfig, GameError, GameResult, GameSession, Screen};
