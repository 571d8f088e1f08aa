//! Core session state, configuration and the seams to the host.

pub mod config;
pub mod constants;
pub mod dice;
pub mod error;
pub mod game_log;
pub mod game_state;
pub mod scheduler;
pub mod snapshot;

pub use config::GameConfig;
pub use dice::{Dice, ScriptedDice};
pub use error::{GameError, GameResult};
pub use game_log::GameLog;
pub use game_state::*;
pub use scheduler::{Continuation, ImmediateScheduler, Scheduler, TimerQueue};
pub use snapshot::*;
