//! Combat math, encounters and the turn-exchange engine.

pub mod encounter;
pub mod engine;
pub mod math;
pub mod types;

pub use encounter::encounter;
pub use engine::*;
pub use types::*;
