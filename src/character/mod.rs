//! Character attributes, inventory and the player model.

pub mod attributes;
pub mod inventory;
pub mod player;

pub use attributes::*;
pub use inventory::*;
pub use player::*;
