//! Randomness seam for combat and encounters.
//!
//! Game rules only ever ask two questions of randomness: "a uniform integer
//! below N" and "did an event with probability p happen". Any `rand::Rng`
//! answers both, and [`ScriptedDice`] answers them from a fixed script so
//! combat can be replayed exactly.

use rand::Rng;
use std::collections::VecDeque;

pub trait Dice {
    /// Uniform integer in `0..upper`. Returns 0 when `upper` is 0.
    fn below(&mut self, upper: u32) -> u32;

    /// True with probability `p`. Never true for `p <= 0`.
    fn chance(&mut self, p: f64) -> bool;
}

impl<R: Rng + ?Sized> Dice for R {
    fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.gen_range(0..upper)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.gen::<f64>() < p
    }
}

/// Dice that replay predetermined outcomes.
///
/// Rolls are clamped into range; an exhausted script yields 0 and `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    chances: VecDeque<bool>,
}

impl ScriptedDice {
    pub fn new(
        rolls: impl IntoIterator<Item = u32>,
        chances: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            chances: chances.into_iter().collect(),
        }
    }

    pub fn push_roll(&mut self, roll: u32) {
        self.rolls.push_back(roll);
    }

    pub fn push_chance(&mut self, hit: bool) {
        self.chances.push_back(hit);
    }

    pub fn is_exhausted(&self) -> bool {
        self.rolls.is_empty() && self.chances.is_empty()
    }
}

impl Dice for ScriptedDice {
    fn below(&mut self, upper: u32) -> u32 {
        let roll = self.rolls.pop_front().unwrap_or(0);
        roll.min(upper.saturating_sub(1))
    }

    fn chance(&mut self, p: f64) -> bool {
        let hit = self.chances.pop_front().unwrap_or(false);
        hit && p > 0.0
    }
}
