//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent play-throughs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Class every simulated character starts as
    pub class_id: String,

    /// Location every encounter is rolled in
    pub location_id: String,

    /// Encounters fought per run
    pub encounters_per_run: u32,

    /// Player actions allowed per combat before it counts as a stalemate
    pub max_turns_per_combat: u32,

    /// Clamp mana at zero when skills overdraw it
    pub clamp_mp: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            class_id: "warrior".to_string(),
            location_id: "forest".to_string(),
            encounters_per_run: 20,
            max_turns_per_combat: 500,
            clamp_mp: false,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for comparing one class at one location
    pub fn matchup(class_id: &str, location_id: &str) -> Self {
        Self {
            num_runs: 100,
            class_id: class_id.to_string(),
            location_id: location_id.to_string(),
            ..Default::default()
        }
    }
}
