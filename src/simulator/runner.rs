//! Simulation runner driving real game sessions.
//!
//! Each run is a full `GameSession` with an `ImmediateScheduler`, so deferred
//! enemy turns resolve as soon as they are queued and a run takes no wall time.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::combat::{CombatOutcome, CombatPhase, PlayerAction};
use crate::core::config::GameConfig;
use crate::core::error::GameResult;
use crate::core::game_state::GameSession;
use crate::core::scheduler::ImmediateScheduler;
use crate::character::Character;
use crate::world::GameData;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> GameResult<SimReport> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, rng)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Wins {}, Losses {}, Gold {}",
                run_idx + 1,
                config.num_runs,
                stats.final_level,
                stats.wins,
                stats.losses,
                stats.final_gold
            );
        }
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(config, all_runs))
}

/// Picks the next action: drink under 30% hp, use the skill while mana
/// lasts, otherwise swing.
pub fn choose_action(player: &Character, skill_mp_cost: i32) -> PlayerAction {
    if player.hp * 10 < player.max_hp * 3 {
        PlayerAction::Potion
    } else if player.mp >= skill_mp_cost {
        PlayerAction::Skill
    } else {
        PlayerAction::Attack
    }
}

fn simulate_single_run(config: &SimConfig, rng: ChaCha8Rng) -> GameResult<RunStats> {
    let game_config = GameConfig {
        clamp_mp_on_skill: config.clamp_mp,
        ..Default::default()
    };
    let mut session = GameSession::new(GameData::builtin(), game_config)?
        .with_dice(rng)
        .with_scheduler(ImmediateScheduler::new());

    session.start_game();
    session.create_character("Simulant", Some(&config.class_id))?;
    session.go_to_location(&config.location_id)?;

    let mut stats = RunStats::default();
    for _ in 0..config.encounters_per_run {
        session.encounter_enemy()?;
        if !fight(&mut session, config, &mut stats)? {
            // A capped combat never ends, so the run stops with it
            break;
        }
    }

    if let Some(player) = session.player() {
        stats.final_level = player.level;
        stats.final_gold = player.gold;
    }
    Ok(stats)
}

/// Plays one combat to its end (or the turn cap) and tallies the outcome.
/// Returns false when the cap was hit.
fn fight(
    session: &mut GameSession,
    config: &SimConfig,
    stats: &mut RunStats,
) -> GameResult<bool> {
    let skill_cost = session.config().skill_mp_cost;
    let mut turns = 0;

    while session.combat().is_active() {
        if turns >= config.max_turns_per_combat {
            stats.stalemates += 1;
            debug!(turns, "combat hit the turn cap");
            return Ok(false);
        }
        if session.combat().phase() == CombatPhase::PlayerTurn {
            let action = match session.player() {
                Some(player) => choose_action(player, skill_cost),
                None => PlayerAction::Attack,
            };
            session.player_action(action)?;
            turns += 1;
        }
        session.run_pending();
    }

    stats.total_turns += session.combat().turns() as u64;
    match session.combat().last_outcome() {
        Some(CombatOutcome::Victory) => stats.wins += 1,
        Some(CombatOutcome::Defeat) => stats.losses += 1,
        None => {}
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;

    fn quick(class_id: &str, location_id: &str) -> SimConfig {
        SimConfig {
            num_runs: 5,
            seed: Some(42),
            encounters_per_run: 10,
            verbosity: 0,
            ..SimConfig::matchup(class_id, location_id)
        }
    }

    #[test]
    fn test_every_combat_has_an_outcome() {
        let config = quick("warrior", "forest");
        let report = run_simulation(&config).unwrap();

        assert_eq!(report.total_combats, 50);
        assert_eq!(report.wins + report.losses + report.stalemates, 50);
        assert_eq!(report.stalemates, 0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = quick("rogue", "cave");
        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a.runs, b.runs);
    }

    #[test]
    fn test_max_seed_wraps_between_runs() {
        let config = SimConfig {
            num_runs: 2,
            seed: Some(u64::MAX),
            encounters_per_run: 3,
            verbosity: 0,
            ..SimConfig::matchup("warrior", "forest")
        };
        let report = run_simulation(&config).unwrap();
        assert_eq!(report.num_runs, 2);

        // The second run reuses seed 0
        let zero = SimConfig {
            num_runs: 1,
            seed: Some(0),
            ..config.clone()
        };
        assert_eq!(report.runs[1], run_simulation(&zero).unwrap().runs[0]);
    }

    #[test]
    fn test_warrior_beats_forest_mostly() {
        let report = run_simulation(&quick("warrior", "forest")).unwrap();
        assert!(report.win_rate() > 0.5);
    }

    #[test]
    fn test_safe_location_cannot_be_simulated() {
        let config = quick("warrior", "village");
        assert!(matches!(
            run_simulation(&config),
            Err(GameError::EmptyEncounterTable(_))
        ));
    }

    #[test]
    fn test_choose_action_policy() {
        let data = GameData::builtin();
        let mut player = Character::create("Sim", "warrior", &data).unwrap();

        assert_eq!(choose_action(&player, 15), PlayerAction::Skill);
        player.mp = 14;
        assert_eq!(choose_action(&player, 15), PlayerAction::Attack);
        player.hp = 35;
        assert_eq!(choose_action(&player, 15), PlayerAction::Potion);
    }
}
