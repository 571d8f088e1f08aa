//! Integration test: levelling and long-run balance
//!
//! Covers the experience curve across several levels and runs the balance
//! simulator end to end with seeded ChaCha8 dice.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish::character::{AttributeType, Character};
use skirmish::combat::{CombatPhase, PlayerAction};
use skirmish::core::GameSession;
use skirmish::simulator::{run_simulation, SimConfig};
use skirmish::world::GameData;

#[test]
fn test_experience_curve_compounds() {
    let data = GameData::builtin();
    let mut c = Character::create("Aria", "warrior", &data).unwrap();

    let mut thresholds = vec![c.exp_to_next_level];
    for _ in 0..4 {
        let needed = c.exp_to_next_level;
        assert!(c.gain_experience(needed).is_some());
        thresholds.push(c.exp_to_next_level);
    }

    assert_eq!(thresholds, vec![100, 114, 131, 150, 172]);
    assert_eq!(c.level, 5);
    assert_eq!(c.max_hp, 160);
    assert_eq!(c.max_mp, 50);
    assert_eq!(c.attributes.get(AttributeType::Strength), 26);
    assert_eq!(c.attributes.get(AttributeType::Dexterity), 14);
    assert_eq!(c.attributes.get(AttributeType::Constitution), 20);
    assert_eq!(c.attributes.get(AttributeType::Intelligence), 8);
}

#[test]
fn test_huge_gain_levels_only_once() {
    let data = GameData::builtin();
    let mut c = Character::create("Aria", "mage", &data).unwrap();

    let level_up = c.gain_experience(10_000).unwrap();

    assert_eq!(level_up.new_level, 2);
    assert_eq!(c.level, 2);
    assert_eq!(c.experience, 0);
}

#[test]
fn test_seeded_chacha_session_grinds_levels() {
    let mut s = GameSession::with_defaults()
        .unwrap()
        .with_dice(ChaCha8Rng::seed_from_u64(2024));
    s.create_character("Aria", Some("warrior")).unwrap();
    s.go_to_location("forest").unwrap();

    for _ in 0..30 {
        s.encounter_enemy().unwrap();
        while s.combat().is_active() {
            if s.combat().phase() == CombatPhase::PlayerTurn {
                let low = s.player().map(|p| p.hp * 10 < p.max_hp * 3).unwrap_or(false);
                let action = if low {
                    PlayerAction::Potion
                } else {
                    PlayerAction::Attack
                };
                s.player_action(action).unwrap();
            }
            s.run_pending();
        }
        s.rest_at_inn().unwrap();
    }

    let player = s.player().unwrap();
    assert!(player.level > 1);
    assert!(player.gold > 100);
}

#[test]
fn test_simulator_reproducible_with_seed() {
    let config = SimConfig {
        num_runs: 8,
        seed: Some(7),
        encounters_per_run: 15,
        verbosity: 0,
        ..SimConfig::matchup("ranger", "cave")
    };

    let first = run_simulation(&config).unwrap();
    let second = run_simulation(&config).unwrap();

    assert_eq!(first.runs, second.runs);
    assert_eq!(first.total_combats, 120);
    assert_eq!(first.to_json(), second.to_json());
}

#[test]
fn test_simulator_report_mentions_matchup() {
    let config = SimConfig {
        num_runs: 3,
        seed: Some(1),
        encounters_per_run: 5,
        verbosity: 0,
        ..SimConfig::matchup("mage", "forest")
    };

    let report = run_simulation(&config).unwrap();
    let text = report.to_text();

    assert!(text.contains("mage in forest"));
    assert_eq!(report.num_runs, 3);
    assert!(report.avg_final_level >= 1.0);
}

#[test]
fn test_simulator_unknown_location_fails() {
    let config = SimConfig {
        num_runs: 1,
        seed: Some(1),
        verbosity: 0,
        ..SimConfig::matchup("warrior", "moon")
    };
    assert!(run_simulation(&config).is_err());
}
