//! Picks the enemy a location throws at the player.

use super::types::EnemyInstance;
use crate::core::dice::Dice;
use crate::core::error::GameResult;
use crate::world::{GameData, Location};

/// Uniformly picks one of the location's enemies and spawns it at full hp.
///
/// Returns `Ok(None)` for safe locations. A name missing from the enemy table
/// is `UnknownEnemy`; validated data never produces it.
pub fn encounter(
    location: &Location,
    data: &GameData,
    dice: &mut dyn Dice,
) -> GameResult<Option<EnemyInstance>> {
    if location.is_safe() {
        return Ok(None);
    }
    let index = dice.below(location.enemies.len() as u32) as usize;
    let template = data.enemy(&location.enemies[index])?;
    Ok(Some(EnemyInstance::spawn(template)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::ScriptedDice;
    use crate::core::error::GameError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_safe_location_has_no_encounter() {
        let data = GameData::builtin();
        let village = data.location("village").unwrap();
        let mut dice = ScriptedDice::default();
        assert!(encounter(village, &data, &mut dice).unwrap().is_none());
    }

    #[test]
    fn test_scripted_pick() {
        let data = GameData::builtin();
        let mountain = data.location("mountain").unwrap();
        let mut dice = ScriptedDice::new([2], Vec::<bool>::new());
        let enemy = encounter(mountain, &data, &mut dice).unwrap().unwrap();
        assert_eq!(enemy.name, "Dragon");
        assert_eq!(enemy.hp, 100.0);
        assert_eq!(enemy.max_hp, 100);
    }

    #[test]
    fn test_every_listed_enemy_can_appear() {
        let data = GameData::builtin();
        let forest = data.location("forest").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let seen: HashSet<String> = (0..300)
            .map(|_| encounter(forest, &data, &mut rng).unwrap().unwrap().name)
            .collect();

        let expected: HashSet<String> = forest.enemies.iter().cloned().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_inconsistent_tables_report_unknown_enemy() {
        let data = GameData::builtin();
        let haunted = Location::new("crypt", "Crypt", "Cold", &["Lich"]);
        let mut dice = ScriptedDice::default();
        assert!(matches!(
            encounter(&haunted, &data, &mut dice),
            Err(GameError::UnknownEnemy(name)) if name == "Lich"
        ));
    }
}
