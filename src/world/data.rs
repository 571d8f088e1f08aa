//! Built-in class, enemy and location tables.

use super::{ClassTemplate, EnemyTemplate, Location};

/// Playable classes. The first entry is the fallback class.
pub fn builtin_classes() -> Vec<ClassTemplate> {
    vec![
        ClassTemplate::new("warrior", 120, 30, [18, 10, 16, 8, 10, 11]),
        ClassTemplate::new("rogue", 90, 35, [14, 18, 12, 12, 11, 13]),
        ClassTemplate::new("mage", 70, 80, [10, 12, 10, 16, 14, 12]),
        ClassTemplate::new("ranger", 100, 40, [14, 16, 13, 11, 13, 12]),
    ]
}

pub fn builtin_enemies() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate::new("Goblin", 1, 20, 3, 50, "🧌"),
        EnemyTemplate::new("Orc", 3, 35, 6, 100, "👹"),
        EnemyTemplate::new("Troll", 5, 50, 8, 150, "👹"),
        EnemyTemplate::new("Dragon", 10, 100, 15, 500, "🐉"),
        EnemyTemplate::new("Skeleton", 4, 30, 5, 80, "💀"),
    ]
}

pub fn builtin_locations() -> Vec<Location> {
    vec![
        Location::new(
            "forest",
            "Enchanted Forest",
            "A mystical forest full of creatures",
            &["Goblin", "Orc", "Skeleton"],
        ),
        Location::new(
            "mountain",
            "Mountain Peak",
            "A harsh, rocky terrain",
            &["Orc", "Troll", "Dragon"],
        ),
        Location::new(
            "cave",
            "Dark Cavern",
            "An ominous underground cave",
            &["Skeleton", "Troll"],
        ),
        Location::new(
            "village",
            "Starting Village",
            "A peaceful village where your adventure begins",
            &[],
        ),
    ]
}
