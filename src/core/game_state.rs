//! The game session: one play-through's worth of state and its entry points.

use super::config::GameConfig;
use super::dice::Dice;
use super::error::{GameError, GameResult};
use super::game_log::GameLog;
use super::scheduler::{Scheduler, TimerQueue};
use super::snapshot::{CombatSnapshot, LocationSnapshot, PlayerSnapshot, SessionSnapshot};
use crate::character::Character;
use crate::combat::{encounter, CombatContext, CombatEngine, CombatEvent, PlayerAction};
use crate::world::{GameData, Location};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// Which screen the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Screen {
    #[default]
    Menu,
    CharacterCreation,
    Game,
}

/// Owns everything mutable about a play-through.
///
/// Every entry point returns a [`GameResult`]. Errors are always recoverable
/// and leave the session as it was; the updated state is read back through
/// [`GameSession::snapshot`] and [`GameSession::log`].
pub struct GameSession {
    data: GameData,
    config: GameConfig,
    screen: Screen,
    selected_class: Option<String>,
    player: Option<Character>,
    location_id: String,
    combat: CombatEngine,
    log: GameLog,
    dice: Box<dyn Dice>,
    scheduler: Box<dyn Scheduler>,
}

impl GameSession {
    /// A session on the main menu, using OS entropy and a [`TimerQueue`].
    pub fn new(data: GameData, config: GameConfig) -> GameResult<Self> {
        data.validate()?;
        data.location(&config.starting_location)?;

        Ok(Self {
            location_id: config.starting_location.clone(),
            data,
            config,
            screen: Screen::Menu,
            selected_class: None,
            player: None,
            combat: CombatEngine::new(),
            log: GameLog::new(),
            dice: Box::new(StdRng::from_entropy()),
            scheduler: Box::new(TimerQueue::new()),
        })
    }

    /// Built-in tables and default config.
    pub fn with_defaults() -> GameResult<Self> {
        Self::new(GameData::builtin(), GameConfig::default())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.dice = Box::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_dice(mut self, dice: impl Dice + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    pub fn with_scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn player(&self) -> Option<&Character> {
        self.player.as_ref()
    }

    /// Direct access for hosts that grant items or tweak the character.
    pub fn player_mut(&mut self) -> Option<&mut Character> {
        self.player.as_mut()
    }

    pub fn selected_class(&self) -> Option<&str> {
        self.selected_class.as_deref()
    }

    pub fn location(&self) -> &Location {
        // location_id is only ever set to a validated id
        self.data
            .location(&self.location_id)
            .unwrap_or_else(|_| &self.data.locations[0])
    }

    pub fn combat(&self) -> &CombatEngine {
        &self.combat
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn is_awaiting_resolution(&self) -> bool {
        self.combat.is_awaiting_resolution()
    }

    /// Time until the next deferred continuation is due.
    pub fn next_resolution_in(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.screen,
            player: self.player.as_ref().map(PlayerSnapshot::from_character),
            location: LocationSnapshot::from_location(self.location()),
            combat: CombatSnapshot::from_engine(&self.combat),
            awaiting_resolution: self.combat.is_awaiting_resolution(),
            log_len: self.log.len(),
        }
    }

    // ── Screens and character creation ───────────────────────────

    /// Menu -> CharacterCreation. A no-op from any other screen.
    pub fn start_game(&mut self) {
        if self.screen == Screen::Menu {
            self.screen = Screen::CharacterCreation;
        }
    }

    pub fn select_class(&mut self, class_id: &str) -> GameResult<()> {
        let template = self.data.class(class_id).map_err(|e| {
            warn!("{}", e);
            e
        })?;
        self.selected_class = Some(template.id.clone());
        Ok(())
    }

    /// Creates the player and enters the game screen.
    ///
    /// The class is taken from `class_id`, then the selected class, then the
    /// fallback class; an unknown id falls through to the fallback. An empty
    /// name becomes the configured default name.
    pub fn create_character(&mut self, name: &str, class_id: Option<&str>) -> GameResult<()> {
        if self.combat.is_active() {
            return Err(GameError::CombatInProgress);
        }
        let name = match name.trim() {
            "" => self.config.default_player_name.clone(),
            trimmed => trimmed.to_string(),
        };
        let requested = class_id
            .map(str::to_string)
            .or_else(|| self.selected_class.clone());

        let mut player = match requested {
            Some(id) => match Character::create(&name, &id, &self.data) {
                Ok(player) => player,
                Err(e) => {
                    warn!("{}, using fallback class", e);
                    self.create_with_fallback(&name)?
                }
            },
            None => self.create_with_fallback(&name)?,
        };
        player.gold = self.config.starting_gold;

        info!(name = %player.name, class = %player.class_id, "character created");
        self.log.push(format!(
            "Welcome, {} the {}!",
            player.name,
            player.class_id.to_uppercase()
        ));
        self.player = Some(player);
        self.screen = Screen::Game;
        Ok(())
    }

    fn create_with_fallback(&self, name: &str) -> GameResult<Character> {
        let fallback = match &self.config.fallback_class {
            Some(id) => self.data.class(id)?,
            None => self
                .data
                .first_class()
                .ok_or_else(|| GameError::UnknownClass(String::new()))?,
        };
        Character::create(name, &fallback.id, &self.data)
    }

    // ── Exploration ──────────────────────────────────────────────

    /// Travel is refused while a combat is active.
    pub fn go_to_location(&mut self, location_id: &str) -> GameResult<()> {
        if self.combat.is_active() {
            return Err(GameError::CombatInProgress);
        }
        let location = self.data.location(location_id).map_err(|e| {
            warn!("{}", e);
            e
        })?;
        self.location_id = location.id.clone();
        info!(location = %self.location_id, "travelled");
        Ok(())
    }

    /// Rolls an enemy for the current location and starts combat with it.
    pub fn encounter_enemy(&mut self) -> GameResult<()> {
        if self.player.is_none() {
            return Err(GameError::NoPlayer);
        }
        if self.combat.is_active() {
            return Err(GameError::CombatInProgress);
        }

        let location = self.location().clone();
        match encounter(&location, &self.data, &mut *self.dice)? {
            Some(enemy) => {
                let events = self.combat.start_combat(enemy)?;
                self.record(events);
                Ok(())
            }
            None => {
                self.log.push("No enemies found in this peaceful location.");
                Err(GameError::EmptyEncounterTable(location.id))
            }
        }
    }

    /// Full hp and mp, free of charge. Not available mid-combat.
    pub fn rest_at_inn(&mut self) -> GameResult<()> {
        if self.combat.is_active() {
            return Err(GameError::CombatInProgress);
        }
        let player = self.player.as_mut().ok_or(GameError::NoPlayer)?;
        player.restore();
        self.log
            .push("You rest at the inn and restore all health and mana.");
        Ok(())
    }

    /// Logs and returns the inventory listing ("Empty" when there is none).
    pub fn open_inventory(&mut self) -> GameResult<String> {
        let player = self.player.as_ref().ok_or(GameError::NoPlayer)?;
        let listing = player.inventory.describe();
        self.log.push(format!("Inventory: {}", listing));
        Ok(listing)
    }

    // ── Combat ───────────────────────────────────────────────────

    pub fn player_action(&mut self, action: PlayerAction) -> GameResult<()> {
        let player = self.player.as_mut().ok_or(GameError::NoPlayer)?;
        let mut ctx = CombatContext {
            player,
            dice: &mut *self.dice,
            scheduler: &mut *self.scheduler,
            config: &self.config,
        };
        let events = self.combat.player_action(action, &mut ctx)?;
        self.record(events);
        Ok(())
    }

    /// [`player_action`](Self::player_action) keyed by action id.
    pub fn player_action_id(&mut self, action_id: &str) -> GameResult<()> {
        let action = action_id.parse::<PlayerAction>()?;
        self.player_action(action)
    }

    /// Advances the scheduler clock and runs every continuation that fell due.
    /// Returns how many ran.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let due = self.scheduler.advance(elapsed);
        let mut count = 0;
        for continuation in due {
            // Combat needs a player, so nothing is ever scheduled without one
            let Some(player) = self.player.as_mut() else {
                warn!(?continuation, "dropping continuation with no player");
                continue;
            };
            let mut ctx = CombatContext {
                player,
                dice: &mut *self.dice,
                scheduler: &mut *self.scheduler,
                config: &self.config,
            };
            let events = self.combat.resume(continuation, &mut ctx);
            self.record(events);
            count += 1;
        }
        count
    }

    /// Fast-forwards until nothing is pending.
    pub fn run_pending(&mut self) {
        while let Some(wait) = self.scheduler.next_due_in() {
            self.tick(wait);
        }
    }

    fn record(&mut self, events: Vec<CombatEvent>) {
        for event in events {
            if let Some(message) = event.message() {
                self.log.push(message);
            }
        }
    }
}
