//! Turn-exchange state machine.
//!
//! ```text
//! Idle --start--> PlayerTurn --action--> EnemyTurn --resolve--> PlayerTurn
//!                     |                      |
//!                     +--> Won --> Idle      +--> Lost --finalize--> Idle
//! ```
//!
//! The enemy turn and the defeat teardown are deferred through a
//! [`Scheduler`]. While one of them is pending the engine is awaiting
//! resolution and refuses player actions.

use super::math::roll_enemy_damage;
use super::types::{CombatEvent, CombatPhase, EnemyInstance, PlayerAction};
use crate::character::Character;
use crate::core::config::GameConfig;
use crate::core::constants::{DEFEND_HEAL, POTION_HEAL, SKILL_DAMAGE_MULTIPLIER};
use crate::core::dice::Dice;
use crate::core::error::{GameError, GameResult};
use crate::core::scheduler::{Continuation, Scheduler};
use std::time::Duration;
use tracing::debug;

/// Everything outside the engine that a combat step touches.
pub struct CombatContext<'a> {
    pub player: &'a mut Character,
    pub dice: &'a mut dyn Dice,
    pub scheduler: &'a mut dyn Scheduler,
    pub config: &'a GameConfig,
}

/// How the last finished combat ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, Default)]
pub struct CombatEngine {
    phase: CombatPhase,
    enemy: Option<EnemyInstance>,
    pending: Option<Continuation>,
    /// Player actions taken in the current combat.
    turns: u32,
    last_outcome: Option<CombatOutcome>,
}

impl CombatEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn enemy(&self) -> Option<&EnemyInstance> {
        self.enemy.as_ref()
    }

    pub fn is_awaiting_resolution(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<Continuation> {
        self.pending
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn last_outcome(&self) -> Option<CombatOutcome> {
        self.last_outcome
    }

    /// Idle -> PlayerTurn.
    pub fn start_combat(&mut self, enemy: EnemyInstance) -> GameResult<Vec<CombatEvent>> {
        if self.phase != CombatPhase::Idle {
            return Err(GameError::CombatInProgress);
        }
        debug!(enemy = %enemy.name, hp = enemy.max_hp, "combat started");

        let event = CombatEvent::CombatStarted {
            enemy_name: enemy.name.clone(),
        };
        self.enemy = Some(enemy);
        self.turns = 0;
        self.phase = CombatPhase::PlayerTurn;
        Ok(vec![event])
    }

    /// PlayerTurn -> EnemyTurn, or straight through Won to Idle when the
    /// enemy drops.
    pub fn player_action(
        &mut self,
        action: PlayerAction,
        ctx: &mut CombatContext<'_>,
    ) -> GameResult<Vec<CombatEvent>> {
        if self.phase != CombatPhase::PlayerTurn || self.pending.is_some() {
            return Err(GameError::ActionWhileNotPlayerTurn);
        }
        let Some(enemy) = self.enemy.as_mut() else {
            return Err(GameError::ActionWhileNotPlayerTurn);
        };

        let player_name = ctx.player.name.clone();
        let (damage, event) = match action {
            PlayerAction::Attack => {
                let attack = ctx.player.calculate_damage(ctx.dice);
                (
                    attack.damage,
                    CombatEvent::PlayerAttack {
                        player_name,
                        damage: attack.damage,
                        was_crit: attack.is_crit,
                    },
                )
            }
            PlayerAction::Skill => {
                let attack = ctx
                    .player
                    .calculate_damage(ctx.dice)
                    .scaled(SKILL_DAMAGE_MULTIPLIER);
                let cost = ctx.config.skill_mp_cost;
                ctx.player.spend_mp(cost, ctx.config.clamp_mp_on_skill);
                (
                    attack.damage,
                    CombatEvent::PlayerSkill {
                        player_name,
                        damage: attack.damage,
                        was_crit: attack.is_crit,
                        mp_cost: cost,
                    },
                )
            }
            PlayerAction::Defend => {
                ctx.player.heal(DEFEND_HEAL);
                (
                    0.0,
                    CombatEvent::PlayerDefend {
                        player_name,
                        healed: DEFEND_HEAL,
                    },
                )
            }
            PlayerAction::Potion => {
                ctx.player.heal(POTION_HEAL);
                (
                    0.0,
                    CombatEvent::PlayerPotion {
                        player_name,
                        healed: POTION_HEAL,
                    },
                )
            }
        };

        enemy.take_damage(damage);
        let enemy_down = !enemy.is_alive();
        self.turns += 1;
        debug!(%action, damage, enemy_hp = enemy.hp, "player acted");

        let mut events = vec![event];
        if enemy_down {
            self.phase = CombatPhase::Won;
            events.extend(self.finalize_victory(ctx.player));
        } else {
            self.phase = CombatPhase::EnemyTurn;
            self.defer(
                ctx.scheduler,
                ctx.config.enemy_turn_delay(),
                Continuation::EnemyTurn,
            );
        }
        Ok(events)
    }

    /// Runs a continuation the scheduler handed back. Anything other than
    /// the pending continuation is stale and ignored.
    pub fn resume(
        &mut self,
        continuation: Continuation,
        ctx: &mut CombatContext<'_>,
    ) -> Vec<CombatEvent> {
        if self.pending != Some(continuation) {
            debug!(?continuation, pending = ?self.pending, "ignoring stale continuation");
            return Vec::new();
        }
        self.pending = None;

        match continuation {
            Continuation::EnemyTurn => self.resolve_enemy_turn(ctx),
            Continuation::FinalizeDefeat => self.finalize_defeat(),
        }
    }

    /// EnemyTurn -> PlayerTurn, or Lost with the teardown deferred.
    fn resolve_enemy_turn(&mut self, ctx: &mut CombatContext<'_>) -> Vec<CombatEvent> {
        let Some(enemy) = self.enemy.as_ref() else {
            self.reset();
            return Vec::new();
        };

        let raw = roll_enemy_damage(enemy.damage, ctx.dice);
        let dealt = ctx.player.take_damage(raw);
        debug!(enemy = %enemy.name, raw, dealt, player_hp = ctx.player.hp, "enemy acted");

        let mut events = vec![CombatEvent::EnemyAttack {
            enemy_name: enemy.name.clone(),
            damage: dealt,
        }];

        if ctx.player.is_alive() {
            self.phase = CombatPhase::PlayerTurn;
        } else {
            self.phase = CombatPhase::Lost;
            events.push(CombatEvent::PlayerDefeated {
                player_name: ctx.player.name.clone(),
            });
            // No penalty beyond the scare: hp comes back immediately
            ctx.player.hp = ctx.player.max_hp;
            self.defer(
                ctx.scheduler,
                ctx.config.defeat_delay(),
                Continuation::FinalizeDefeat,
            );
        }
        events
    }

    /// Won -> Idle: experience, gold, then teardown.
    fn finalize_victory(&mut self, player: &mut Character) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if let Some(enemy) = self.enemy.as_ref() {
            events.push(CombatEvent::EnemyDefeated {
                enemy_name: enemy.name.clone(),
            });
            if let Some(level_up) = player.gain_experience(enemy.exp) {
                events.push(CombatEvent::LevelUp {
                    player_name: player.name.clone(),
                    level: level_up.new_level,
                });
            }
            let gold = enemy.gold_reward();
            player.gold = player.gold.saturating_add(gold);
            events.push(CombatEvent::RewardsGained {
                exp: enemy.exp,
                gold,
            });
            debug!(enemy = %enemy.name, exp = enemy.exp, gold, turns = self.turns, "combat won");
        }
        self.last_outcome = Some(CombatOutcome::Victory);
        self.reset();
        events.push(CombatEvent::CombatEnded);
        events
    }

    /// Lost -> Idle.
    fn finalize_defeat(&mut self) -> Vec<CombatEvent> {
        debug!(turns = self.turns, "combat lost");
        self.last_outcome = Some(CombatOutcome::Defeat);
        self.reset();
        vec![CombatEvent::CombatEnded]
    }

    fn defer(&mut self, scheduler: &mut dyn Scheduler, delay: Duration, continuation: Continuation) {
        self.pending = Some(continuation);
        scheduler.schedule(delay, continuation);
    }

    fn reset(&mut self) {
        self.phase = CombatPhase::Idle;
        self.enemy = None;
        self.pending = None;
    }
}
