//! Battle session - phase machine and turn sequencer
//!
//! The session is an explicit state value: phase, turn ownership, both
//! combatants, and the log all live here, and every transition is a method
//! returning a typed result. Re-entrancy needs no guard flag - while the
//! enemy turn is pending, player actions are rejected by the turn check, and
//! the caller decides when the enemy acts (the client inserts a pacing delay
//! there).
//!
//! Turn order is strictly alternating. Speed is tracked on both combatants
//! but never consulted for initiative.

use thiserror::Error;

use crate::entities::{Character, Quest};

use super::combatant::Combatant;
use super::damage::{resolve_damage, AttackKind};
use super::enemy::generate_enemy;
use super::log::{BattleLog, LogSource};
use super::rng::BattleRng;

/// Mana cost of a special attack.
pub const SPECIAL_ATTACK_COST: u32 = 20;

/// Mana cost of a heal.
pub const HEAL_COST: u32 = 15;

/// Fraction of max health restored by a heal.
const HEAL_FRACTION: f64 = 0.3;

/// Top-level state of a battle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// Waiting for the player to start the fight.
    Intro,
    /// Actions loop until either side reaches zero health.
    Battle,
    /// Terminal: the enemy fell. Rewards apply from here.
    Victory,
    /// The player fell. Offers retry or exit.
    Defeat,
}

/// Which side may currently act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Enemy,
}

/// Action submitted on the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    /// 1.5x damage, costs [`SPECIAL_ATTACK_COST`] mana.
    SpecialAttack,
    /// Restores 30% of max health, costs [`HEAL_COST`] mana. Ends the turn
    /// exactly like an attack.
    Heal,
}

/// Rejection of an action request.
///
/// These are validation-shaped: the UI is expected to disable the control, so
/// callers treat them as silent no-ops rather than user-visible failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("action not available in the {0:?} phase")]
    WrongPhase(BattlePhase),
    #[error("it is not the player's turn")]
    NotPlayersTurn,
    #[error("the enemy has no pending turn")]
    NoEnemyTurnPending,
    #[error("not enough mana: need {required}, have {available}")]
    NotEnoughMana { required: u32, available: u32 },
}

/// What a player action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReport {
    pub action: PlayerAction,
    pub damage_dealt: Option<u32>,
    pub health_restored: Option<u32>,
    /// The phase moved to [`BattlePhase::Victory`]; the enemy gets no turn.
    pub enemy_defeated: bool,
}

/// What the enemy's turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTurnReport {
    pub special: bool,
    pub damage_dealt: u32,
    /// The phase moved to [`BattlePhase::Defeat`].
    pub player_defeated: bool,
}

/// One quest battle: both combatants, the log, and the phase machine.
///
/// The session owns the enemy and the player's working copy; the character's
/// authoritative record is reconciled only on victory, by the caller. The
/// pre-battle health and mana are kept so a retry after defeat starts from
/// the same pools.
#[derive(Debug, Clone)]
pub struct BattleSession {
    player: Combatant,
    enemy: Combatant,
    phase: BattlePhase,
    turn: Turn,
    log: BattleLog,
    starting_health: u32,
    starting_mana: u32,
    quest_min_level: u32,
}

impl BattleSession {
    /// Open a session for a character on a quest, generating the enemy.
    pub fn new(character: &Character, quest: &Quest, rng: &mut dyn BattleRng) -> Self {
        let player = Combatant::from_character(character);
        let starting_health = player.health();
        let starting_mana = player.mana();

        let mut session = Self {
            player,
            enemy: generate_enemy(quest.min_level, rng),
            phase: BattlePhase::Intro,
            turn: Turn::Player,
            log: BattleLog::new(),
            starting_health,
            starting_mana,
            quest_min_level: quest.min_level,
        };
        session.announce_enemy();
        session
    }

    fn announce_enemy(&mut self) {
        self.log.push(
            format!(
                "A wild {} (Level {}) appears!",
                self.enemy.name(),
                self.enemy.level()
            ),
            LogSource::System,
        );
    }

    // === Accessors ===

    #[inline]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[inline]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    #[inline]
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    #[inline]
    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// True when the session will accept a player action.
    pub fn awaiting_player_action(&self) -> bool {
        self.phase == BattlePhase::Battle && self.turn == Turn::Player
    }

    // === Transitions ===

    /// Leave the intro screen and begin the action loop.
    pub fn start(&mut self) -> Result<(), BattleError> {
        match self.phase {
            BattlePhase::Intro => {
                self.phase = BattlePhase::Battle;
                Ok(())
            }
            other => Err(BattleError::WrongPhase(other)),
        }
    }

    /// Submit a player action.
    ///
    /// Valid only in the battle phase on the player's turn. A lethal action
    /// moves the phase to victory and the enemy does not act; otherwise the
    /// turn passes to the enemy.
    pub fn player_action(
        &mut self,
        action: PlayerAction,
        rng: &mut dyn BattleRng,
    ) -> Result<ActionReport, BattleError> {
        if self.phase != BattlePhase::Battle {
            return Err(BattleError::WrongPhase(self.phase));
        }
        if self.turn != Turn::Player {
            return Err(BattleError::NotPlayersTurn);
        }

        let mut report = ActionReport {
            action,
            damage_dealt: None,
            health_restored: None,
            enemy_defeated: false,
        };

        match action {
            PlayerAction::Attack => {
                let damage = resolve_damage(&self.player, &self.enemy, AttackKind::Normal, rng);
                self.enemy.take_damage(damage);
                self.log.push_damage(
                    format!("{} attacks for {} damage!", self.player.name(), damage),
                    LogSource::Player,
                    damage,
                );
                report.damage_dealt = Some(damage);
            }
            PlayerAction::SpecialAttack => {
                if !self.player.spend_mana(SPECIAL_ATTACK_COST) {
                    return Err(BattleError::NotEnoughMana {
                        required: SPECIAL_ATTACK_COST,
                        available: self.player.mana(),
                    });
                }
                let damage = resolve_damage(&self.player, &self.enemy, AttackKind::Special, rng);
                self.enemy.take_damage(damage);
                self.log.push_damage(
                    format!(
                        "{} uses special attack for {} damage!",
                        self.player.name(),
                        damage
                    ),
                    LogSource::Player,
                    damage,
                );
                report.damage_dealt = Some(damage);
            }
            PlayerAction::Heal => {
                if !self.player.spend_mana(HEAL_COST) {
                    return Err(BattleError::NotEnoughMana {
                        required: HEAL_COST,
                        available: self.player.mana(),
                    });
                }
                let amount = (f64::from(self.player.max_health()) * HEAL_FRACTION).floor() as u32;
                self.player.heal(amount);
                self.log.push(
                    format!("{} heals for {} HP!", self.player.name(), amount),
                    LogSource::Player,
                );
                report.health_restored = Some(amount);
            }
        }

        if self.enemy.is_defeated() {
            self.phase = BattlePhase::Victory;
            report.enemy_defeated = true;
        } else {
            self.turn = Turn::Enemy;
        }
        Ok(report)
    }

    /// Resolve the enemy's pending turn.
    ///
    /// The enemy uses its heavy attack 30% of the time, a normal attack
    /// otherwise. If the player falls, the phase moves to defeat; otherwise
    /// control returns to the player.
    pub fn resolve_enemy_turn(
        &mut self,
        rng: &mut dyn BattleRng,
    ) -> Result<EnemyTurnReport, BattleError> {
        if self.phase != BattlePhase::Battle {
            return Err(BattleError::WrongPhase(self.phase));
        }
        if self.turn != Turn::Enemy {
            return Err(BattleError::NoEnemyTurnPending);
        }

        let special = rng.enemy_goes_special();
        let kind = if special {
            AttackKind::Special
        } else {
            AttackKind::Normal
        };
        let damage = resolve_damage(&self.enemy, &self.player, kind, rng);
        self.player.take_damage(damage);

        let message = if special {
            format!(
                "{} uses a powerful attack for {} damage!",
                self.enemy.name(),
                damage
            )
        } else {
            format!("{} attacks for {} damage!", self.enemy.name(), damage)
        };
        self.log.push_damage(message, LogSource::Enemy, damage);

        let player_defeated = self.player.is_defeated();
        if player_defeated {
            self.phase = BattlePhase::Defeat;
        } else {
            self.turn = Turn::Player;
        }

        Ok(EnemyTurnReport {
            special,
            damage_dealt: damage,
            player_defeated,
        })
    }

    /// Retry after a defeat.
    ///
    /// Restores the player's pools to their pre-battle values, clears the
    /// log, and generates a fresh enemy for the same quest. The session
    /// returns to the intro phase.
    pub fn restart(&mut self, rng: &mut dyn BattleRng) -> Result<(), BattleError> {
        if self.phase != BattlePhase::Defeat {
            return Err(BattleError::WrongPhase(self.phase));
        }

        self.player
            .reset_pools(self.starting_health, self.starting_mana);
        self.log.clear();
        self.enemy = generate_enemy(self.quest_min_level, rng);
        self.phase = BattlePhase::Intro;
        self.turn = Turn::Player;
        self.announce_enemy();
        Ok(())
    }

    /// Append a system line (victory summaries, persistence notices).
    pub fn log_system(&mut self, message: impl Into<String>) {
        self.log.push(message, LogSource::System);
    }
}
