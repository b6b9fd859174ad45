//! Battle service - drives battle sessions and settles victories
//!
//! The domain session decides everything about the fight; this service adds
//! the two async concerns around it: a pacing delay before the enemy acts
//! (animation time, zero under test), and persistence of a victory's results.
//!
//! Persistence is optimistic and never rolled back: rewards and level-ups are
//! applied in memory first, then written out. A failed write is reported in
//! the result as [`PersistOutcome::Unsaved`] so the UI can show a
//! non-blocking notice while the session keeps its victory state.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use emberquest_domain::{
    apply_victory, ActionReport, BattleError, BattlePhase, BattleRng, BattleSession, Character,
    EnemyTurnReport, PlayerAction, Profile, Quest, VictorySummary,
};

use crate::application::error::ServiceError;
use crate::ports::outbound::{CharacterStore, ProfileStore, QuestStore, StoreError};

/// Result of one submitted player action, including the enemy's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was lethal; the enemy never acted. Settle the victory with
    /// [`BattleService::complete_victory`].
    EnemyDefeated { player: ActionReport },
    /// Both sides acted and the battle continues.
    Exchange {
        player: ActionReport,
        enemy: EnemyTurnReport,
    },
    /// The enemy's answer felled the player.
    PlayerDefeated {
        player: ActionReport,
        enemy: EnemyTurnReport,
    },
}

/// Whether a victory's results reached the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Character, profile, and quest completion all written.
    Saved,
    /// A write failed; the in-memory state stands and nothing was rolled
    /// back. Surface as a non-blocking notification.
    Unsaved(StoreError),
}

/// A settled victory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryReport {
    pub summary: VictorySummary,
    pub persistence: PersistOutcome,
}

/// Drives [`BattleSession`] values and settles their outcomes.
#[derive(Clone)]
pub struct BattleService {
    characters: Arc<dyn CharacterStore>,
    profiles: Arc<dyn ProfileStore>,
    quests: Arc<dyn QuestStore>,
    turn_delay: Duration,
}

impl BattleService {
    pub fn new(
        characters: Arc<dyn CharacterStore>,
        profiles: Arc<dyn ProfileStore>,
        quests: Arc<dyn QuestStore>,
        turn_delay: Duration,
    ) -> Self {
        Self {
            characters,
            profiles,
            quests,
            turn_delay,
        }
    }

    /// Submit a player action and, when the battle continues, resolve the
    /// enemy's answer after the pacing delay.
    pub async fn submit_action(
        &self,
        session: &mut BattleSession,
        action: PlayerAction,
        rng: &mut dyn BattleRng,
    ) -> Result<ActionOutcome, ServiceError> {
        let player = session.player_action(action, rng)?;
        if player.enemy_defeated {
            tracing::info!(enemy = session.enemy().name(), "enemy defeated");
            return Ok(ActionOutcome::EnemyDefeated { player });
        }

        // Pacing only; correctness never depends on this delay.
        tokio::time::sleep(self.turn_delay).await;

        let enemy = session.resolve_enemy_turn(rng)?;
        if enemy.player_defeated {
            tracing::info!(enemy = session.enemy().name(), "player defeated");
            return Ok(ActionOutcome::PlayerDefeated { player, enemy });
        }
        Ok(ActionOutcome::Exchange { player, enemy })
    }

    /// Apply a victory's rewards and persist the results.
    ///
    /// Valid only when the session reached [`BattlePhase::Victory`]. The
    /// character keeps its battle-end health, gains experience and the single
    /// level-up check, and the profile is credited; then three independent
    /// writes go out: character row, profile row, quest completion mark.
    pub async fn complete_victory(
        &self,
        session: &mut BattleSession,
        character: &mut Character,
        profile: &mut Profile,
        quest: &Quest,
        now: DateTime<Utc>,
    ) -> Result<VictoryReport, ServiceError> {
        if session.phase() != BattlePhase::Victory {
            return Err(BattleError::WrongPhase(session.phase()).into());
        }

        let summary = apply_victory(character, profile, quest, session.player());
        character.touch(now);
        profile.touch(now);
        session.log_system(summary.log_message());
        if summary.leveled_up {
            tracing::info!(level = summary.new_level, "level up");
        }

        let persistence = self.persist_victory(character, profile, quest, now).await;
        Ok(VictoryReport {
            summary,
            persistence,
        })
    }

    async fn persist_victory(
        &self,
        character: &Character,
        profile: &Profile,
        quest: &Quest,
        now: DateTime<Utc>,
    ) -> PersistOutcome {
        let result = async {
            self.characters.update(character).await?;
            self.profiles.update(profile).await?;
            self.quests
                .mark_completed(character.id(), quest.id, now)
                .await?;
            Ok::<(), StoreError>(())
        }
        .await;

        match result {
            Ok(()) => PersistOutcome::Saved,
            Err(error) => {
                tracing::warn!(%error, "failed to save victory progress");
                PersistOutcome::Unsaved(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockCharacterStore, MockProfileStore, MockQuestStore};
    use emberquest_domain::{
        CharacterClass, CharacterName, FixedRng, ProfileId, Turn, UserId, Username,
    };

    fn character() -> Character {
        let name = CharacterName::new("Aldric").expect("valid name");
        Character::create(ProfileId::new(), name, CharacterClass::Warrior, Utc::now())
    }

    fn profile() -> Profile {
        let username = Username::new("player_one").expect("valid username");
        Profile::new(UserId::new(), username, Utc::now())
    }

    fn service(
        characters: MockCharacterStore,
        profiles: MockProfileStore,
        quests: MockQuestStore,
    ) -> BattleService {
        BattleService::new(
            Arc::new(characters),
            Arc::new(profiles),
            Arc::new(quests),
            Duration::ZERO,
        )
    }

    fn passive_service() -> BattleService {
        service(
            MockCharacterStore::new(),
            MockProfileStore::new(),
            MockQuestStore::new(),
        )
    }

    /// Drive a warrior through a goblin fight to victory.
    async fn fight_to_victory(
        svc: &BattleService,
        session: &mut BattleSession,
        rng: &mut FixedRng,
    ) {
        session.start().expect("start");
        loop {
            match svc
                .submit_action(session, PlayerAction::Attack, rng)
                .await
                .expect("action accepted")
            {
                ActionOutcome::EnemyDefeated { .. } => break,
                ActionOutcome::Exchange { .. } => {}
                ActionOutcome::PlayerDefeated { .. } => panic!("warrior should win this one"),
            }
        }
    }

    #[tokio::test]
    async fn an_exchange_resolves_both_turns() {
        let hero = character();
        let quest = Quest::new("Clear the Old Mine", 1, Utc::now());
        let mut rng = FixedRng::default();
        let mut session = BattleSession::new(&hero, &quest, &mut rng);
        session.start().expect("start");

        let svc = passive_service();
        let outcome = svc
            .submit_action(&mut session, PlayerAction::Attack, &mut rng)
            .await
            .expect("accepted");

        match outcome {
            ActionOutcome::Exchange { player, enemy } => {
                assert_eq!(player.damage_dealt, Some(13));
                assert_eq!(enemy.damage_dealt, 6);
            }
            other => panic!("expected an exchange, got {other:?}"),
        }
        assert_eq!(session.turn(), Turn::Player);
    }

    #[tokio::test]
    async fn rejected_actions_surface_as_battle_errors() {
        let hero = character();
        let quest = Quest::new("Clear the Old Mine", 1, Utc::now());
        let mut rng = FixedRng::default();
        let mut session = BattleSession::new(&hero, &quest, &mut rng);
        // Not started: still in the intro phase.

        let svc = passive_service();
        let err = svc
            .submit_action(&mut session, PlayerAction::Attack, &mut rng)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Battle(_)));
        assert!(err.is_silent_rejection());
    }

    #[tokio::test]
    async fn victory_settles_and_persists_three_writes() {
        let mut hero = character();
        let mut owner = profile();
        let quest = Quest::new("Clear the Old Mine", 1, Utc::now());
        let mut rng = FixedRng::default();
        let mut session = BattleSession::new(&hero, &quest, &mut rng);

        let mut characters = MockCharacterStore::new();
        characters.expect_update().times(1).returning(|_| Ok(()));
        let mut profiles = MockProfileStore::new();
        profiles.expect_update().times(1).returning(|_| Ok(()));
        let mut quests = MockQuestStore::new();
        quests
            .expect_mark_completed()
            .times(1)
            .returning(|_, _, _| Ok(()));

        let svc = service(characters, profiles, quests);
        fight_to_victory(&svc, &mut session, &mut rng).await;

        let report = svc
            .complete_victory(&mut session, &mut hero, &mut owner, &quest, Utc::now())
            .await
            .expect("settled");

        assert_eq!(report.persistence, PersistOutcome::Saved);
        assert_eq!(report.summary.rewards.experience, 50);
        assert_eq!(owner.gold(), 100);
        assert_eq!(hero.experience(), 50);
        // The battle log closes with the victory summary.
        let last = session.log().entries().last().expect("log entry");
        assert!(last.message().starts_with("Victory!"));
    }

    #[tokio::test]
    async fn a_failed_write_reports_unsaved_without_rolling_back() {
        let mut hero = character();
        let mut owner = profile();
        let quest = Quest::new("Clear the Old Mine", 1, Utc::now());
        let mut rng = FixedRng::default();
        let mut session = BattleSession::new(&hero, &quest, &mut rng);

        let mut characters = MockCharacterStore::new();
        characters
            .expect_update()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("connection reset".into())));
        // The first write failed, so the later writes never go out.
        let mut profiles = MockProfileStore::new();
        profiles.expect_update().times(0);
        let mut quests = MockQuestStore::new();
        quests.expect_mark_completed().times(0);

        let svc = service(characters, profiles, quests);
        fight_to_victory(&svc, &mut session, &mut rng).await;

        let report = svc
            .complete_victory(&mut session, &mut hero, &mut owner, &quest, Utc::now())
            .await
            .expect("settled in memory");

        assert!(matches!(report.persistence, PersistOutcome::Unsaved(_)));
        // Optimistic policy: the in-memory rewards stand.
        assert_eq!(hero.experience(), 50);
        assert_eq!(owner.gold(), 100);
        assert_eq!(session.phase(), BattlePhase::Victory);
    }

    #[tokio::test]
    async fn complete_victory_requires_the_victory_phase() {
        let mut hero = character();
        let mut owner = profile();
        let quest = Quest::new("Clear the Old Mine", 1, Utc::now());
        let mut rng = FixedRng::default();
        let mut session = BattleSession::new(&hero, &quest, &mut rng);

        let svc = passive_service();
        let err = svc
            .complete_victory(&mut session, &mut hero, &mut owner, &quest, Utc::now())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ServiceError::Battle(BattleError::WrongPhase(BattlePhase::Intro))
        );
    }
}
