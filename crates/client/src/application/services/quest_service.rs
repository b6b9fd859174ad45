//! Quest service - listing quests and accepting them for a character

use std::sync::Arc;

use chrono::{DateTime, Utc};
use emberquest_domain::{Character, Quest, QuestAcceptance};

use crate::application::error::ServiceError;
use crate::ports::outbound::QuestStore;

/// How an accept request resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStartOutcome {
    /// A new acceptance row was written.
    Accepted,
    /// The character had already accepted this quest; resume it.
    Resumed,
}

/// Use cases around quests and acceptance records.
#[derive(Clone)]
pub struct QuestService {
    quests: Arc<dyn QuestStore>,
}

impl QuestService {
    pub fn new(quests: Arc<dyn QuestStore>) -> Self {
        Self { quests }
    }

    /// All quests currently offered.
    pub async fn list_quests(&self) -> Result<Vec<Quest>, ServiceError> {
        Ok(self.quests.list_active().await?)
    }

    /// Accept a quest for a character, or resume an earlier acceptance.
    ///
    /// Rejects characters below the quest's minimum level, and quests the
    /// character already completed.
    pub async fn accept_quest(
        &self,
        character: &Character,
        quest: &Quest,
        now: DateTime<Utc>,
    ) -> Result<QuestStartOutcome, ServiceError> {
        if character.level() < quest.min_level {
            return Err(ServiceError::CharacterBelowLevel {
                required: quest.min_level,
            });
        }

        if let Some(acceptance) = self
            .quests
            .get_acceptance(character.id(), quest.id)
            .await?
        {
            if acceptance.completed {
                return Err(ServiceError::QuestAlreadyCompleted);
            }
            tracing::debug!(quest_id = %quest.id, "resuming accepted quest");
            return Ok(QuestStartOutcome::Resumed);
        }

        let acceptance = QuestAcceptance::new(character.id(), quest.id, now);
        self.quests.insert_acceptance(&acceptance).await?;
        tracing::info!(quest_id = %quest.id, character_id = %character.id(), "quest accepted");
        Ok(QuestStartOutcome::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockQuestStore;
    use emberquest_domain::{CharacterClass, CharacterName, ProfileId};

    fn character() -> Character {
        let name = CharacterName::new("Aldric").expect("valid name");
        Character::create(ProfileId::new(), name, CharacterClass::Warrior, Utc::now())
    }

    #[tokio::test]
    async fn accepting_a_new_quest_writes_an_acceptance() {
        let hero = character();
        let quest = Quest::new("Rat Hunt", 1, Utc::now());

        let mut store = MockQuestStore::new();
        store.expect_get_acceptance().returning(|_, _| Ok(None));
        store
            .expect_insert_acceptance()
            .withf(|a: &QuestAcceptance| !a.completed)
            .times(1)
            .returning(|_| Ok(()));

        let svc = QuestService::new(Arc::new(store));
        let outcome = svc
            .accept_quest(&hero, &quest, Utc::now())
            .await
            .expect("accepted");
        assert_eq!(outcome, QuestStartOutcome::Accepted);
    }

    #[tokio::test]
    async fn an_open_acceptance_resumes_instead_of_duplicating() {
        let hero = character();
        let quest = Quest::new("Rat Hunt", 1, Utc::now());
        let existing = QuestAcceptance::new(hero.id(), quest.id, Utc::now());

        let mut store = MockQuestStore::new();
        store
            .expect_get_acceptance()
            .returning(move |_, _| Ok(Some(existing.clone())));
        store.expect_insert_acceptance().times(0);

        let svc = QuestService::new(Arc::new(store));
        let outcome = svc
            .accept_quest(&hero, &quest, Utc::now())
            .await
            .expect("resumed");
        assert_eq!(outcome, QuestStartOutcome::Resumed);
    }

    #[tokio::test]
    async fn a_completed_quest_cannot_be_taken_again() {
        let hero = character();
        let quest = Quest::new("Rat Hunt", 1, Utc::now());
        let mut done = QuestAcceptance::new(hero.id(), quest.id, Utc::now());
        done.complete(Utc::now());

        let mut store = MockQuestStore::new();
        store
            .expect_get_acceptance()
            .returning(move |_, _| Ok(Some(done.clone())));

        let svc = QuestService::new(Arc::new(store));
        let err = svc.accept_quest(&hero, &quest, Utc::now()).await.unwrap_err();
        assert_eq!(err, ServiceError::QuestAlreadyCompleted);
    }

    #[tokio::test]
    async fn level_gate_rejects_before_touching_the_store() {
        let hero = character();
        let quest = Quest::new("Dragon's Lair", 10, Utc::now());

        let mut store = MockQuestStore::new();
        store.expect_get_acceptance().times(0);

        let svc = QuestService::new(Arc::new(store));
        let err = svc.accept_quest(&hero, &quest, Utc::now()).await.unwrap_err();
        assert_eq!(err, ServiceError::CharacterBelowLevel { required: 10 });
    }
}
