//! Quest and quest-acceptance storage port

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use emberquest_domain::{CharacterId, Quest, QuestAcceptance, QuestId};

use super::error::StoreError;

/// Access to the quests and character_quests tables.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait QuestStore: Send + Sync {
    /// All quests currently offered.
    async fn list_active(&self) -> Result<Vec<Quest>, StoreError>;

    /// One character's acceptance record for one quest, if any.
    async fn get_acceptance(
        &self,
        character_id: CharacterId,
        quest_id: QuestId,
    ) -> Result<Option<QuestAcceptance>, StoreError>;

    /// Record that a character accepted a quest.
    async fn insert_acceptance(&self, acceptance: &QuestAcceptance) -> Result<(), StoreError>;

    /// Mark an acceptance completed with its completion timestamp.
    async fn mark_completed(
        &self,
        character_id: CharacterId,
        quest_id: QuestId,
        completed_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}
