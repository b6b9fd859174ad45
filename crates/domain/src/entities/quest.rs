//! Quest entity and acceptance records
//!
//! Quests are authored content, read-only to the client: the battle flow
//! consumes the minimum level and the reward bundle, nothing else. A
//! `QuestAcceptance` row tracks one character's progress through one quest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, QuestId};
use crate::value_objects::{Difficulty, QuestRewards};

/// An authored quest
///
/// This is a data-carrying struct with no invariants to protect: any
/// combination of values the store hands back is valid, so fields are public.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Minimum character level required to accept the quest
    pub min_level: u32,
    #[serde(default)]
    pub rewards: QuestRewards,
    /// Whether the quest is currently offered
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Quest {
    pub fn new(title: impl Into<String>, min_level: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: QuestId::new(),
            title: title.into(),
            description: String::new(),
            difficulty: Difficulty::default(),
            min_level,
            rewards: QuestRewards::default(),
            is_active: true,
            created_at: now,
        }
    }

    pub fn with_rewards(mut self, rewards: QuestRewards) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// One character's acceptance of one quest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestAcceptance {
    pub character_id: CharacterId,
    pub quest_id: QuestId,
    pub completed: bool,
    pub accepted_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl QuestAcceptance {
    pub fn new(character_id: CharacterId, quest_id: QuestId, now: DateTime<Utc>) -> Self {
        Self {
            character_id,
            quest_id,
            completed: false,
            accepted_at: now,
            completed_at: None,
        }
    }

    /// Mark the acceptance completed at the given time.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(now);
    }
}
