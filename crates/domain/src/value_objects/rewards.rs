//! Quest reward bundles
//!
//! Reward columns are nullable in the hosted store; each component falls back
//! to a fixed default when absent.

use serde::{Deserialize, Serialize};

/// Experience granted when a quest row carries no explicit value.
pub const DEFAULT_EXPERIENCE_REWARD: u32 = 50;

/// Gold granted when a quest row carries no explicit value.
pub const DEFAULT_GOLD_REWARD: u32 = 100;

/// Gems granted when a quest row carries no explicit value.
pub const DEFAULT_GEMS_REWARD: u32 = 0;

/// Reward bundle attached to a quest.
///
/// Fields are optional to mirror the store rows; use the `*_or_default`
/// accessors when applying a victory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRewards {
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub gold: Option<u32>,
    #[serde(default)]
    pub gems: Option<u32>,
}

impl QuestRewards {
    pub fn new(experience: u32, gold: u32, gems: u32) -> Self {
        Self {
            experience: Some(experience),
            gold: Some(gold),
            gems: Some(gems),
        }
    }

    pub fn experience_or_default(&self) -> u32 {
        self.experience.unwrap_or(DEFAULT_EXPERIENCE_REWARD)
    }

    pub fn gold_or_default(&self) -> u32 {
        self.gold.unwrap_or(DEFAULT_GOLD_REWARD)
    }

    pub fn gems_or_default(&self) -> u32 {
        self.gems.unwrap_or(DEFAULT_GEMS_REWARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bundle_falls_back_to_defaults() {
        let rewards = QuestRewards::default();
        assert_eq!(rewards.experience_or_default(), 50);
        assert_eq!(rewards.gold_or_default(), 100);
        assert_eq!(rewards.gems_or_default(), 0);
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let rewards = QuestRewards::new(75, 10, 3);
        assert_eq!(rewards.experience_or_default(), 75);
        assert_eq!(rewards.gold_or_default(), 10);
        assert_eq!(rewards.gems_or_default(), 3);
    }

    #[test]
    fn missing_json_fields_deserialize_as_none() {
        let rewards: QuestRewards = serde_json::from_str("{\"gold\": 250}").expect("deserialize");
        assert_eq!(rewards.gold, Some(250));
        assert_eq!(rewards.experience, None);
        assert_eq!(rewards.experience_or_default(), 50);
    }
}
