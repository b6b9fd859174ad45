//! Victory resolution - rewards, level-up, and currency credit
//!
//! Pure state transition over the character and profile aggregates. The
//! client persists the result afterwards; persistence failure does not undo
//! what happened here (optimistic, no-rollback policy).

use crate::entities::{Character, Profile, Quest};

use super::combatant::Combatant;

/// Reward bundle with the quest's fallbacks already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictoryRewards {
    pub experience: u32,
    pub gold: u32,
    pub gems: u32,
}

impl VictoryRewards {
    pub fn from_quest(quest: &Quest) -> Self {
        Self {
            experience: quest.rewards.experience_or_default(),
            gold: quest.rewards.gold_or_default(),
            gems: quest.rewards.gems_or_default(),
        }
    }
}

/// What a victory changed, for narration and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictorySummary {
    pub rewards: VictoryRewards,
    pub leveled_up: bool,
    pub new_level: u32,
}

impl VictorySummary {
    /// Log line matching the battle log's victory narration.
    pub fn log_message(&self) -> String {
        let mut message = format!(
            "Victory! Gained {} XP, {} gold",
            self.rewards.experience, self.rewards.gold
        );
        if self.rewards.gems > 0 {
            message.push_str(&format!(", {} gems", self.rewards.gems));
        }
        message.push('!');
        message
    }
}

/// Apply a victory to the character and profile.
///
/// The character keeps the health it ended the battle with, gains the quest's
/// experience, and runs a single level-up check (a level-up fully restores
/// health, overriding the battle result). Mana spent in battle is not carried
/// back to the record. The profile's gold, gems, and experience are credited
/// independently of the character's.
pub fn apply_victory(
    character: &mut Character,
    profile: &mut Profile,
    quest: &Quest,
    final_player: &Combatant,
) -> VictorySummary {
    let rewards = VictoryRewards::from_quest(quest);

    character.set_health(final_player.health());
    character.gain_experience(rewards.experience);
    let leveled_up = character.level_up_if_due();

    profile.credit_rewards(rewards.experience, rewards.gold, rewards.gems);

    VictorySummary {
        rewards,
        leveled_up,
        new_level: character.level(),
    }
}
