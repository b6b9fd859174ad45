//! Character row storage port

use async_trait::async_trait;
use emberquest_domain::{Character, CharacterId, ProfileId};

use super::error::StoreError;

/// Access to the characters table.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Fetch one character row. `Ok(None)` when no row matches.
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError>;

    /// All characters owned by a profile.
    async fn list_for_profile(&self, profile_id: ProfileId) -> Result<Vec<Character>, StoreError>;

    /// Insert a freshly created character.
    async fn insert(&self, character: &Character) -> Result<(), StoreError>;

    /// Save the character's current state over its row.
    async fn update(&self, character: &Character) -> Result<(), StoreError>;
}
