//! Character service - creating and listing a profile's characters

use std::sync::Arc;

use chrono::{DateTime, Utc};
use emberquest_domain::{Character, CharacterClass, CharacterId, CharacterName, Profile, ProfileId};

use crate::application::error::ServiceError;
use crate::ports::outbound::CharacterStore;

/// Use cases around character rows.
#[derive(Clone)]
pub struct CharacterService {
    characters: Arc<dyn CharacterStore>,
}

impl CharacterService {
    pub fn new(characters: Arc<dyn CharacterStore>) -> Self {
        Self { characters }
    }

    /// Create a level-1 character of the chosen class and persist it.
    pub async fn create_character(
        &self,
        profile: &Profile,
        name: &str,
        class: CharacterClass,
        now: DateTime<Utc>,
    ) -> Result<Character, ServiceError> {
        let name = CharacterName::new(name)?;
        let character = Character::create(profile.id(), name, class, now);
        self.characters.insert(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            class = %class,
            "character created"
        );
        Ok(character)
    }

    /// All characters owned by a profile.
    pub async fn list_for_profile(
        &self,
        profile_id: ProfileId,
    ) -> Result<Vec<Character>, ServiceError> {
        Ok(self.characters.list_for_profile(profile_id).await?)
    }

    /// Re-read one character row (used to seed a battle session).
    pub async fn get(&self, id: CharacterId) -> Result<Option<Character>, ServiceError> {
        Ok(self.characters.get(id).await?)
    }
}
