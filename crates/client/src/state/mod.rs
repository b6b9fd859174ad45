//! Client session state
//!
//! The working set a signed-in player carries between screens: profile,
//! characters, quests, and the shop catalog. One logical actor mutates it at
//! a time (the client is single-threaded and cooperative), so this is a plain
//! owned struct rather than anything synchronized.

use emberquest_domain::{Character, CharacterId, Item, Profile, Quest};

use crate::application::error::ServiceError;

/// Everything the client holds in memory for the current sign-in.
#[derive(Debug, Default)]
pub struct GameSession {
    profile: Option<Profile>,
    characters: Vec<Character>,
    selected_character: Option<CharacterId>,
    quests: Vec<Quest>,
    items: Vec<Item>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    // === Profile ===

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn profile_mut(&mut self) -> Option<&mut Profile> {
        self.profile.as_mut()
    }

    pub fn set_profile(&mut self, profile: Option<Profile>) {
        self.profile = profile;
    }

    // === Characters ===

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn set_characters(&mut self, characters: Vec<Character>) {
        self.characters = characters;
        // Drop a selection that no longer resolves.
        if let Some(id) = self.selected_character {
            if !self.characters.iter().any(|c| c.id() == id) {
                self.selected_character = None;
            }
        }
    }

    pub fn add_character(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Replace a character in place (after a victory or a reload). The
    /// selection follows the id, as in the store it mirrors.
    pub fn update_character(&mut self, character: Character) {
        if let Some(slot) = self.characters.iter_mut().find(|c| c.id() == character.id()) {
            *slot = character;
        }
    }

    pub fn select_character(&mut self, id: CharacterId) -> bool {
        if self.characters.iter().any(|c| c.id() == id) {
            self.selected_character = Some(id);
            true
        } else {
            false
        }
    }

    pub fn selected_character(&self) -> Option<&Character> {
        let id = self.selected_character?;
        self.characters.iter().find(|c| c.id() == id)
    }

    /// The selected character, or the rejection the action handlers no-op on.
    pub fn require_selected_character(&self) -> Result<&Character, ServiceError> {
        self.selected_character()
            .ok_or(ServiceError::NoCharacterSelected)
    }

    // === Quests and items ===

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn set_quests(&mut self, quests: Vec<Quest>) {
        self.quests = quests;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Drop everything (sign-out).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use emberquest_domain::{CharacterClass, CharacterName, ProfileId};

    fn character(name: &str) -> Character {
        let name = CharacterName::new(name).expect("valid name");
        Character::create(ProfileId::new(), name, CharacterClass::Warrior, Utc::now())
    }

    #[test]
    fn selection_requires_a_known_character() {
        let mut session = GameSession::new();
        assert!(!session.select_character(CharacterId::new()));

        let hero = character("Aldric");
        let id = hero.id();
        session.add_character(hero);
        assert!(session.select_character(id));
        assert_eq!(
            session.selected_character().map(|c| c.name().as_str()),
            Some("Aldric")
        );
    }

    #[test]
    fn update_character_keeps_the_selection() {
        let mut session = GameSession::new();
        let hero = character("Aldric");
        let id = hero.id();
        session.add_character(hero.clone());
        session.select_character(id);

        let mut grown = hero;
        grown.gain_experience(100);
        grown.level_up_if_due();
        session.update_character(grown);

        let selected = session.selected_character().expect("still selected");
        assert_eq!(selected.level(), 2);
    }

    #[test]
    fn replacing_the_roster_clears_a_dangling_selection() {
        let mut session = GameSession::new();
        let hero = character("Aldric");
        let id = hero.id();
        session.add_character(hero);
        session.select_character(id);

        session.set_characters(vec![character("Mira")]);
        assert!(session.selected_character().is_none());
    }

    #[test]
    fn require_selected_character_rejects_when_nothing_is_selected() {
        let session = GameSession::new();
        let err = session.require_selected_character().unwrap_err();
        assert_eq!(err, ServiceError::NoCharacterSelected);
        assert!(err.is_silent_rejection());
    }

    #[test]
    fn clear_drops_the_working_set() {
        let mut session = GameSession::new();
        session.add_character(character("Aldric"));
        session.clear();
        assert!(session.characters().is_empty());
        assert!(session.profile().is_none());
    }
}
