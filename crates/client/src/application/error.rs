//! Application-level error taxonomy
//!
//! Three shapes, none fatal to the surrounding application:
//! - validation-shaped rejections (`Battle`, and the precondition variants):
//!   the UI disables the control, so callers treat them as silent no-ops
//! - store failures: caught, logged, surfaced as a non-blocking notification
//! - domain faults: programming or data errors, logged

use emberquest_domain::{BattleError, DomainError};
use thiserror::Error;

use crate::ports::outbound::StoreError;

/// Error type returned by every application service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("no character selected")]
    NoCharacterSelected,

    #[error("character must be level {required} or higher")]
    CharacterBelowLevel { required: u32 },

    #[error("quest already completed")]
    QuestAlreadyCompleted,

    #[error("not enough gold: {needed} more required")]
    NotEnoughGold { needed: u32 },
}

impl ServiceError {
    /// True for rejections the UI handles by disabling controls, not by
    /// showing an error.
    pub fn is_silent_rejection(&self) -> bool {
        matches!(
            self,
            ServiceError::Battle(_)
                | ServiceError::NoCharacterSelected
                | ServiceError::CharacterBelowLevel { .. }
                | ServiceError::NotEnoughGold { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battle_rejections_are_silent() {
        let err = ServiceError::from(BattleError::NotPlayersTurn);
        assert!(err.is_silent_rejection());
    }

    #[test]
    fn store_failures_are_surfaced() {
        let err = ServiceError::from(StoreError::Unavailable("timeout".into()));
        assert!(!err.is_silent_rejection());
    }
}
