//! Profile row storage port

use async_trait::async_trait;
use emberquest_domain::{Profile, UserId};

use super::error::StoreError;

/// Access to the profiles table.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile owned by an authenticated user, if one exists yet.
    ///
    /// A missing row is normal right after sign-up: the backend trigger that
    /// creates the profile may still be running.
    async fn get_by_user(&self, user_id: UserId) -> Result<Option<Profile>, StoreError>;

    /// Save the profile's current state over its row.
    async fn update(&self, profile: &Profile) -> Result<(), StoreError>;
}
