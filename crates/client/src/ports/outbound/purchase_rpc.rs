//! Purchase stored-procedure port
//!
//! Purchases are a single atomic call into an opaque server-side procedure
//! that checks the balance, deducts the price, and grants the item under one
//! transaction. The client treats it as all-or-nothing.

use async_trait::async_trait;
use emberquest_domain::{CharacterId, ItemId, ProfileId};

use super::error::StoreError;

/// The purchase_item stored procedure.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PurchaseRpc: Send + Sync {
    /// Buy one item for a character, paying from the profile's gold.
    async fn purchase_item(
        &self,
        profile_id: ProfileId,
        item_id: ItemId,
        price: u32,
        character_id: CharacterId,
    ) -> Result<(), StoreError>;
}
