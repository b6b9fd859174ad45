//! Item catalog storage port

use async_trait::async_trait;
use emberquest_domain::Item;

use super::error::StoreError;

/// Read access to the items table.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// The full shop catalog.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;
}
