//! Shop service - item catalog and purchases
//!
//! The purchase itself is one atomic server-side procedure. After it
//! succeeds the local profile copy is updated optimistically; a failed call
//! leaves local state untouched.

use std::sync::Arc;

use emberquest_domain::{Character, Item, Profile};

use crate::application::error::ServiceError;
use crate::ports::outbound::{ItemStore, PurchaseRpc};

/// Use cases around the item shop.
#[derive(Clone)]
pub struct ShopService {
    items: Arc<dyn ItemStore>,
    purchases: Arc<dyn PurchaseRpc>,
}

impl ShopService {
    pub fn new(items: Arc<dyn ItemStore>, purchases: Arc<dyn PurchaseRpc>) -> Self {
        Self { items, purchases }
    }

    /// The full shop catalog.
    pub async fn list_items(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(self.items.list().await?)
    }

    /// Buy an item for the selected character.
    ///
    /// The gold check here is a courtesy gate so the UI can fail fast; the
    /// server-side procedure re-checks under its own transaction and is the
    /// authority.
    pub async fn purchase(
        &self,
        profile: &mut Profile,
        character: &Character,
        item: &Item,
    ) -> Result<(), ServiceError> {
        if profile.gold() < item.price {
            return Err(ServiceError::NotEnoughGold {
                needed: item.price - profile.gold(),
            });
        }

        self.purchases
            .purchase_item(profile.id(), item.id, item.price, character.id())
            .await?;

        // The procedure committed; mirror the deduction locally.
        profile.spend_gold(item.price)?;
        tracing::info!(item_id = %item.id, price = item.price, "item purchased");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockItemStore, MockPurchaseRpc, StoreError};
    use chrono::Utc;
    use emberquest_domain::{
        CharacterClass, CharacterName, ItemId, ProfileId, Rarity, UserId, Username,
    };

    fn profile_with_gold(gold: u32) -> Profile {
        let username = Username::new("player_one").expect("valid username");
        Profile::new(UserId::new(), username, Utc::now()).with_gold(gold)
    }

    fn character() -> Character {
        let name = CharacterName::new("Aldric").expect("valid name");
        Character::create(ProfileId::new(), name, CharacterClass::Warrior, Utc::now())
    }

    fn sword(price: u32) -> Item {
        Item {
            id: ItemId::new(),
            name: "Iron Sword".into(),
            description: None,
            item_type: "weapon".into(),
            rarity: Rarity::Common,
            attack_bonus: 3,
            defense_bonus: 0,
            health_bonus: 0,
            mana_bonus: 0,
            speed_bonus: 0,
            price,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn purchase_calls_the_procedure_and_deducts_gold() {
        let mut profile = profile_with_gold(100);
        let hero = character();
        let item = sword(30);

        let items = MockItemStore::new();
        let mut rpc = MockPurchaseRpc::new();
        rpc.expect_purchase_item()
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let svc = ShopService::new(Arc::new(items), Arc::new(rpc));
        svc.purchase(&mut profile, &hero, &item)
            .await
            .expect("purchased");

        assert_eq!(profile.gold(), 70);
    }

    #[tokio::test]
    async fn insufficient_gold_fails_fast_without_calling_the_store() {
        let mut profile = profile_with_gold(10);
        let hero = character();
        let item = sword(30);

        let items = MockItemStore::new();
        let mut rpc = MockPurchaseRpc::new();
        rpc.expect_purchase_item().times(0);

        let svc = ShopService::new(Arc::new(items), Arc::new(rpc));
        let err = svc.purchase(&mut profile, &hero, &item).await.unwrap_err();

        assert_eq!(err, ServiceError::NotEnoughGold { needed: 20 });
        assert_eq!(profile.gold(), 10);
    }

    #[tokio::test]
    async fn a_rejected_procedure_leaves_local_gold_untouched() {
        let mut profile = profile_with_gold(100);
        let hero = character();
        let item = sword(30);

        let items = MockItemStore::new();
        let mut rpc = MockPurchaseRpc::new();
        rpc.expect_purchase_item()
            .returning(|_, _, _, _| Err(StoreError::Denied("balance check failed".into())));

        let svc = ShopService::new(Arc::new(items), Arc::new(rpc));
        let err = svc.purchase(&mut profile, &hero, &item).await.unwrap_err();

        assert!(matches!(err, ServiceError::Store(StoreError::Denied(_))));
        assert_eq!(profile.gold(), 100);
    }
}
