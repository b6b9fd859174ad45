//! EmberQuest client - application services, store ports, and session state
//!
//! The domain crate owns the rules; this crate owns the edges: outbound
//! ports to the hosted store (row storage behind row-level security, plus
//! the purchase stored procedure), the services that drive use cases over
//! them, the signed-in session's working set, and process configuration.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;

pub use application::error::ServiceError;
pub use application::services::{
    ActionOutcome, BattleService, CharacterService, PersistOutcome, QuestService,
    QuestStartOutcome, ShopService, VictoryReport,
};
pub use config::ClientConfig;
pub use infrastructure::DiceRng;
pub use ports::outbound::{
    CharacterStore, ItemStore, ProfileStore, PurchaseRpc, QuestStore, StoreError,
};
pub use state::GameSession;
