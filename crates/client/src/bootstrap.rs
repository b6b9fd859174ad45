//! Process bootstrap helpers for binaries embedding the client

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ClientConfig;

/// Initialize logging from `RUST_LOG`, defaulting to info for our crates.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emberquest_client=info,emberquest_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize logging and load configuration.
pub fn bootstrap() -> anyhow::Result<ClientConfig> {
    init_tracing();
    let config = ClientConfig::from_env();
    tracing::info!(
        store_configured = config.is_store_configured(),
        "EmberQuest client starting"
    );
    Ok(config)
}
