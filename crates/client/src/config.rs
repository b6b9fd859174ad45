//! Client configuration
//!
//! Read from the environment (with `.env` support). Missing store settings
//! are a warning rather than a failure: the UI shows a setup notice and runs
//! without persistence, matching how the hosted app behaves before its
//! backend is provisioned.

use std::time::Duration;

/// Milliseconds to wait for a store call before giving up.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Milliseconds between a player action and the enemy's answer.
const DEFAULT_TURN_DELAY_MS: u64 = 1_000;

/// Environment-driven client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the hosted store.
    pub store_url: Option<String>,
    /// Publishable anon key for row-level-security access.
    pub anon_key: Option<String>,
    pub request_timeout_ms: u64,
    pub turn_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            store_url: None,
            anon_key: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            turn_delay_ms: DEFAULT_TURN_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Load from `EMBERQUEST_*` environment variables, reading `.env` first.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let config = Self {
            store_url: read_var("EMBERQUEST_STORE_URL"),
            anon_key: read_var("EMBERQUEST_ANON_KEY"),
            request_timeout_ms: read_ms("EMBERQUEST_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS),
            turn_delay_ms: read_ms("EMBERQUEST_TURN_DELAY_MS", DEFAULT_TURN_DELAY_MS),
        };

        if !config.is_store_configured() {
            tracing::warn!(
                "missing store environment variables; set EMBERQUEST_STORE_URL and \
                 EMBERQUEST_ANON_KEY to enable persistence"
            );
        }
        config
    }

    /// Both store settings are present.
    pub fn is_store_configured(&self) -> bool {
        self.store_url.is_some() && self.anon_key.is_some()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn read_ms(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
