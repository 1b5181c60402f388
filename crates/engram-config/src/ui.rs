use std::env;

use serde::{Deserialize, Serialize};

fn default_auto_advance_ms() -> u64 {
    1000
}

fn default_tick_rate_ms() -> u64 {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before a correct spelling answer advances to the next card.
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Event poll timeout for the main loop.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl UiConfig {
    pub fn new() -> Self {
        let auto_advance_ms = env::var("ENGRAM_AUTO_ADVANCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_auto_advance_ms);

        let tick_rate_ms = env::var("ENGRAM_TICK_RATE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_tick_rate_ms);

        UiConfig {
            auto_advance_ms,
            tick_rate_ms,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
