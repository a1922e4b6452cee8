//! Game configuration
//!
//! Arena size and tick interval are the only tunable parameters. On the web
//! they are read from an embedded JSON `<script id="snake-config">` element.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Externally tunable game parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid dimension (N x N)
    pub arena_size: i32,
    /// Milliseconds between ticks
    pub tick_interval_ms: u32,
    /// Fixed RNG seed; the platform picks one when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_size: DEFAULT_ARENA_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// DOM element holding the JSON config (used only in wasm32)
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "snake-config";

    /// Parse from JSON; missing fields take their defaults, values are clamped
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Clamp values into a playable range
    pub fn sanitized(mut self) -> Self {
        let size = self.arena_size.clamp(MIN_ARENA_SIZE, MAX_ARENA_SIZE);
        if size != self.arena_size {
            log::warn!("Arena size {} out of range, using {}", self.arena_size, size);
            self.arena_size = size;
        }

        let interval = self.tick_interval_ms.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        if interval != self.tick_interval_ms {
            log::warn!("Tick interval {}ms out of range, using {}ms", self.tick_interval_ms, interval);
            self.tick_interval_ms = interval;
        }

        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }

    /// Configured seed, or `fallback` (typically the current time)
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from page: {:?}", config);
                    return config;
                }
                Err(e) => log::warn!("Invalid config JSON: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from an optional JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
