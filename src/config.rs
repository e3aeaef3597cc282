//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::types::TICK_MS;

const DEFAULT_KEY_RELEASE_MS: u32 = 150;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Longest wait for input per frame; `0` runs uncapped.
    pub frame_ms: u32,
    /// Forward-key auto-release for terminals without release events.
    pub key_release_ms: u32,
    /// JSON tile map replacing the built-in grass field.
    pub map_path: Option<PathBuf>,
    /// JSON-lines journal; `None` disables journaling.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_ms: TICK_MS,
            key_release_ms: DEFAULT_KEY_RELEASE_MS,
            map_path: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let frame_ms = lookup("TANKS_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.frame_ms);

        let key_release_ms = lookup("TANKS_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.key_release_ms);

        Self {
            frame_ms,
            key_release_ms,
            map_path: non_empty_path(lookup("TANKS_MAP_PATH")),
            log_path: non_empty_path(lookup("TANKS_LOG_PATH")),
        }
    }
}

fn non_empty_path(v: Option<String>) -> Option<PathBuf> {
    v.map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
}
