//! Session configuration and fixed rule constants.
//!
//! The rules themselves are not configurable: card counts, the room size and
//! the health cap are constants. `SessionConfig` only carries the knobs that
//! change how a session is *run*:
//! - `seed`: fixed seed for a reproducible shuffle (`None` = wall clock)
//! - `debug`: expose the dungeon order in snapshots

use serde::{Deserialize, Serialize};

/// Health cap. Healing never raises health above this.
pub const MAX_HEALTH: i32 = 20;

/// Number of face-up cards in a full room.
pub const ROOM_SIZE: usize = 4;

/// Cards the player resolves before the room is refilled.
pub const RESOLUTIONS_PER_ROOM: u8 = 3;

/// Weapon ceiling before any weapon-assisted kill (highest rank in the deck).
pub const UNRESTRICTED_CEILING: u8 = 14;

/// Environment variable holding a fixed shuffle seed.
pub const SEED_ENV: &str = "SCOUNDREL_SEED";

/// Environment variable enabling debug snapshots.
pub const DEBUG_ENV: &str = "SCOUNDREL_DEBUG";

/// Per-session configuration.
///
/// Passed explicitly into every session; there is no process-wide state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Shuffle seed. `None` seeds from the wall clock.
    pub seed: Option<u64>,

    /// Reveal the dungeon order in snapshots.
    pub debug: bool,
}

impl SessionConfig {
    /// Create a default configuration (random seed, debug off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable debug snapshots.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Read configuration from `SCOUNDREL_SEED` and `SCOUNDREL_DEBUG`.
    ///
    /// Unparseable values are ignored and logged.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => tracing::warn!("ignoring {SEED_ENV}={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup(DEBUG_ENV) {
            config.debug = matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.debug);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::new().with_seed(7).with_debug(true);
        assert_eq!(config.seed, Some(7));
        assert!(config.debug);
    }

    #[test]
    fn test_from_lookup() {
        let config = SessionConfig::from_lookup(|key| match key {
            SEED_ENV => Some("123".to_string()),
            DEBUG_ENV => Some("TRUE".to_string()),
            _ => None,
        });
        assert_eq!(config.seed, Some(123));
        assert!(config.debug);
    }

    #[test]
    fn test_from_lookup_bad_seed() {
        let config = SessionConfig::from_lookup(|key| match key {
            SEED_ENV => Some("not-a-number".to_string()),
            DEBUG_ENV => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config.seed, None);
        assert!(!config.debug);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::new().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
