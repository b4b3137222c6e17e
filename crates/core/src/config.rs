//! Session configuration.
//!
//! Configuration is fixed when a session starts. Values come from defaults,
//! optionally overridden by environment variables and then by the caller
//! (the binary layers its command line flags on top).
//!
//! - `TUI2048_SIZE`: board side length (default: 4)
//! - `TUI2048_SEED`: RNG seed for tile spawns (default: 1)

use std::env;

use crate::error::ConfigError;
use crate::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length
    pub size: u8,
    /// Seed for the spawn RNG
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults.
    ///
    /// Unparseable values are ignored rather than reported; range checks
    /// happen later in [`GameConfig::validate`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let size = env::var("TUI2048_SIZE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.size);

        let seed = env::var("TUI2048_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        Self { size, seed }
    }

    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the board size is within the supported range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size as usize)
    }
}

pub(crate) fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_BOARD_SIZE as usize || size > MAX_BOARD_SIZE as usize {
        return Err(ConfigError::InvalidSize(size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.size, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_sizes() {
        assert_eq!(
            GameConfig::default().with_size(1).validate(),
            Err(ConfigError::InvalidSize(1))
        );
        assert_eq!(
            GameConfig::default().with_size(17).validate(),
            Err(ConfigError::InvalidSize(17))
        );
        assert!(GameConfig::default().with_size(2).validate().is_ok());
        assert!(GameConfig::default().with_size(16).validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = GameConfig::default().with_size(6).with_seed(99);
        assert_eq!(config, GameConfig { size: 6, seed: 99 });
    }
}
