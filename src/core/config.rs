//! Game configuration.
//!
//! A `GameConfig` fixes the shape of a game at creation time:
//! - `players_number`: how many seats take part (2-255)
//! - `cups_per_player`: cups in each player's row, followed by one store
//! - `stones_per_cup`: stones placed in every cup before the first move
//!
//! Configs can be built in code or loaded from TOML. Missing keys fall back
//! to the classic 2-player, 6-cup, 6-stone Kalah layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MancalaError};

/// Largest seat count a `PlayerId` can address.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub players_number: usize,

    /// Cups in each player's row (at least 1).
    pub cups_per_player: usize,

    /// Initial stones in every cup (at least 1).
    pub stones_per_cup: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players_number: 2,
            cups_per_player: 6,
            stones_per_cup: 6,
        }
    }
}

impl GameConfig {
    /// Create a configuration from explicit values.
    ///
    /// Nothing is checked here; `validate` runs when a game is created.
    #[must_use]
    pub fn new(players_number: usize, cups_per_player: usize, stones_per_cup: u32) -> Self {
        Self {
            players_number,
            cups_per_player,
            stones_per_cup,
        }
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, players_number: usize) -> Self {
        self.players_number = players_number;
        self
    }

    /// Set the number of cups per player.
    #[must_use]
    pub fn with_cups_per_player(mut self, cups_per_player: usize) -> Self {
        self.cups_per_player = cups_per_player;
        self
    }

    /// Set the initial stones per cup.
    #[must_use]
    pub fn with_stones_per_cup(mut self, stones_per_cup: u32) -> Self {
        self.stones_per_cup = stones_per_cup;
        self
    }

    /// Pits owned by one player: their cups plus the store.
    #[must_use]
    pub fn pits_per_player(&self) -> usize {
        self.cups_per_player + 1
    }

    /// Total pits on the board.
    #[must_use]
    pub fn total_pits(&self) -> usize {
        self.players_number * self.pits_per_player()
    }

    /// Stones on the board for the whole game.
    #[must_use]
    pub fn total_stones(&self) -> u64 {
        (self.players_number as u64)
            .saturating_mul(self.cups_per_player as u64)
            .saturating_mul(u64::from(self.stones_per_cup))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), MancalaError> {
        if self.players_number < 2 {
            return Err(MancalaError::invalid_configuration(
                "players_number must be >= 2",
            ));
        }
        if self.players_number > MAX_PLAYERS {
            return Err(MancalaError::invalid_configuration(format!(
                "players_number must be <= {MAX_PLAYERS}"
            )));
        }
        if self.cups_per_player < 1 {
            return Err(MancalaError::invalid_configuration(
                "cups_per_player must be >= 1",
            ));
        }
        if self.stones_per_cup < 1 {
            return Err(MancalaError::invalid_configuration(
                "stones_per_cup must be >= 1",
            ));
        }
        // Store counts are u32; the whole board has to fit in one store.
        if self.total_stones() > u64::from(u32::MAX) {
            return Err(MancalaError::invalid_configuration(
                "total stones on the board must fit in a u32",
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }
}
