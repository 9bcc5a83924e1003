//! Error types for rule violations, configuration loading and the game codec.

use std::path::PathBuf;

use crate::core::PlayerId;
use crate::rules::GameStatus;
use crate::store::GameId;

/// Rule violations raised while creating a game or applying a move.
///
/// Every variant is caller-correctable: a rejected move never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MancalaError {
    #[error("invalid game configuration: {0}")]
    InvalidConfiguration(String),

    #[error("game is already finished ({0})")]
    GameAlreadyFinished(GameStatus),

    #[error("{player} is not the active player ({active} is)")]
    NotActivePlayer { player: PlayerId, active: PlayerId },

    #[error("cup number '{cup_number}' is out of range 1..={cups_per_player}")]
    InvalidCupNumber { cup_number: usize, cups_per_player: usize },

    #[error("pit {index} does not belong to {player}")]
    NotPlayersPit { index: usize, player: PlayerId },

    /// Only reachable on a board whose layout is broken: on a well-formed
    /// board every in-range cup number resolves to a cup.
    #[error("pit {index} is a store, not a cup")]
    NotACup { index: usize },

    #[error("cup number '{cup_number}' is empty")]
    EmptyCup { cup_number: usize },

    #[error("rule violation: {0}")]
    RuleViolation(&'static str),

    #[error("game {0} not found")]
    GameNotFound(GameId),
}

impl MancalaError {
    /// Build an `InvalidConfiguration` error.
    pub fn invalid_configuration(detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration(detail.into())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(#[from] MancalaError),
}

/// Errors that can occur when encoding or decoding a game.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("corrupt game data: {0}")]
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display() {
        let err = MancalaError::NotActivePlayer {
            player: PlayerId::new(1),
            active: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "Player 1 is not the active player (Player 0 is)");

        let err = MancalaError::InvalidCupNumber {
            cup_number: 7,
            cups_per_player: 6,
        };
        assert_eq!(err.to_string(), "cup number '7' is out of range 1..=6");

        let err = MancalaError::GameAlreadyFinished(GameStatus::Draw);
        assert_eq!(err.to_string(), "game is already finished (draw)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::from(MancalaError::invalid_configuration(
            "players_number must be >= 2",
        ));
        assert_eq!(
            err.to_string(),
            "config validation error: invalid game configuration: players_number must be >= 2"
        );
    }

    #[test]
    fn test_codec_error_display() {
        let err = CodecError::Corrupt("expected 14 pits, found 3".into());
        assert_eq!(err.to_string(), "corrupt game data: expected 14 pits, found 3");
    }
}
