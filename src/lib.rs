//! # mancala-engine
//!
//! A rules engine for Kalah-style Mancala with any number of players.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: the board is `players` groups of cups, each
//!    followed by its owner's store. Nothing assumes exactly two seats.
//!
//! 2. **Validate, Then Mutate**: every rejected move returns an error before
//!    a single stone moves. An accepted move always runs to completion.
//!
//! 3. **Caller Owns the Game**: no globals and no interior mutability.
//!    A `Game` is a plain value; `GameStore` is an optional arena on top.
//!
//! ## Modules
//!
//! - `core`: player ids, per-player maps, game configuration
//! - `board`: pits, layout, sowing and capture
//! - `rules`: turn rotation, round end, scoring, the `Game` state machine
//! - `snapshot`: serializable read-only views
//! - `codec`: binary encoding of a whole game
//! - `store`: in-memory arena of games keyed by `GameId`
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use mancala_engine::{Game, GameStatus, PlayerId};
//!
//! let mut game = Game::create(2, 6, 6).unwrap();
//!
//! // Six stones from cup 1 end in the mover's store: extra turn.
//! let outcome = game.handle_move(PlayerId::new(0), 1).unwrap();
//! assert_eq!(outcome.next_player, Some(PlayerId::new(0)));
//! assert_eq!(game.scores()[PlayerId::new(0)], 1);
//! assert_eq!(game.status(), GameStatus::Active);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod snapshot;
pub mod codec;
pub mod store;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameConfig, PlayerId, PlayerMap, MAX_PLAYERS};

pub use crate::board::{Board, Capture, Pit, PitKind, Player, Sowing};

pub use crate::rules::{
    Game, GameResult, GameStatus, MoveOutcome, MoveRecord, PlayerRotation,
};

pub use crate::snapshot::{GameSnapshot, PitView};

pub use crate::store::{GameId, GameMove, GameStore};

pub use crate::error::{CodecError, ConfigError, MancalaError};
