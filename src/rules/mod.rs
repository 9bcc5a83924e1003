//! Turn and game-lifecycle rules.
//!
//! The board knows how stones move; this module decides whose turn it is,
//! when the round is over and who won.
//!
//! - `rotation`: `PlayerRotation`, the fixed seat order and active index
//! - `outcome`: `GameStatus`, `GameResult` and per-move `MoveOutcome`
//! - `game`: `Game`, the state machine that accepts or rejects moves

pub mod rotation;
pub mod outcome;
pub mod game;

pub use rotation::PlayerRotation;
pub use outcome::{GameResult, GameStatus, MoveOutcome};
pub use game::{Game, MoveRecord};
