//! Core engine types: players and configuration.
//!
//! These are shared by the board, the rules and the game store.

pub mod player;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use config::{GameConfig, MAX_PLAYERS};
