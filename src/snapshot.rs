//! Read-only, serializable views of a game for presentation layers.
//!
//! A snapshot owns its data, so it can outlive the `Game` and be handed to
//! any serde format.

use serde::{Deserialize, Serialize};

use crate::board::PitKind;
use crate::core::{PlayerId, PlayerMap};
use crate::rules::{Game, GameResult, GameStatus};

/// One pit as seen by a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitView {
    pub index: usize,
    pub owner: PlayerId,
    pub kind: PitKind,
    /// 1-based position within the owner's group; the store is `cups_per_player + 1`.
    pub board_number_for_player: usize,
    pub stone_count: u32,
}

/// Full public state of a game at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    /// `None` once the game is over.
    pub active_player: Option<PlayerId>,
    /// Rotation index, kept after the game ends.
    pub active_player_index: usize,
    pub result: Option<GameResult>,
    pub last_cup_index: usize,
    pub pits: Vec<PitView>,
    pub scores: PlayerMap<u32>,
    pub moves_played: usize,
}

impl GameSnapshot {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.as_ref().and_then(GameResult::winner)
    }
}

impl Game {
    /// Capture the current public state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let board = self.board();
        let pits = board
            .pits()
            .iter()
            .enumerate()
            .map(|(index, pit)| PitView {
                index,
                owner: pit.owner(),
                kind: pit.kind(),
                board_number_for_player: board.board_number_for_player(index),
                stone_count: pit.stone_count(),
            })
            .collect();

        GameSnapshot {
            status: self.status(),
            active_player: self.active_player(),
            active_player_index: self.rotation().active_index(),
            result: self.result().cloned(),
            last_cup_index: board.last_cup_index(),
            pits,
            scores: self.scores(),
            moves_played: self.history().len(),
        }
    }
}
