//! Per-player view into the board.
//!
//! A `Player` is an identity plus a borrowed `Board`; it owns nothing and is
//! recomputed whenever it is needed, so there are no back-references from
//! players to pits.

use super::layout::Board;
use super::pit::Pit;
use crate::core::PlayerId;
use crate::error::MancalaError;

/// A read-only view of one player's cups and store.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    id: PlayerId,
    board: &'a Board,
}

impl<'a> Player<'a> {
    /// Only constructed by `Board`, which guarantees `id` is seated.
    pub(super) fn new(id: PlayerId, board: &'a Board) -> Self {
        Self { id, board }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    fn start(&self) -> usize {
        self.id.index() * self.board.pits_per_player()
    }

    /// The player's cups, in cup-number order.
    #[must_use]
    pub fn cups(&self) -> &'a [Pit] {
        let start = self.start();
        &self.board.pits()[start..start + self.board.cups_per_player()]
    }

    /// A cup by its 1-based number.
    pub fn cup(&self, cup_number: usize) -> Result<&'a Pit, MancalaError> {
        let cups_per_player = self.board.cups_per_player();
        if cup_number < 1 || cup_number > cups_per_player {
            return Err(MancalaError::InvalidCupNumber {
                cup_number,
                cups_per_player,
            });
        }
        Ok(&self.cups()[cup_number - 1])
    }

    /// The player's store.
    #[must_use]
    pub fn store(&self) -> &'a Pit {
        &self.board.pits()[self.start() + self.board.cups_per_player()]
    }

    /// Stones still in the player's cups.
    #[must_use]
    pub fn stones_in_cups(&self) -> u32 {
        self.cups().iter().map(Pit::stone_count).sum()
    }

    /// Current score: the store count.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.store().stone_count()
    }

    /// Whether every cup is empty.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cups().iter().all(Pit::is_empty)
    }
}
