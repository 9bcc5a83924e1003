//! Turn order.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Seats in turn order plus the index of the player to move.
///
/// The seat list is fixed at creation; exactly one player is active.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRotation {
    players: Vec<PlayerId>,
    active_index: usize,
}

impl PlayerRotation {
    /// Rotation over `player_count` seats, starting with `PlayerId(0)`.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        Self {
            players: PlayerId::all(player_count).collect(),
            active_index: 0,
        }
    }

    /// Rotation over `player_count` seats with `first` to move.
    ///
    /// Returns `None` if `first` is not seated.
    #[must_use]
    pub fn starting_with(player_count: usize, first: PlayerId) -> Option<Self> {
        let mut rotation = Self::new(player_count);
        rotation.active_index = rotation.players.iter().position(|&p| p == first)?;
        Some(rotation)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.players[self.active_index]
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Pass the turn to the next seat, wrapping around; returns the new active player.
    pub fn advance(&mut self) -> PlayerId {
        self.active_index = (self.active_index + 1) % self.players.len();
        self.current()
    }

    /// Seats in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether this rotation could have been built by `new(player_count)`.
    pub(crate) fn is_consistent_with(&self, player_count: usize) -> bool {
        self.players.len() == player_count
            && self.active_index < player_count
            && self.players.iter().copied().eq(PlayerId::all(player_count))
    }
}
