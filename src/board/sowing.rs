//! Sowing, capture and end-of-game collection.
//!
//! ## Sowing
//!
//! The mover picks up every stone in one of their cups and walks the board
//! one pit at a time, wrapping after the last store. Each pit that accepts
//! the stone gets exactly one; opponents' stores are skipped without using
//! a stone.
//!
//! ## Capture
//!
//! If the last stone lands in one of the mover's own cups that was empty
//! (it now holds exactly 1) and the opposite cup has stones, both cups are
//! emptied into the mover's store.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::layout::Board;
use super::pit::PitKind;
use crate::core::PlayerId;
use crate::error::MancalaError;

/// Stones taken by a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The mover's cup where the last stone landed.
    pub cup_index: usize,
    /// The cup across from it.
    pub opposite_index: usize,
    /// Stones moved into the store (the landing stone included).
    pub stones: u32,
}

/// What a single `make_move` did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sowing {
    /// Index of the cup the stones were picked up from.
    pub start_index: usize,
    /// Index of the pit that received the last stone.
    pub landing_index: usize,
    /// Kind of the landing pit.
    pub landing_kind: PitKind,
    /// Stones picked up and sown.
    pub sown: u32,
    /// The capture triggered by the last stone, if any.
    pub capture: Option<Capture>,
}

impl Sowing {
    /// Whether the last stone landed in a store.
    ///
    /// Sowing skips every store but the mover's, so this is always the
    /// mover's own store.
    #[must_use]
    pub fn ended_in_store(&self) -> bool {
        self.landing_kind == PitKind::Store
    }
}

impl Board {
    /// Play `cup_number` for `player`: sow its stones and resolve any capture.
    ///
    /// All validation happens before the first stone moves; an `Err` leaves
    /// the board untouched.
    pub fn make_move(&mut self, player: PlayerId, cup_number: usize) -> Result<Sowing, MancalaError> {
        let start_index = self.cup_index(player, cup_number)?;
        if self.pits[start_index].is_empty() {
            return Err(MancalaError::EmptyCup { cup_number });
        }

        let sown = self.pits[start_index].pick_up_stones()?;
        let landing_index = self.sow(player, start_index, sown);
        let landing_kind = self.pits[landing_index].kind();
        let capture = self.resolve_capture(player, landing_index)?;

        Ok(Sowing {
            start_index,
            landing_index,
            landing_kind,
            sown,
            capture,
        })
    }

    /// Distribute `stones` after `start`, returning the landing index.
    ///
    /// Terminates because the mover's own cups always accept a stone.
    fn sow(&mut self, player: PlayerId, start: usize, stones: u32) -> usize {
        let len = self.pits.len();
        let mut index = start;
        let mut remaining = stones;

        while remaining > 0 {
            index = (index + 1) % len;
            let pit = &mut self.pits[index];
            if pit.accepts_sow_from(player) {
                pit.add_one_stone();
                remaining -= 1;
                trace!(%player, index, remaining, "sowed stone");
            } else {
                trace!(%player, index, "skipped opponent store");
            }
        }

        index
    }

    fn resolve_capture(
        &mut self,
        player: PlayerId,
        landing_index: usize,
    ) -> Result<Option<Capture>, MancalaError> {
        let landing = &self.pits[landing_index];
        if !landing.is_cup() || !landing.is_owned_by(player) || landing.stone_count() != 1 {
            return Ok(None);
        }

        let Some(opposite_index) = self.opposite_index(landing_index) else {
            return Ok(None);
        };
        let opposite = &self.pits[opposite_index];
        if opposite_index == landing_index || !opposite.is_cup() || opposite.is_empty() {
            return Ok(None);
        }

        let Some(store_index) = self.store_index(player) else {
            return Ok(None);
        };

        let stones = self.pits[landing_index].pick_up_stones()?
            + self.pits[opposite_index].pick_up_stones()?;
        self.pits[store_index].add_stones(stones)?;

        debug!(%player, landing_index, opposite_index, stones, "capture");

        Ok(Some(Capture {
            cup_index: landing_index,
            opposite_index,
            stones,
        }))
    }

    /// Sweep every player's remaining cup stones into that player's own store.
    ///
    /// Returns the number of stones moved. Stores are never picked up.
    pub fn collect_remaining_stones(&mut self) -> Result<u32, MancalaError> {
        let cups_per_player = self.cups_per_player();
        let mut moved = 0;

        for group in self.pits.chunks_mut(cups_per_player + 1) {
            let (cups, store) = group.split_at_mut(cups_per_player);
            let mut collected = 0;
            for cup in cups {
                collected += cup.pick_up_stones()?;
            }
            store[0].add_stones(collected)?;
            moved += collected;
        }

        Ok(moved)
    }
}
