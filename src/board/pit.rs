//! Pits: cups and stores.
//!
//! A `Pit` is a stone counter tagged with its kind and owner. The two kinds
//! share storage and differ only in a handful of rules, all dispatched on
//! `PitKind`:
//!
//! | Operation          | Cup                     | Store                    |
//! |--------------------|-------------------------|--------------------------|
//! | `pick_up_stones`   | takes every stone       | `RuleViolation`          |
//! | `add_one_stone`    | +1                      | +1                       |
//! | `add_stones(n)`    | `RuleViolation`         | +n                       |
//! | `accepts_sow_from` | any player              | owner only               |

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::MancalaError;

/// Kind of pit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitKind {
    /// A playable hole in a player's row.
    Cup,
    /// A player's scoring pit ("mancala").
    Store,
}

/// A single hole on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pit {
    kind: PitKind,
    owner: PlayerId,
    stones: u32,
}

impl Pit {
    /// Create a cup holding `stones`.
    #[must_use]
    pub fn cup(owner: PlayerId, stones: u32) -> Self {
        Self {
            kind: PitKind::Cup,
            owner,
            stones,
        }
    }

    /// Create an empty store.
    #[must_use]
    pub fn store(owner: PlayerId) -> Self {
        Self {
            kind: PitKind::Store,
            owner,
            stones: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PitKind {
        self.kind
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn stone_count(&self) -> u32 {
        self.stones
    }

    #[must_use]
    pub fn is_cup(&self) -> bool {
        self.kind == PitKind::Cup
    }

    #[must_use]
    pub fn is_store(&self) -> bool {
        self.kind == PitKind::Store
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == player
    }

    /// Whether a stone sown by `player` may land here.
    ///
    /// Cups take stones from anyone; a store only from its owner.
    #[must_use]
    pub fn accepts_sow_from(&self, player: PlayerId) -> bool {
        match self.kind {
            PitKind::Cup => true,
            PitKind::Store => self.is_owned_by(player),
        }
    }

    /// Remove and return every stone in a cup.
    pub fn pick_up_stones(&mut self) -> Result<u32, MancalaError> {
        match self.kind {
            PitKind::Cup => Ok(std::mem::take(&mut self.stones)),
            PitKind::Store => Err(MancalaError::RuleViolation(
                "a Store's stones cannot be picked up",
            )),
        }
    }

    /// Drop a single sown stone into this pit.
    pub fn add_one_stone(&mut self) {
        self.stones += 1;
    }

    /// Add a batch of stones to a store (captures and end-of-game collection).
    pub fn add_stones(&mut self, count: u32) -> Result<(), MancalaError> {
        match self.kind {
            PitKind::Cup => Err(MancalaError::RuleViolation(
                "explicit stone counts cannot be added to a Cup",
            )),
            PitKind::Store => {
                self.stones += count;
                Ok(())
            }
        }
    }
}
