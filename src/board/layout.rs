//! Board layout and geometry.
//!
//! ## Layout
//!
//! Pits are stored in one `Vec`, grouped by seat. Each group is
//! `cups_per_player` cups followed by the player's store:
//!
//! ```text
//! index:  0  1  2  3  4  5 | 6  | 7  8  9 10 11 12 | 13
//! pit:   C1 C2 C3 C4 C5 C6 | S0 | C1 C2 C3 C4 C5 C6 | S1
//! owner: ---- Player 0 --------  ---- Player 1 --------
//! ```
//!
//! Sowing walks the vector circularly, so the last store wraps to index 0.
//!
//! ## Opposite cups
//!
//! `opposite = last_cup_index - index` with `last_cup_index = len - 2`.
//! For two players this pairs cup `k` of one row with cup `cups + 1 - k` of
//! the other. With more players the formula is applied unchanged and may
//! pair cups that are not physically facing each other.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pit::Pit;
use super::view::Player;
use crate::core::{GameConfig, PlayerId, PlayerMap};
use crate::error::MancalaError;

/// The ordered, circular collection of every pit in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(super) pits: Vec<Pit>,
    cups_per_player: usize,
    players_number: usize,
}

impl Board {
    /// Create the opening position: every cup at `stones_per_cup`, stores empty.
    ///
    /// The config is assumed valid; `Game::from_config` validates it first.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let pits = PlayerId::all(config.players_number)
            .flat_map(|player| {
                (0..config.cups_per_player)
                    .map(move |_| Pit::cup(player, config.stones_per_cup))
                    .chain(std::iter::once(Pit::store(player)))
            })
            .collect();

        Self {
            pits,
            cups_per_player: config.cups_per_player,
            players_number: config.players_number,
        }
    }

    /// Create a board from explicit per-pit stone counts, in board order.
    ///
    /// Useful for resuming an analysed position or setting up puzzles.
    /// `config.stones_per_cup` is ignored beyond validation.
    pub fn from_stone_counts(config: &GameConfig, counts: &[u32]) -> Result<Self, MancalaError> {
        config.validate()?;
        if counts.len() != config.total_pits() {
            return Err(MancalaError::invalid_configuration(format!(
                "expected {} stone counts, got {}",
                config.total_pits(),
                counts.len()
            )));
        }
        let total: u64 = counts.iter().map(|&count| u64::from(count)).sum();
        if total > u64::from(u32::MAX) {
            return Err(MancalaError::invalid_configuration(format!(
                "{total} stones do not fit in a single store"
            )));
        }

        let mut board = Self::new(config);
        for (pit, &count) in board.pits.iter_mut().zip(counts) {
            *pit = if pit.is_cup() {
                Pit::cup(pit.owner(), count)
            } else {
                let mut store = Pit::store(pit.owner());
                store.add_stones(count)?;
                store
            };
        }
        Ok(board)
    }

    /// All pits in board order.
    #[must_use]
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    /// The pit at an absolute index.
    #[must_use]
    pub fn pit(&self, index: usize) -> Option<&Pit> {
        self.pits.get(index)
    }

    /// Total number of pits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pits.len()
    }

    /// A board always has at least two groups, so this is never true for a
    /// board built from a valid config.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pits.is_empty()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players_number
    }

    #[must_use]
    pub fn cups_per_player(&self) -> usize {
        self.cups_per_player
    }

    #[must_use]
    pub fn pits_per_player(&self) -> usize {
        self.cups_per_player + 1
    }

    /// Index of the last cup of the last player group.
    #[must_use]
    pub fn last_cup_index(&self) -> usize {
        self.pits.len().saturating_sub(2)
    }

    /// Index of the pit opposite `index`, if the formula lands on the board.
    #[must_use]
    pub fn opposite_index(&self, index: usize) -> Option<usize> {
        self.last_cup_index().checked_sub(index)
    }

    /// 1-based position of a pit inside its owner's group.
    ///
    /// Cups are numbered `1..=cups_per_player`; the store is `cups_per_player + 1`.
    #[must_use]
    pub fn board_number_for_player(&self, index: usize) -> usize {
        index % self.pits_per_player() + 1
    }

    /// First index of a player's group, or `None` for an unknown seat.
    pub(super) fn group_start(&self, player: PlayerId) -> Option<usize> {
        (player.index() < self.players_number).then(|| player.index() * self.pits_per_player())
    }

    /// Index of a player's store.
    #[must_use]
    pub fn store_index(&self, player: PlayerId) -> Option<usize> {
        self.group_start(player).map(|start| start + self.cups_per_player)
    }

    /// Resolve a player's 1-based cup number to an absolute pit index.
    ///
    /// Checks, in order: the cup number range, that the pit belongs to
    /// `player`, and that it is a cup.
    pub fn cup_index(&self, player: PlayerId, cup_number: usize) -> Result<usize, MancalaError> {
        if cup_number < 1 || cup_number > self.cups_per_player {
            return Err(MancalaError::InvalidCupNumber {
                cup_number,
                cups_per_player: self.cups_per_player,
            });
        }

        let index = player.index() * self.pits_per_player() + cup_number - 1;
        let pit = self
            .pits
            .get(index)
            .filter(|pit| pit.is_owned_by(player))
            .ok_or(MancalaError::NotPlayersPit { index, player })?;

        if !pit.is_cup() {
            return Err(MancalaError::NotACup { index });
        }

        Ok(index)
    }

    /// A read-only view of one player's pits.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<Player<'_>> {
        self.group_start(player).map(|_| Player::new(player, self))
    }

    /// Views of every player in seat order.
    pub fn players(&self) -> impl Iterator<Item = Player<'_>> {
        PlayerId::all(self.players_number).map(move |id| Player::new(id, self))
    }

    /// Whether every cup of `player` is empty.
    ///
    /// Unknown seats have no cups and count as finished.
    #[must_use]
    pub fn is_player_finished(&self, player: PlayerId) -> bool {
        self.player(player).map_or(true, |view| view.is_finished())
    }

    /// Cup numbers `player` may legally choose, in order.
    #[must_use]
    pub fn legal_cups(&self, player: PlayerId) -> SmallVec<[usize; 8]> {
        let Some(view) = self.player(player) else {
            return SmallVec::new();
        };

        view.cups()
            .iter()
            .enumerate()
            .filter(|(_, cup)| !cup.is_empty())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Stones on the board, across every pit.
    #[must_use]
    pub fn total_stones(&self) -> u64 {
        self.pits.iter().map(|pit| u64::from(pit.stone_count())).sum()
    }

    /// Current store count per player.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        PlayerMap::new(self.players_number, |player| {
            self.player(player).map_or(0, |view| view.score())
        })
    }

    /// Check that the pit vector matches the declared group shape.
    pub(crate) fn check_layout(&self) -> Result<(), String> {
        let expected = self.players_number * self.pits_per_player();
        if self.pits.len() != expected {
            return Err(format!("expected {expected} pits, found {}", self.pits.len()));
        }

        for (index, pit) in self.pits.iter().enumerate() {
            let owner = PlayerId::new((index / self.pits_per_player()) as u8);
            let store_slot = self.board_number_for_player(index) == self.pits_per_player();
            if pit.owner() != owner || pit.is_store() != store_slot {
                return Err(format!("pit {index} does not fit the board layout"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PitKind;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn classic() -> Board {
        Board::new(&GameConfig::default())
    }

    #[test]
    fn test_opening_layout() {
        let board = classic();

        assert_eq!(board.len(), 14);
        assert_eq!(board.last_cup_index(), 12);
        assert_eq!(board.total_stones(), 72);

        for (index, pit) in board.pits().iter().enumerate() {
            let expected_owner = if index < 7 { P0 } else { P1 };
            assert_eq!(pit.owner(), expected_owner);
            if index == 6 || index == 13 {
                assert_eq!(pit.kind(), PitKind::Store);
                assert_eq!(pit.stone_count(), 0);
            } else {
                assert_eq!(pit.kind(), PitKind::Cup);
                assert_eq!(pit.stone_count(), 6);
            }
        }
        assert!(board.check_layout().is_ok());
    }

    #[test]
    fn test_board_numbers_for_player() {
        let board = classic();

        let numbers: Vec<_> = (0..board.len())
            .map(|i| board.board_number_for_player(i))
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_opposite_index() {
        let board = classic();

        assert_eq!(board.opposite_index(0), Some(12));
        assert_eq!(board.opposite_index(5), Some(7));
        assert_eq!(board.opposite_index(9), Some(3));
        assert_eq!(board.opposite_index(13), None);
    }

    #[test]
    fn test_cup_index_resolution() {
        let board = classic();

        assert_eq!(board.cup_index(P0, 1), Ok(0));
        assert_eq!(board.cup_index(P0, 6), Ok(5));
        assert_eq!(board.cup_index(P1, 1), Ok(7));
        assert_eq!(board.cup_index(P1, 6), Ok(12));
        assert_eq!(board.store_index(P0), Some(6));
        assert_eq!(board.store_index(P1), Some(13));
    }

    #[test]
    fn test_cup_index_errors() {
        let board = classic();

        assert_eq!(
            board.cup_index(P0, 0),
            Err(MancalaError::InvalidCupNumber {
                cup_number: 0,
                cups_per_player: 6
            })
        );
        assert!(matches!(
            board.cup_index(P1, 7),
            Err(MancalaError::InvalidCupNumber { .. })
        ));
        assert_eq!(
            board.cup_index(PlayerId::new(2), 1),
            Err(MancalaError::NotPlayersPit {
                index: 14,
                player: PlayerId::new(2)
            })
        );
        assert_eq!(board.store_index(PlayerId::new(2)), None);
    }

    #[test]
    fn test_from_stone_counts() {
        let config = GameConfig::new(2, 2, 1);
        let board = Board::from_stone_counts(&config, &[0, 3, 4, 1, 0, 2]).unwrap();

        assert_eq!(board.pit(1).map(Pit::stone_count), Some(3));
        assert_eq!(board.pit(2).map(Pit::stone_count), Some(4));
        assert!(board.pit(2).unwrap().is_store());
        assert_eq!(board.scores()[P0], 4);
        assert_eq!(board.scores()[P1], 2);
        assert_eq!(board.total_stones(), 10);

        assert!(matches!(
            Board::from_stone_counts(&config, &[1, 2, 3]),
            Err(MancalaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_cup_index_on_broken_layout() {
        let mut board = classic();
        board.pits[0] = Pit::store(P0);

        assert_eq!(board.cup_index(P0, 1), Err(MancalaError::NotACup { index: 0 }));
        assert!(board.check_layout().is_err());
    }

    #[test]
    fn test_from_stone_counts_rejects_store_overflow() {
        let config = GameConfig::new(2, 1, 1);

        assert!(matches!(
            Board::from_stone_counts(&config, &[1, u32::MAX, 1, 0]),
            Err(MancalaError::InvalidConfiguration(_))
        ));
        assert!(Board::from_stone_counts(&config, &[1, u32::MAX - 2, 1, 0]).is_ok());
    }

    #[test]
    fn test_legal_cups_and_finished() {
        let config = GameConfig::new(2, 3, 1);
        let board = Board::from_stone_counts(&config, &[0, 2, 0, 5, 0, 0, 0, 1]).unwrap();

        assert_eq!(board.legal_cups(P0).as_slice(), &[2]);
        assert!(board.legal_cups(P1).is_empty());
        assert!(!board.is_player_finished(P0));
        assert!(board.is_player_finished(P1));
        assert!(board.legal_cups(PlayerId::new(5)).is_empty());
    }

    #[test]
    fn test_check_layout_detects_shape_mismatch() {
        let mut board = classic();
        board.pits.pop();

        assert!(board.check_layout().is_err());
    }
}
