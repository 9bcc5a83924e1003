//! Game orchestration.
//!
//! `Game` is the only entry point for mutation. A move goes through:
//!
//! 1. status check (`GameAlreadyFinished`)
//! 2. turn check (`NotActivePlayer`)
//! 3. `Board::make_move` (cup validation, sowing, capture)
//! 4. round-end check: an empty side ends the game, remaining stones are
//!    swept into their owners' stores and the result is ranked
//! 5. turn advance, unless the last stone landed in the mover's store
//!
//! Steps 1-3 reject before any stone moves, so a failed move changes nothing.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::outcome::{GameResult, GameStatus, MoveOutcome};
use super::rotation::PlayerRotation;
use crate::board::{Board, Sowing};
use crate::core::{GameConfig, PlayerId, PlayerMap};
use crate::error::MancalaError;

/// One accepted move, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based position in the history.
    pub move_number: u32,
    pub player: PlayerId,
    pub cup_number: usize,
    pub landing_index: usize,
    pub sown: u32,
    /// Stones moved to the store by a capture (0 if none).
    pub captured: u32,
}

/// A single Mancala game: board, turn order, status and history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    status: GameStatus,
    rotation: PlayerRotation,
    board: Board,
    result: Option<GameResult>,
    history: Vector<MoveRecord>,
    /// Stones on the board at creation; every move conserves this.
    stones_in_play: u64,
}

impl Game {
    /// Create a game with every cup holding `stones_per_cup` stones.
    ///
    /// ```
    /// use mancala_engine::{Game, GameStatus, PlayerId};
    ///
    /// let game = Game::create(2, 6, 6).unwrap();
    /// assert_eq!(game.status(), GameStatus::Active);
    /// assert_eq!(game.active_player(), Some(PlayerId::new(0)));
    /// assert_eq!(game.board().total_stones(), 72);
    /// ```
    pub fn create(
        players_number: usize,
        cups_per_player: usize,
        stones_per_cup: u32,
    ) -> Result<Self, MancalaError> {
        Self::from_config(&GameConfig::new(players_number, cups_per_player, stones_per_cup))
    }

    /// Create a game from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, MancalaError> {
        config.validate()?;

        Ok(Self {
            config: config.clone(),
            status: GameStatus::Active,
            rotation: PlayerRotation::new(config.players_number),
            board: Board::new(config),
            result: None,
            history: Vector::new(),
            stones_in_play: config.total_stones(),
        })
    }

    /// Resume play from an arbitrary position with `active` to move.
    ///
    /// `stone_counts` lists every pit in board order. Each player must still
    /// have stones in at least one cup, otherwise the round would already
    /// be over.
    pub fn from_position(
        config: &GameConfig,
        stone_counts: &[u32],
        active: PlayerId,
    ) -> Result<Self, MancalaError> {
        let board = Board::from_stone_counts(config, stone_counts)?;
        let rotation = PlayerRotation::starting_with(config.players_number, active).ok_or_else(|| {
            MancalaError::invalid_configuration(format!("{active} is not seated in this game"))
        })?;

        if let Some(finished) = board.players().find(|player| player.is_finished()) {
            return Err(MancalaError::invalid_configuration(format!(
                "{} has no stones left in their cups",
                finished.id()
            )));
        }

        Ok(Self {
            config: config.clone(),
            status: GameStatus::Active,
            rotation,
            stones_in_play: board.total_stones(),
            board,
            result: None,
            history: Vector::new(),
        })
    }

    /// Apply `player`'s move from cup `cup_number` (1-based).
    pub fn handle_move(
        &mut self,
        player: PlayerId,
        cup_number: usize,
    ) -> Result<MoveOutcome, MancalaError> {
        if self.status.is_terminal() {
            return Err(MancalaError::GameAlreadyFinished(self.status));
        }

        let active = self.rotation.current();
        if player != active {
            return Err(MancalaError::NotActivePlayer { player, active });
        }

        let sowing = self.board.make_move(player, cup_number)?;
        self.record(player, cup_number, &sowing);

        // A capture can empty an opponent's side, not just the mover's.
        let round_over = self.board.players().any(|view| view.is_finished());

        let next_player = if round_over {
            self.finish()?;
            None
        } else if self.lands_in_own_store(player, &sowing) {
            Some(player)
        } else {
            Some(self.rotation.advance())
        };

        debug!(
            %player,
            cup_number,
            landing = sowing.landing_index,
            captured = sowing.capture.map_or(0, |c| c.stones),
            next = ?next_player,
            "move applied"
        );

        Ok(MoveOutcome {
            player,
            cup_number,
            sowing,
            next_player,
            status: self.status,
            result: self.result.clone(),
        })
    }

    fn lands_in_own_store(&self, player: PlayerId, sowing: &Sowing) -> bool {
        sowing.ended_in_store()
            && self
                .board
                .pit(sowing.landing_index)
                .is_some_and(|pit| pit.is_owned_by(player))
    }

    fn record(&mut self, player: PlayerId, cup_number: usize, sowing: &Sowing) {
        let move_number = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord {
            move_number,
            player,
            cup_number,
            landing_index: sowing.landing_index,
            sown: sowing.sown,
            captured: sowing.capture.map_or(0, |c| c.stones),
        });
    }

    /// End the round: sweep cups into stores and rank the stores.
    fn finish(&mut self) -> Result<(), MancalaError> {
        let collected = self.board.collect_remaining_stones()?;
        let result = GameResult::from_scores(&self.board.scores());
        self.status = result.status();

        info!(
            status = %self.status,
            ?result,
            collected,
            moves = self.history.len(),
            "game finished"
        );

        self.result = Some(result);
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rotation(&self) -> &PlayerRotation {
        &self.rotation
    }

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        (!self.status.is_terminal()).then(|| self.rotation.current())
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// The sole winner of a finished game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.as_ref().and_then(GameResult::winner)
    }

    /// Every accepted move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Cup numbers the active player may choose; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[usize; 8]> {
        match self.active_player() {
            Some(player) => self.board.legal_cups(player),
            None => SmallVec::new(),
        }
    }

    /// Store counts per player.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.board.scores()
    }

    /// Check the invariants a deserialized game must satisfy.
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        self.config.validate().map_err(|e| e.to_string())?;
        self.board.check_layout()?;

        if self.board.player_count() != self.config.players_number
            || self.board.cups_per_player() != self.config.cups_per_player
        {
            return Err("board dimensions do not match the config".into());
        }
        if !self.rotation.is_consistent_with(self.config.players_number) {
            return Err("player rotation does not match the config".into());
        }

        let total = self.board.total_stones();
        if total > u64::from(u32::MAX) {
            return Err(format!("{total} stones do not fit in a single store"));
        }
        if total != self.stones_in_play {
            return Err(format!(
                "board holds {total} stones, expected {}",
                self.stones_in_play
            ));
        }
        if self.status == GameStatus::Active {
            if let Some(finished) = self.board.players().find(|player| player.is_finished()) {
                return Err(format!("{} has no stones left in an active game", finished.id()));
            }
        }

        match (&self.result, self.status) {
            (None, GameStatus::Active) => Ok(()),
            (Some(result), status) if result.status() == status => Ok(()),
            _ => Err(format!("status {} does not match the result", self.status)),
        }
    }
}
