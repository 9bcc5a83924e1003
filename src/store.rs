//! In-memory game arena.
//!
//! `GameStore` owns any number of independent games, hands out sequential
//! `GameId`s and routes moves to the right game. Persistence is the
//! caller's job (see `Game::encode`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::core::{GameConfig, PlayerId};
use crate::error::MancalaError;
use crate::rules::{Game, MoveOutcome};

/// Identifier of a game within a `GameStore`. Assigned from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A move request as it arrives from a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMove {
    pub game_id: GameId,
    pub player_id: PlayerId,
    /// 1-based cup number on the player's side.
    pub cup_number: usize,
}

/// Arena of games keyed by `GameId`.
///
/// Single writer: callers sharing a store across threads wrap it in their
/// own lock.
///
/// ```
/// use mancala_engine::{GameConfig, GameMove, GameStore, PlayerId};
///
/// let mut store = GameStore::new(GameConfig::default());
/// let id = store.create_game().unwrap();
///
/// let outcome = store
///     .process_move(GameMove { game_id: id, player_id: PlayerId::new(0), cup_number: 1 })
///     .unwrap();
/// assert!(outcome.extra_turn());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameStore {
    config: GameConfig,
    games: FxHashMap<GameId, Game>,
    next_id: u64,
}

impl GameStore {
    /// Create an empty store whose `create_game` uses `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            games: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Default configuration for new games.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game with the store's default configuration.
    pub fn create_game(&mut self) -> Result<GameId, MancalaError> {
        let config = self.config.clone();
        self.create_game_with(&config)
    }

    /// Start a game with an explicit configuration.
    #[instrument(skip(self))]
    pub fn create_game_with(&mut self, config: &GameConfig) -> Result<GameId, MancalaError> {
        let game = Game::from_config(config)?;
        self.next_id += 1;
        let id = GameId(self.next_id);
        self.games.insert(id, game);

        info!(game_id = %id, "game created");
        Ok(id)
    }

    /// Look up a game.
    pub fn game(&self, id: GameId) -> Result<&Game, MancalaError> {
        self.games.get(&id).ok_or(MancalaError::GameNotFound(id))
    }

    /// Apply a move to the game it names.
    ///
    /// A rejected move leaves the stored game as it was.
    #[instrument(skip(self), fields(game_id = %request.game_id))]
    pub fn process_move(&mut self, request: GameMove) -> Result<MoveOutcome, MancalaError> {
        let game = self.games.get_mut(&request.game_id).ok_or_else(|| {
            warn!("unknown game");
            MancalaError::GameNotFound(request.game_id)
        })?;

        game.handle_move(request.player_id, request.cup_number)
            .inspect_err(|error| {
                warn!(
                    player = %request.player_id,
                    cup_number = request.cup_number,
                    %error,
                    "move rejected"
                );
            })
    }

    /// Drop a game, returning it if it existed.
    pub fn remove(&mut self, id: GameId) -> Option<Game> {
        self.games.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Ids of every stored game, ascending.
    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
