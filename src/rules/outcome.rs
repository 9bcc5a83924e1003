//! Game status, final results and per-move outcomes.

use serde::{Deserialize, Serialize};

use crate::board::Sowing;
use crate::core::{PlayerId, PlayerMap};

/// Lifecycle state of a game. `Win` and `Draw` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Active,
    Win,
    Draw,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Active
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Active => "active",
            GameStatus::Win => "win",
            GameStatus::Draw => "draw",
        };
        f.write_str(name)
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every store holds the same count.
    Draw,
    /// Several players share the top score while others trail (3+ players only).
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Rank final store counts.
    ///
    /// All equal is a draw; otherwise everyone holding the maximum wins.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let best = scores.values().copied().max().unwrap_or(0);
        let mut leaders: Vec<PlayerId> = scores
            .iter()
            .filter(|&(_, &score)| score == best)
            .map(|(player, _)| player)
            .collect();

        if leaders.len() == scores.player_count() {
            GameResult::Draw
        } else if leaders.len() == 1 {
            GameResult::Winner(leaders.remove(0))
        } else {
            GameResult::Winners(leaders)
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    /// The sole winner, if there is exactly one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            _ => None,
        }
    }

    /// Terminal status matching this result.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self {
            GameResult::Draw => GameStatus::Draw,
            GameResult::Winner(_) | GameResult::Winners(_) => GameStatus::Win,
        }
    }
}

/// What an accepted move did and who plays next.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player who made the move.
    pub player: PlayerId,
    /// Cup number that was played.
    pub cup_number: usize,
    /// Board-level details: landing pit, stones sown, capture.
    pub sowing: Sowing,
    /// Player to move next; `None` once the game is over.
    pub next_player: Option<PlayerId>,
    /// Game status after the move.
    pub status: GameStatus,
    /// Final result, set when this move ended the game.
    pub result: Option<GameResult>,
}

impl MoveOutcome {
    /// The sole winner, when this move ended the game with one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.as_ref().and_then(GameResult::winner)
    }

    /// Whether the mover goes again.
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        self.next_player == Some(self.player)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }
}
