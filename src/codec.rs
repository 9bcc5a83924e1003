//! Binary encoding of a whole game.
//!
//! Lets the caller persist a game between moves. The format is `bincode`
//! over the serde derives, so it is compact but not self-describing: decode
//! with the same crate version that encoded.

use crate::error::CodecError;
use crate::rules::Game;

impl Game {
    /// Serialize the full game state, history included.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a game from `encode` output.
    ///
    /// Rejects data that parses but describes an impossible game (board
    /// shape not matching the config, rotation out of range, status and
    /// result disagreeing).
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let game: Game = bincode::deserialize(bytes)?;
        game.check_consistency().map_err(CodecError::Corrupt)?;
        Ok(game)
    }
}
