//! Error types for fallible game operations.

use thiserror::Error;

use super::space::SpaceId;

/// Why a game operation was refused.
///
/// The collapsed operations (`buy_space`, `move_player`) hide these behind a
/// `bool` or `MoveOutcome`; the `try_` variants return them directly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no player named {0:?}")]
    PlayerNotFound(String),

    #[error("a player named {0:?} already exists")]
    DuplicatePlayerName(String),

    #[error("player {0:?} is inactive")]
    PlayerInactive(String),

    #[error("{space} is already owned by {owner:?}")]
    SpaceOwned { space: SpaceId, owner: String },

    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: i64, available: i64 },
}
