//! Results of moves and game-over checks.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// What happened with rent after a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentSettlement {
    /// The space was unowned or owned by the mover.
    None,

    /// `amount` moved from the mover to `owner`.
    Paid { owner: String, amount: i64 },

    /// The mover could not cover `owed` and lost their whole balance,
    /// `forfeited`. The owner is not credited.
    Bankrupted { owner: String, owed: i64, forfeited: i64 },
}

/// Everything a successful move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub player: PlayerId,
    pub from: usize,
    pub to: usize,
    /// GO bonus credited, 0 unless the move ended on GO.
    pub go_bonus: i64,
    pub rent: RentSettlement,
}

/// Result of `move_player`.
///
/// "No such player" and "player may not move" are kept apart from each other
/// and from a completed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No player has that name. Nothing changed.
    NotFound,
    /// The player's balance is zero or below. Nothing changed.
    Inactive,
    Moved(MoveReport),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, MoveOutcome::NotFound)
    }

    #[must_use]
    pub fn is_inactive(&self) -> bool {
        matches!(self, MoveOutcome::Inactive)
    }

    /// The move report, if the player moved.
    #[must_use]
    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            MoveOutcome::Moved(report) => Some(report),
            _ => None,
        }
    }
}

/// Where the game stands, by number of active players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Two or more players still have a positive balance.
    InProgress { active: usize },
    /// Exactly one player has a positive balance.
    Won(String),
    /// Nobody has a positive balance (or nobody joined).
    NoActivePlayers,
}

impl GameStatus {
    /// The winner's name, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameStatus::Won(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> MoveReport {
        MoveReport {
            player: PlayerId::new(0),
            from: 0,
            to: 5,
            go_bonus: 0,
            rent: RentSettlement::None,
        }
    }

    #[test]
    fn test_move_outcome_predicates() {
        assert!(MoveOutcome::NotFound.is_not_found());
        assert!(!MoveOutcome::NotFound.is_moved());
        assert!(MoveOutcome::Inactive.is_inactive());
        assert!(MoveOutcome::Inactive.report().is_none());

        let moved = MoveOutcome::Moved(report());
        assert!(moved.is_moved());
        assert_eq!(moved.report().map(|r| r.to), Some(5));
    }

    #[test]
    fn test_game_status_winner() {
        let won = GameStatus::Won("Remy".to_string());
        assert_eq!(won.winner(), Some("Remy"));
        assert!(won.is_over());

        let ongoing = GameStatus::InProgress { active: 2 };
        assert_eq!(ongoing.winner(), None);
        assert!(!ongoing.is_over());

        assert_eq!(GameStatus::NoActivePlayers.winner(), None);
        assert!(GameStatus::NoActivePlayers.is_over());
    }
}
