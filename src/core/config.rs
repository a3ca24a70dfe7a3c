//! Game configuration types.
//!
//! A game is configured by:
//! - The GO bonus
//! - One rent amount per non-GO space, in board order
//! - An optional starting roster of players
//!
//! Configurations are plain serde data so they can be loaded from any format.

use serde::{Deserialize, Serialize};

/// The GO bonus on the standard board.
pub const STANDARD_GO_BONUS: i64 = 200;

/// The starting balance used by the standard roster.
pub const STANDARD_STARTING_BALANCE: i64 = 1500;

/// A player to create when the game is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub balance: i64,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }
}

/// Complete game configuration.
///
/// `Default` is the bare board: GO only, no bonus, no players.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Bonus paid for landing exactly on GO.
    #[serde(default)]
    pub go_bonus: i64,

    /// Rent per space, in board order. Space `i + 1` gets `rents[i]`.
    #[serde(default)]
    pub rents: Vec<i64>,

    /// Players created in order after the board.
    #[serde(default)]
    pub players: Vec<PlayerConfig>,
}

impl GameConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic 24-space board: rents 50 through 280 in steps of 10,
    /// GO bonus 200. No players.
    pub fn standard() -> Self {
        Self {
            go_bonus: STANDARD_GO_BONUS,
            rents: (5..=28).map(|i| i * 10).collect(),
            players: Vec::new(),
        }
    }

    /// Set the GO bonus.
    #[must_use]
    pub fn with_go_bonus(mut self, go_bonus: i64) -> Self {
        self.go_bonus = go_bonus;
        self
    }

    /// Replace the rent list.
    #[must_use]
    pub fn with_rents(mut self, rents: impl Into<Vec<i64>>) -> Self {
        self.rents = rents.into();
        self
    }

    /// Add a player to the starting roster.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, balance: i64) -> Self {
        self.players.push(PlayerConfig::new(name, balance));
        self
    }

    /// Number of spaces the board will have, GO included.
    #[must_use]
    pub fn board_len(&self) -> usize {
        self.rents.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bare_board() {
        let config = GameConfig::default();
        assert_eq!(config.go_bonus, 0);
        assert!(config.rents.is_empty());
        assert!(config.players.is_empty());
        assert_eq!(config.board_len(), 1);
    }

    #[test]
    fn test_standard_board() {
        let config = GameConfig::standard();

        assert_eq!(config.go_bonus, 200);
        assert_eq!(config.rents.len(), 24);
        assert_eq!(config.rents.first(), Some(&50));
        assert_eq!(config.rents.last(), Some(&280));
        assert_eq!(config.board_len(), 25);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_go_bonus(100)
            .with_rents(vec![10, 20, 30])
            .with_player("Arturo", STANDARD_STARTING_BALANCE)
            .with_player("Remy", 900);

        assert_eq!(config.go_bonus, 100);
        assert_eq!(config.rents, vec![10, 20, 30]);
        assert_eq!(config.players.len(), 2);
        assert_eq!(config.players[1], PlayerConfig::new("Remy", 900));
    }

    #[test]
    fn test_config_from_json_with_missing_fields() {
        let config: GameConfig = serde_json::from_str(r#"{ "rents": [50, 60] }"#).unwrap();

        assert_eq!(config.go_bonus, 0);
        assert_eq!(config.rents, vec![50, 60]);
        assert!(config.players.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::standard().with_player("Arturo", 1500);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
