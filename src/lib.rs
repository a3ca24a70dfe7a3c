//! # real-estate-game
//!
//! A small board-game economy: players move around a circular board, buy
//! spaces, pay rent to owners, collect a bonus for landing on GO, and drop
//! out when they go bankrupt.
//!
//! ## Design Principles
//!
//! 1. **Dice Come From Outside**: the engine never rolls. Callers pass the
//!    roll to `move_player`, so every game is reproducible.
//!
//! 2. **Names Are Identity**: players are addressed by name and spaces record
//!    their owner by name. Duplicate names are allowed; the first player
//!    created under a name owns it for every lookup.
//!
//! 3. **No Panics On Input**: unknown players, negative rolls and empty
//!    boards are answered with return values, never with a panic.
//!
//! ## Example
//!
//! ```
//! use real_estate_game::{GameConfig, RealEstateGame, SpaceId};
//!
//! let mut game = RealEstateGame::from_config(
//!     &GameConfig::standard()
//!         .with_player("Arturo", 1500)
//!         .with_player("Remy", 1500),
//! );
//!
//! assert!(game.move_player("Arturo", 5).is_moved());
//! assert!(game.buy_space("Arturo"));
//! assert_eq!(game.owner_of(SpaceId::new(5)), Some("Arturo"));
//!
//! // Remy lands on Arturo's space and pays rent.
//! game.move_player("Remy", 5);
//! assert_eq!(game.get_player_account_balance("Remy"), Some(1410));
//! assert_eq!(game.check_game_is_over(), None);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, spaces, state, events, configuration, errors
//! - `rules`: The game engine and its result types

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardSpace, EventRecord, GameConfig, GameError, GameEvent, GameState, Player, PlayerConfig,
    PlayerId, SpaceId,
};

pub use crate::rules::{GameStatus, MoveOutcome, MoveReport, RealEstateGame, RentSettlement};
