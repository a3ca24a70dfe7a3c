//! Core game types: players, spaces, state, events, configuration, errors.
//!
//! These are passive data holders. All rule logic lives in `rules`, which
//! mutates them through the crate-private setters defined here.

pub mod player;
pub mod space;
pub mod config;
pub mod event;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId};
pub use space::{BoardSpace, SpaceId, PURCHASE_PRICE_MULTIPLIER};
pub use config::{GameConfig, PlayerConfig, STANDARD_GO_BONUS, STANDARD_STARTING_BALANCE};
pub use event::{EventRecord, GameEvent};
pub use error::GameError;
pub use state::{GameState, GO_NAME};
