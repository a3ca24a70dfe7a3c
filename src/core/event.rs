//! Game history.
//!
//! Every state change the game makes is recorded as a `GameEvent` wrapped in
//! an `EventRecord` carrying its sequence number. A single operation can
//! produce several events (a move that lands on GO and then pays rent records
//! `Moved`, `GoBonusPaid` and `RentPaid` in that order).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::space::SpaceId;

/// A single state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Spaces were appended and the GO bonus set.
    SpacesCreated { go_bonus: i64, added: usize },

    PlayerJoined { player: PlayerId, name: String, balance: i64 },

    Moved { player: PlayerId, from: SpaceId, to: SpaceId, roll: i64 },

    GoBonusPaid { player: PlayerId, amount: i64 },

    SpacePurchased { player: PlayerId, space: SpaceId, price: i64 },

    /// Rent moved from `payer` to the owner of `space`.
    RentPaid { payer: PlayerId, owner: PlayerId, space: SpaceId, amount: i64 },

    /// `payer` could not cover rent and lost `forfeited`. The owner
    /// receives nothing.
    Bankrupted { payer: PlayerId, space: SpaceId, owed: i64, forfeited: i64 },
}

/// A recorded event with its position in the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Sequence number, starting at 0 and increasing by one per event.
    pub sequence: u64,

    pub event: GameEvent,
}
