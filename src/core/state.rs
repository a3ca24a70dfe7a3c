//! Game state: the board, the players and the history.
//!
//! ## Board
//!
//! `spaces[0]` is GO and exists from construction, so the board is never
//! empty and position arithmetic is always modulo a non-zero length.
//!
//! ## Players
//!
//! Players are stored in creation order. A name index gives O(1) lookup by
//! name; when two players share a name, the index keeps the first one, which
//! is the player every name-based operation resolves to.
//!
//! ## History
//!
//! Uses an `im` persistent vector so cloning a whole game stays cheap.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::event::{EventRecord, GameEvent};
use super::player::{Player, PlayerId};
use super::space::{BoardSpace, SpaceId};

/// Name of the space at index 0.
pub const GO_NAME: &str = "GO";

/// Complete game state.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    spaces: Vec<BoardSpace>,
    players: Vec<Player>,

    /// First `PlayerId` created under each name.
    name_index: FxHashMap<String, PlayerId>,

    history: Vector<EventRecord>,
    next_sequence: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a state holding only GO, with a bonus of 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spaces: vec![BoardSpace::new(GO_NAME, 0)],
            players: Vec::new(),
            name_index: FxHashMap::default(),
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    // === Board ===

    /// Number of spaces, GO included. Always at least 1.
    #[must_use]
    pub fn board_len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn spaces(&self) -> &[BoardSpace] {
        &self.spaces
    }

    #[must_use]
    pub fn space(&self, id: SpaceId) -> Option<&BoardSpace> {
        self.spaces.get(id.index())
    }

    #[must_use]
    pub fn go_space(&self) -> &BoardSpace {
        &self.spaces[0]
    }

    pub(crate) fn space_mut(&mut self, id: SpaceId) -> Option<&mut BoardSpace> {
        self.spaces.get_mut(id.index())
    }

    pub(crate) fn set_go_bonus(&mut self, go_bonus: i64) {
        self.spaces[0].set_rent_amount(go_bonus);
    }

    /// Append a space named `label`. Names are not unique: each batch of
    /// spaces is labelled from 1 again.
    pub(crate) fn push_space(&mut self, label: usize, rent_amount: i64) -> SpaceId {
        let id = SpaceId::new(self.spaces.len() as u32);
        self.spaces.push(BoardSpace::new(label.to_string(), rent_amount));
        id
    }

    /// Where a player at `from` ends up after rolling `roll`.
    ///
    /// Uses the Euclidean remainder, so negative rolls move backwards and
    /// still land in `0..board_len()`.
    #[must_use]
    pub fn wrap_position(&self, from: usize, roll: i64) -> usize {
        let len = self.spaces.len() as i64;
        let offset = (from as i64).rem_euclid(len) + roll.rem_euclid(len);
        offset.rem_euclid(len) as usize
    }

    // === Players ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Resolve a name to the first player created with it.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.name_index.get(name).copied()
    }

    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.player_id(name).and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn has_player(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Append a player. A repeated name gets a fresh id but does not
    /// replace the earlier entry in the name index.
    pub(crate) fn push_player(&mut self, name: &str, balance: i64) -> PlayerId {
        let id = PlayerId::new(self.players.len() as u32);
        self.players.push(Player::new(name, balance));
        self.name_index.entry(name.to_string()).or_insert(id);
        id
    }

    /// Ids of players with a positive balance, in creation order.
    pub fn active_player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, _)| PlayerId::new(i as u32))
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history.push_back(EventRecord { sequence, event });
    }
}
