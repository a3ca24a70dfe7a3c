//! Player identification and per-player economic state.
//!
//! ## PlayerId
//!
//! Index of a player in creation order. The first player is `PlayerId(0)`.
//!
//! ## Player
//!
//! A name, a balance and a board position. Players are never removed from a
//! game; a player whose balance is zero or below is simply inactive.
//!
//! ## Arithmetic
//!
//! Balances are bounded by `i64`. Credits and debits saturate at
//! `i64::MAX` and `i64::MIN` instead of wrapping, so an amount that would
//! overflow is partly lost. Every other amount is moved exactly.

use serde::{Deserialize, Serialize};

/// Player identifier, assigned in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// An economic actor on the board.
///
/// Fields are private: balance and position only change through the game's
/// move and purchase operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    balance: i64,
    position: usize,
}

impl Player {
    /// Create a player standing on GO.
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
            position: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// A player is active while their balance is strictly positive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.balance > 0
    }

    /// Add `amount`, saturating at the `i64` bounds.
    pub(crate) fn credit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Subtract `amount`, saturating at the `i64` bounds.
    pub(crate) fn debit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_sub(amount);
    }

    /// Empty the account, returning what was in it.
    pub(crate) fn liquidate(&mut self) -> i64 {
        let forfeited = self.balance;
        self.debit(forfeited);
        forfeited
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
