//! Board spaces.
//!
//! The board is a ring of `BoardSpace`s. Index 0 is GO: its rent amount is
//! the bonus paid to a player who lands on it.
//!
//! Ownership is recorded by player *name*, not `PlayerId`. A space that has
//! been claimed stays claimed for the rest of the game.

use serde::{Deserialize, Serialize};

/// Purchase price is always this multiple of the rent.
pub const PURCHASE_PRICE_MULTIPLIER: i64 = 5;

/// Position of a space on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(pub u32);

impl SpaceId {
    /// The GO space.
    pub const GO: SpaceId = SpaceId(0);

    /// Create a new space ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn is_go(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

/// A purchasable position on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpace {
    name: String,
    rent_amount: i64,
    owner: Option<String>,
}

impl BoardSpace {
    /// Create an unowned space.
    pub fn new(name: impl Into<String>, rent_amount: i64) -> Self {
        Self {
            name: name.into(),
            rent_amount,
            owner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rent owed by a visitor, or the landing bonus for GO.
    #[must_use]
    pub fn rent_amount(&self) -> i64 {
        self.rent_amount
    }

    /// Cost to buy this space.
    ///
    /// Derived from the rent on every call, so it tracks a changed GO bonus.
    /// Exactly `rent_amount * 5` while that fits in an `i64`; beyond that it
    /// saturates at `i64::MAX` or `i64::MIN`.
    #[must_use]
    pub fn purchase_price(&self) -> i64 {
        self.rent_amount.saturating_mul(PURCHASE_PRICE_MULTIPLIER)
    }

    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub(crate) fn set_rent_amount(&mut self, rent_amount: i64) {
        self.rent_amount = rent_amount;
    }

    /// Record `owner` as the owner. Returns false if already owned.
    pub(crate) fn claim(&mut self, owner: &str) -> bool {
        if self.is_owned() {
            return false;
        }
        self.owner = Some(owner.to_string());
        true
    }
}
