//! The game engine.
//!
//! Every operation that names a player resolves the name to the first player
//! created with it. Operations come in two flavours:
//! - `try_*` returns `Result<_, GameError>` with the exact refusal reason
//! - the plain form collapses refusals the way callers of the board game
//!   expect (`bool` for purchases, `MoveOutcome` for moves)
//!
//! Nothing here panics on caller input: unknown names, negative dice and
//! empty rent lists are all accepted.

use tracing::{debug, info, warn};

use crate::core::{
    BoardSpace, EventRecord, GameConfig, GameError, GameEvent, GameState, Player, PlayerId,
    SpaceId,
};

use super::outcome::{GameStatus, MoveOutcome, MoveReport, RentSettlement};

/// A single game of the real estate board game.
#[derive(Clone, Debug, Default)]
pub struct RealEstateGame {
    state: GameState,
}

impl RealEstateGame {
    /// Create a game with only the GO space, bonus 0, and no players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the board and roster described by `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        debug!(
            board_len = config.board_len(),
            players = config.players.len(),
            "Building game from config"
        );
        let mut game = Self::new();
        game.create_spaces(config.go_bonus, &config.rents);
        for player in &config.players {
            game.create_player(&player.name, player.balance);
        }
        game
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Setup ===

    /// Set the GO bonus and append one space per rent, in order. The spaces
    /// are named "1", "2", ... after their position in `rents`.
    ///
    /// Calling this again overwrites the GO bonus and appends another batch
    /// after the existing spaces. The new batch is named from "1" again, so
    /// names repeat.
    pub fn create_spaces(&mut self, go_bonus: i64, rents: &[i64]) {
        self.state.set_go_bonus(go_bonus);
        for (i, &rent) in rents.iter().enumerate() {
            self.state.push_space(i + 1, rent);
        }

        debug!(
            go_bonus,
            added = rents.len(),
            board_len = self.state.board_len(),
            "Created spaces"
        );
        self.state.record(GameEvent::SpacesCreated {
            go_bonus,
            added: rents.len(),
        });
    }

    /// Add a player on GO. Duplicate names are allowed; the earlier player
    /// keeps the name for all lookups.
    pub fn create_player(&mut self, name: &str, balance: i64) -> PlayerId {
        if self.state.has_player(name) {
            warn!(player = name, "Duplicate player name; lookups resolve to the first player");
        }

        let id = self.state.push_player(name, balance);
        debug!(%id, player = name, balance, "Player joined");
        self.state.record(GameEvent::PlayerJoined {
            player: id,
            name: name.to_string(),
            balance,
        });
        id
    }

    /// Like `create_player`, but refuses a name that is already taken.
    pub fn try_create_player(&mut self, name: &str, balance: i64) -> Result<PlayerId, GameError> {
        if self.state.has_player(name) {
            return Err(GameError::DuplicatePlayerName(name.to_string()));
        }
        Ok(self.create_player(name, balance))
    }

    // === Queries ===

    #[must_use]
    pub fn get_player_account_balance(&self, name: &str) -> Option<i64> {
        self.state.player_by_name(name).map(Player::balance)
    }

    #[must_use]
    pub fn get_player_current_position(&self, name: &str) -> Option<usize> {
        self.state.player_by_name(name).map(Player::position)
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.state.player_by_name(name)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    #[must_use]
    pub fn space(&self, id: SpaceId) -> Option<&BoardSpace> {
        self.state.space(id)
    }

    #[must_use]
    pub fn spaces(&self) -> &[BoardSpace] {
        self.state.spaces()
    }

    #[must_use]
    pub fn board_len(&self) -> usize {
        self.state.board_len()
    }

    #[must_use]
    pub fn owner_of(&self, id: SpaceId) -> Option<&str> {
        self.state.space(id).and_then(BoardSpace::owner)
    }

    /// Spaces owned under `name`, in board order.
    #[must_use]
    pub fn properties_of(&self, name: &str) -> Vec<SpaceId> {
        self.state
            .spaces()
            .iter()
            .enumerate()
            .filter(|(_, space)| space.owner() == Some(name))
            .map(|(i, _)| SpaceId::new(i as u32))
            .collect()
    }

    /// Names of players with a positive balance, in creation order.
    #[must_use]
    pub fn active_players(&self) -> Vec<&str> {
        self.state
            .active_player_ids()
            .filter_map(|id| self.state.player(id))
            .map(Player::name)
            .collect()
    }

    #[must_use]
    pub fn history(&self) -> &im::Vector<EventRecord> {
        self.state.history()
    }

    // === Purchases ===

    /// Buy the space the player is standing on.
    ///
    /// Fails if the space already has an owner or the player cannot pay the
    /// full purchase price. A player's balance is not otherwise checked, so
    /// an inactive player can still buy a space priced at 0.
    pub fn try_buy_space(&mut self, name: &str) -> Result<SpaceId, GameError> {
        let id = self.resolve(name)?;
        let player = self.player_entry(id)?;
        let (position, available) = (player.position(), player.balance());
        let space_id = SpaceId::new(position as u32);

        // Positions are always wrapped into the board, which never shrinks.
        let space = &self.state.spaces()[position];
        if space.is_owned() {
            return Err(self.space_owned(space_id));
        }

        let price = space.purchase_price();
        if available < price {
            return Err(GameError::InsufficientFunds {
                needed: price,
                available,
            });
        }

        // The debit only follows a successful claim.
        let claimed = self
            .state
            .space_mut(space_id)
            .is_some_and(|space| space.claim(name));
        if !claimed {
            return Err(self.space_owned(space_id));
        }
        self.player_entry(id)?.debit(price);

        info!(player = name, %space_id, price, "Space purchased");
        self.state.record(GameEvent::SpacePurchased {
            player: id,
            space: space_id,
            price,
        });
        Ok(space_id)
    }

    /// Buy the space the player is standing on. Returns false on any
    /// refusal, including an unknown name.
    pub fn buy_space(&mut self, name: &str) -> bool {
        match self.try_buy_space(name) {
            Ok(_) => true,
            Err(err) => {
                debug!(player = name, %err, "Purchase refused");
                false
            }
        }
    }

    // === Movement ===

    /// Move a player by `dice_roll` spaces and settle the landing.
    ///
    /// In order:
    /// 1. A player with a balance of zero or less does not move.
    /// 2. The new position is `(position + dice_roll)` wrapped into the board.
    /// 3. Ending exactly on GO credits the GO bonus. Passing over GO does not.
    /// 4. Ending on a space owned under another name charges its rent. If the
    ///    mover cannot cover it, their balance drops to exactly zero and the
    ///    owner receives nothing.
    pub fn try_move_player(&mut self, name: &str, dice_roll: i64) -> Result<MoveReport, GameError> {
        let id = self.resolve(name)?;
        let player = self.player_entry(id)?;
        if !player.is_active() {
            debug!(player = name, balance = player.balance(), "Inactive player cannot move");
            return Err(GameError::PlayerInactive(name.to_string()));
        }

        let from = player.position();
        let to = self.state.wrap_position(from, dice_roll);
        self.player_entry(id)?.set_position(to);

        debug!(player = name, from, to, dice_roll, "Player moved");
        self.state.record(GameEvent::Moved {
            player: id,
            from: SpaceId::new(from as u32),
            to: SpaceId::new(to as u32),
            roll: dice_roll,
        });

        let mut go_bonus = 0;
        if SpaceId::new(to as u32).is_go() {
            go_bonus = self.state.go_space().rent_amount();
            self.player_entry(id)?.credit(go_bonus);
            self.state.record(GameEvent::GoBonusPaid {
                player: id,
                amount: go_bonus,
            });
        }

        let rent = self.settle_rent(id, name, SpaceId::new(to as u32))?;

        Ok(MoveReport {
            player: id,
            from,
            to,
            go_bonus,
            rent,
        })
    }

    /// Move a player, reporting unknown and inactive players distinctly.
    pub fn move_player(&mut self, name: &str, dice_roll: i64) -> MoveOutcome {
        match self.try_move_player(name, dice_roll) {
            Ok(report) => MoveOutcome::Moved(report),
            Err(GameError::PlayerInactive(_)) => MoveOutcome::Inactive,
            Err(err) => {
                debug!(player = name, %err, "Move refused");
                MoveOutcome::NotFound
            }
        }
    }

    fn settle_rent(
        &mut self,
        payer: PlayerId,
        name: &str,
        space_id: SpaceId,
    ) -> Result<RentSettlement, GameError> {
        let Some(space) = self.state.space(space_id) else {
            return Ok(RentSettlement::None);
        };
        let owner = match space.owner() {
            Some(owner) if owner != name => owner.to_string(),
            _ => return Ok(RentSettlement::None),
        };
        let owed = space.rent_amount();

        // Spaces are only ever claimed by registered players.
        let Some(owner_id) = self.state.player_id(&owner) else {
            return Ok(RentSettlement::None);
        };

        let payer_entry = self.player_entry(payer)?;
        if payer_entry.balance() >= owed {
            payer_entry.debit(owed);
            self.player_entry(owner_id)?.credit(owed);

            debug!(payer = name, owner = %owner, owed, "Rent paid");
            self.state.record(GameEvent::RentPaid {
                payer,
                owner: owner_id,
                space: space_id,
                amount: owed,
            });
            Ok(RentSettlement::Paid { owner, amount: owed })
        } else {
            let forfeited = payer_entry.liquidate();

            info!(payer = name, owner = %owner, owed, forfeited, "Player bankrupted");
            self.state.record(GameEvent::Bankrupted {
                payer,
                space: space_id,
                owed,
                forfeited,
            });
            Ok(RentSettlement::Bankrupted {
                owner,
                owed,
                forfeited,
            })
        }
    }

    // === End of game ===

    /// Current status, by number of players with a positive balance.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let active = self.active_players();
        match active.as_slice() {
            [] => GameStatus::NoActivePlayers,
            [winner] => GameStatus::Won((*winner).to_string()),
            many => GameStatus::InProgress { active: many.len() },
        }
    }

    /// The winner's name if exactly one player is active, otherwise `None`.
    ///
    /// `None` covers both a game still in progress and one where nobody is
    /// left; use `status` to tell them apart.
    #[must_use]
    pub fn check_game_is_over(&self) -> Option<String> {
        match self.status() {
            GameStatus::Won(name) => {
                debug!(winner = %name, "Game over");
                Some(name)
            }
            _ => None,
        }
    }

    // === Helpers ===

    fn resolve(&self, name: &str) -> Result<PlayerId, GameError> {
        self.state
            .player_id(name)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    fn space_owned(&self, space: SpaceId) -> GameError {
        GameError::SpaceOwned {
            space,
            owner: self.owner_of(space).unwrap_or_default().to_string(),
        }
    }

    fn player_entry(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        // Ids come from the name index, which only holds pushed players.
        self.state
            .player_mut(id)
            .ok_or_else(|| GameError::PlayerNotFound(id.to_string()))
    }
}
