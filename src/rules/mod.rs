//! Game rules.
//!
//! `RealEstateGame` owns a `GameState` and is the only thing that mutates it:
//! - Building the board and roster
//! - Moving players, paying the GO bonus, settling rent
//! - Buying spaces
//! - Detecting the winner

pub mod engine;
pub mod outcome;

pub use engine::RealEstateGame;
pub use outcome::{GameStatus, MoveOutcome, MoveReport, RentSettlement};
