//! Property tests over random boards, rosters and dice sequences.

mod common;

use proptest::prelude::*;
use real_estate_game::{GameConfig, MoveOutcome, RealEstateGame};

/// A board, a roster and a sequence of (player index, roll, try to buy).
fn arb_game() -> impl Strategy<Value = (GameConfig, Vec<(usize, i64, bool)>)> {
    (
        0i64..500,
        prop::collection::vec(1i64..400, 0..30),
        prop::collection::vec(-100i64..3000, 1..5),
        prop::collection::vec((0usize..5, -60i64..60, any::<bool>()), 0..80),
    )
        .prop_map(|(go_bonus, rents, balances, turns)| {
            let mut config = GameConfig::new().with_go_bonus(go_bonus).with_rents(rents);
            for (i, balance) in balances.into_iter().enumerate() {
                config = config.with_player(format!("P{}", i), balance);
            }
            (config, turns)
        })
}

proptest! {
    /// Rent can only clamp a balance to zero, never push it below. A player
    /// who starts non-negative stays non-negative.
    #[test]
    fn balances_never_go_negative((config, turns) in arb_game()) {
        common::init_logging();
        let mut game = RealEstateGame::from_config(&config);
        let starts_negative: Vec<bool> = config.players.iter().map(|p| p.balance < 0).collect();

        for (idx, roll, buy) in turns {
            let Some(player) = config.players.get(idx) else { continue };
            game.move_player(&player.name, roll);
            if buy {
                game.buy_space(&player.name);
            }

            for (p, negative_at_start) in game.players().iter().zip(&starts_negative) {
                if !negative_at_start {
                    prop_assert!(p.balance() >= 0, "{} went negative: {}", p.name(), p.balance());
                }
            }
        }
    }

    /// Purchase price stays at five times rent for every space.
    #[test]
    fn purchase_price_is_five_times_rent((config, turns) in arb_game()) {
        let mut game = RealEstateGame::from_config(&config);
        for (idx, roll, buy) in turns {
            let Some(player) = config.players.get(idx) else { continue };
            game.move_player(&player.name, roll);
            if buy {
                game.buy_space(&player.name);
            }
        }

        for space in game.spaces() {
            prop_assert_eq!(space.purchase_price(), space.rent_amount() * 5);
        }
    }

    /// Positions follow `(old + roll) mod len` with a non-negative result,
    /// landing on GO pays the bonus, and inactive players stay put.
    #[test]
    fn moves_follow_wrapping_arithmetic((config, turns) in arb_game()) {
        let mut game = RealEstateGame::from_config(&config);
        let len = game.board_len() as i64;
        let go_bonus = config.go_bonus;

        for (idx, roll, _) in turns {
            let Some(player) = config.players.get(idx) else { continue };
            let name = player.name.as_str();
            let before = game.player(name).cloned().unwrap();

            match game.move_player(name, roll) {
                MoveOutcome::Inactive => {
                    prop_assert!(before.balance() <= 0);
                    prop_assert_eq!(
                        game.get_player_current_position(name),
                        Some(before.position())
                    );
                    prop_assert_eq!(game.get_player_account_balance(name), Some(before.balance()));
                }
                MoveOutcome::Moved(report) => {
                    prop_assert!(before.balance() > 0);
                    let expected = (before.position() as i64 + roll).rem_euclid(len) as usize;
                    prop_assert_eq!(report.to, expected);
                    prop_assert!(report.to < game.board_len());
                    prop_assert_eq!(report.go_bonus, if expected == 0 { go_bonus } else { 0 });
                }
                MoveOutcome::NotFound => prop_assert!(false, "known player reported missing"),
            }
        }
    }

    /// A winner is reported exactly when one player has a positive balance.
    #[test]
    fn winner_iff_single_active_player((config, turns) in arb_game()) {
        let mut game = RealEstateGame::from_config(&config);
        for (idx, roll, buy) in turns {
            let Some(player) = config.players.get(idx) else { continue };
            game.move_player(&player.name, roll);
            if buy {
                game.buy_space(&player.name);
            }

            let active: Vec<&str> = game
                .players()
                .iter()
                .filter(|p| p.balance() > 0)
                .map(|p| p.name())
                .collect();
            let expected = if active.len() == 1 { Some(active[0].to_string()) } else { None };
            prop_assert_eq!(game.check_game_is_over(), expected);
        }
    }

    /// Unknown names never change any player.
    #[test]
    fn unknown_names_are_inert((config, turns) in arb_game()) {
        let mut game = RealEstateGame::from_config(&config);
        let before = game.players().to_vec();

        for (_, roll, _) in turns {
            prop_assert_eq!(game.move_player("nobody", roll), MoveOutcome::NotFound);
            prop_assert!(!game.buy_space("nobody"));
        }
        prop_assert_eq!(game.players(), before.as_slice());
    }
}
