//! Shared helpers for integration tests.

use real_estate_game::{GameConfig, RealEstateGame};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test subscriber. Safe to call from every test.
///
/// Level comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// The standard 24-space board with two players at 1500 each.
#[allow(dead_code)]
pub fn two_player_game() -> RealEstateGame {
    RealEstateGame::from_config(
        &GameConfig::standard()
            .with_player("Arturo", 1500)
            .with_player("Remy", 1500),
    )
}
