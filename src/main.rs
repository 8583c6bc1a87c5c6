//! Terminal memory game runner (default binary).
//!
//! Reads configuration from the environment, builds the board and the tile art
//! before touching the terminal (so setup errors print normally), then hands
//! control to the game loop.

use anyhow::Result;

use tui_memory::app::{self, Clock, Context};
use tui_memory::config::AppConfig;
use tui_memory::core::GameState;
use tui_memory::logging;
use tui_memory::term::{AssetSet, GameView};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let game_config = config.game_config();
    let assets = AssetSet::load(game_config.pair_count())?;
    let clock = Clock::start();
    let mut game = GameState::new(game_config, clock.now_ms())?;
    let view = GameView::new(assets);

    let mut ctx = Context::init(&config, clock)?;
    let result = app::run(&mut ctx, &mut game, &view);

    // Always try to restore terminal state.
    let restored = ctx.teardown();
    result?;
    restored?;

    if game.game_over() {
        println!("Solved in {} seconds (seed {}).", game.score(), game_config.seed);
    }
    Ok(())
}
