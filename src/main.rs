mod config;
mod food;
mod game;
mod grid;
mod input;
mod snake;
mod term;

use anyhow::Result;

use crate::config::GameConfig;
use crate::game::Game;

fn main() -> Result<()> {
    let mut game = Game::new(GameConfig::default())?;

    // Restore the terminal before reporting any error from the game loop,
    // otherwise the message would land on the alternate screen and vanish.
    let outcome = game.run();
    game.shutdown()?;
    outcome
}
