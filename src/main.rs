mod apple;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::game::{Outcome, SnakeGame};

pub type PixelInt = i32;
pub type Coords = (PixelInt, PixelInt);

const LOG_FILE: &str = "snake.log";

fn main() -> Result<()> {
    // The terminal belongs to the game, so logs go to a file
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE).context("failed to create log file")?,
    )
    .context("failed to initialize logger")?;

    info!("Starting snake");

    let mut game = SnakeGame::new()?;
    let result = game.play();
    // Release the terminal before reporting anything
    drop(game);

    match &result {
        Ok(Outcome::Quit) => info!("Player quit"),
        Ok(Outcome::GameOver { score }) => info!("Game over, score {}", score),
        Err(err) => error!("Game aborted: {:#}", err),
    }

    result.map(|_| ())
}
