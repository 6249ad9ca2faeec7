#[macro_use]
extern crate derive_more;

use std::path::PathBuf;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use crate::game::{Game, Prefs};

mod apple;
mod basic;
mod error;
mod game;
mod rendering;
mod snake;

fn main() -> error::Result {
    let prefs = Prefs::default();

    let window_mode = WindowMode::default()
        .dimensions(prefs.window_width(), prefs.window_height())
        .resizable(false);
    let window_setup = WindowSetup::default().title("Grid Snake").vsync(true);
    let resource_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources");

    let (mut ctx, event_loop) = ContextBuilder::new("grid_snake", "grid_snake")
        .window_mode(window_mode)
        .window_setup(window_setup)
        .add_resource_path(resource_dir)
        .build()?;

    let game = Game::new(&mut ctx, prefs)?;
    event::run(ctx, event_loop, game)
}
