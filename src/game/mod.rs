use ggez::audio::{self, SoundSource};
use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;
use rand::rngs::ThreadRng;

use crate::basic::Dir;
use crate::error::{Error, ErrorConversion, Result};
use crate::game::control::{Control, State};
use crate::game::world::{Status, TickOutcome, World};
use crate::rendering::{self, SpriteSet};

pub use palette::Palette;
pub use prefs::Prefs;

pub mod control;
mod palette;
pub mod prefs;
pub mod world;

/// Owns the world, the tick clock and all window-facing resources,
/// wiring them into the ggez event loop
pub struct Game {
    control: Control,
    world: World,
    prefs: Prefs,
    palette: Palette,

    sprites: SpriteSet,
    crunch: audio::Source,
    // rebuilt lazily after the grass toggle
    grass_mesh: Option<Mesh>,

    rng: ThreadRng,
}

impl Game {
    /// Fails when a sprite or sound resource can't be loaded
    pub fn new(ctx: &mut Context, prefs: Prefs) -> Result<Self> {
        let mut rng = rand::thread_rng();
        let world = World::new(&prefs, &mut rng);

        Ok(Self {
            control: Control::new(prefs.tick_interval),
            world,
            sprites: SpriteSet::load(ctx).with_trace_step("Game::new")?,
            crunch: audio::Source::new(ctx, "/crunch.wav")
                .map_err(Error::from)
                .with_trace_step("Game::new")?,
            prefs,
            palette: Palette::garden(),
            grass_mesh: None,
            rng,
        })
    }

    fn restart(&mut self) {
        self.world.reset(&mut self.rng);
        self.control.play();
    }
}

impl EventHandler<Error> for Game {
    fn update(&mut self, ctx: &mut Context) -> Result {
        while self.control.can_update() {
            match self.world.tick(&mut self.rng) {
                TickOutcome::AteFruit => self.crunch.play_detached(ctx)?,
                TickOutcome::Won => {
                    self.crunch.play_detached(ctx)?;
                    self.control.game_over();
                }
                TickOutcome::Died => self.control.game_over(),
                TickOutcome::Moved | TickOutcome::Idle => {}
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, self.palette.background);

        if self.prefs.draw_grass {
            if self.grass_mesh.is_none() {
                let mesh = rendering::grass_mesh(
                    self.prefs.grid_dim,
                    self.prefs.cell_size,
                    &self.palette,
                    ctx,
                )
                .with_trace_step("Game::draw")?;
                self.grass_mesh = Some(mesh);
            }
            if let Some(mesh) = &self.grass_mesh {
                canvas.draw(mesh, DrawParam::default());
            }
        }

        if let Some(apple) = &self.world.apple {
            rendering::draw_apple(&mut canvas, apple, &self.sprites, self.prefs.cell_size);
        }
        rendering::draw_snake(&mut canvas, &self.world.snake, &self.sprites, self.prefs.cell_size);
        rendering::draw_score(
            &mut canvas,
            ctx,
            self.world.score,
            &self.sprites,
            &self.palette,
            &self.prefs,
        )
        .with_trace_step("Game::draw")?;

        match self.world.status {
            Status::GameOver => {
                rendering::draw_overlay(
                    &mut canvas,
                    ctx,
                    "GAME OVER",
                    self.world.score,
                    &self.palette,
                    &self.prefs,
                )
                .with_trace_step("Game::draw")?;
            }
            Status::Won => {
                rendering::draw_overlay(
                    &mut canvas,
                    ctx,
                    "YOU WIN",
                    self.world.score,
                    &self.palette,
                    &self.prefs,
                )
                .with_trace_step("Game::draw")?;
            }
            Status::Running => {}
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        use KeyCode::*;

        let Some(key) = input.keycode else {
            return Ok(());
        };
        match key {
            Space => match self.control.state() {
                State::GameOver => self.restart(),
                State::Playing => self.control.pause(),
                State::Paused => self.control.play(),
            },
            G => {
                self.prefs.draw_grass = !self.prefs.draw_grass;
                self.grass_mesh = None;
            }
            Escape => ctx.request_quit(),
            Up | W => self.world.request_direction(Dir::Up),
            Down | S => self.world.request_direction(Dir::Down),
            Left | A => self.world.request_direction(Dir::Left),
            Right | D => self.world.request_direction(Dir::Right),
            _ => {}
        }
        Ok(())
    }
}
