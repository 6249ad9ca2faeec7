use std::time::Duration;

use static_assertions::const_assert;

use crate::basic::{Cell, GridDim};
use crate::game::world::WallPolicy;

const DEFAULT_COLS: isize = 20;
const DEFAULT_ROWS: isize = 20;
const DEFAULT_SNAKE_LEN: usize = 3;

// the spawn body must fit on the default board with room to its left
const_assert!(DEFAULT_COLS as usize > DEFAULT_SNAKE_LEN + 2);

#[derive(Clone, Debug)]
pub struct Prefs {
    pub grid_dim: GridDim,
    /// Side length of a grid cell in pixels
    pub cell_size: f32,
    pub tick_interval: Duration,
    pub initial_snake_len: usize,
    /// Cells gained per fruit eaten
    pub grow_increment: usize,
    pub wall_policy: WallPolicy,
    pub draw_grass: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            grid_dim: Cell::new(DEFAULT_COLS, DEFAULT_ROWS),
            cell_size: 40.,
            tick_interval: Duration::from_millis(80),
            initial_snake_len: DEFAULT_SNAKE_LEN,
            grow_increment: 1,
            wall_policy: WallPolicy::GameOverOnWallHit,
            draw_grass: true,
        }
    }
}

impl Prefs {
    pub fn wall_policy(mut self, wall_policy: WallPolicy) -> Self {
        self.wall_policy = wall_policy;
        self
    }

    pub fn grow_increment(mut self, grow_increment: usize) -> Self {
        self.grow_increment = grow_increment;
        self
    }

    pub fn window_width(&self) -> f32 {
        self.grid_dim.x as f32 * self.cell_size
    }

    pub fn window_height(&self) -> f32 {
        self.grid_dim.y as f32 * self.cell_size
    }
}
