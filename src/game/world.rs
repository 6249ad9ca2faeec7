use rand::Rng;

use crate::apple::{spawn::spawn_apple, Apple};
use crate::basic::{Cell, Dir, GridDim};
use crate::game::Prefs;
use crate::snake::Snake;

/// What happens when the snake's head would leave the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WallPolicy {
    GameOverOnWallHit,
    /// Instead of dying, turn along the wall; deterministic, favoring
    /// the perpendicular direction whose resulting head is closest to
    /// the board center
    AutoRedirectAwayFromWall,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    Running,
    GameOver,
    /// The snake fills the entire board
    Won,
}

/// Result of a single tick, reported so the caller can play sounds
/// and stop the clock
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TickOutcome {
    /// Nothing moved (no direction yet, or the game already ended)
    Idle,
    Moved,
    AteFruit,
    Died,
    Won,
}

/// The full game state and rules, advanced one tick at a time.
/// Knows nothing about windows, rendering or wall-clock time.
pub struct World {
    pub dim: GridDim,
    pub snake: Snake,
    pub apple: Option<Apple>,
    pub score: u32,
    pub status: Status,
    pub wall_policy: WallPolicy,
}

impl World {
    pub fn new(prefs: &Prefs, rng: &mut impl Rng) -> Self {
        let dim = prefs.grid_dim;
        // head sits initial_len + 2 cells in, body extending left
        let spawn_head = Cell::new(prefs.initial_snake_len as isize + 2, dim.y / 2);
        let snake = Snake::new(spawn_head, prefs.initial_snake_len, prefs.grow_increment);
        let apple = spawn_apple(&snake, dim, rng);

        Self {
            dim,
            snake,
            apple,
            score: 0,
            status: Status::Running,
            wall_policy: prefs.wall_policy,
        }
    }

    /// Back to the spawn state, new fruit, score zeroed
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.snake.reset();
        self.apple = spawn_apple(&self.snake, self.dim, rng);
        self.score = 0;
        self.status = Status::Running;
    }

    /// Player input; ignored once the game has ended
    pub fn request_direction(&mut self, dir: Dir) {
        if self.status == Status::Running {
            self.snake.queue_turn(dir);
        }
    }

    /// Advance the game by one step: move the snake, apply growth,
    /// detect death and handle the fruit. Eating takes effect on this
    /// same tick, so the snake lengthens the moment its head lands on
    /// the fruit.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        if self.status != Status::Running {
            return TickOutcome::Idle;
        }
        let Some(mut proposed) = self.snake.next_head() else {
            return TickOutcome::Idle;
        };

        if self.wall_policy == WallPolicy::AutoRedirectAwayFromWall
            && !self.dim.contains(proposed)
        {
            if let Some(dir) = self.redirect_dir() {
                self.snake.force_dir(dir);
                proposed = self.snake.head().translate(dir, 1);
            }
        }

        let ate = self.apple.map(|apple| apple.pos) == Some(proposed);
        if ate {
            self.snake.grow();
        }

        let new_head = match self.snake.advance() {
            Some(head) => head,
            None => return TickOutcome::Idle,
        };

        // the tail has already vacated its cell, moving into it is legal
        if self.snake.body.iter().skip(1).any(|&cell| cell == new_head) {
            self.status = Status::GameOver;
            return TickOutcome::Died;
        }
        if !self.dim.contains(new_head) {
            self.status = Status::GameOver;
            return TickOutcome::Died;
        }

        if ate {
            self.score += 1;
            self.apple = spawn_apple(&self.snake, self.dim, rng);
            if self.apple.is_none() {
                self.status = Status::Won;
                return TickOutcome::Won;
            }
            return TickOutcome::AteFruit;
        }

        TickOutcome::Moved
    }

    /// In-bounds direction to steer along the wall: never the reverse of
    /// travel, perpendicular turns preferred, ties broken toward the cell
    /// closest to the board center
    fn redirect_dir(&self) -> Option<Dir> {
        let current = self.snake.dir.or(self.snake.pending_dir)?;
        let head = self.snake.head();
        let center = Cell::new(self.dim.x / 2, self.dim.y / 2);

        let in_bounds: Vec<Dir> = Dir::iter()
            .filter(|&dir| dir != -current && self.dim.contains(head.translate(dir, 1)))
            .collect();
        let turns: Vec<Dir> = in_bounds
            .iter()
            .copied()
            .filter(|dir| dir.axis() != current.axis())
            .collect();

        let candidates = if turns.is_empty() { in_bounds } else { turns };
        candidates
            .into_iter()
            .min_by_key(|&dir| head.translate(dir, 1).manhattan_distance(center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    fn world() -> World {
        World::new(&Prefs::default(), &mut rng())
    }

    fn cells(pairs: &[(isize, isize)]) -> Vec<Cell> {
        pairs.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn body(world: &World) -> Vec<Cell> {
        world.snake.body.iter().copied().collect()
    }

    #[test]
    fn spawn_state() {
        let world = world();
        assert_eq!(body(&world), cells(&[(5, 10), (4, 10), (3, 10)]));
        assert_eq!(world.score, 0);
        assert_eq!(world.status, Status::Running);
        let apple = world.apple.unwrap();
        assert!(!world.snake.occupies(apple.pos));
    }

    #[test]
    fn tick_without_input_is_idle() {
        let mut world = world();
        let mut rng = rng();
        for _ in 0..10 {
            assert_eq!(world.tick(&mut rng), TickOutcome::Idle);
        }
        assert_eq!(body(&world), cells(&[(5, 10), (4, 10), (3, 10)]));
    }

    #[test]
    fn single_step_right() {
        let mut world = world();
        // keep the fruit out of the way
        world.apple = Some(Apple { pos: Cell::new(0, 0) });

        world.request_direction(Dir::Right);
        assert_eq!(world.tick(&mut rng()), TickOutcome::Moved);
        assert_eq!(body(&world), cells(&[(6, 10), (5, 10), (4, 10)]));
        assert_eq!(world.score, 0);
    }

    #[test]
    fn eating_grows_on_the_same_tick() {
        let mut world = world();
        world.apple = Some(Apple { pos: Cell::new(6, 10) });

        world.request_direction(Dir::Right);
        assert_eq!(world.tick(&mut rng()), TickOutcome::AteFruit);
        assert_eq!(world.score, 1);
        assert_eq!(world.snake.len(), 4);
        assert_eq!(body(&world), cells(&[(6, 10), (5, 10), (4, 10), (3, 10)]));

        // a fresh fruit appeared outside the body
        let apple = world.apple.unwrap();
        assert!(!world.snake.occupies(apple.pos));
        assert!(world.dim.contains(apple.pos));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut world = world();
        world.apple = Some(Apple { pos: Cell::new(0, 0) });
        let mut rng = rng();

        world.request_direction(Dir::Right);
        world.tick(&mut rng);
        world.request_direction(Dir::Left);
        world.tick(&mut rng);

        // still travelling right
        assert_eq!(world.snake.head(), Cell::new(7, 10));
        assert_eq!(world.status, Status::Running);
    }

    #[test]
    fn moving_into_vacated_tail_cell_is_legal() {
        let mut world = world();
        world.apple = Some(Apple { pos: Cell::new(0, 0) });
        // a 2x2 loop: the head re-enters the cell the tail leaves this tick
        world.snake.body = cells(&[(5, 5), (4, 5), (4, 6), (5, 6)]).into();
        world.snake.dir = Some(Dir::Right);
        world.snake.pending_dir = Some(Dir::Right);

        world.request_direction(Dir::Down);
        assert_eq!(world.tick(&mut rng()), TickOutcome::Moved);
        assert_eq!(body(&world), cells(&[(5, 6), (5, 5), (4, 5), (4, 6)]));
        assert_eq!(world.status, Status::Running);
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut world = world();
        world.apple = Some(Apple { pos: Cell::new(0, 0) });
        // long enough that turning back into the body bites the neck side
        world.snake.body = cells(&[(5, 5), (4, 5), (4, 6), (5, 6), (6, 6)]).into();
        world.snake.dir = Some(Dir::Right);
        world.snake.pending_dir = Some(Dir::Right);

        world.request_direction(Dir::Down);
        assert_eq!(world.tick(&mut rng()), TickOutcome::Died);
        assert_eq!(world.status, Status::GameOver);
    }

    #[test]
    fn wall_hit_ends_the_game() {
        let mut world = world();
        world.apple = Some(Apple { pos: Cell::new(0, 0) });
        world.snake.body = cells(&[(19, 10), (18, 10), (17, 10)]).into();
        world.snake.dir = Some(Dir::Right);
        world.snake.pending_dir = Some(Dir::Right);

        assert_eq!(world.tick(&mut rng()), TickOutcome::Died);
        assert_eq!(world.status, Status::GameOver);
    }

    #[test]
    fn auto_redirect_turns_along_the_wall() {
        let prefs = Prefs::default().wall_policy(WallPolicy::AutoRedirectAwayFromWall);
        let mut world = World::new(&prefs, &mut rng());
        world.apple = Some(Apple { pos: Cell::new(0, 0) });
        world.snake.body = cells(&[(19, 10), (18, 10), (17, 10)]).into();
        world.snake.dir = Some(Dir::Right);
        world.snake.pending_dir = Some(Dir::Right);

        assert_eq!(world.tick(&mut rng()), TickOutcome::Moved);
        // both perpendicular turns are equally good, Up wins the tie
        assert_eq!(world.snake.head(), Cell::new(19, 9));
        assert_eq!(world.status, Status::Running);

        // the same policy result on the same state, every time
        for _ in 0..10 {
            let mut other = World::new(&prefs, &mut rng());
            other.apple = Some(Apple { pos: Cell::new(0, 0) });
            other.snake.body = cells(&[(19, 10), (18, 10), (17, 10)]).into();
            other.snake.dir = Some(Dir::Right);
            other.snake.pending_dir = Some(Dir::Right);
            other.tick(&mut rng());
            assert_eq!(other.snake.head(), Cell::new(19, 9));
        }
    }

    #[test]
    fn auto_redirect_in_a_corner() {
        let prefs = Prefs::default().wall_policy(WallPolicy::AutoRedirectAwayFromWall);
        let mut world = World::new(&prefs, &mut rng());
        world.apple = Some(Apple { pos: Cell::new(10, 10) });
        // heading up into the top-right corner, only Left stays in bounds
        world.snake.body = cells(&[(19, 0), (19, 1), (19, 2)]).into();
        world.snake.dir = Some(Dir::Up);
        world.snake.pending_dir = Some(Dir::Up);

        assert_eq!(world.tick(&mut rng()), TickOutcome::Moved);
        assert_eq!(world.snake.head(), Cell::new(18, 0));
    }

    #[test]
    fn filling_the_board_wins() {
        let mut prefs = Prefs::default();
        prefs.grid_dim = Cell::new(2, 2);
        let mut world = World::new(&prefs, &mut rng());
        world.snake.body = cells(&[(1, 0), (0, 0), (0, 1)]).into();
        world.snake.dir = Some(Dir::Right);
        world.snake.pending_dir = Some(Dir::Right);
        world.apple = Some(Apple { pos: Cell::new(1, 1) });

        world.request_direction(Dir::Down);
        assert_eq!(world.tick(&mut rng()), TickOutcome::Won);
        assert_eq!(world.status, Status::Won);
        assert_eq!(world.score, 1);
        assert_eq!(world.snake.len(), 4);
        assert_eq!(world.apple, None);
    }

    #[test]
    fn ticks_after_game_over_do_nothing() {
        let mut world = world();
        world.snake.body = cells(&[(19, 10), (18, 10), (17, 10)]).into();
        world.snake.dir = Some(Dir::Right);
        world.snake.pending_dir = Some(Dir::Right);
        let mut rng = rng();

        assert_eq!(world.tick(&mut rng), TickOutcome::Died);
        let after_death = body(&world);
        for _ in 0..5 {
            assert_eq!(world.tick(&mut rng), TickOutcome::Idle);
        }
        assert_eq!(body(&world), after_death);

        // input is ignored too
        world.request_direction(Dir::Up);
        assert_eq!(world.snake.pending_dir, Some(Dir::Right));
    }

    #[test]
    fn reset_restores_the_spawn_state() {
        let mut world = world();
        let mut rng = rng();
        world.snake.body = cells(&[(19, 10), (18, 10), (17, 10)]).into();
        world.snake.dir = Some(Dir::Right);
        world.snake.pending_dir = Some(Dir::Right);
        world.score = 7;
        world.tick(&mut rng);
        assert_eq!(world.status, Status::GameOver);

        world.reset(&mut rng);
        assert_eq!(body(&world), cells(&[(5, 10), (4, 10), (3, 10)]));
        assert_eq!(world.score, 0);
        assert_eq!(world.status, Status::Running);
        assert!(!world.snake.occupies(world.apple.unwrap().pos));
    }

    #[test]
    fn random_play_keeps_the_body_connected() {
        let mut world = world();
        let mut rng = rng();

        for step in 0..2000 {
            if world.status != Status::Running {
                world.reset(&mut rng);
            }
            let dir = match step % 7 {
                0 | 3 => Dir::Up,
                1 | 5 => Dir::Right,
                2 => Dir::Down,
                _ => Dir::Left,
            };
            world.request_direction(dir);
            world.tick(&mut rng);

            for (&a, &b) in world.snake.body.iter().tuple_windows() {
                assert_eq!(a.manhattan_distance(b), 1);
            }
            for &cell in &world.snake.body {
                assert!(world.dim.contains(cell));
            }
        }
    }
}
