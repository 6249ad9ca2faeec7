use std::collections::VecDeque;

use crate::basic::{Cell, Dir};

/// The snake's body and movement mechanics. Rule enforcement (bounds,
/// collisions, scoring) lives in `game::World`.
pub struct Snake {
    /// Body cells, head at the front
    pub body: VecDeque<Cell>,
    /// Direction of current travel, `None` until the first input
    pub dir: Option<Dir>,
    /// Direction queued for the next advance
    pub pending_dir: Option<Dir>,
    /// Number of upcoming advances that retain the tail instead of popping it
    pub grow: usize,

    spawn_head: Cell,
    spawn_len: usize,
    grow_increment: usize,
}

impl Snake {
    /// The body extends to the left of `head`, the classic spawn
    pub fn new(head: Cell, len: usize, grow_increment: usize) -> Self {
        assert!(len >= 1, "snake must have at least a head");

        let mut snake = Self {
            body: VecDeque::with_capacity(len),
            dir: None,
            pending_dir: None,
            grow: 0,
            spawn_head: head,
            spawn_len: len,
            grow_increment,
        };
        snake.reset();
        snake
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Queue a turn for the next advance. Reversing into the neck is
    /// silently discarded; a later valid request overwrites an earlier one,
    /// so of several requests between two ticks the last valid one wins.
    pub fn queue_turn(&mut self, dir: Dir) {
        if self.dir == Some(-dir) {
            return;
        }
        self.pending_dir = Some(dir);
    }

    /// Override the queued direction, bypassing the no-reversal rule.
    /// Used by the auto-redirect wall policy.
    pub fn force_dir(&mut self, dir: Dir) {
        self.pending_dir = Some(dir);
    }

    /// Head cell the next `advance` would produce
    pub fn next_head(&self) -> Option<Cell> {
        self.pending_dir.map(|dir| self.head().translate(dir, 1))
    }

    /// Promote the queued direction and shift the body one cell forward,
    /// consuming one pending growth instead of popping the tail when
    /// `grow > 0`. A complete no-op returning `None` before the first
    /// directional input. Returns the new head otherwise.
    pub fn advance(&mut self) -> Option<Cell> {
        self.dir = self.pending_dir;
        let dir = self.dir?;

        let new_head = self.head().translate(dir, 1);
        self.body.push_front(new_head);

        if self.grow > 0 {
            self.grow -= 1;
        } else {
            self.body.pop_back();
        }

        Some(new_head)
    }

    pub fn grow(&mut self) {
        self.grow += self.grow_increment;
    }

    /// Restore the initial body, unset direction, zero pending growth
    pub fn reset(&mut self) {
        self.body.clear();
        for i in 0..self.spawn_len as isize {
            self.body.push_back(self.spawn_head.translate(Dir::Left, i));
        }
        self.dir = None;
        self.pending_dir = None;
        self.grow = 0;
    }
}

#[cfg(test)]
fn test_snake() -> Snake {
    Snake::new(Cell::new(5, 10), 3, 1)
}

#[test]
fn test_spawn_body() {
    let snake = test_snake();
    let body: Vec<_> = snake.body.iter().copied().collect();
    assert_eq!(
        body,
        [Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)]
    );
    assert_eq!(snake.dir, None);
    assert_eq!(snake.grow, 0);
}

#[test]
fn test_advance_is_noop_without_direction() {
    let mut snake = test_snake();
    assert_eq!(snake.advance(), None);
    assert_eq!(snake.head(), Cell::new(5, 10));
    assert_eq!(snake.len(), 3);
}

#[test]
fn test_advance_length_invariant() {
    let mut snake = test_snake();
    snake.queue_turn(Dir::Right);

    // no growth pending: length unchanged
    assert_eq!(snake.advance(), Some(Cell::new(6, 10)));
    assert_eq!(snake.len(), 3);
    assert_eq!(snake.dir, Some(Dir::Right));

    // one growth pending: length +1, tail retained
    let tail = *snake.body.back().unwrap();
    snake.grow();
    assert_eq!(snake.advance(), Some(Cell::new(7, 10)));
    assert_eq!(snake.len(), 4);
    assert_eq!(*snake.body.back().unwrap(), tail);
    assert_eq!(snake.grow, 0);
}

#[test]
fn test_no_reversal() {
    let mut snake = test_snake();
    snake.queue_turn(Dir::Right);
    snake.advance();

    // reversing into the neck is discarded
    snake.queue_turn(Dir::Left);
    assert_eq!(snake.pending_dir, Some(Dir::Right));
    snake.advance();
    assert_eq!(snake.head(), Cell::new(7, 10));
}

#[test]
fn test_any_first_direction_accepted() {
    // while the snake stands still there is no travel to reverse
    for dir in Dir::iter() {
        let mut snake = test_snake();
        snake.queue_turn(dir);
        assert_eq!(snake.pending_dir, Some(dir));
    }
}

#[test]
fn test_last_valid_request_wins() {
    let mut snake = test_snake();
    snake.queue_turn(Dir::Right);
    snake.advance();

    snake.queue_turn(Dir::Up);
    snake.queue_turn(Dir::Down);
    snake.queue_turn(Dir::Left); // rejected, opposite of current travel
    assert_eq!(snake.pending_dir, Some(Dir::Down));
}

#[test]
fn test_reset() {
    let mut snake = test_snake();
    snake.queue_turn(Dir::Right);
    snake.advance();
    snake.grow();
    snake.advance();

    snake.reset();
    assert_eq!(snake.len(), 3);
    assert_eq!(snake.head(), Cell::new(5, 10));
    assert_eq!(snake.dir, None);
    assert_eq!(snake.pending_dir, None);
    assert_eq!(snake.grow, 0);
}

#[test]
fn test_body_stays_connected() {
    use itertools::Itertools;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut snake = Snake::new(Cell::new(0, 0), 3, 1);
    let mut rng = StdRng::seed_from_u64(7);

    for step in 0..1000 {
        let dir = match rng.gen_range(0..4) {
            0 => Dir::Up,
            1 => Dir::Down,
            2 => Dir::Left,
            _ => Dir::Right,
        };
        snake.queue_turn(dir);
        if step % 5 == 0 {
            snake.grow();
        }
        snake.advance();

        for (&a, &b) in snake.body.iter().tuple_windows() {
            assert_eq!(a.manhattan_distance(b), 1, "body disconnected at {:?} {:?}", a, b);
        }
    }
}
