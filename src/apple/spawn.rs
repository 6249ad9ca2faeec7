use rand::Rng;

use crate::apple::Apple;
use crate::basic::{board, GridDim};
use crate::snake::Snake;

/// Place an apple uniformly on a cell not covered by the snake,
/// `None` when the snake fills the board
pub fn spawn_apple(snake: &Snake, dim: GridDim, rng: &mut impl Rng) -> Option<Apple> {
    let occupied = board::occupied_cells(snake.body.iter().copied());
    board::random_free_cell(&occupied, dim, rng).map(|pos| Apple { pos })
}

#[cfg(test)]
use crate::basic::Cell;
#[cfg(test)]
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_spawn_avoids_snake() {
    let snake = Snake::new(Cell::new(5, 10), 3, 1);
    let dim = Cell::new(20, 20);

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let apple = spawn_apple(&snake, dim, &mut rng).unwrap();
        assert!(!snake.occupies(apple.pos));
        assert!(dim.contains(apple.pos));
    }
}

#[test]
fn test_spawn_on_full_board() {
    let mut snake = Snake::new(Cell::new(1, 0), 2, 1);
    snake.body = [Cell::new(1, 0), Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        .into_iter()
        .collect();

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(spawn_apple(&snake, Cell::new(2, 2), &mut rng), None);
}
