use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use crate::basic::{Dir, Point};

/// A grid coordinate, `(0, 0)` is the top-left cell, `y` grows downwards
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Neg, Hash)]
pub struct Cell {
    pub x: isize,
    pub y: isize,
}

/// Grid dimensions expressed as a number of columns and rows
pub type GridDim = Cell;

impl Cell {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Pixel origin of this cell's tile
    pub fn to_point(self, cell_size: f32) -> Point {
        Point {
            x: self.x as f32 * cell_size,
            y: self.y as f32 * cell_size,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: isize) -> Self {
        use Dir::*;

        let Self { x, y } = self;
        match dir {
            Up => Self { x, y: y - dist },
            Down => Self { x, y: y + dist },
            Left => Self { x: x - dist, y },
            Right => Self { x: x + dist, y },
        }
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as usize
    }

    /// Treating `self` as dimensions, whether `pos` lies on the board
    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major order, consistent with the cell indexing in `basic::board`
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

#[test]
fn test_translate() {
    use Dir::*;

    let test_moves = [
        ((5, 10), Right, 1, (6, 10)),
        ((5, 10), Left, 1, (4, 10)),
        ((5, 10), Up, 1, (5, 9)),
        ((5, 10), Down, 1, (5, 11)),
        ((0, 0), Left, 3, (-3, 0)),
        ((2, 2), Down, 0, (2, 2)),
    ];

    for &((x, y), dir, dist, (ex, ey)) in &test_moves {
        assert_eq!(Cell::new(x, y).translate(dir, dist), Cell::new(ex, ey));
    }
}

#[test]
fn test_contains() {
    let dim = Cell::new(20, 20);
    assert!(dim.contains(Cell::new(0, 0)));
    assert!(dim.contains(Cell::new(19, 19)));
    assert!(!dim.contains(Cell::new(-1, 0)));
    assert!(!dim.contains(Cell::new(20, 0)));
    assert!(!dim.contains(Cell::new(0, 20)));
}

#[test]
fn test_manhattan_distance() {
    [
        ((0, 0), (0, 0), 0),
        ((0, 0), (1, 0), 1),
        ((0, 0), (0, -10), 10),
        ((1, 1), (3, 3), 4),
        ((5, 10), (10, 10), 5),
    ]
    .iter()
    .for_each(|&((x1, y1), (x2, y2), d)| {
        assert_eq!(Cell::new(x1, y1).manhattan_distance(Cell::new(x2, y2)), d);
    });
}
