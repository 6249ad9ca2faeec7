use crate::basic::{Cell, Dir};

/// Which way a body segment's sprite points, computed purely from the
/// offsets to the segment's neighbors
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Orientation {
    /// Orientation of the head or tail, `delta` being the offset from the
    /// single neighbor to the end segment (the direction the end points in)
    pub fn of_end(delta: Cell) -> Self {
        match (delta.x.signum(), delta.y.signum()) {
            (0, -1) => Self::Up,
            (0, 1) => Self::Down,
            (-1, 0) => Self::Left,
            _ => Self::Right,
        }
    }

    /// Orientation of a middle segment from the offsets to its two
    /// neighbors: a straight piece when they share an axis, a corner
    /// otherwise
    pub fn of_body(toward_tail: Cell, toward_head: Cell) -> Self {
        let (t, h) = (toward_tail, toward_head);
        if t.x == h.x {
            Self::Up
        } else if t.y == h.y {
            Self::Right
        } else {
            // the corner opens toward the two neighbors
            let left = t.x < 0 || h.x < 0;
            let up = t.y < 0 || h.y < 0;
            match (left, up) {
                (true, true) => Self::TopLeft,
                (true, false) => Self::BottomLeft,
                (false, true) => Self::TopRight,
                (false, false) => Self::BottomRight,
            }
        }
    }
}

impl From<Dir> for Orientation {
    fn from(dir: Dir) -> Self {
        match dir {
            Dir::Up => Self::Up,
            Dir::Down => Self::Down,
            Dir::Left => Self::Left,
            Dir::Right => Self::Right,
        }
    }
}

#[test]
fn test_of_end() {
    use Orientation::*;

    let test_deltas = [
        ((0, -1), Up),
        ((0, 1), Down),
        ((-1, 0), Left),
        ((1, 0), Right),
    ];

    for &((x, y), expected) in &test_deltas {
        assert_eq!(Orientation::of_end(Cell::new(x, y)), expected);
    }
}

#[test]
fn test_of_body_straight() {
    use Orientation::*;

    // vertical and horizontal runs, both traversal orders
    assert_eq!(Orientation::of_body(Cell::new(0, -1), Cell::new(0, 1)), Up);
    assert_eq!(Orientation::of_body(Cell::new(0, 1), Cell::new(0, -1)), Up);
    assert_eq!(Orientation::of_body(Cell::new(-1, 0), Cell::new(1, 0)), Right);
    assert_eq!(Orientation::of_body(Cell::new(1, 0), Cell::new(-1, 0)), Right);
}

#[test]
fn test_of_body_corners() {
    use Orientation::*;

    let test_corners = [
        ((-1, 0), (0, -1), TopLeft),
        ((1, 0), (0, -1), TopRight),
        ((-1, 0), (0, 1), BottomLeft),
        ((1, 0), (0, 1), BottomRight),
    ];

    for &((tx, ty), (hx, hy), expected) in &test_corners {
        let toward_tail = Cell::new(tx, ty);
        let toward_head = Cell::new(hx, hy);
        assert_eq!(Orientation::of_body(toward_tail, toward_head), expected);
        // neighbor roles don't matter, only the pair of offsets
        assert_eq!(Orientation::of_body(toward_head, toward_tail), expected);
    }
}
