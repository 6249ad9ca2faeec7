use std::ops::Neg;

use Dir::*;

/// The four directions the snake can travel in
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// `-dir` is the opposite direction
impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Dir {
    /// Fixed order used wherever candidates are scanned deterministically
    pub fn iter() -> impl Iterator<Item = Self> {
        [Up, Down, Left, Right].iter().copied()
    }

    pub fn axis(self) -> Axis {
        match self {
            Up | Down => Axis::Vertical,
            Left | Right => Axis::Horizontal,
        }
    }
}

#[test]
fn test_opposites() {
    let test_neg = [(Up, Down), (Down, Up), (Left, Right), (Right, Left)];

    for &(dir, opposite) in &test_neg {
        assert_eq!(-dir, opposite);
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_axis() {
    for dir in Dir::iter() {
        assert_eq!(dir.axis(), (-dir).axis());
    }
    assert_ne!(Up.axis(), Left.axis());
}
