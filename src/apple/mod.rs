use crate::basic::Cell;

pub mod spawn;

/// The fruit. Always placed outside the snake's occupied cells.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Apple {
    pub pos: Cell,
}
