pub use cell::{Cell, GridDim};
pub use dir::{Axis, Dir};
pub use point::Point;

pub mod board;
mod cell;
mod dir;
mod point;
