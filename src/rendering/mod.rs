pub use draw::{draw_apple, draw_overlay, draw_score, draw_snake};
pub use grass_mesh::grass_mesh;
pub use orientation::Orientation;
pub use sprites::SpriteSet;

mod draw;
mod grass_mesh;
mod orientation;
mod sprites;
