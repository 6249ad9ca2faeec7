use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;
use num_integer::Integer;

use crate::basic::GridDim;
use crate::error::Result;
use crate::game::Palette;

/// Checkerboard of darker tiles over the plain background color
pub fn grass_mesh(
    dim: GridDim,
    cell_size: f32,
    palette: &Palette,
    ctx: &mut Context,
) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    for y in 0..dim.y {
        for x in 0..dim.x {
            if (x + y).is_even() {
                builder.rectangle(
                    DrawMode::fill(),
                    Rect::new(
                        x as f32 * cell_size,
                        y as f32 * cell_size,
                        cell_size,
                        cell_size,
                    ),
                    palette.grass,
                )?;
            }
        }
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}
