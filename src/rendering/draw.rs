use ggez::graphics::{
    Canvas, Color, DrawMode, DrawParam, Image, Mesh, PxScale, Rect, Text, TextFragment,
};
use ggez::Context;
use itertools::Itertools;

use crate::apple::Apple;
use crate::basic::{Cell, Dir, Point};
use crate::error::Result;
use crate::game::{Palette, Prefs};
use crate::rendering::{Orientation, SpriteSet};
use crate::snake::Snake;

/// Stretch a sprite over a cell's tile
fn sprite_param(image: &Image, cell: Cell, cell_size: f32) -> DrawParam {
    DrawParam::default().dest(cell.to_point(cell_size)).scale([
        cell_size / image.width() as f32,
        cell_size / image.height() as f32,
    ])
}

pub fn draw_snake(canvas: &mut Canvas, snake: &Snake, sprites: &SpriteSet, cell_size: f32) {
    let len = snake.len();
    let head = snake.head();

    if len == 1 {
        let image = sprites.head(snake.dir.unwrap_or(Dir::Right).into());
        canvas.draw(image, sprite_param(image, head, cell_size));
        return;
    }

    // ends point away from their single neighbor
    let head_image = sprites.head(Orientation::of_end(head - snake.body[1]));
    canvas.draw(head_image, sprite_param(head_image, head, cell_size));

    let tail = snake.body[len - 1];
    let tail_image = sprites.tail(Orientation::of_end(tail - snake.body[len - 2]));
    canvas.draw(tail_image, sprite_param(tail_image, tail, cell_size));

    for (ahead, cell, behind) in snake.body.iter().copied().tuple_windows() {
        let orientation = Orientation::of_body(behind - cell, ahead - cell);
        let image = sprites.body(orientation);
        canvas.draw(image, sprite_param(image, cell, cell_size));
    }
}

pub fn draw_apple(canvas: &mut Canvas, apple: &Apple, sprites: &SpriteSet, cell_size: f32) {
    let image = &sprites.apple;
    canvas.draw(image, sprite_param(image, apple.pos, cell_size));
}

/// Score counter in the bottom-right corner: fruit icon, number, boxed
pub fn draw_score(
    canvas: &mut Canvas,
    ctx: &mut Context,
    score: u32,
    sprites: &SpriteSet,
    palette: &Palette,
    prefs: &Prefs,
) -> Result {
    let mut text = Text::new(TextFragment::new(score.to_string()).color(palette.score_text));
    text.set_scale(PxScale::from(25.));
    let text_size = text.measure(ctx)?;

    let icon_size = prefs.cell_size;
    let center = Point {
        x: prefs.window_width() - 60.,
        y: prefs.window_height() - 40.,
    };
    let text_pos = Point {
        x: center.x - text_size.x / 2.,
        y: center.y - text_size.y / 2.,
    };
    let icon_pos = Point {
        x: text_pos.x - icon_size,
        y: center.y - icon_size / 2.,
    };

    let box_rect = Rect::new(
        icon_pos.x,
        icon_pos.y,
        icon_size + text_size.x + 6.,
        icon_size,
    );
    let fill = Mesh::new_rectangle(ctx, DrawMode::fill(), box_rect, palette.background)?;
    let border = Mesh::new_rectangle(ctx, DrawMode::stroke(2.), box_rect, palette.score_border)?;
    canvas.draw(&fill, DrawParam::default());
    canvas.draw(&border, DrawParam::default());

    let icon = &sprites.apple;
    canvas.draw(
        icon,
        DrawParam::default().dest(icon_pos).scale([
            icon_size / icon.width() as f32,
            icon_size / icon.height() as f32,
        ]),
    );
    canvas.draw(&text, DrawParam::default().dest(text_pos));

    Ok(())
}

/// Dim the board and announce the end of the game
pub fn draw_overlay(
    canvas: &mut Canvas,
    ctx: &mut Context,
    title: &str,
    score: u32,
    palette: &Palette,
    prefs: &Prefs,
) -> Result {
    let (width, height) = (prefs.window_width(), prefs.window_height());

    let dim = Mesh::new_rectangle(
        ctx,
        DrawMode::fill(),
        Rect::new(0., 0., width, height),
        palette.overlay,
    )?;
    canvas.draw(&dim, DrawParam::default());

    let center_x = width / 2.;
    let center_y = height / 2.;
    centered_line(canvas, ctx, title, 60., palette.overlay_text, center_x, center_y - 60.)?;
    centered_line(
        canvas,
        ctx,
        &format!("Score: {}", score),
        35.,
        palette.overlay_text,
        center_x,
        center_y,
    )?;
    centered_line(
        canvas,
        ctx,
        "Press SPACE to restart",
        25.,
        palette.overlay_hint,
        center_x,
        center_y + 60.,
    )?;

    Ok(())
}

fn centered_line(
    canvas: &mut Canvas,
    ctx: &mut Context,
    line: &str,
    scale: f32,
    color: Color,
    center_x: f32,
    center_y: f32,
) -> Result {
    let mut text = Text::new(TextFragment::new(line).color(color));
    text.set_scale(PxScale::from(scale));
    let size = text.measure(ctx)?;
    canvas.draw(
        &text,
        DrawParam::default().dest([center_x - size.x / 2., center_y - size.y / 2.]),
    );
    Ok(())
}
