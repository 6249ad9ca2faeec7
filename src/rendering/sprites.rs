use ggez::graphics::Image;
use ggez::Context;

use crate::error::{Error, ErrorConversion, Result};
use crate::rendering::Orientation;

/// All snake and fruit textures, loaded once at startup
pub struct SpriteSet {
    head_up: Image,
    head_down: Image,
    head_left: Image,
    head_right: Image,

    tail_up: Image,
    tail_down: Image,
    tail_left: Image,
    tail_right: Image,

    body_vertical: Image,
    body_horizontal: Image,
    body_tl: Image,
    body_tr: Image,
    body_bl: Image,
    body_br: Image,

    pub apple: Image,
}

fn image(ctx: &Context, path: &str) -> Result<Image> {
    Image::from_path(ctx, path).map_err(Error::from)
}

impl SpriteSet {
    pub fn load(ctx: &mut Context) -> Result<Self> {
        Self::load_inner(ctx).with_trace_step("SpriteSet::load")
    }

    fn load_inner(ctx: &Context) -> Result<Self> {
        Ok(Self {
            head_up: image(ctx, "/head_up.png")?,
            head_down: image(ctx, "/head_down.png")?,
            head_left: image(ctx, "/head_left.png")?,
            head_right: image(ctx, "/head_right.png")?,

            tail_up: image(ctx, "/tail_up.png")?,
            tail_down: image(ctx, "/tail_down.png")?,
            tail_left: image(ctx, "/tail_left.png")?,
            tail_right: image(ctx, "/tail_right.png")?,

            body_vertical: image(ctx, "/body_vertical.png")?,
            body_horizontal: image(ctx, "/body_horizontal.png")?,
            body_tl: image(ctx, "/body_tl.png")?,
            body_tr: image(ctx, "/body_tr.png")?,
            body_bl: image(ctx, "/body_bl.png")?,
            body_br: image(ctx, "/body_br.png")?,

            apple: image(ctx, "/apple.png")?,
        })
    }

    /// `facing` is never a corner for an end segment
    pub fn head(&self, facing: Orientation) -> &Image {
        match facing {
            Orientation::Up => &self.head_up,
            Orientation::Down => &self.head_down,
            Orientation::Left => &self.head_left,
            _ => &self.head_right,
        }
    }

    pub fn tail(&self, facing: Orientation) -> &Image {
        match facing {
            Orientation::Up => &self.tail_up,
            Orientation::Down => &self.tail_down,
            Orientation::Left => &self.tail_left,
            _ => &self.tail_right,
        }
    }

    pub fn body(&self, orientation: Orientation) -> &Image {
        use Orientation::*;

        match orientation {
            Up | Down => &self.body_vertical,
            Left | Right => &self.body_horizontal,
            TopLeft => &self.body_tl,
            TopRight => &self.body_tr,
            BottomLeft => &self.body_bl,
            BottomRight => &self.body_br,
        }
    }
}
