use ggez::graphics::Color;

/// All colors used in drawing the game
pub struct Palette {
    pub background: Color,
    pub grass: Color,
    pub score_text: Color,
    pub score_border: Color,
    pub overlay: Color,
    pub overlay_text: Color,
    pub overlay_hint: Color,
}

impl Palette {
    pub fn garden() -> Self {
        let dark_green = Color::from_rgb(56, 74, 12);
        Self {
            background: Color::from_rgb(175, 215, 70),
            grass: Color::from_rgb(167, 209, 61),
            score_text: dark_green,
            score_border: dark_green,
            overlay: Color::new(0., 0., 0., 0.7),
            overlay_text: Color::WHITE,
            overlay_hint: Color::from_rgb(167, 209, 61),
        }
    }
}
