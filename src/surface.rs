use macroquad::prelude::*;

/// The drawing primitives the show needs from a 2D raster target.
///
/// Coordinates are in surface pixels with the origin at the top-left corner
/// and y growing downwards.
pub trait Surface {
    fn size(&self) -> Vec2;

    /// Composite a translucent fill over the whole surface.
    fn fade(&mut self, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color);

    fn fill_rotated_rect(&mut self, center: Vec2, size: Vec2, rotation: f32, color: Color);
}

/// Immediate-mode surface backed by macroquad's current camera.
pub struct ScreenSurface {
    size: Vec2,
}

impl ScreenSurface {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    pub fn for_screen() -> Self {
        Self::new(vec2(screen_width(), screen_height()))
    }
}

impl Surface for ScreenSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fade(&mut self, color: Color) {
        draw_rectangle(0.0, 0.0, self.size.x, self.size.y, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        draw_circle(center.x, center.y, radius, color);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        draw_line(from.x, from.y, to.x, to.y, thickness, color);
    }

    fn fill_rotated_rect(&mut self, center: Vec2, size: Vec2, rotation: f32, color: Color) {
        draw_rectangle_ex(
            center.x,
            center.y,
            size.x,
            size.y,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation,
                color,
            },
        );
    }
}

/// Build an opaque color from 8-bit channels.
pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

/// Same hue with the given opacity, clamped to the drawable range.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha.clamp(0.0, 1.0))
}
