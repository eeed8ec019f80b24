use macroquad::prelude::*;

use crate::config;
use crate::surface::rgb;

/// Persistent offscreen sky. It is never cleared between frames; each tick
/// paints a translucent fade over it, which is what leaves the trails.
pub struct TrailCanvas {
    target: RenderTarget,
    width: u32,
    height: u32,
    needs_clear: bool,
}

impl TrailCanvas {
    pub fn new() -> Self {
        let width = screen_width() as u32;
        let height = screen_height() as u32;
        Self {
            target: Self::build_target(width, height),
            width,
            height,
            needs_clear: true,
        }
    }

    fn build_target(width: u32, height: u32) -> RenderTarget {
        let target = render_target(width.max(1), height.max(1));
        target.texture.set_filter(FilterMode::Linear);
        target
    }

    /// Rebuild the target when the window size changes. Old trails are lost.
    pub fn check_resize(&mut self) {
        let w = screen_width() as u32;
        let h = screen_height() as u32;
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.target = Self::build_target(w, h);
            self.needs_clear = true;
        }
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32)
    }

    /// Redirect drawing into the persistent target.
    pub fn begin(&mut self) {
        set_camera(&Camera2D {
            render_target: Some(self.target.clone()),
            ..Camera2D::from_display_rect(Rect::new(
                0.0,
                0.0,
                self.width as f32,
                self.height as f32,
            ))
        });
        if self.needs_clear {
            let (r, g, b) = config::FADE_COLOR;
            clear_background(rgb(r, g, b));
            self.needs_clear = false;
        }
    }

    /// Composite the sky onto the screen. Later draws land on top of it.
    pub fn present(&self) {
        set_default_camera();
        draw_texture_ex(
            &self.target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}
