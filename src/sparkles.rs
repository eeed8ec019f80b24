use std::f32::consts::{FRAC_PI_4, TAU};

use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;
use crate::surface::{rgb, with_alpha, Surface};

const SPARKLE_COLORS: [(u8, u8, u8); 5] = [
    (255, 215, 0),
    (255, 255, 255),
    (255, 20, 147),
    (0, 191, 255),
    (255, 107, 53),
];

/// Shape drawn for a floating celebration glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparkleShape {
    /// Four-pointed twinkle.
    Twinkle,
    /// Eight-spoke starburst.
    Starburst,
    /// Ring with a bright core.
    Bubble,
}

impl SparkleShape {
    const ALL: [Self; 3] = [Self::Twinkle, Self::Starburst, Self::Bubble];

    fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Debug)]
pub struct Sparkle {
    pub origin: Vec2,
    pub shape: SparkleShape,
    pub size: f32,
    pub color: Color,
    pub born: f64,
}

impl Sparkle {
    fn progress(&self, now: f64) -> f32 {
        ((now - self.born) / config::SPARKLE_LIFETIME_SECS).clamp(0.0, 1.0) as f32
    }

    pub fn position(&self, now: f64) -> Vec2 {
        let t = self.progress(now);
        let sway = (t * TAU).sin() * self.size * 0.5;
        self.origin + vec2(sway, -config::SPARKLE_RISE * t)
    }

    fn draw(&self, now: f64, surface: &mut dyn Surface) {
        let t = self.progress(now);
        // Pop in quickly, fade over the rest of the flight
        let alpha = if t < 0.1 { t / 0.1 } else { 1.0 - (t - 0.1) / 0.9 };
        let color = with_alpha(self.color, alpha);
        let center = self.position(now);
        let r = self.size * 0.5;

        match self.shape {
            SparkleShape::Twinkle => {
                surface.stroke_line(center - vec2(r, 0.0), center + vec2(r, 0.0), 2.0, color);
                surface.stroke_line(center - vec2(0.0, r), center + vec2(0.0, r), 2.0, color);
                surface.fill_circle(center, r * 0.2, color);
            }
            SparkleShape::Starburst => {
                for spoke in 0..8 {
                    let dir = Vec2::from_angle(spoke as f32 * FRAC_PI_4);
                    let len = if spoke % 2 == 0 { r } else { r * 0.6 };
                    surface.stroke_line(center, center + dir * len, 1.5, color);
                }
            }
            SparkleShape::Bubble => {
                surface.fill_circle(center, r, with_alpha(self.color, alpha * 0.25));
                surface.fill_circle(center, r * 0.35, color);
            }
        }
    }
}

/// Floating celebration glyphs that rise from where they were spawned.
#[derive(Default)]
pub struct SparkleLayer {
    sparkles: Vec<Sparkle>,
}

impl SparkleLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyph size is 24..48 px.
    pub fn spawn(&mut self, origin: Vec2, now: f64, rng: &mut impl Rng) {
        let (r, g, b) = SPARKLE_COLORS[rng.gen_range(0..SPARKLE_COLORS.len())];
        self.sparkles.push(Sparkle {
            origin,
            shape: SparkleShape::random(rng),
            size: rng.gen_range(24.0..48.0),
            color: rgb(r, g, b),
            born: now,
        });
    }

    pub fn update(&mut self, now: f64) {
        self.sparkles
            .retain(|s| now - s.born < config::SPARKLE_LIFETIME_SECS);
    }

    pub fn draw(&self, now: f64, surface: &mut dyn Surface) {
        for s in &self.sparkles {
            s.draw(now, surface);
        }
    }

    pub fn count(&self) -> usize {
        self.sparkles.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Sparkle> {
        self.sparkles.iter()
    }
}
