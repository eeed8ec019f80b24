use std::collections::VecDeque;

use macroquad::prelude::*;

use crate::config;
use crate::surface::{with_alpha, Surface};

/// Snapshot of a past particle position, kept only for drawing the tail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// A single decaying point of light emitted by an explosion.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    pub alpha: f32,
    pub decay: f32,
    pub gravity: f32,
    trail: VecDeque<TrailPoint>,
}

impl Particle {
    pub fn new(pos: Vec2, velocity: Vec2, color: Color, decay: f32, gravity: f32) -> Self {
        Self {
            pos,
            velocity,
            color,
            alpha: 1.0,
            decay,
            gravity,
            trail: VecDeque::with_capacity(config::PARTICLE_TRAIL_LEN + 1),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }

    /// Oldest-first trail snapshots.
    #[cfg(test)]
    pub fn trail(&self) -> impl Iterator<Item = &TrailPoint> {
        self.trail.iter()
    }

    #[cfg(test)]
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn update(&mut self) {
        self.trail.push_back(TrailPoint {
            pos: self.pos,
            alpha: self.alpha,
        });
        while self.trail.len() > config::PARTICLE_TRAIL_LEN {
            self.trail.pop_front();
        }

        self.velocity.y += self.gravity;
        self.pos += self.velocity;
        self.alpha -= self.decay;
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.is_alive() {
            return;
        }

        // Earliest trail point is the dimmest
        let max_trail = config::PARTICLE_TRAIL_LEN as f32;
        for (index, point) in self.trail.iter().enumerate() {
            let alpha = point.alpha * (index as f32 / max_trail) * config::TRAIL_ALPHA_SCALE;
            surface.fill_circle(point.pos, config::TRAIL_DOT_RADIUS, with_alpha(self.color, alpha));
        }

        surface.fill_circle(self.pos, config::PARTICLE_RADIUS, with_alpha(self.color, self.alpha));
        surface.fill_circle(
            self.pos,
            config::PARTICLE_GLOW_RADIUS,
            with_alpha(self.color, self.alpha * config::PARTICLE_GLOW_ALPHA),
        );
    }
}
