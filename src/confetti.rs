use std::f32::consts::TAU;

use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;
use crate::surface::{rgb, with_alpha, Surface};

const CONFETTI_COLORS: [(u8, u8, u8); 6] = [
    (255, 107, 53),
    (255, 20, 147),
    (255, 215, 0),
    (0, 255, 127),
    (0, 191, 255),
    (148, 0, 211),
];

const PIECE_SIZE: Vec2 = Vec2::new(8.0, 12.0);
const DRIFT_SCALE: f32 = 30.0;
const DROP: f32 = 200.0;
const SPIN: f32 = TAU * 2.0;

/// A paper scrap flying from a burst origin to a precomputed landing offset.
#[derive(Clone, Debug)]
struct ConfettiPiece {
    origin: Vec2,
    travel: Vec2,
    color: Color,
    rotation: f32,
    born: f64,
    duration: f64,
}

impl ConfettiPiece {
    fn progress(&self, now: f64) -> f32 {
        ((now - self.born) / self.duration).clamp(0.0, 1.0) as f32
    }
}

/// Ease-out curve: fast launch, gentle landing.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Time-based confetti overlay. Pieces are drawn above the fireworks canvas
/// and do not leave trails.
#[derive(Default)]
pub struct ConfettiSystem {
    pieces: Vec<ConfettiPiece>,
}

impl ConfettiSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn burst(&mut self, origin: Vec2, count: usize, now: f64, rng: &mut impl Rng) {
        self.pieces.reserve(count);
        for _ in 0..count {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(5.0..15.0);
            let velocity = Vec2::from_angle(angle) * speed - vec2(0.0, 5.0);
            let (r, g, b) = CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())];

            self.pieces.push(ConfettiPiece {
                origin,
                travel: velocity * DRIFT_SCALE + vec2(0.0, DROP),
                color: rgb(r, g, b),
                rotation: rng.gen_range(0.0..TAU),
                born: now,
                duration: rng.gen_range(2.0..3.0),
            });
        }
    }

    /// Expire pieces older than their lifetime.
    pub fn update(&mut self, now: f64) {
        self.pieces
            .retain(|p| now - p.born < config::CONFETTI_LIFETIME_SECS);
    }

    pub fn draw(&self, now: f64, surface: &mut dyn Surface) {
        for p in &self.pieces {
            let t = p.progress(now);
            let pos = p.origin + p.travel * ease_out(t);
            surface.fill_rotated_rect(
                pos,
                PIECE_SIZE,
                p.rotation + SPIN * t,
                with_alpha(p.color, 1.0 - t),
            );
        }
    }

    pub fn count(&self) -> usize {
        self.pieces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{DrawOp, RecordingSurface};
    use rand_chacha::ChaCha8Rng;
    use ::rand::SeedableRng;

    #[test]
    fn burst_spawns_requested_pieces_and_expires_them() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut confetti = ConfettiSystem::new();
        confetti.burst(vec2(300.0, 300.0), 80, 1.0, &mut rng);
        assert_eq!(confetti.count(), 80);

        confetti.update(3.5);
        assert_eq!(confetti.count(), 80);
        confetti.update(4.0);
        assert_eq!(confetti.count(), 0);
    }

    #[test]
    fn pieces_start_at_origin_and_fade_out() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut confetti = ConfettiSystem::new();
        let origin = vec2(120.0, 80.0);
        confetti.burst(origin, 10, 0.0, &mut rng);

        let mut start = RecordingSurface::new(800.0, 600.0);
        confetti.draw(0.0, &mut start);
        for op in &start.ops {
            let DrawOp::Rect { center, color, .. } = op else {
                panic!("unexpected op {op:?}");
            };
            assert_eq!(*center, origin);
            assert_eq!(color.a, 1.0);
        }

        let mut end = RecordingSurface::new(800.0, 600.0);
        confetti.draw(3.0, &mut end);
        for op in &end.ops {
            if let DrawOp::Rect { color, .. } = op {
                assert_eq!(color.a, 0.0);
            }
        }
    }

    #[test]
    fn ease_out_hits_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
