use std::f32::consts::TAU;

use macroquad::prelude::*;
use ::rand::Rng;

use crate::audio::SoundEffects;
use crate::config;
use crate::particle::Particle;
use crate::surface::{rgb, with_alpha, Surface};

/// Shell colors: orange, pink, gold, spring green, deep sky blue, white,
/// violet, red orange.
pub const PALETTE: [(u8, u8, u8); 8] = [
    (255, 107, 53),
    (255, 20, 147),
    (255, 215, 0),
    (0, 255, 127),
    (0, 191, 255),
    (255, 255, 255),
    (148, 0, 211),
    (255, 69, 0),
];

pub fn random_shell_color(rng: &mut impl Rng) -> Color {
    let (r, g, b) = PALETTE[rng.gen_range(0..PALETTE.len())];
    rgb(r, g, b)
}

/// Initial angle/speed distribution of an explosion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplosionPattern {
    /// Evenly spaced angles, one shell of mixed speeds.
    Circle,
    /// Uniform random angles and speeds.
    Random,
    /// Two concentric rings: slow first half, fast second half.
    DoubleRing,
}

impl ExplosionPattern {
    pub const ALL: [Self; 3] = [Self::Circle, Self::Random, Self::DoubleRing];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Random => "random",
            Self::DoubleRing => "double ring",
        }
    }

    /// Angle and speed for the `i`-th of `count` particles.
    pub fn emission(self, i: usize, count: usize, rng: &mut impl Rng) -> (f32, f32) {
        let n = count as f32;
        let i_f = i as f32;
        match self {
            Self::Circle => {
                let (lo, hi) = config::CIRCLE_SPEED;
                (TAU / n * i_f, rng.gen_range(lo..hi))
            }
            Self::Random => (
                rng.gen_range(0.0..TAU),
                rng.gen_range(0.0..config::RANDOM_SPEED_MAX),
            ),
            Self::DoubleRing => {
                let half = n / 2.0;
                let (lo, hi) = if i_f < half {
                    config::INNER_RING_SPEED
                } else {
                    config::OUTER_RING_SPEED
                };
                (TAU / half * i_f, rng.gen_range(lo..hi))
            }
        }
    }
}

/// A shell that climbs until apex or target altitude, then bursts.
#[derive(Clone, Debug)]
pub struct Firework {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub target_y: f32,
    pub color: Color,
    exploded: bool,
    pattern: Option<ExplosionPattern>,
    particles: Vec<Particle>,
}

impl Firework {
    /// Shell launched from the bottom edge of a surface `surface_height` tall.
    pub fn new(x: f32, target_y: f32, color: Color, surface_height: f32, rng: &mut impl Rng) -> Self {
        let vy = rng.gen_range(-config::ROCKET_SPEED_MAX..-config::ROCKET_SPEED_MIN);
        Self {
            pos: vec2(x, surface_height),
            velocity: vec2(0.0, vy),
            target_y,
            color,
            exploded: false,
            pattern: None,
            particles: Vec::new(),
        }
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    /// Pattern chosen at detonation, `None` while still climbing.
    pub fn pattern(&self) -> Option<ExplosionPattern> {
        self.pattern
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_dead(&self) -> bool {
        self.exploded && self.particles.is_empty()
    }

    pub fn update(&mut self, rng: &mut impl Rng, sound: &mut dyn SoundEffects) {
        if !self.exploded {
            self.pos += self.velocity;
            self.velocity.y += config::ROCKET_GRAVITY;

            if self.velocity.y >= 0.0 || self.pos.y <= self.target_y {
                self.explode(rng, sound);
            }
        }

        self.particles.retain(Particle::is_alive);
        for p in &mut self.particles {
            p.update();
        }
    }

    fn explode(&mut self, rng: &mut impl Rng, sound: &mut dyn SoundEffects) {
        let pattern = ExplosionPattern::random(rng);
        self.explode_with(pattern, rng, sound);
    }

    /// Detonate with a fixed pattern. Calling this on an exploded shell is a no-op.
    pub(crate) fn explode_with(
        &mut self,
        pattern: ExplosionPattern,
        rng: &mut impl Rng,
        sound: &mut dyn SoundEffects,
    ) {
        if self.exploded {
            return;
        }
        self.exploded = true;
        self.pattern = Some(pattern);
        sound.play_launch_sound();

        let count = rng.gen_range(config::BURST_PARTICLES_MIN..config::BURST_PARTICLES_MAX);
        self.particles.reserve_exact(count);
        for i in 0..count {
            let (angle, speed) = pattern.emission(i, count, rng);
            let decay = rng.gen_range(config::PARTICLE_DECAY_MIN..config::PARTICLE_DECAY_MAX);
            self.particles.push(Particle::new(
                self.pos,
                Vec2::from_angle(angle) * speed,
                self.color,
                decay,
                config::PARTICLE_GRAVITY,
            ));
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.exploded {
            surface.fill_circle(self.pos, config::ROCKET_RADIUS, with_alpha(self.color, 1.0));
            // Fixed-length streak below the shell, not its real path
            surface.stroke_line(
                self.pos,
                self.pos + vec2(0.0, config::ROCKET_TRAIL_LENGTH),
                config::ROCKET_TRAIL_WIDTH,
                with_alpha(self.color, config::ROCKET_TRAIL_ALPHA),
            );
        }

        for p in &self.particles {
            p.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingSound;
    use crate::surface::testing::RecordingSurface;
    use rand_chacha::ChaCha8Rng;
    use ::rand::SeedableRng;

    const HEIGHT: f32 = 800.0;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn shell(target_y: f32, rng: &mut ChaCha8Rng) -> Firework {
        Firework::new(400.0, target_y, WHITE, HEIGHT, rng)
    }

    fn angle_of(p: &Particle) -> f32 {
        p.velocity.y.atan2(p.velocity.x).rem_euclid(TAU)
    }

    #[test]
    fn new_shell_starts_at_bottom_climbing() {
        let mut rng = rng();
        for _ in 0..200 {
            let fw = shell(100.0, &mut rng);
            assert_eq!(fw.pos.y, HEIGHT);
            assert_eq!(fw.velocity.x, 0.0);
            assert!(fw.velocity.y >= -16.0 && fw.velocity.y < -12.0);
            assert!(!fw.exploded());
            assert!(fw.particles().is_empty());
        }
    }

    #[test]
    fn climbs_without_particles_until_detonation() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();
        let mut fw = shell(-10_000.0, &mut rng);

        while !fw.exploded() {
            assert!(fw.particles().is_empty());
            fw.update(&mut rng, &mut sound);
        }
        // Unreachable target: apex triggers the burst
        assert!(fw.velocity.y >= 0.0);
        assert_eq!(sound.launches, 1);
    }

    #[test]
    fn zero_target_detonates_on_first_qualifying_update() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();
        let mut fw = shell(0.0, &mut rng);

        let mut updates = 0;
        loop {
            let y_before = fw.pos.y;
            let vy_before = fw.velocity.y;
            fw.update(&mut rng, &mut sound);
            updates += 1;

            let y_after = y_before + vy_before;
            let vy_after = vy_before + config::ROCKET_GRAVITY;
            let should_explode = y_after <= 0.0 || vy_after >= 0.0;
            assert_eq!(fw.exploded(), should_explode, "update {updates}");
            if should_explode {
                break;
            }
        }
        let count = fw.particles().len();
        assert!((config::BURST_PARTICLES_MIN..config::BURST_PARTICLES_MAX).contains(&count));
    }

    #[test]
    fn explosion_happens_exactly_once() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();
        let mut fw = shell(HEIGHT, &mut rng);

        fw.update(&mut rng, &mut sound);
        assert!(fw.exploded());
        let initial = fw.particles().len();

        let mut previous = initial;
        for _ in 0..300 {
            fw.update(&mut rng, &mut sound);
            assert!(fw.exploded());
            assert!(fw.particles().len() <= previous);
            previous = fw.particles().len();
        }
        assert_eq!(sound.launches, 1);

        fw.explode_with(ExplosionPattern::Circle, &mut rng, &mut sound);
        assert_eq!(sound.launches, 1);
        assert!(fw.particles().len() <= initial);
    }

    #[test]
    fn is_dead_requires_both_conditions() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();

        let climbing = shell(100.0, &mut rng);
        assert!(climbing.particles().is_empty());
        assert!(!climbing.is_dead());

        let mut burst = shell(100.0, &mut rng);
        burst.explode_with(ExplosionPattern::Random, &mut rng, &mut sound);
        assert!(!burst.particles().is_empty());
        assert!(!burst.is_dead());

        for _ in 0..200 {
            burst.update(&mut rng, &mut sound);
        }
        assert!(burst.particles().is_empty());
        assert!(burst.is_dead());
    }

    #[test]
    fn circle_pattern_spaces_angles_evenly() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();
        let mut fw = shell(100.0, &mut rng);
        fw.explode_with(ExplosionPattern::Circle, &mut rng, &mut sound);

        let particles = fw.particles();
        let n = particles.len();
        let step = TAU / n as f32;
        let mut total = 0.0;
        for pair in particles.windows(2) {
            let delta = (angle_of(&pair[1]) - angle_of(&pair[0])).rem_euclid(TAU);
            assert!((delta - step).abs() < 1e-3, "delta {delta} vs {step}");
            total += delta;
        }
        total += (angle_of(&particles[0]) - angle_of(&particles[n - 1])).rem_euclid(TAU);
        assert!((total - TAU).abs() < 1e-2);

        for p in particles {
            let speed = p.velocity.length();
            assert!(speed >= 4.0 - 1e-4 && speed < 8.0 + 1e-4);
        }
    }

    #[test]
    fn double_ring_partitions_speeds_at_half() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();
        for _ in 0..20 {
            let mut fw = shell(100.0, &mut rng);
            fw.explode_with(ExplosionPattern::DoubleRing, &mut rng, &mut sound);

            let n = fw.particles().len();
            let half = n as f32 / 2.0;
            for (i, p) in fw.particles().iter().enumerate() {
                let speed = p.velocity.length();
                if (i as f32) < half {
                    assert!(speed >= 3.0 - 1e-4 && speed < 5.0 + 1e-4, "inner {i}: {speed}");
                } else {
                    assert!(speed >= 6.0 - 1e-4 && speed < 8.0 + 1e-4, "outer {i}: {speed}");
                }
            }
        }
    }

    #[test]
    fn burst_particles_inherit_shell_state() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();
        let mut fw = Firework::new(250.0, 100.0, rgb(255, 215, 0), HEIGHT, &mut rng);
        fw.explode_with(ExplosionPattern::Random, &mut rng, &mut sound);

        for p in fw.particles() {
            assert_eq!(p.pos, fw.pos);
            assert_eq!(p.color, fw.color);
            assert_eq!(p.gravity, config::PARTICLE_GRAVITY);
            assert!(p.decay >= 0.015 && p.decay < 0.025);
            assert!(p.velocity.length() < 8.0 + 1e-4);
        }
    }

    #[test]
    fn pattern_choice_covers_all_variants() {
        let mut rng = rng();
        let mut seen = [false; 3];
        for _ in 0..100 {
            match ExplosionPattern::random(&mut rng) {
                ExplosionPattern::Circle => seen[0] = true,
                ExplosionPattern::Random => seen[1] = true,
                ExplosionPattern::DoubleRing => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn climbing_shell_draws_body_and_fixed_streak() {
        let mut rng = rng();
        let fw = shell(100.0, &mut rng);
        let mut surface = RecordingSurface::new(800.0, HEIGHT);
        fw.draw(&mut surface);

        let circles: Vec<_> = surface.circles().collect();
        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].1, config::ROCKET_RADIUS);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].1 - lines[0].0, vec2(0.0, 20.0));
        assert_eq!(lines[0].2.a, 0.5);
    }

    #[test]
    fn exploded_shell_draws_only_particles() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();
        let mut fw = shell(100.0, &mut rng);
        fw.explode_with(ExplosionPattern::Circle, &mut rng, &mut sound);

        let mut surface = RecordingSurface::new(800.0, HEIGHT);
        fw.draw(&mut surface);
        assert_eq!(surface.lines().count(), 0);
        // Fresh particles have no trail yet: body + glow each
        assert_eq!(surface.circles().count(), fw.particles().len() * 2);
    }

    #[test]
    fn dead_particles_never_reach_a_draw_pass() {
        let mut rng = rng();
        let mut sound = RecordingSound::default();
        let mut fw = shell(100.0, &mut rng);
        fw.explode_with(ExplosionPattern::Random, &mut rng, &mut sound);

        for _ in 0..120 {
            fw.update(&mut rng, &mut sound);
            let mut surface = RecordingSurface::new(800.0, HEIGHT);
            fw.draw(&mut surface);
            let live = fw.particles().iter().filter(|p| p.is_alive()).count();
            let bodies = surface
                .circles()
                .filter(|(_, r, _)| *r == config::PARTICLE_RADIUS)
                .count();
            assert_eq!(bodies, live);
        }
    }
}
