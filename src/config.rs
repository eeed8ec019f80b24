// All tunable show constants in one place.
// Values are per-frame and visually tuned for a ~60 Hz display.

// Particles
pub const PARTICLE_GRAVITY: f32 = 0.05;
pub const PARTICLE_DECAY_MIN: f32 = 0.015;
pub const PARTICLE_DECAY_MAX: f32 = 0.025;
pub const PARTICLE_TRAIL_LEN: usize = 5;
pub const PARTICLE_RADIUS: f32 = 3.0;
pub const PARTICLE_GLOW_RADIUS: f32 = 6.0;
pub const PARTICLE_GLOW_ALPHA: f32 = 0.3;
pub const TRAIL_DOT_RADIUS: f32 = 2.0;
pub const TRAIL_ALPHA_SCALE: f32 = 0.5;

// Rockets
pub const ROCKET_GRAVITY: f32 = 0.15;
pub const ROCKET_SPEED_MIN: f32 = 12.0;
pub const ROCKET_SPEED_MAX: f32 = 16.0;
pub const ROCKET_RADIUS: f32 = 4.0;
pub const ROCKET_TRAIL_LENGTH: f32 = 20.0;
pub const ROCKET_TRAIL_WIDTH: f32 = 2.0;
pub const ROCKET_TRAIL_ALPHA: f32 = 0.5;

// Explosions
pub const BURST_PARTICLES_MIN: usize = 80;
pub const BURST_PARTICLES_MAX: usize = 120;
pub const CIRCLE_SPEED: (f32, f32) = (4.0, 8.0);
pub const RANDOM_SPEED_MAX: f32 = 8.0;
pub const INNER_RING_SPEED: (f32, f32) = (3.0, 5.0);
pub const OUTER_RING_SPEED: (f32, f32) = (6.0, 8.0);

// Launching
pub const TARGET_MIN_ALTITUDE: f32 = 100.0;
pub const TARGET_BAND_FRACTION: f32 = 0.4;
pub const CLICK_TARGET_FRACTION: f32 = 0.3;
pub const AUTO_LAUNCH_CHANCE: f32 = 0.02;
pub const BURST_SPACING_SECS: f64 = 0.2;

// Burst sizes per trigger
pub const BUTTON_BURST: usize = 10;
pub const SURPRISE_BURST: usize = 5;
pub const KEYBOARD_BURST: usize = 15;
pub const OPENING_BURST: usize = 8;
pub const OPENING_DELAY_SECS: f64 = 0.5;

// Surface
pub const FADE_COLOR: (u8, u8, u8) = (10, 10, 46);
pub const FADE_ALPHA: f32 = 0.2;

// Confetti
pub const SURPRISE_CONFETTI: usize = 80;
pub const FORTUNE_CONFETTI: usize = 30;
pub const CONFETTI_LIFETIME_SECS: f64 = 3.0;

// Sparkles
pub const SPARKLE_LIFETIME_SECS: f64 = 4.0;
pub const SPARKLE_RISE: f32 = 220.0;
pub const BUTTON_SPARKLES: usize = 8;
pub const BUTTON_SPARKLE_SPACING_SECS: f64 = 0.1;
pub const BUTTON_SPARKLE_JITTER: f32 = 100.0;
pub const SURPRISE_SPARKLES: usize = 12;
pub const SURPRISE_SPARKLE_SPACING_SECS: f64 = 0.15;
pub const AMBIENT_SPARKLE_PERIOD_SECS: f64 = 2.0;
pub const AMBIENT_SPARKLE_CHANCE: f32 = 0.3;

// Fortune card
pub const FORTUNE_FLIP_SECS: f64 = 0.3;

// Audio
pub const LAUNCH_VOLUME_MIN: f32 = 0.3;
pub const LAUNCH_VOLUME_MAX: f32 = 0.6;
