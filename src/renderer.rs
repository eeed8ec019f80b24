use macroquad::prelude::*;

use crate::show::ShowState;
use crate::stats::RingBuffer;

const TEXT_COLOR: Color = Color::new(0.7, 0.75, 0.8, 1.0);
const SHADOW_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.5);
const LINE_HEIGHT: f32 = 20.0;

fn shadowed_text(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x + 1.0, y + 1.0, size, SHADOW_COLOR);
    draw_text(text, x, y, size, color);
}

/// Debug overlay in the top-left corner, toggled with H.
pub fn draw_hud(show: &ShowState) {
    let stats = &show.stats;
    let peak = stats.particles.max().unwrap_or(0.0) as usize;
    let lines = [
        format!("FPS: {}", get_fps()),
        format!("Fireworks: {} ({} climbing)", show.field.len(), show.field.climbing_count()),
        format!("Particles: {} (peak {})", show.field.particle_count(), peak),
        format!(
            "Bursts: {} (last: {})",
            stats.total_bursts,
            show.field.last_pattern().map_or("none", |p| p.label())
        ),
        format!("Queued launches: {}", show.launches.pending()),
        format!(
            "Overlays: {} confetti, {} sparkles",
            show.confetti.count(),
            show.sparkles.count()
        ),
        format!("Seed: {}", show.seed),
    ];

    let mut y = 20.0;
    for line in &lines {
        shadowed_text(line, 10.0, y, 18.0, TEXT_COLOR);
        y += LINE_HEIGHT;
    }

    draw_sparkline(
        &stats.particles,
        Rect::new(10.0, y - 8.0, 160.0, 32.0),
        Color::new(1.0, 0.84, 0.0, 0.8),
    );
    draw_sparkline(
        &stats.fireworks,
        Rect::new(180.0, y - 8.0, 160.0, 32.0),
        Color::new(0.0, 0.75, 1.0, 0.8),
    );

    let (label, color) = if show.auto_launch {
        ("AUTO LAUNCH (A to stop)", Color::new(0.4, 0.9, 0.5, 0.9))
    } else {
        ("AUTO LAUNCH OFF (A to resume)", Color::new(1.0, 0.8, 0.2, 0.9))
    };
    let tw = measure_text(label, None, 20, 1.0).width;
    shadowed_text(label, screen_width() - tw - 12.0, 24.0, 20.0, color);
}

/// Sampled count history, scaled to its own peak.
fn draw_sparkline(samples: &RingBuffer, rect: Rect, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::new(0.0, 0.0, 0.0, 0.25));
    let peak = samples.max().unwrap_or(0.0);
    if samples.len() < 2 || peak <= 0.0 {
        return;
    }

    let step = rect.w / (samples.len() - 1) as f32;
    let point = |i: usize, v: f32| vec2(rect.x + step * i as f32, rect.y + rect.h * (1.0 - v / peak));
    let mut prev: Option<Vec2> = None;
    for (i, v) in samples.iter().enumerate() {
        let p = point(i, v);
        if let Some(q) = prev {
            draw_line(q.x, q.y, p.x, p.y, 1.0, color);
        }
        prev = Some(p);
    }
}
