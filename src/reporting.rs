use serde::Serialize;

use crate::stats::RingBuffer;

/// Frames kept for percentile estimates: one minute at 60 Hz.
pub const FRAME_WINDOW: usize = 3600;

const BUDGET_MS: f64 = 1000.0 / 60.0;

/// Frame times in milliseconds. Min, max and mean cover the whole session;
/// percentiles cover the most recent `window` frames.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameTimeSummary {
    pub window: usize,
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
    pub p50_ms: f64,
    pub p90_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

/// End-of-session report logged as one JSON line.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub seed: u64,
    pub frames: u64,
    pub launches: u64,
    pub total_bursts: u64,
    pub peak_particles: usize,
    pub frame_ms: FrameTimeSummary,
    /// Percent of frames that met a 60 Hz budget.
    pub frames_within_budget_pct: f64,
}

/// Per-frame timing collector. Memory stays fixed however long the show runs.
pub struct FrameTimings {
    recent_ms: RingBuffer,
    frames: u64,
    sum_ms: f64,
    min_ms: f64,
    max_ms: f64,
    within_budget: u64,
    peak_particles: usize,
}

impl Default for FrameTimings {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimings {
    pub fn new() -> Self {
        Self::with_window(FRAME_WINDOW)
    }

    /// `window` must be non-zero.
    pub fn with_window(window: usize) -> Self {
        Self {
            recent_ms: RingBuffer::new(window),
            frames: 0,
            sum_ms: 0.0,
            min_ms: f64::INFINITY,
            max_ms: f64::NEG_INFINITY,
            within_budget: 0,
            peak_particles: 0,
        }
    }

    pub fn record(&mut self, frame_secs: f64, particle_count: usize) {
        let ms = frame_secs * 1000.0;
        self.recent_ms.push(ms as f32);
        self.frames += 1;
        self.sum_ms += ms;
        self.min_ms = self.min_ms.min(ms);
        self.max_ms = self.max_ms.max(ms);
        if ms <= BUDGET_MS {
            self.within_budget += 1;
        }
        self.peak_particles = self.peak_particles.max(particle_count);
    }

    pub fn summary(&self) -> FrameTimeSummary {
        if self.frames == 0 {
            return FrameTimeSummary::default();
        }

        let mut sorted: Vec<f64> = self.recent_ms.iter().map(f64::from).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));

        FrameTimeSummary {
            window: sorted.len(),
            min_ms: self.min_ms,
            max_ms: self.max_ms,
            mean_ms: self.sum_ms / self.frames as f64,
            p50_ms: percentile_nearest_rank(&sorted, 0.50),
            p90_ms: percentile_nearest_rank(&sorted, 0.90),
            p95_ms: percentile_nearest_rank(&sorted, 0.95),
            p99_ms: percentile_nearest_rank(&sorted, 0.99),
        }
    }

    pub fn report(&self, seed: u64, launches: u64, total_bursts: u64) -> SessionReport {
        let within = if self.frames == 0 {
            0.0
        } else {
            self.within_budget as f64 / self.frames as f64 * 100.0
        };
        SessionReport {
            seed,
            frames: self.frames,
            launches,
            total_bursts,
            peak_particles: self.peak_particles,
            frame_ms: self.summary(),
            frames_within_budget_pct: within,
        }
    }
}

fn percentile_nearest_rank(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let p = p.clamp(0.0, 1.0);
    let rank = ((p * sorted.len() as f64).ceil() as usize).saturating_sub(1);
    sorted[rank.min(sorted.len() - 1)]
}
