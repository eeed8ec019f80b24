//! Rolling show statistics for the HUD.

/// Ring buffer that stores the last N samples of a metric.
pub struct RingBuffer {
    data: Vec<f32>,
    head: usize,
    len: usize,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            head: 0,
            len: 0,
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Return samples in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let start = if self.len < self.capacity {
            0
        } else {
            self.head
        };
        (0..self.len).map(move |i| self.data[(start + i) % self.capacity])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<f32> {
        if self.len == 0 {
            None
        } else {
            let idx = (self.head + self.capacity - 1) % self.capacity;
            Some(self.data[idx])
        }
    }

    pub fn max(&self) -> Option<f32> {
        self.iter().reduce(f32::max)
    }
}

/// Live counts sampled every few frames, plus a running burst total.
pub struct ShowStats {
    pub fireworks: RingBuffer,
    pub particles: RingBuffer,

    pub total_bursts: u64,
    pub sample_interval: u32,
    pub frame_counter: u32,
}

impl ShowStats {
    pub fn new(capacity: usize) -> Self {
        Self {
            fireworks: RingBuffer::new(capacity),
            particles: RingBuffer::new(capacity),
            total_bursts: 0,
            sample_interval: 10, // sample every N frames
            frame_counter: 0,
        }
    }

    pub fn record(&mut self, firework_count: usize, particle_count: usize, bursts_this_frame: u32) {
        self.total_bursts += bursts_this_frame as u64;

        self.frame_counter += 1;
        if self.frame_counter % self.sample_interval != 0 {
            return;
        }

        self.fireworks.push(firework_count as f32);
        self.particles.push(particle_count as f32);
    }
}
