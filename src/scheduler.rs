//! Virtual-time timers.
//!
//! Nothing here reads a real clock: callers pass the current time in seconds
//! and drain whatever has come due. The frame loop feeds in `get_time()`,
//! tests advance time by hand.

/// A pending firework launch. `None` fields are randomized at admission.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LaunchRequest {
    pub x: Option<f32>,
    pub target_y: Option<f32>,
}

impl LaunchRequest {
    pub fn random() -> Self {
        Self::default()
    }

    pub fn at(x: f32, target_y: f32) -> Self {
        Self {
            x: Some(x),
            target_y: Some(target_y),
        }
    }
}

#[derive(Clone, Debug)]
struct Timer<T> {
    due: f64,
    seq: u64,
    item: T,
}

/// One-shot timers ordered by due time, ties broken by insertion order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    timers: Vec<Timer<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due: f64, item: T) {
        self.timers.push(Timer {
            due,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Schedule `count` items at `start`, `start + spacing`, ...
    pub fn schedule_staggered(
        &mut self,
        start: f64,
        spacing: f64,
        count: usize,
        mut make: impl FnMut(usize) -> T,
    ) {
        for i in 0..count {
            self.schedule(start + spacing * i as f64, make(i));
        }
    }

    /// Remove and return every item due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|t| t.due <= now);
        self.timers = pending;
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|t| t.item).collect()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

/// Repeating timer. Periods missed during a stall collapse into one firing,
/// and the schedule keeps its original phase.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period: f64,
    next_due: f64,
}

impl Interval {
    pub fn new(start: f64, period: f64) -> Self {
        Self {
            period,
            next_due: start + period,
        }
    }

    pub fn poll(&mut self, now: f64) -> bool {
        if now < self.next_due {
            return false;
        }
        let missed = ((now - self.next_due) / self.period).floor();
        self.next_due += (missed + 1.0) * self.period;
        true
    }
}

/// Burst pacing for firework launches.
#[derive(Clone, Debug)]
pub struct LaunchScheduler {
    queue: TimerQueue<LaunchRequest>,
    spacing: f64,
}

impl LaunchScheduler {
    pub fn new(spacing: f64) -> Self {
        Self {
            queue: TimerQueue::new(),
            spacing,
        }
    }

    /// Queue `count` random launches, the first at `start` and the rest
    /// `spacing` seconds apart. Nothing is launched synchronously.
    pub fn launch_burst(&mut self, start: f64, count: usize) {
        self.queue
            .schedule_staggered(start, self.spacing, count, |_| LaunchRequest::random());
    }

    pub fn due_launches(&mut self, now: f64) -> Vec<LaunchRequest> {
        self.queue.drain_due(now)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_queue_drains_in_due_then_insertion_order() {
        let mut q = TimerQueue::new();
        q.schedule(2.0, "c");
        q.schedule(1.0, "a");
        q.schedule(1.0, "b");
        q.schedule(5.0, "late");

        assert!(q.drain_due(0.5).is_empty());
        assert_eq!(q.drain_due(2.0), vec!["a", "b", "c"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.drain_due(10.0), vec!["late"]);
        assert!(q.is_empty());
    }

    #[test]
    fn staggered_items_use_their_index() {
        let mut q = TimerQueue::new();
        q.schedule_staggered(1.0, 0.5, 3, |i| i);
        assert_eq!(q.drain_due(1.0), vec![0]);
        assert_eq!(q.drain_due(1.49), Vec::<usize>::new());
        assert_eq!(q.drain_due(2.0), vec![1, 2]);
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut every_two = Interval::new(0.0, 2.0);
        assert!(!every_two.poll(1.9));
        assert!(every_two.poll(2.0));
        assert!(!every_two.poll(2.5));
        assert!(every_two.poll(4.0));
    }

    #[test]
    fn interval_collapses_a_long_stall_into_one_firing() {
        let mut every_two = Interval::new(0.0, 2.0);
        // Ten minutes without a frame
        assert!(every_two.poll(601.0));
        assert!(!every_two.poll(601.5));
        assert!(!every_two.poll(601.9));
        assert!(every_two.poll(602.0));
    }

    #[test]
    fn burst_releases_one_launch_per_spacing() {
        let mut scheduler = LaunchScheduler::new(0.2);
        scheduler.launch_burst(10.0, 5);
        assert_eq!(scheduler.pending(), 5);

        assert!(scheduler.due_launches(9.99).is_empty());
        let mut released = Vec::new();
        for step in 0..5 {
            let now = 10.0 + 0.2 * step as f64;
            let due = scheduler.due_launches(now);
            assert_eq!(due.len(), 1, "step {step}");
            released.extend(due);
        }
        assert_eq!(released, vec![LaunchRequest::random(); 5]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn explicit_zero_target_is_kept() {
        let mut q = TimerQueue::new();
        q.schedule(0.0, LaunchRequest::at(0.0, 0.0));
        let due = q.drain_due(0.0);
        assert_eq!(due[0].x, Some(0.0));
        assert_eq!(due[0].target_y, Some(0.0));
    }
}
