use web_time::Instant;

/// Length of one mspf measurement window, in seconds.
const CHECKPOINT_PERIOD: f64 = 1.0;

/// Monotonic wall clock reporting seconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was created.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame elapsed time plus a milliseconds-per-frame metric.
///
/// The metric is recomputed only when a frame crosses the one-second
/// checkpoint, from the number of frames counted since the previous
/// checkpoint.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    /// Timestamp of the previous frame (`None` before the first frame).
    prev_time: Option<f64>,
    /// Seconds between the two most recent frames.
    elapsed: f64,
    /// Time at which the next mspf measurement is taken.
    checkpoint: f64,
    /// Frames counted since the last checkpoint.
    frames: u32,
    /// Milliseconds per frame over the last measurement window.
    mspf: f32,
}

impl FrameTimer {
    /// Create a timer that has not seen a frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at time `now` (seconds).
    ///
    /// The first call only records the timestamp and leaves `elapsed` at
    /// zero.
    pub fn on_frame(&mut self, now: f64) {
        let Some(prev) = self.prev_time else {
            self.prev_time = Some(now);
            return;
        };

        self.elapsed = now - prev;
        self.prev_time = Some(now);
        if now >= self.checkpoint {
            if self.frames > 0 {
                let window = now - (self.checkpoint - CHECKPOINT_PERIOD);
                self.mspf = (1000.0 * window / f64::from(self.frames)) as f32;
            }
            self.checkpoint = now + CHECKPOINT_PERIOD;
            self.frames = 0;
        }
        self.frames += 1;
    }

    /// Seconds between the two most recent frames.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Timestamp of the most recent frame, or zero before the first one.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.prev_time.unwrap_or(0.0)
    }

    /// Whether at least one frame has been recorded.
    #[must_use]
    pub fn started(&self) -> bool {
        self.prev_time.is_some()
    }

    /// Milliseconds per frame over the last complete measurement window.
    #[must_use]
    pub fn mspf(&self) -> f32 {
        self.mspf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_only_records_time() {
        let mut timer = FrameTimer::new();
        assert!(!timer.started());
        timer.on_frame(3.0);
        assert!(timer.started());
        assert_eq!(timer.elapsed(), 0.0);
        assert_eq!(timer.time(), 3.0);
        assert_eq!(timer.mspf(), 0.0);
    }

    #[test]
    fn elapsed_tracks_consecutive_frames() {
        let mut timer = FrameTimer::new();
        timer.on_frame(1.0);
        timer.on_frame(1.25);
        assert_eq!(timer.elapsed(), 0.25);
        timer.on_frame(1.25);
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn mspf_updates_only_at_checkpoints() {
        let mut timer = FrameTimer::new();
        timer.on_frame(0.0);
        // First checkpoint is crossed with no counted frames.
        timer.on_frame(0.5);
        assert_eq!(timer.mspf(), 0.0);

        // Ten frames at 100 ms each up to the next checkpoint at 1.5 s.
        for i in 1..=9 {
            timer.on_frame(0.5 + f64::from(i) * 0.1);
            assert_eq!(timer.mspf(), 0.0);
        }
        timer.on_frame(1.5);
        assert!((timer.mspf() - 100.0).abs() < 1e-3);

        // Unchanged until the following checkpoint.
        timer.on_frame(1.6);
        assert!((timer.mspf() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn clock_is_monotonic() {
        let clock = Clock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
