// Frame-cadence helpers. Each one owns its state and is fed deltas or ticks.

/// Fires at a fixed rate in Hz, carrying leftover time into the next interval
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    interval: f32,
    accumulator: f32,
}

impl FixedHz {
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            true
        } else {
            false
        }
    }
}

/// Fires every N ticks; N = 0 never fires
#[derive(Debug, Clone, Copy)]
pub struct EveryNTicks {
    interval: u64,
    count: u64,
}

impl EveryNTicks {
    pub fn new(interval: u64) -> Self {
        Self { interval, count: 0 }
    }

    pub fn tick(&mut self) -> bool {
        if self.interval == 0 {
            return false;
        }
        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// Averages frame rate over a reporting window
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    window: FixedHz,
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    /// Report every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            window: FixedHz::new(1.0 / interval),
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
        }
    }

    /// Count one frame; returns the fresh average when a window closes
    pub fn frame(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;
        if !self.window.tick(delta) {
            return None;
        }
        self.fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_hz_fires_at_rate() {
        let mut timer = FixedHz::new(60.0);

        assert!(!timer.tick(0.01));
        assert!(timer.tick(0.01)); // ~0.02s >= 1/60
        assert!(!timer.tick(0.001));
    }

    #[test]
    fn every_n_ticks_counts() {
        let mut timer = EveryNTicks::new(3);

        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(!timer.tick());
    }

    #[test]
    fn every_zero_ticks_never_fires() {
        let mut timer = EveryNTicks::new(0);
        assert!((0..10).all(|_| !timer.tick()));
    }

    #[test]
    fn fps_counter_reports_once_per_window() {
        let mut fps = FpsCounter::new(1.0);
        let reports: Vec<f32> = (0..90).filter_map(|_| fps.frame(1.0 / 60.0)).collect();

        assert_eq!(reports.len(), 1);
        assert!((reports[0] - 60.0).abs() < 1.0);
    }
}
