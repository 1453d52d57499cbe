use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Endless frames timed by the wall clock
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Frames at a fixed step, for deterministic runs. `None` count never ends.
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    delta: f32,
    next: u64,
    count: Option<u64>,
}

impl FixedStepFrames {
    pub fn new(fps: f32, count: Option<u64>) -> Self {
        Self {
            delta: 1.0 / fps,
            next: 0,
            count,
        }
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.count.is_some_and(|n| self.next >= n) {
            return None;
        }
        let n = self.next;
        self.next += 1;
        Some(FrameInfo::new(n, n as f32 * self.delta, self.delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_is_deterministic() {
        let frames: Vec<FrameInfo> = FixedStepFrames::new(50.0, Some(3)).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2], FrameInfo::new(2, 0.04, 0.02));
    }

    #[test]
    fn wall_clock_frames_count_up() {
        let mut frames = FrameIterator::new();
        let a = frames.next().map(|f| f.number);
        let b = frames.next().map(|f| f.number);
        assert_eq!((a, b), (Some(0), Some(1)));
    }
}
