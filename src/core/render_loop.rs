use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use crate::frame::FrameInfo;

/// Cloneable flag that ends a render loop at its next frame boundary
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Work done once per frame
pub trait FrameTask {
    fn frame(&mut self, frame: FrameInfo) -> Result<()>;
}

/// Drives a frame task from a frame source until stopped or the source runs dry
pub struct RenderLoop<F> {
    frames: F,
    stop: StopHandle,
    frames_run: u64,
}

impl<F: Iterator<Item = FrameInfo>> RenderLoop<F> {
    pub fn new(frames: F) -> Self {
        Self {
            frames,
            stop: StopHandle::new(),
            frames_run: 0,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Run one frame. Returns false, without touching the task, once stopped
    /// or once the frame source is exhausted.
    pub fn step(&mut self, task: &mut impl FrameTask) -> Result<bool> {
        if self.stop.is_stopped() {
            return Ok(false);
        }
        let Some(frame) = self.frames.next() else {
            return Ok(false);
        };
        log::trace!("frame {} t={:.3}s dt={:.4}s", frame.number, frame.time, frame.delta);
        task.frame(frame)?;
        self.frames_run += 1;
        Ok(true)
    }

    /// Step until stopped; returns the number of frames run
    pub fn run(&mut self, task: &mut impl FrameTask) -> Result<u64> {
        while self.step(task)? {}
        log::info!("render loop finished after {} frames", self.frames_run);
        Ok(self.frames_run)
    }
}
