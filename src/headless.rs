// headless.rs - Scripted scroll sweep without a window
use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::{EveryNTicks, FrameTask, RenderLoop};
use crate::frame::{FixedStepFrames, FrameInfo};
use crate::snapshot::{SceneDump, SnapshotWriter};
use crate::studio::Studio;

/// Scrolls from the top of the document to the bottom over `frames` frames,
/// one evenly spaced jump per frame
pub struct ScrollSweep {
    studio: Studio,
    frames: u64,
    snapshots: Option<SnapshotWriter>,
    every: EveryNTicks,
}

impl ScrollSweep {
    pub fn new(studio: Studio, frames: u64, snapshot_every: u64) -> Self {
        Self {
            studio,
            frames,
            snapshots: None,
            every: EveryNTicks::new(snapshot_every),
        }
    }

    pub fn with_snapshots(mut self, writer: SnapshotWriter) -> Self {
        self.snapshots = Some(writer);
        self
    }

    pub fn studio(&self) -> &Studio {
        &self.studio
    }

    pub fn snapshots(&self) -> &[PathBuf] {
        self.snapshots.as_ref().map(|w| w.written()).unwrap_or(&[])
    }

    /// Scroll offset for frame `n`: 0 on the first frame, max on the last
    pub fn offset_at(&self, n: u64) -> f32 {
        let max = self.studio.scroll().max();
        if self.frames <= 1 {
            return max;
        }
        max * n.min(self.frames - 1) as f32 / (self.frames - 1) as f32
    }
}

impl FrameTask for ScrollSweep {
    fn frame(&mut self, frame: FrameInfo) -> Result<()> {
        let offset = self.offset_at(frame.number);
        self.studio.scroll_mut().jump_to(offset);
        self.studio.frame(frame)?;

        let last = frame.number + 1 >= self.frames;
        let due = self.every.tick();
        if let Some(writer) = &mut self.snapshots {
            if due || last {
                let (width, height) = self.studio.dimensions();
                writer.write(frame.number, width, height, self.studio.frame_bytes())?;
            }
        }
        Ok(())
    }
}

pub struct HeadlessReport {
    pub frames: u64,
    pub snapshots: Vec<PathBuf>,
}

pub fn run(config: Config, snapshot_dir: &Path, dump_scene: Option<&Path>) -> Result<HeadlessReport> {
    let frames = config.frames;
    let fps = config.fps;
    let every = config.snapshot_every;
    log::info!("headless sweep: {} frames at {} fps into {:?}", frames, fps, snapshot_dir);

    let mut sweep = ScrollSweep::new(Studio::new(config), frames, every)
        .with_snapshots(SnapshotWriter::new(snapshot_dir)?);
    let mut render_loop = RenderLoop::new(FixedStepFrames::new(fps, Some(frames)));
    let frames_run = render_loop.run(&mut sweep)?;

    if let Some(path) = dump_scene {
        SceneDump::capture(sweep.studio().hero().scene()).write(path)?;
    }

    Ok(HeadlessReport {
        frames: frames_run,
        snapshots: sweep.snapshots().to_vec(),
    })
}
