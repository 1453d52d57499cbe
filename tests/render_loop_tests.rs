use anyhow::Result;
use studio_scene::core::{FrameTask, RenderLoop, StopHandle};
use studio_scene::frame::{FixedStepFrames, FrameInfo};
use studio_scene::stage::{hero_stage, FILM_CAMERA_SPIN};

/// Records frames and optionally stops the loop after a given frame
struct Recorder {
    seen: Vec<FrameInfo>,
    stop_after: Option<(u64, StopHandle)>,
}

impl FrameTask for Recorder {
    fn frame(&mut self, frame: FrameInfo) -> Result<()> {
        self.seen.push(frame);
        if let Some((n, handle)) = &self.stop_after {
            if frame.number >= *n {
                handle.stop();
            }
        }
        Ok(())
    }
}

struct Failing;

impl FrameTask for Failing {
    fn frame(&mut self, frame: FrameInfo) -> Result<()> {
        anyhow::bail!("frame {} failed", frame.number)
    }
}

// ============================================================================
// Loop control
// ============================================================================

#[test]
fn test_loop_runs_until_source_ends() {
    let mut render_loop = RenderLoop::new(FixedStepFrames::new(30.0, Some(7)));
    let mut task = Recorder { seen: Vec::new(), stop_after: None };

    assert_eq!(render_loop.run(&mut task).unwrap(), 7);
    assert_eq!(task.seen.len(), 7);
    assert_eq!(task.seen[6].number, 6);
}

#[test]
fn test_stop_handle_ends_endless_loop() {
    let mut render_loop = RenderLoop::new(FixedStepFrames::new(60.0, None));
    let handle = render_loop.stop_handle();
    let mut task = Recorder {
        seen: Vec::new(),
        stop_after: Some((4, handle.clone())),
    };

    assert_eq!(render_loop.run(&mut task).unwrap(), 5);
    assert!(handle.is_stopped());
    assert!(!render_loop.step(&mut task).unwrap());
    assert_eq!(task.seen.len(), 5);
}

#[test]
fn test_stop_before_first_frame() {
    let mut render_loop = RenderLoop::new(FixedStepFrames::new(60.0, Some(10)));
    render_loop.stop_handle().stop();
    let mut task = Recorder { seen: Vec::new(), stop_after: None };

    assert_eq!(render_loop.run(&mut task).unwrap(), 0);
    assert!(task.seen.is_empty());
}

#[test]
fn test_task_error_propagates() {
    let mut render_loop = RenderLoop::new(FixedStepFrames::new(60.0, Some(3)));
    let err = render_loop.run(&mut Failing).unwrap_err();
    assert_eq!(err.to_string(), "frame 0 failed");
    assert_eq!(render_loop.frames_run(), 0);
}

// ============================================================================
// Ticking a stage from the loop
// ============================================================================

struct Ticking(studio_scene::Stage);

impl FrameTask for Ticking {
    fn frame(&mut self, frame: FrameInfo) -> Result<()> {
        self.0.tick(frame.time);
        Ok(())
    }
}

#[test]
fn test_k_frames_spin_film_camera_k_deltas() {
    let mut task = Ticking(hero_stage(64, 48));
    let mut render_loop = RenderLoop::new(FixedStepFrames::new(60.0, Some(240)));
    render_loop.run(&mut task).unwrap();

    let scene = task.0.scene();
    let camera = scene.entity(scene.find("film-camera").unwrap()).unwrap();
    assert!((camera.spin().x - 240.0 * FILM_CAMERA_SPIN).abs() < 1e-4);
}
