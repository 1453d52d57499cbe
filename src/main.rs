use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use studio_scene::cli::Cli;
use studio_scene::core::{
    DisplayContext, FpsCounter, GpuContext, RenderLoop, StopHandle, SurfaceRenderer, WinitInput,
};
use studio_scene::frame::FrameIterator;
use studio_scene::headless;
use studio_scene::snapshot::SceneDump;
use studio_scene::{Config, Studio};

// === Constants ===

/// PageUp/PageDown move this fraction of the viewport
const PAGE_FRACTION: f32 = 0.9;

struct Graphics {
    window: Arc<Window>,
    surface: SurfaceRenderer,
}

struct App {
    config: Config,
    studio: Studio,
    input: WinitInput,
    render_loop: RenderLoop<FrameIterator>,
    stop: StopHandle,
    fps: FpsCounter,
    last_frame_time: Instant,
    graphics: Option<Graphics>,
}

impl App {
    fn new(config: Config) -> Self {
        let render_loop = RenderLoop::new(FrameIterator::new());
        Self {
            input: WinitInput::new(config.scroll_step, config.height as f32 * PAGE_FRACTION),
            fps: FpsCounter::new(config.fps_interval),
            studio: Studio::new(config.clone()),
            stop: render_loop.stop_handle(),
            render_loop,
            last_frame_time: Instant::now(),
            graphics: None,
            config,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<Graphics> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title("Studio Scene")
                    .with_inner_size(PhysicalSize::new(self.config.width, self.config.height)),
            )?,
        );
        let size = window.inner_size();
        log::info!("window {}x{}", size.width, size.height);

        let (gpu, surface) = pollster::block_on(GpuContext::for_window(window.clone()))?;
        let surface = SurfaceRenderer::new(gpu, surface, DisplayContext::new(size.width, size.height))?;
        self.resize(size);

        Ok(Graphics { window, surface })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.studio.resize(size.width, size.height);
        if size.height > 0 {
            self.input.set_page(size.height as f32 * PAGE_FRACTION);
        }
        if let Some(graphics) = &mut self.graphics {
            graphics.surface.resize(DisplayContext::new(size.width, size.height));
        }
    }

    fn update_fps(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        if let Some(fps) = self.fps.frame(delta) {
            log::info!("{:.1} fps, {} triangles", fps, self.studio.last_stats().drawn);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.update_fps();

        match self.render_loop.step(&mut self.studio) {
            Ok(true) => {}
            Ok(false) => {
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("frame error: {:#}", e),
        }

        if let Some(graphics) = &self.graphics {
            let (width, height) = self.studio.dimensions();
            if graphics.surface.context() != DisplayContext::new(width, height) {
                return;
            }
            if let Err(e) = graphics.surface.present(self.studio.frame_bytes()) {
                log::warn!("present error: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        match self.init_graphics(event_loop) {
            Ok(graphics) => self.graphics = Some(graphics),
            Err(e) => {
                log::error!("failed to initialize display: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => {
                if let Some(command) = self.input.process_event(&event) {
                    if !self.studio.apply(command) {
                        self.stop.stop();
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if cli.headless {
        let report = headless::run(config, &cli.snapshot_dir, cli.dump_scene.as_deref())?;
        println!(
            "Rendered {} frames, wrote {} snapshots to {:?}",
            report.frames,
            report.snapshots.len(),
            cli.snapshot_dir
        );
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    println!("Studio Scene - Controls: wheel/arrows/PageUp/PageDown scroll, 1-5 jump to a section, Escape to quit");
    event_loop.run_app(&mut app)?;

    if let Some(path) = &cli.dump_scene {
        SceneDump::capture(app.studio.hero().scene()).write(path)?;
    }
    Ok(())
}
