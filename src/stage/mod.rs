// stage/ - One scene plus everything that animates and draws it
//
// The hero and about regions each get their own Stage; nothing is shared
// between them.

mod about;
mod hero;

pub use about::{about_stage, ABOUT_SPIN};
pub use hero::{hero_stage, CAMERA_SWEEP, FILM_CAMERA_SPIN, REEL_SPIN, SPOTLIGHT_SPIN};

use crate::animation::{FrameTicker, ScrollEngine};
use crate::page::PageLayout;
use crate::render::{Framebuffer, RenderStats, Rgba, SoftwareRenderer};
use crate::scene::{PerspectiveCamera, Scene, DEFAULT_FAR, DEFAULT_FOV, DEFAULT_NEAR};

/// Distance of both stage cameras from the origin along +Z
pub const CAMERA_DISTANCE: f32 = 15.0;

pub(crate) fn stage_camera(width: u32, height: u32) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(DEFAULT_FOV, 1.0, DEFAULT_NEAR, DEFAULT_FAR);
    camera.set_viewport(width, height);
    camera.position.z = CAMERA_DISTANCE;
    camera
}

pub struct Stage {
    scene: Scene,
    bindings: ScrollEngine,
    ticker: FrameTicker,
    renderer: SoftwareRenderer,
}

impl Stage {
    pub fn new(scene: Scene, bindings: ScrollEngine, ticker: FrameTicker, width: u32, height: u32) -> Self {
        log::info!(
            "stage '{}': {} entities, {} primitives, {} bindings, {}x{}",
            scene.name(),
            scene.entities().len(),
            scene.primitive_count(),
            bindings.bindings().len(),
            width,
            height
        );
        Self {
            scene,
            bindings,
            ticker,
            renderer: SoftwareRenderer::new(width, height),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn bindings(&self) -> &ScrollEngine {
        &self.bindings
    }

    pub fn ticker(&self) -> &FrameTicker {
        &self.ticker
    }

    /// Evaluate scroll bindings only
    pub fn apply_scroll(&mut self, layout: &PageLayout, scroll: f32) {
        self.bindings.apply(&mut self.scene, layout, scroll);
    }

    /// Advance per-frame spins and oscillations by one frame at `time`
    pub fn tick(&mut self, time: f32) {
        self.ticker.tick(&mut self.scene, time);
    }

    /// Both halves of a frame's animation
    pub fn update(&mut self, layout: &PageLayout, scroll: f32, time: f32) {
        self.apply_scroll(layout, scroll);
        self.tick(time);
    }

    /// Match camera aspect and target size; safe to repeat, zero sizes ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
        self.renderer.set_size(width, height);
    }

    pub fn render(&mut self) -> RenderStats {
        self.renderer.render(&self.scene, Rgba::TRANSPARENT)
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        self.renderer.framebuffer()
    }

    pub fn size(&self) -> (u32, u32) {
        self.renderer.size()
    }
}
