use glam::Vec3;

use super::{stage_camera, Stage};
use crate::animation::{FrameTicker, Oscillation, ScrollEngine};
use crate::math::{Axis, Field};
use crate::page::{PageLayout, ABOUT};
use crate::props;
use crate::scene::{Light, Scene};

pub const ABOUT_SPIN: f32 = 0.008;

/// Icons drawn over the about section, sized to its box.
/// `None` when the page has no about section.
pub fn about_stage(layout: &PageLayout) -> Option<Stage> {
    let Some(section) = layout.element(ABOUT) else {
        log::debug!("no '{}' on this page, skipping about stage", ABOUT);
        return None;
    };
    let (width, height) = (section.width.round() as u32, section.height.round() as u32);

    let mut scene = Scene::new("about", stage_camera(width, height))
        .with_light(Light::ambient(0xffffff, 0.6))
        .with_light(Light::point(0x00aaff, 1.5, 100.0, Vec3::new(10.0, 10.0, 10.0)))
        .with_light(Light::point(0xff00ff, 1.5, 100.0, Vec3::new(-10.0, -10.0, 10.0)));

    let mut ticker = FrameTicker::new();
    for (i, icon) in props::about_icons().into_iter().enumerate() {
        let id = scene.add(icon);
        let phase = i as f32;
        // sway about X and bob toward the viewer; the bob overrides the icon's placed z
        ticker
            .spin(id, Axis::Y, ABOUT_SPIN)
            .oscillate(Oscillation {
                entity: id,
                field: Field::ROTATION_X,
                base: 0.0,
                amplitude: 0.1,
                frequency: 1.0,
                phase,
            })
            .oscillate(Oscillation {
                entity: id,
                field: Field::POSITION_Z,
                base: 2.0,
                amplitude: 0.5,
                frequency: 0.5,
                phase,
            });
    }

    Some(Stage::new(scene, ScrollEngine::new(), ticker, width, height))
}
