use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, TAU};

use super::{stage_camera, Stage};
use crate::animation::{FrameTicker, Marker, ScrollEngine, Target, TriggerRegion};
use crate::math::{Axis, Field};
use crate::page::{section_id, BODY};
use crate::props;
use crate::scene::{EntityId, Light, Scene};

pub const FILM_CAMERA_SPIN: f32 = 0.001;
pub const REEL_SPIN: f32 = 0.005;
pub const SPOTLIGHT_SPIN: f32 = 0.002;

/// Camera height at the top and at the bottom of the page
pub const CAMERA_SWEEP: (f32, f32) = (-2.5, 2.5);

/// Where one prop travels while its section crosses the viewport
struct Motion {
    entity: EntityId,
    section: usize,
    position: [f32; 2],
    rotation: (Axis, f32),
}

pub fn hero_stage(width: u32, height: u32) -> Stage {
    let mut scene = Scene::new("hero", stage_camera(width, height))
        .with_light(Light::ambient(0xffffff, 0.5))
        .with_light(Light::directional(0xffffff, 0.8, Vec3::new(5.0, 5.0, 5.0)))
        .with_light(Light::point(0x00aaff, 1.0, 100.0, Vec3::new(-5.0, 5.0, 5.0)));

    let film_camera = scene.add(props::film_camera());
    let clapperboard = scene.add(props::clapperboard());
    let film_reel = scene.add(props::film_reel());
    let spotlight = scene.add(props::spotlight());
    let microphone = scene.add(props::microphone());
    let director_chair = scene.add(props::director_chair());

    let motions = [
        Motion {
            entity: film_camera,
            section: 1,
            position: [2.0, 0.0],
            rotation: (Axis::Y, TAU),
        },
        Motion {
            entity: clapperboard,
            section: 2,
            position: [-3.0, 2.0],
            rotation: (Axis::Z, -FRAC_PI_6),
        },
        Motion {
            entity: film_reel,
            section: 2,
            position: [5.0, 0.0],
            rotation: (Axis::Z, 2.0 * TAU),
        },
        Motion {
            entity: spotlight,
            section: 3,
            position: [-4.0, -1.0],
            rotation: (Axis::Z, -FRAC_PI_4),
        },
        Motion {
            entity: microphone,
            section: 3,
            position: [3.0, 0.0],
            rotation: (Axis::Y, TAU),
        },
        Motion {
            entity: director_chair,
            section: 4,
            position: [-2.0, 0.0],
            rotation: (Axis::Y, FRAC_PI_2),
        },
    ];

    let mut bindings = ScrollEngine::new();
    for m in &motions {
        let trigger = TriggerRegion::while_visible(section_id(m.section)).scrub(1.0);
        let [x, y] = m.position;
        let (axis, angle) = m.rotation;
        bindings.to(&scene, Target::Entity(m.entity, Field::POSITION_X), x, trigger.clone());
        bindings.to(&scene, Target::Entity(m.entity, Field::POSITION_Y), y, trigger.clone());
        bindings.to(&scene, Target::Entity(m.entity, Field::Rotation(axis)), angle, trigger);
    }
    bindings.between(
        Target::CameraPosition(Axis::Y),
        CAMERA_SWEEP.0,
        CAMERA_SWEEP.1,
        TriggerRegion::new(BODY, Marker::TOP_TOP, Marker::BOTTOM_BOTTOM),
    );

    let mut ticker = FrameTicker::new();
    ticker
        .spin(film_camera, Axis::X, FILM_CAMERA_SPIN)
        .spin(film_reel, Axis::Z, REEL_SPIN)
        .spin(spotlight, Axis::Y, SPOTLIGHT_SPIN);

    Stage::new(scene, bindings, ticker, width, height)
}
