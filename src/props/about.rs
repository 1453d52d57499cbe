use std::f32::consts::FRAC_PI_2;

use crate::scene::{Entity, EntityBuilder, Material, Primitive, Shape};

pub fn play_button() -> EntityBuilder {
    EntityBuilder::new("play-button")
        .add(Primitive::new(
            Shape::circle(1.0, 32),
            Material::standard(0xff3366, 0.8, 0.2).glowing(0xff3366, 0.3),
        ))
        .add(
            Primitive::new(
                Shape::polygon(&[[0.3, 0.0], [-0.3, 0.4], [-0.3, -0.4], [0.3, 0.0]]),
                Material::standard(0xffffff, 0.5, 0.3),
            )
            .at(0.0, 0.0, 0.1),
        )
}

pub fn camera_icon() -> EntityBuilder {
    EntityBuilder::new("camera-icon")
        .add(Primitive::new(Shape::cuboid(1.2, 0.8, 0.8), Material::standard(0x333333, 0.9, 0.1)))
        .add(
            Primitive::new(
                Shape::cylinder(0.3, 0.35, 0.6, 32),
                Material::standard(0x111111, 1.0, 0.05).glowing(0x0044ff, 0.3),
            )
            .at(0.7, 0.0, 0.0)
            .rotated(0.0, 0.0, FRAC_PI_2),
        )
}

pub fn film_strip() -> EntityBuilder {
    let hole = Material::standard(0x000000, 0.3, 0.7);

    EntityBuilder::new("film-strip")
        .add(Primitive::new(Shape::cuboid(2.0, 0.8, 0.1), Material::standard(0x222222, 0.6, 0.4)))
        .row(7, -0.9, 0.3, |_, x| {
            [
                Primitive::new(Shape::cuboid(0.15, 0.15, 0.12), hole).at(x, 0.35, 0.0),
                Primitive::new(Shape::cuboid(0.15, 0.15, 0.12), hole).at(x, -0.35, 0.0),
            ]
        })
}

pub fn mini_clapper() -> EntityBuilder {
    EntityBuilder::new("mini-clapper")
        .add(Primitive::new(Shape::cuboid(1.2, 1.0, 0.1), Material::standard(0x1a1a1a, 0.5, 0.5)))
        .add(
            Primitive::new(Shape::cuboid(1.2, 0.3, 0.1), Material::standard(0xffffff, 0.3, 0.7))
                .at(0.0, 0.65, 0.0),
        )
        .row(3, -0.4, 0.4, |_, x| {
            [Primitive::new(Shape::cuboid(0.3, 0.3, 0.11), Material::matte(0x000000)).at(x, 0.65, 0.0)]
        })
}

pub fn timeline_bar() -> EntityBuilder {
    EntityBuilder::new("timeline-bar")
        .add(Primitive::new(
            Shape::cuboid(0.3, 2.0, 0.3),
            Material::standard(0x00aaff, 0.8, 0.2).glowing(0x00aaff, 0.4),
        ))
        .row(7, -0.9, 0.3, |_, y| {
            [Primitive::new(Shape::cuboid(0.4, 0.1, 0.1), Material::standard(0xffffff, 0.9, 0.1)).at(0.0, y, 0.2)]
        })
}

/// Icons in registration order, each at its literal placement
pub fn about_icons() -> Vec<Entity> {
    vec![
        play_button().at(-7.0, 5.0, 2.0).build(),
        camera_icon().at(7.0, 5.0, 2.0).build(),
        film_strip().at(-7.0, -5.0, 2.0).build(),
        mini_clapper().at(7.0, -5.0, 2.0).build(),
        timeline_bar().at(-4.0, 0.0, -3.0).build(),
        timeline_bar().at(4.0, 0.0, -3.0).build(),
    ]
}
