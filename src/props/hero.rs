use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};

use crate::scene::{Entity, EntityBuilder, Material, Primitive, Shape};

// ============================================================================
// Film camera
// ============================================================================

pub fn film_camera() -> Entity {
    let body = Material::standard(0x2a2a2a, 0.8, 0.2);
    let lens = Material::standard(0x0a0a0a, 0.95, 0.05);

    EntityBuilder::new("film-camera")
        .add(Primitive::new(Shape::cuboid(2.2, 1.6, 1.6), body))
        .add(
            Primitive::new(Shape::cuboid(0.1, 1.4, 1.4), Material::standard(0x1a1a1a, 0.9, 0.1))
                .at(1.1, 0.0, 0.0),
        )
        .add(
            Primitive::new(Shape::cylinder(0.6, 0.65, 0.8, 64), lens)
                .at(1.8, 0.0, 0.0)
                .rotated(0.0, 0.0, FRAC_PI_2),
        )
        .add(
            Primitive::new(Shape::cylinder(0.5, 0.6, 0.6, 64), lens)
                .at(2.4, 0.0, 0.0)
                .rotated(0.0, 0.0, FRAC_PI_2),
        )
        // focus rings
        .row(3, 1.8, 0.3, |i, x| {
            [Primitive::new(
                Shape::torus(0.52 + i as f32 * 0.05, 0.03, 16, 64),
                Material::standard(0x444444, 0.9, 0.2),
            )
            .at(x, 0.0, 0.0)
            .rotated(0.0, FRAC_PI_2, 0.0)]
        })
        .add(
            Primitive::new(
                Shape::circle(0.45, 64),
                Material::standard(0x2244aa, 0.95, 0.05).glowing(0x001144, 0.4),
            )
            .at(2.75, 0.0, 0.0),
        )
        .add(
            Primitive::new(
                Shape::circle(0.3, 64),
                Material::standard(0x4466ff, 1.0, 0.0).glowing(0x2244aa, 0.6),
            )
            .at(2.74, 0.0, 0.0),
        )
        .add(Primitive::new(Shape::cuboid(0.7, 0.7, 0.5), body).at(-0.6, 1.2, 0.0))
        .add(
            Primitive::new(Shape::cylinder(0.2, 0.25, 0.3, 32), Material::standard(0x1a1a1a, 0.8, 0.3))
                .at(-1.2, 1.2, 0.0)
                .rotated(0.0, 0.0, FRAC_PI_2),
        )
        .add(Primitive::new(Shape::cuboid(1.5, 0.2, 0.3), body).at(0.0, 1.5, 0.0))
        .row(3, -0.5, 0.4, |_, x| {
            [Primitive::new(Shape::cylinder(0.08, 0.08, 0.1, 16), Material::standard(0xff3333, 0.7, 0.3))
                .at(x, 0.5, 0.85)
                .rotated(0.0, 0.0, FRAC_PI_2)]
        })
        .add(
            Primitive::new(Shape::cuboid(0.4, 0.3, 0.6), Material::standard(0x1a1a1a, 0.6, 0.4))
                .at(0.5, 1.2, 0.0),
        )
        .at(-8.0, 3.0, 0.0)
        .build()
}

// ============================================================================
// Clapperboard
// ============================================================================

pub fn clapperboard() -> Entity {
    let info = Material::standard(0xeeeeee, 0.1, 0.9);
    let stick = Material::standard(0x8b4513, 0.2, 0.8);

    EntityBuilder::new("clapperboard")
        .add(Primitive::new(Shape::cuboid(2.8, 2.2, 0.15), Material::standard(0x1a1a1a, 0.4, 0.6)))
        .add(Primitive::new(Shape::cuboid(1.2, 0.3, 0.16), info).at(-0.7, 0.6, 0.0))
        .add(Primitive::new(Shape::cuboid(1.2, 0.3, 0.16), info).at(0.7, 0.6, 0.0))
        .add(Primitive::new(Shape::cuboid(2.4, 0.3, 0.16), info).at(0.0, 0.1, 0.0))
        .add(Primitive::new(Shape::cuboid(2.4, 0.3, 0.16), info).at(0.0, -0.4, 0.0))
        .add(
            Primitive::new(Shape::cuboid(2.8, 0.6, 0.2), Material::standard(0xffffff, 0.3, 0.7))
                .at(0.0, 1.4, 0.0),
        )
        .row(7, -1.2, 0.4, |_, x| {
            [Primitive::new(Shape::cuboid(0.35, 0.6, 0.21), Material::standard(0x000000, 0.2, 0.8))
                .at(x, 1.4, 0.0)]
        })
        .row(2, 1.1, 0.05, |_, y| {
            [Primitive::new(Shape::cylinder(0.08, 0.08, 2.8, 16), Material::standard(0x666666, 0.9, 0.2))
                .at(0.0, y, 0.1)
                .rotated(0.0, 0.0, FRAC_PI_2)]
        })
        .add(Primitive::new(Shape::cuboid(0.15, 2.8, 0.15), stick).at(-1.4, 0.2, 0.0))
        .add(Primitive::new(Shape::cuboid(0.15, 2.8, 0.15), stick).at(1.4, 0.2, 0.0))
        .at(8.0, -2.0, 0.0)
        .rotated(0.0, 0.0, FRAC_PI_6)
        .build()
}

// ============================================================================
// Film reel
// ============================================================================

pub fn film_reel() -> Entity {
    let rim = Material::standard(0x3a3a3a, 0.85, 0.15);

    EntityBuilder::new("film-reel")
        .add(Primitive::new(Shape::torus(1.6, 0.12, 32, 100), rim))
        .add(Primitive::new(Shape::torus(1.3, 0.08, 24, 100), rim))
        .add(
            Primitive::new(Shape::cylinder(0.6, 0.6, 0.35, 64), Material::standard(0x2a2a2a, 0.8, 0.2))
                .rotated(FRAC_PI_2, 0.0, 0.0),
        )
        .add(
            Primitive::new(Shape::cylinder(0.25, 0.25, 0.36, 32), Material::standard(0x0a0a0a, 0.9, 0.1))
                .rotated(FRAC_PI_2, 0.0, 0.0),
        )
        // spoke plus its reinforcement, pushed out along the spoke
        .ring(8, |_, angle| {
            [
                Primitive::new(Shape::cuboid(2.9, 0.15, 0.08), Material::standard(0x444444, 0.8, 0.25))
                    .rotated(0.0, 0.0, angle),
                Primitive::new(Shape::cuboid(1.5, 0.12, 0.1), rim)
                    .at(angle.cos() * 0.7, angle.sin() * 0.7, 0.0)
                    .rotated(0.0, 0.0, angle),
            ]
        })
        .add(Primitive::new(Shape::torus(1.0, 0.3, 16, 100), Material::standard(0x1a1a1a, 0.3, 0.7)))
        .row(3, 0.4, 0.15, |_, radius| {
            [Primitive::new(Shape::torus(radius, 0.02, 16, 64), Material::standard(0x555555, 0.9, 0.1))]
        })
        .at(-5.0, -4.0, 0.0)
        .build()
}

// ============================================================================
// Spotlight
// ============================================================================

pub fn spotlight() -> Entity {
    let flap = Material::standard(0x1a1a1a, 0.8, 0.3);

    EntityBuilder::new("spotlight")
        .add(Primitive::new(Shape::cylinder(0.35, 0.55, 0.6, 64), Material::standard(0x1a1a1a, 0.85, 0.15)))
        .add(Primitive::new(Shape::sphere(0.25, 32, 32), Material::standard(0x444444, 0.9, 0.1)).at(0.0, 0.4, 0.0))
        .add(
            Primitive::new(Shape::cone(0.9, 1.8, 64), Material::standard(0x2a2a2a, 0.8, 0.2))
                .at(0.0, 1.3, 0.0)
                .rotated(PI, 0.0, 0.0),
        )
        .add(
            Primitive::new(Shape::torus(0.9, 0.05, 16, 64), Material::standard(0x555555, 0.9, 0.1))
                .at(0.0, 0.45, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        )
        .ring(8, |_, angle| {
            [Primitive::new(Shape::cuboid(0.1, 0.4, 0.05), Material::standard(0x0a0a0a, 0.5, 0.5))
                .at(angle.cos() * 0.7, 1.0, angle.sin() * 0.7)
                .rotated(0.0, angle, 0.0)]
        })
        .add(
            Primitive::new(Shape::circle(0.5, 64), Material::matte(0xffffaa).glowing(0xffffaa, 1.0))
                .at(0.0, 0.35, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        )
        .add(
            Primitive::new(
                Shape::circle(0.8, 64),
                Material::matte(0xffff88).glowing(0xffff88, 0.7).transparent(0.6),
            )
            .at(0.0, 0.3, 0.0)
            .rotated(FRAC_PI_2, 0.0, 0.0),
        )
        // barn doors
        .add(Primitive::new(Shape::cuboid(0.6, 0.8, 0.05), flap).at(0.7, 0.5, 0.0).rotated(0.0, FRAC_PI_6, 0.0))
        .add(Primitive::new(Shape::cuboid(0.6, 0.8, 0.05), flap).at(-0.7, 0.5, 0.0).rotated(0.0, -FRAC_PI_6, 0.0))
        .at(6.0, 4.0, 0.0)
        .rotated(0.0, 0.0, FRAC_PI_4)
        .build()
}

// ============================================================================
// Microphone and chair
// ============================================================================

pub fn microphone() -> Entity {
    let body = Material::standard(0x333333, 0.8, 0.2);

    EntityBuilder::new("microphone")
        .add(Primitive::new(Shape::sphere(0.4, 32, 32), Material::standard(0x666666, 0.9, 0.1)).at(0.0, 2.0, 0.0))
        .add(Primitive::new(Shape::cylinder(0.15, 0.15, 1.5, 32), body).at(0.0, 1.0, 0.0))
        .add(Primitive::new(Shape::cylinder(0.05, 0.05, 1.0, 32), body))
        .at(0.0, -5.0, 0.0)
        .build()
}

const CHAIR_LEGS: [[f32; 3]; 4] = [
    [-0.6, -0.5, 0.5],
    [0.6, -0.5, 0.5],
    [-0.6, -0.5, -0.5],
    [0.6, -0.5, -0.5],
];

pub fn director_chair() -> Entity {
    let leg = Material::standard(0x8b4513, 0.3, 0.7);

    EntityBuilder::new("director-chair")
        .add(Primitive::new(Shape::cuboid(1.5, 0.1, 1.2), Material::standard(0x8b4513, 0.2, 0.8)))
        .add(
            Primitive::new(Shape::cuboid(1.5, 1.5, 0.1), Material::standard(0x000000, 0.1, 0.9))
                .at(0.0, 0.8, -0.6),
        )
        .extend(
            CHAIR_LEGS
                .iter()
                .map(|[x, y, z]| Primitive::new(Shape::cylinder(0.05, 0.05, 1.0, 16), leg).at(*x, *y, *z)),
        )
        .at(4.0, -6.0, 0.0)
        .rotated(0.0, FRAC_PI_6, 0.0)
        .build()
}
