use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

use super::primitive::Primitive;
use crate::math::{add_on_axis, Axis, Transform};

/// Compound object: fixed primitives under one movable root transform
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    primitives: Vec<Primitive>,
    pub transform: Transform,
    /// Rotation accumulated by per-frame deltas, kept apart from `transform`
    /// so scroll bindings writing the same axis never fight it
    spin: Vec3,
}

impl Entity {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    pub fn add_spin(&mut self, axis: Axis, delta: f32) {
        add_on_axis(&mut self.spin, axis, delta);
    }

    /// Rotation actually drawn: bound rotation plus accumulated spin
    pub fn effective_rotation(&self) -> Vec3 {
        self.transform.rotation + self.spin
    }

    pub fn world_matrix(&self) -> Mat4 {
        Transform {
            position: self.transform.position,
            rotation: self.effective_rotation(),
        }
        .matrix()
    }
}

/// Builds an entity from literal parts and repeated patterns
///
/// # Examples
///
/// ```
/// use studio_scene::scene::{EntityBuilder, Material, Primitive, Shape};
///
/// let wheel = EntityBuilder::new("wheel")
///     .add(Primitive::new(Shape::torus(1.0, 0.1, 8, 32), Material::matte(0x333333)))
///     .ring(6, |_, angle| {
///         [Primitive::new(Shape::cuboid(1.8, 0.1, 0.1), Material::matte(0x444444))
///             .rotated(0.0, 0.0, angle)]
///     })
///     .at(0.0, 1.0, 0.0)
///     .build();
///
/// assert_eq!(wheel.primitives().len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    name: String,
    primitives: Vec<Primitive>,
    transform: Transform,
}

impl EntityBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primitives: Vec::new(),
            transform: Transform::IDENTITY,
        }
    }

    pub fn add(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn extend(mut self, primitives: impl IntoIterator<Item = Primitive>) -> Self {
        self.primitives.extend(primitives);
        self
    }

    /// `count` evenly spaced angles: `f(i, TAU * i / count)`
    pub fn ring<F, I>(mut self, count: usize, f: F) -> Self
    where
        F: Fn(usize, f32) -> I,
        I: IntoIterator<Item = Primitive>,
    {
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            self.primitives.extend(f(i, angle));
        }
        self
    }

    /// `count` evenly spaced offsets: `f(i, start + i * spacing)`
    pub fn row<F, I>(mut self, count: usize, start: f32, spacing: f32, f: F) -> Self
    where
        F: Fn(usize, f32) -> I,
        I: IntoIterator<Item = Primitive>,
    {
        for i in 0..count {
            self.primitives.extend(f(i, start + i as f32 * spacing));
        }
        self
    }

    /// World offset of the finished entity
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn build(self) -> Entity {
        Entity {
            name: self.name,
            primitives: self.primitives,
            transform: self.transform,
            spin: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Material, Shape};
    use std::f32::consts::FRAC_PI_4;

    fn part() -> Primitive {
        Primitive::new(Shape::cuboid(1.0, 1.0, 1.0), Material::matte(0xffffff))
    }

    #[test]
    fn ring_emits_even_angles() {
        let e = EntityBuilder::new("ring")
            .ring(8, |_, a| [part().rotated(0.0, 0.0, a)])
            .build();

        assert_eq!(e.primitives().len(), 8);
        for (i, p) in e.primitives().iter().enumerate() {
            assert!((p.transform().rotation.z - FRAC_PI_4 * i as f32).abs() < 1e-5);
        }
    }

    #[test]
    fn row_emits_spaced_offsets() {
        let e = EntityBuilder::new("row")
            .row(7, -0.9, 0.3, |_, x| [part().at(x, 0.35, 0.0), part().at(x, -0.35, 0.0)])
            .build();

        assert_eq!(e.primitives().len(), 14);
        assert!((e.primitives()[0].transform().position.x + 0.9).abs() < 1e-5);
        assert!((e.primitives()[13].transform().position.x - 0.9).abs() < 1e-5);
    }

    #[test]
    fn spin_is_separate_from_transform() {
        let mut e = EntityBuilder::new("spinner").rotated(0.0, 0.0, 1.0).build();
        e.add_spin(Axis::Z, 0.5);

        assert_eq!(e.transform.rotation.z, 1.0);
        assert_eq!(e.spin().z, 0.5);
        assert!((e.effective_rotation().z - 1.5).abs() < 1e-6);
    }

    #[test]
    fn builder_places_entity() {
        let e = EntityBuilder::new("placed").at(-8.0, 3.0, 0.0).build();
        assert_eq!(e.transform.position, Vec3::new(-8.0, 3.0, 0.0));
        assert_eq!(e.name(), "placed");
    }
}
