use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A single animatable scalar of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Position(Axis),
    Rotation(Axis),
}

impl Field {
    pub const POSITION_X: Field = Field::Position(Axis::X);
    pub const POSITION_Y: Field = Field::Position(Axis::Y);
    pub const POSITION_Z: Field = Field::Position(Axis::Z);
    pub const ROTATION_X: Field = Field::Rotation(Axis::X);
    pub const ROTATION_Y: Field = Field::Rotation(Axis::Y);
    pub const ROTATION_Z: Field = Field::Rotation(Axis::Z);
}

/// Position plus Euler rotation (radians, applied X then Y then Z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub const fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rotation: Vec3::ZERO,
        }
    }

    pub const fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn get(&self, field: Field) -> f32 {
        match field {
            Field::Position(axis) => self.position[axis.index()],
            Field::Rotation(axis) => self.rotation[axis.index()],
        }
    }

    pub fn set(&mut self, field: Field, value: f32) {
        match field {
            Field::Position(axis) => self.position[axis.index()] = value,
            Field::Rotation(axis) => self.rotation[axis.index()] = value,
        }
    }

    /// Local-to-parent matrix: translate * Rx * Ry * Rz
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }
}

/// Add `delta` to one component of a vector
pub fn add_on_axis(v: &mut Vec3, axis: Axis, delta: f32) {
    v[axis.index()] += delta;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_get_set_roundtrip_every_field() {
        let fields = [
            Field::POSITION_X,
            Field::POSITION_Y,
            Field::POSITION_Z,
            Field::ROTATION_X,
            Field::ROTATION_Y,
            Field::ROTATION_Z,
        ];

        let mut t = Transform::IDENTITY;
        for (i, field) in fields.iter().enumerate() {
            t.set(*field, i as f32 + 1.0);
        }
        for (i, field) in fields.iter().enumerate() {
            assert_eq!(t.get(*field), i as f32 + 1.0);
        }
        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.rotation, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_matrix_translates() {
        let t = Transform::at(1.0, 2.0, 3.0);
        let p = t.matrix().transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_matrix_rotates_before_translating() {
        // Quarter turn around Z maps +X to +Y
        let t = Transform::at(10.0, 0.0, 0.0).rotated(0.0, 0.0, FRAC_PI_2);
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(10.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_add_on_axis() {
        let mut v = Vec3::ZERO;
        add_on_axis(&mut v, Axis::Y, 0.5);
        add_on_axis(&mut v, Axis::Y, 0.25);
        assert_eq!(v, Vec3::new(0.0, 0.75, 0.0));
    }
}
