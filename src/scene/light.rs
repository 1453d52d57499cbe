use glam::Vec3;

use crate::math::hex_to_linear;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    /// Shines from `position` toward the origin
    Directional {
        color: [f32; 3],
        intensity: f32,
        position: Vec3,
    },
    /// Falls off linearly to zero at `range`
    Point {
        color: [f32; 3],
        intensity: f32,
        range: f32,
        position: Vec3,
    },
}

impl Light {
    pub fn ambient(hex: u32, intensity: f32) -> Self {
        Light::Ambient {
            color: hex_to_linear(hex),
            intensity,
        }
    }

    pub fn directional(hex: u32, intensity: f32, position: Vec3) -> Self {
        Light::Directional {
            color: hex_to_linear(hex),
            intensity,
            position,
        }
    }

    pub fn point(hex: u32, intensity: f32, range: f32, position: Vec3) -> Self {
        Light::Point {
            color: hex_to_linear(hex),
            intensity,
            range,
            position,
        }
    }
}
