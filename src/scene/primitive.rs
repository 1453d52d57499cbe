use glam::Vec2;

use crate::math::{hex_to_linear, Transform};

/// Geometric description of a drawable shape, in its own local frame
///
/// Axis conventions: cylinders and cones stand along +Y, tori lie in the XY
/// plane around Z, circles and polygons lie in the XY plane facing +Z.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Circle {
        radius: f32,
        segments: u32,
    },
    /// Closed convex outline
    Polygon {
        points: Vec<Vec2>,
    },
}

impl Shape {
    pub const fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Shape::Box { width, height, depth }
    }

    pub const fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        }
    }

    pub const fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        Shape::Cone {
            radius,
            height,
            radial_segments,
        }
    }

    pub const fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Shape::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    pub const fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Shape::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        }
    }

    pub const fn circle(radius: f32, segments: u32) -> Self {
        Shape::Circle { radius, segments }
    }

    /// Outline traced point to point; a repeated closing point is dropped
    pub fn polygon(points: &[[f32; 2]]) -> Self {
        let mut points: Vec<Vec2> = points.iter().map(|p| Vec2::from_array(*p)).collect();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Shape::Polygon { points }
    }
}

/// Self-illumination added after lighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emissive {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Metal/rough surface description. Colors are stored in linear light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: Option<Emissive>,
    pub opacity: f32,
}

impl Material {
    pub fn standard(hex: u32, metalness: f32, roughness: f32) -> Self {
        Self {
            color: hex_to_linear(hex),
            metalness,
            roughness,
            emissive: None,
            opacity: 1.0,
        }
    }

    /// Only a base color: dielectric, fully rough
    pub fn matte(hex: u32) -> Self {
        Self::standard(hex, 0.0, 1.0)
    }

    pub fn glowing(mut self, hex: u32, intensity: f32) -> Self {
        self.emissive = Some(Emissive {
            color: hex_to_linear(hex),
            intensity,
        });
        self
    }

    pub fn transparent(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// One shape with one material at a fixed offset from its entity
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    shape: Shape,
    material: Material,
    transform: Transform,
}

impl Primitive {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self {
            shape,
            material,
            transform: Transform::IDENTITY,
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = glam::Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = glam::Vec3::new(x, y, z);
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}
