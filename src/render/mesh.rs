use glam::Vec3;
use std::f32::consts::{PI, TAU};

use crate::scene::Shape;

/// Indexed triangle list in a primitive's local frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    fn vertex(&mut self, p: Vec3) -> u32 {
        self.positions.push(p);
        (self.positions.len() - 1) as u32
    }

    fn tri(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.tri(a, b, c);
        self.tri(a, c, d);
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

pub fn tessellate(shape: &Shape) -> Mesh {
    match shape {
        Shape::Box { width, height, depth } => cuboid(Vec3::new(*width, *height, *depth) * 0.5),
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        } => frustum(*radius_top, *radius_bottom, *height, *radial_segments),
        Shape::Cone {
            radius,
            height,
            radial_segments,
        } => frustum(0.0, *radius, *height, *radial_segments),
        Shape::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere(*radius, *width_segments, *height_segments),
        Shape::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => torus(*radius, *tube, *radial_segments, *tubular_segments),
        Shape::Circle { radius, segments } => disc(*radius, *segments),
        Shape::Polygon { points } => {
            let mut mesh = Mesh::default();
            for p in points {
                mesh.vertex(p.extend(0.0));
            }
            for i in 1..points.len().saturating_sub(1) as u32 {
                mesh.tri(0, i, i + 1);
            }
            mesh
        }
    }
}

fn cuboid(h: Vec3) -> Mesh {
    let mut mesh = Mesh::default();
    for i in 0..8 {
        let sx = if i & 1 == 0 { -h.x } else { h.x };
        let sy = if i & 2 == 0 { -h.y } else { h.y };
        let sz = if i & 4 == 0 { -h.z } else { h.z };
        mesh.vertex(Vec3::new(sx, sy, sz));
    }
    // -x, +x, -y, +y, -z, +z
    for [a, b, c, d] in [
        [0, 4, 6, 2],
        [1, 3, 7, 5],
        [0, 1, 5, 4],
        [2, 6, 7, 3],
        [0, 2, 3, 1],
        [4, 5, 7, 6],
    ] {
        mesh.quad(a, b, c, d);
    }
    mesh
}

/// Open-ended tube along Y with capped ends; a zero radius collapses that end to a point
fn frustum(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Mesh {
    let segments = segments.max(3);
    let half = height * 0.5;
    let mut mesh = Mesh::default();

    let ring = |mesh: &mut Mesh, radius: f32, y: f32| -> Vec<u32> {
        if radius == 0.0 {
            let apex = mesh.vertex(Vec3::new(0.0, y, 0.0));
            return vec![apex; segments as usize];
        }
        (0..segments)
            .map(|i| {
                let a = TAU * i as f32 / segments as f32;
                mesh.vertex(Vec3::new(radius * a.sin(), y, radius * a.cos()))
            })
            .collect()
    };
    let top = ring(&mut mesh, radius_top, half);
    let bottom = ring(&mut mesh, radius_bottom, -half);

    for i in 0..segments as usize {
        let j = (i + 1) % segments as usize;
        if radius_top == 0.0 {
            mesh.tri(top[i], bottom[i], bottom[j]);
        } else if radius_bottom == 0.0 {
            mesh.tri(top[i], bottom[i], top[j]);
        } else {
            mesh.quad(top[i], bottom[i], bottom[j], top[j]);
        }
    }

    for (radius, rim, y) in [(radius_top, &top, half), (radius_bottom, &bottom, -half)] {
        if radius == 0.0 {
            continue;
        }
        let center = mesh.vertex(Vec3::new(0.0, y, 0.0));
        for i in 0..segments as usize {
            mesh.tri(center, rim[i], rim[(i + 1) % segments as usize]);
        }
    }
    mesh
}

fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut mesh = Mesh::default();

    for y in 0..=h {
        let v = y as f32 / h as f32;
        for x in 0..=w {
            let u = x as f32 / w as f32;
            mesh.vertex(Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            ));
        }
    }

    let stride = w + 1;
    for y in 0..h {
        for x in 0..w {
            let a = y * stride + x + 1;
            let b = y * stride + x;
            let c = (y + 1) * stride + x;
            let d = (y + 1) * stride + x + 1;
            // pole rows collapse to one triangle per segment
            if y != 0 {
                mesh.tri(a, b, d);
            }
            if y != h - 1 {
                mesh.tri(b, c, d);
            }
        }
    }
    mesh
}

/// Ring in the XY plane around Z
fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let r = radial_segments.max(3);
    let t = tubular_segments.max(3);
    let mut mesh = Mesh::default();

    for j in 0..r {
        let v = TAU * j as f32 / r as f32;
        for i in 0..t {
            let u = TAU * i as f32 / t as f32;
            let ring = radius + tube * v.cos();
            mesh.vertex(Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin()));
        }
    }

    let at = |j: u32, i: u32| (j % r) * t + (i % t);
    for j in 0..r {
        for i in 0..t {
            mesh.quad(at(j, i), at(j + 1, i), at(j + 1, i + 1), at(j, i + 1));
        }
    }
    mesh
}

/// Flat disc in the XY plane facing +Z
fn disc(radius: f32, segments: u32) -> Mesh {
    let segments = segments.max(3);
    let mut mesh = Mesh::default();
    let center = mesh.vertex(Vec3::ZERO);
    for i in 0..segments {
        let a = TAU * i as f32 / segments as f32;
        mesh.vertex(Vec3::new(radius * a.cos(), radius * a.sin(), 0.0));
    }
    for i in 0..segments {
        mesh.tri(center, 1 + i, 1 + (i + 1) % segments);
    }
    mesh
}
