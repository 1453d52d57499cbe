use glam::Vec3;

use super::raster::Rgba;
use crate::math::linear_to_srgb;
use crate::scene::{Light, Material};

/// Flat shading for one face.
///
/// `normal` must be unit length and face the viewer. Metals lose their diffuse
/// term and tint their highlight; roughness widens the highlight.
pub fn shade(material: &Material, normal: Vec3, point: Vec3, eye: Vec3, lights: &[Light]) -> Rgba {
    let base = Vec3::from_array(material.color);
    let diffuse_color = base * (1.0 - material.metalness);
    let specular_color = Vec3::splat(0.04).lerp(base, material.metalness);
    let shininess = (1.0 - material.roughness).powi(2) * 126.0 + 2.0;
    let view = (eye - point).normalize_or_zero();

    let mut out = Vec3::ZERO;
    for light in lights {
        let (dir, radiance) = match *light {
            Light::Ambient { color, intensity } => {
                out += base * Vec3::from_array(color) * intensity * (1.0 - 0.5 * material.metalness);
                continue;
            }
            Light::Directional {
                color,
                intensity,
                position,
            } => (position.normalize_or_zero(), Vec3::from_array(color) * intensity),
            Light::Point {
                color,
                intensity,
                range,
                position,
            } => {
                let to_light = position - point;
                let distance = to_light.length();
                let falloff = if range > 0.0 {
                    (1.0 - distance / range).clamp(0.0, 1.0).powi(2)
                } else {
                    1.0
                };
                (to_light.normalize_or_zero(), Vec3::from_array(color) * intensity * falloff)
            }
        };

        let n_dot_l = normal.dot(dir).max(0.0);
        if n_dot_l == 0.0 {
            continue;
        }
        let half = (dir + view).normalize_or_zero();
        let highlight = normal.dot(half).max(0.0).powf(shininess) * (1.0 - material.roughness * 0.9);
        out += (diffuse_color * n_dot_l + specular_color * highlight) * radiance;
    }

    if let Some(emissive) = material.emissive {
        out += Vec3::from_array(emissive.color) * emissive.intensity;
    }

    let [r, g, b] = out.to_array().map(|c| (linear_to_srgb(c) * 255.0).round() as u8);
    let a = (material.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba::new(r, g, b, a)
}
