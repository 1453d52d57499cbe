// render/ - CPU rasterizer for scenes
//
// Meshes are tessellated once per entity and cached; entities are never
// removed, so the cache only grows in step with the scene.

mod mesh;
mod raster;
mod shading;

pub use mesh::{tessellate, Mesh};
pub use raster::{Framebuffer, Rgba};
pub use shading::shade;

use glam::{Mat4, Vec3};

use crate::scene::Scene;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub clipped: usize,
}

struct Deferred {
    depth: f32,
    screen: [Vec3; 3],
    color: Rgba,
}

pub struct SoftwareRenderer {
    framebuffer: Framebuffer,
    meshes: Vec<Vec<Mesh>>,
}

impl SoftwareRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            meshes: Vec::new(),
        }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn size(&self) -> (u32, u32) {
        (self.framebuffer.width(), self.framebuffer.height())
    }

    /// Zero-sized targets are ignored
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.framebuffer.resize(width, height);
    }

    fn prepare(&mut self, scene: &Scene) {
        for entity in &scene.entities()[self.meshes.len()..] {
            let meshes = entity.primitives().iter().map(|p| tessellate(p.shape())).collect();
            self.meshes.push(meshes);
        }
    }

    /// Draw `scene` over a cleared target. Opaque faces go first; translucent
    /// ones follow back to front.
    pub fn render(&mut self, scene: &Scene, clear: Rgba) -> RenderStats {
        self.prepare(scene);
        self.framebuffer.clear(clear);

        let camera = &scene.camera;
        let view_proj = camera.view_projection();
        let eye = camera.position;
        let (w, h) = (self.framebuffer.width() as f32, self.framebuffer.height() as f32);

        let mut stats = RenderStats::default();
        let mut deferred = Vec::new();

        for (entity, meshes) in scene.entities().iter().zip(&self.meshes) {
            let world = entity.world_matrix();
            for (primitive, mesh) in entity.primitives().iter().zip(meshes) {
                let model = world * primitive.transform().matrix();
                let material = primitive.material();

                for tri in &mesh.triangles {
                    let p = tri.map(|i| model.transform_point3(mesh.positions[i as usize]));
                    let Some(screen) = project(&view_proj, p, w, h) else {
                        stats.clipped += 1;
                        continue;
                    };

                    let mut normal = (p[1] - p[0]).cross(p[2] - p[0]).normalize_or_zero();
                    if normal == Vec3::ZERO {
                        continue;
                    }
                    if normal.dot(eye - p[0]) < 0.0 {
                        normal = -normal;
                    }
                    let centroid = (p[0] + p[1] + p[2]) / 3.0;
                    let color = shade(material, normal, centroid, eye, scene.lights());

                    if material.is_transparent() {
                        let depth = (screen[0].z + screen[1].z + screen[2].z) / 3.0;
                        deferred.push(Deferred { depth, screen, color });
                    } else {
                        self.framebuffer.fill_triangle(screen, color);
                    }
                    stats.drawn += 1;
                }
            }
        }

        deferred.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        for d in deferred {
            self.framebuffer.fill_triangle(d.screen, d.color);
        }

        log::trace!(
            "{}: {} triangles drawn, {} clipped",
            scene.name(),
            stats.drawn,
            stats.clipped
        );
        stats
    }
}

/// Pixel-space positions with depth in [0, 1], or `None` when any corner
/// falls outside the near/far range
fn project(view_proj: &Mat4, p: [Vec3; 3], width: f32, height: f32) -> Option<[Vec3; 3]> {
    let mut out = [Vec3::ZERO; 3];
    for (o, v) in out.iter_mut().zip(p) {
        let clip = *view_proj * v.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        *o = Vec3::new(
            (ndc.x * 0.5 + 0.5) * width,
            (0.5 - ndc.y * 0.5) * height,
            ndc.z,
        );
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EntityBuilder, Light, Material, PerspectiveCamera, Primitive, Shape};

    fn lit_scene() -> Scene {
        let mut camera = PerspectiveCamera::default();
        camera.position = Vec3::new(0.0, 0.0, 15.0);
        Scene::new("test", camera).with_light(Light::ambient(0xffffff, 1.0))
    }

    #[test]
    fn empty_scene_is_cleared() {
        let mut renderer = SoftwareRenderer::new(16, 16);
        let stats = renderer.render(&lit_scene(), Rgba::TRANSPARENT);
        assert_eq!(stats.drawn, 0);
        assert!(renderer.framebuffer().pixels().iter().all(|p| *p == Rgba::TRANSPARENT));
    }

    #[test]
    fn box_in_front_of_camera_covers_center() {
        let mut scene = lit_scene();
        scene.add(
            EntityBuilder::new("box")
                .add(Primitive::new(Shape::cuboid(4.0, 4.0, 4.0), Material::matte(0xff0000)))
                .build(),
        );
        let mut renderer = SoftwareRenderer::new(32, 32);
        let stats = renderer.render(&scene, Rgba::TRANSPARENT);

        assert_eq!(stats.drawn, 12);
        assert_eq!(renderer.framebuffer().pixel(16, 16), Some(Rgba::new(255, 0, 0, 255)));
        assert_eq!(renderer.framebuffer().pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn geometry_behind_camera_is_clipped() {
        let mut scene = lit_scene();
        scene.add(
            EntityBuilder::new("behind")
                .add(Primitive::new(Shape::cuboid(1.0, 1.0, 1.0), Material::matte(0xffffff)))
                .at(0.0, 0.0, 30.0)
                .build(),
        );
        let mut renderer = SoftwareRenderer::new(16, 16);
        let stats = renderer.render(&scene, Rgba::TRANSPARENT);
        assert_eq!(stats.drawn, 0);
        assert_eq!(stats.clipped, 12);
    }

    #[test]
    fn set_size_ignores_zero() {
        let mut renderer = SoftwareRenderer::new(16, 9);
        renderer.set_size(0, 9);
        assert_eq!(renderer.size(), (16, 9));
        renderer.set_size(32, 18);
        assert_eq!(renderer.size(), (32, 18));
    }
}
