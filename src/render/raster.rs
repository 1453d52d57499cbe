use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// 8-bit sRGB color with straight alpha, laid out for direct upload
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
    }

    /// Source-over blend of `self` onto `dst`
    pub fn over(self, dst: Rgba) -> Rgba {
        if self.a == 255 {
            return self;
        }
        if self.a == 0 {
            return dst;
        }
        let sa = self.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: u8, d: u8| {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        Rgba::new(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            (out_a * 255.0).round() as u8,
        )
    }
}

fn edge(a: Vec3, b: Vec3, px: f32, py: f32) -> f32 {
    (px - a.x) * (b.y - a.y) - (py - a.y) * (b.x - a.x)
}

/// Top-left fill rule: a pixel center exactly on an edge belongs to only one of
/// the two triangles sharing it
fn covers(weight: f32, a: Vec3, b: Vec3) -> bool {
    if weight != 0.0 {
        return weight > 0.0;
    }
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    dy > 0.0 || (dy == 0.0 && dx < 0.0)
}

/// Color plus depth target for one scene
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    color: Vec<Rgba>,
    depth: Vec<f32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width * height) as usize;
        Self {
            width,
            height,
            color: vec![Rgba::TRANSPARENT; len],
            depth: vec![f32::INFINITY; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocates only when the size actually changes
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self, color: Rgba) {
        self.color.fill(color);
        self.depth.fill(f32::INFINITY);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.color[(y * self.width + x) as usize])
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.color
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color)
    }

    /// Fill a screen-space triangle (x, y in pixels, z in [0, 1], smaller is
    /// nearer). Opaque color writes depth; translucent color blends over what
    /// is there and leaves depth alone.
    pub fn fill_triangle(&mut self, v: [Vec3; 3], color: Rgba) {
        let mut area = edge(v[0], v[1], v[2].x, v[2].y);
        if area.abs() < f32::EPSILON {
            return;
        }
        // one winding for every triangle, so a shared edge runs opposite ways in its two owners
        let v = if area < 0.0 {
            area = -area;
            [v[0], v[2], v[1]]
        } else {
            v
        };
        let (w, h) = (self.width as f32, self.height as f32);
        let min_x = v[0].x.min(v[1].x).min(v[2].x).floor().max(0.0);
        let max_x = v[0].x.max(v[1].x).max(v[2].x).ceil().min(w - 1.0);
        let min_y = v[0].y.min(v[1].y).min(v[2].y).floor().max(0.0);
        let max_y = v[0].y.max(v[1].y).max(v[2].y).ceil().min(h - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        let opaque = color.a == 255;
        for y in min_y as u32..=max_y as u32 {
            let py = y as f32 + 0.5;
            for x in min_x as u32..=max_x as u32 {
                let px = x as f32 + 0.5;
                let w0 = edge(v[1], v[2], px, py) / area;
                let w1 = edge(v[2], v[0], px, py) / area;
                let w2 = edge(v[0], v[1], px, py) / area;
                if !(covers(w0, v[1], v[2]) && covers(w1, v[2], v[0]) && covers(w2, v[0], v[1])) {
                    continue;
                }

                let z = w0 * v[0].z + w1 * v[1].z + w2 * v[2].z;
                let i = (y * self.width + x) as usize;
                if z >= self.depth[i] {
                    continue;
                }
                if opaque {
                    self.depth[i] = z;
                    self.color[i] = color;
                } else {
                    self.color[i] = color.over(self.color[i]);
                }
            }
        }
    }
}
