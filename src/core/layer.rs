use crate::render::Rgba;

/// Borrowed pixels of one layer, placed at `origin` in the output
#[derive(Debug, Clone, Copy)]
pub struct LayerView<'a> {
    pub pixels: &'a [Rgba],
    pub width: u32,
    pub height: u32,
    /// Top-left corner in output pixels; may be negative or off screen
    pub origin: (i32, i32),
    /// Layer ordering (lower = background, higher = foreground)
    pub priority: i32,
}

impl<'a> LayerView<'a> {
    pub fn full(pixels: &'a [Rgba], width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
            origin: (0, 0),
            priority: 0,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Blends layer views back to front into one RGBA frame
#[derive(Debug, Clone)]
pub struct Compositor {
    width: u32,
    height: u32,
    output: Vec<Rgba>,
}

impl Compositor {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            output: vec![Rgba::TRANSPARENT; (width * height) as usize],
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(width, height);
    }

    /// Composite `layers` in priority order (stable for equal priorities)
    pub fn composite<'a>(&mut self, layers: impl IntoIterator<Item = LayerView<'a>>) -> &[Rgba] {
        let mut layers: Vec<LayerView<'a>> = layers.into_iter().collect();
        layers.sort_by_key(|l| l.priority);

        self.output.fill(Rgba::TRANSPARENT);
        for layer in &layers {
            self.blend(layer);
        }
        &self.output
    }

    fn blend(&mut self, layer: &LayerView) {
        let (ox, oy) = (layer.origin.0 as i64, layer.origin.1 as i64);
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (ox + layer.width as i64).min(self.width as i64);
        let y1 = (oy + layer.height as i64).min(self.height as i64);

        for y in y0..y1 {
            let src_row = ((y - oy) * layer.width as i64) as usize;
            let dst_row = (y * self.width as i64) as usize;
            for x in x0..x1 {
                let src = layer.pixels[src_row + (x - ox) as usize];
                let dst = &mut self.output[dst_row + x as usize];
                *dst = src.over(*dst);
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.output)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::new(255, 0, 0, 255);
    const BLUE: Rgba = Rgba::new(0, 0, 255, 255);

    #[test]
    fn higher_priority_draws_on_top() {
        let red = vec![RED; 4];
        let blue = vec![BLUE; 4];
        let mut compositor = Compositor::new(2, 2);

        let out = compositor.composite([
            LayerView::full(&blue, 2, 2).priority(5),
            LayerView::full(&red, 2, 2).priority(0),
        ]);
        assert!(out.iter().all(|p| *p == BLUE));
    }

    #[test]
    fn offset_layer_is_clipped() {
        let red = vec![RED; 4];
        let mut compositor = Compositor::new(3, 3);

        let out = compositor.composite([LayerView::full(&red, 2, 2).at(2, -1)]);
        assert_eq!(out[2], RED);
        assert_eq!(out[3 + 2], Rgba::TRANSPARENT);
        assert_eq!(out[0], Rgba::TRANSPARENT);
    }

    #[test]
    fn transparent_pixels_show_lower_layers() {
        let red = vec![RED; 1];
        let clear = vec![Rgba::TRANSPARENT; 1];
        let mut compositor = Compositor::new(1, 1);

        let out = compositor.composite([
            LayerView::full(&red, 1, 1),
            LayerView::full(&clear, 1, 1).priority(1),
        ]);
        assert_eq!(out[0], RED);
    }

    #[test]
    fn layer_fully_off_screen_is_ignored() {
        let red = vec![RED; 4];
        let mut compositor = Compositor::new(2, 2);
        let out = compositor.composite([LayerView::full(&red, 2, 2).at(0, 500)]);
        assert!(out.iter().all(|p| *p == Rgba::TRANSPARENT));
    }
}
