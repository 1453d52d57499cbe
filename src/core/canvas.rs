use crate::render::Rgba;

/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Rgba),

    /// Blend a filled rectangle; may hang off any edge
    Rect { x: i32, y: i32, width: u32, height: u32, color: Rgba },

    /// Blend a one-pixel horizontal line
    HLine { x: i32, y: i32, length: u32, color: Rgba },
}

/// Pixel buffer with queued draw operations, used for the page itself
/// (background, content blocks, navigation bar)
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<Rgba>,
    operations: Vec<DrawOp>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Rgba::TRANSPARENT; (width * height) as usize],
            operations: Vec::new(),
            width,
            height,
        }
    }

    /// Queue a draw operation
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    pub fn push(&mut self, op: DrawOp) {
        self.operations.push(op);
    }

    /// Run and drain every queued operation
    pub fn execute_ops(&mut self) {
        let ops = std::mem::take(&mut self.operations);
        for op in &ops {
            self.execute_op(op);
        }
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.pixels.fill(color),
            DrawOp::Rect { x, y, width, height, color } => self.fill_rect(x, y, width, height, color),
            DrawOp::HLine { x, y, length, color } => self.fill_rect(x, y, length, 1, color),
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);

        for py in y0..y1 {
            let row = (py * self.width as i64) as usize;
            for px in x0..x1 {
                let i = row + px as usize;
                self.pixels[i] = color.over(self.pixels[i]);
            }
        }
    }

    /// Reallocates and clears when the size changes
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(width, height);
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
