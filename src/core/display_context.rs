/// Size of the window surface everything is composited into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    pub width: u32,
    pub height: u32,
}

impl DisplayContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Total size in bytes for RGBA buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Zero-sized surface (minimized window)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_rgba() {
        let ctx = DisplayContext::new(100, 100);
        assert_eq!(ctx.pixel_count(), 10_000);
        assert_eq!(ctx.buffer_size(), 40_000);
    }

    #[test]
    fn test_zero_sized_is_empty() {
        assert!(!DisplayContext::new(1600, 900).is_empty());
        assert!(DisplayContext::new(0, 900).is_empty());
        assert!(DisplayContext::new(1600, 0).is_empty());
    }
}
