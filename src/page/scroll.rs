use crate::animation::Ease;

pub const SMOOTH_SCROLL_DURATION: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SmoothScroll {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

/// Vertical scroll offset of the page, clamped to `[0, max]`
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    offset: f32,
    max: f32,
    smooth: Option<SmoothScroll>,
}

impl ScrollState {
    pub fn new(max: f32) -> Self {
        Self {
            offset: 0.0,
            max: max.max(0.0),
            smooth: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_animating(&self) -> bool {
        self.smooth.is_some()
    }

    /// New scrollable range after a relayout; keeps the offset in range
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.offset = self.offset.min(self.max);
        if let Some(s) = &mut self.smooth {
            s.to = s.to.min(self.max);
        }
    }

    /// User scroll: cancels any smooth scroll in flight
    pub fn scroll_by(&mut self, delta: f32) {
        self.smooth = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    pub fn jump_to(&mut self, target: f32) {
        self.smooth = None;
        self.offset = target.clamp(0.0, self.max);
    }

    pub fn smooth_to(&mut self, target: f32) {
        let to = target.clamp(0.0, self.max);
        log::debug!("smooth scroll {} -> {}", self.offset, to);
        self.smooth = Some(SmoothScroll {
            from: self.offset,
            to,
            elapsed: 0.0,
            duration: SMOOTH_SCROLL_DURATION,
        });
    }

    /// Step a smooth scroll by `dt` seconds and return the new offset
    pub fn advance(&mut self, dt: f32) -> f32 {
        if let Some(mut s) = self.smooth.take() {
            s.elapsed += dt;
            let t = s.elapsed / s.duration;
            self.offset = s.from + (s.to - s.from) * Ease::Power2InOut.apply(t);
            if t < 1.0 {
                self.smooth = Some(s);
            } else {
                self.offset = s.to;
            }
        }
        self.offset
    }
}
