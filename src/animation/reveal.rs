use crate::page::PageLayout;

use super::easing::Ease;
use super::trigger::{Edge, Marker};

pub const REVEAL_DURATION: f32 = 1.0;

/// Start marker for reveals: element top meets 80% of the viewport
pub const REVEAL_START: Marker = Marker::new(Edge::Top, Edge::Fraction(0.8));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Time-driven fade-in of one content block.
///
/// Plays forward once the scroll passes the start marker and runs back to
/// hidden once the scroll returns above it. Playback direction depends only
/// on which side of the marker the scroll sits, never on scroll history.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTween {
    element: String,
    time: f32,
    duration: f32,
    ease: Ease,
    direction: Direction,
    hidden_offset: f32,
}

impl RevealTween {
    pub fn new(element: impl Into<String>, hidden_offset: f32) -> Self {
        Self {
            element: element.into(),
            time: 0.0,
            duration: REVEAL_DURATION,
            ease: Ease::Power2Out,
            direction: Direction::Reverse,
            hidden_offset,
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance by `dt` seconds toward whichever end the scroll position asks for.
    /// A block missing from the layout stays where it is.
    pub fn update(&mut self, layout: &PageLayout, scroll: f32, dt: f32) {
        let Some(el) = layout.element(&self.element) else {
            return;
        };
        let start = REVEAL_START.offset(el.top, el.height, layout.viewport().height);
        let direction = if scroll >= start {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        if direction != self.direction {
            log::debug!("reveal '{}' now {:?}", self.element, direction);
            self.direction = direction;
        }

        self.time = match self.direction {
            Direction::Forward => (self.time + dt).min(self.duration),
            Direction::Reverse => (self.time - dt).max(0.0),
        };
    }

    /// Eased completion in [0, 1]
    pub fn progress(&self) -> f32 {
        self.ease.apply(self.time / self.duration)
    }

    pub fn opacity(&self) -> f32 {
        self.progress()
    }

    /// Downward displacement in pixels, zero once fully shown
    pub fn offset_y(&self) -> f32 {
        self.hidden_offset * (1.0 - self.progress())
    }

    pub fn is_settled(&self) -> bool {
        match self.direction {
            Direction::Forward => self.time >= self.duration,
            Direction::Reverse => self.time <= 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let tween = RevealTween::new("section-1-content", 50.0);
        assert_eq!(tween.opacity(), 0.0);
        assert_eq!(tween.offset_y(), 50.0);
        assert!(tween.is_settled());
    }
}
