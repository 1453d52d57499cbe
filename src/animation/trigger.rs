use std::fmt;
use std::str::FromStr;

use crate::page::PageLayout;

/// A position along an element or the viewport, as a fraction of its height
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    /// `80%` parses to `Fraction(0.8)`
    Fraction(f32),
}

impl Edge {
    pub fn fraction(self) -> f32 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = MarkerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "center" => Ok(Edge::Center),
            "bottom" => Ok(Edge::Bottom),
            _ => s
                .strip_suffix('%')
                .and_then(|pct| pct.parse::<f32>().ok())
                .map(|pct| Edge::Fraction(pct / 100.0))
                .ok_or_else(|| MarkerParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerParseError(String);

impl fmt::Display for MarkerParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid scroll marker '{}'", self.0)
    }
}

impl std::error::Error for MarkerParseError {}

/// "element-edge viewport-edge": the marker is hit when those two lines meet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub element: Edge,
    pub viewport: Edge,
}

impl Marker {
    pub const TOP_BOTTOM: Marker = Marker::new(Edge::Top, Edge::Bottom);
    pub const BOTTOM_TOP: Marker = Marker::new(Edge::Bottom, Edge::Top);
    pub const TOP_TOP: Marker = Marker::new(Edge::Top, Edge::Top);
    pub const BOTTOM_BOTTOM: Marker = Marker::new(Edge::Bottom, Edge::Bottom);

    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which the element edge lines up with the viewport edge
    pub fn offset(&self, element_top: f32, element_height: f32, viewport_height: f32) -> f32 {
        element_top + self.element.fraction() * element_height - self.viewport.fraction() * viewport_height
    }
}

impl FromStr for Marker {
    type Err = MarkerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Marker::new(element.parse()?, viewport.parse()?)),
            _ => Err(MarkerParseError(s.to_string())),
        }
    }
}

/// Scroll span over which a bound value travels from its start to its end
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerRegion {
    pub element: String,
    pub start: Marker,
    pub end: Marker,
    /// Kept for reference; progress always tracks scroll directly
    pub scrub: Option<f32>,
}

impl TriggerRegion {
    pub fn new(element: impl Into<String>, start: Marker, end: Marker) -> Self {
        Self {
            element: element.into(),
            start,
            end,
            scrub: None,
        }
    }

    /// `top bottom` to `bottom top`: the whole time any part of the element is on screen
    pub fn while_visible(element: impl Into<String>) -> Self {
        Self::new(element, Marker::TOP_BOTTOM, Marker::BOTTOM_TOP)
    }

    pub fn scrub(mut self, factor: f32) -> Self {
        self.scrub = Some(factor);
        self
    }

    /// Start and end scroll offsets, or `None` when the element is not on the page
    pub fn span(&self, layout: &PageLayout) -> Option<(f32, f32)> {
        let Some(el) = layout.element(&self.element) else {
            log::debug!("trigger element '{}' not found", self.element);
            return None;
        };
        let vh = layout.viewport().height;
        Some((
            self.start.offset(el.top, el.height, vh),
            self.end.offset(el.top, el.height, vh),
        ))
    }

    pub fn progress(&self, layout: &PageLayout, scroll: f32) -> Option<f32> {
        self.span(layout).map(|(start, end)| progress(start, end, scroll))
    }
}

/// Fraction of `[start, end]` consumed at `scroll`, clamped to [0, 1].
/// An empty or inverted span jumps from 0 to 1 at `start`.
pub fn progress(start: f32, end: f32, scroll: f32) -> f32 {
    if end <= start {
        return if scroll < start { 0.0 } else { 1.0 };
    }
    ((scroll - start) / (end - start)).clamp(0.0, 1.0)
}
