use serde::{Deserialize, Serialize};

pub const BODY: &str = "body";
pub const HERO: &str = "hero-section";
pub const NAVIGATION: &str = "navigation";
pub const ABOUT: &str = "about-section";

/// Id of the n-th (1-based) scrolling section
pub fn section_id(n: usize) -> String {
    format!("section-{}", n)
}

/// Id of the content block revealed inside `parent`
pub fn content_id(parent: &str) -> String {
    format!("{}-content", parent)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Document-space box of one page element, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBox {
    pub id: String,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBox {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Shape of the page. Heights marked "vh" are multiples of the viewport height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `None` leaves the page without a navigation bar
    pub nav_height: Option<f32>,
    /// vh, one entry per scrolling section
    pub section_heights: Vec<f32>,
    /// vh; `None` leaves the page without an about section
    pub about_height: Option<f32>,
    /// Gap between a section's top and its content block
    pub content_inset: f32,
    /// Downward offset of a content block before it is revealed
    pub reveal_offset: f32,
    pub background: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_height: Some(70.0),
            section_heights: vec![1.0; 4],
            about_height: Some(1.0),
            content_inset: 120.0,
            reveal_offset: 50.0,
            background: 0x0a0a0a,
        }
    }
}

/// Vertical stack of named boxes standing in for the document
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport: Viewport,
    elements: Vec<ElementBox>,
    reveal_blocks: Vec<String>,
}

impl PageLayout {
    /// Hero (one viewport tall), navigation bar, sections, about section
    pub fn standard(viewport: Viewport, config: &PageConfig) -> Self {
        let mut layout = Self {
            viewport,
            elements: Vec::new(),
            reveal_blocks: Vec::new(),
        };

        let mut y = layout.push(HERO, 0.0, viewport.height);
        if let Some(nav) = config.nav_height {
            y = layout.push(NAVIGATION, y, nav);
        }
        for (i, vh) in config.section_heights.iter().enumerate() {
            let id = section_id(i + 1);
            let top = y;
            y = layout.push(&id, top, vh * viewport.height);
            layout.push_content(&id, top, vh * viewport.height, config.content_inset);
        }
        if let Some(vh) = config.about_height {
            let top = y;
            y = layout.push(ABOUT, top, vh * viewport.height);
            layout.push_content(ABOUT, top, vh * viewport.height, config.content_inset);
        }
        layout.push(BODY, 0.0, y);

        log::debug!(
            "page layout: {} elements, document {}px, viewport {}x{}",
            layout.elements.len(),
            y,
            viewport.width,
            viewport.height
        );
        layout
    }

    /// Appends a full-width box and returns its bottom
    fn push(&mut self, id: &str, top: f32, height: f32) -> f32 {
        self.elements.push(ElementBox {
            id: id.to_string(),
            top,
            left: 0.0,
            width: self.viewport.width,
            height,
        });
        top + height
    }

    fn push_content(&mut self, parent: &str, top: f32, height: f32, inset: f32) {
        let id = content_id(parent);
        let inset = inset.min(height * 0.5);
        self.push(&id, top + inset, (height - 2.0 * inset).max(0.0));
        self.reveal_blocks.push(id);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn element(&self, id: &str) -> Option<&ElementBox> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn elements(&self) -> &[ElementBox] {
        &self.elements
    }

    /// Content blocks that fade in on scroll, in document order
    pub fn reveal_blocks(&self) -> &[String] {
        &self.reveal_blocks
    }

    pub fn document_height(&self) -> f32 {
        self.element(BODY).map(|b| b.height).unwrap_or(self.viewport.height)
    }

    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport.height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_stacks_sections() {
        let layout = PageLayout::standard(Viewport::new(1000, 800), &PageConfig::default());

        let hero = layout.element(HERO).map(|e| e.bottom());
        let nav = layout.element(NAVIGATION).map(|e| e.top);
        assert_eq!(hero, Some(800.0));
        assert_eq!(nav, Some(800.0));
        assert_eq!(layout.element("section-1").map(|e| e.top), Some(870.0));
        assert_eq!(layout.element("section-4").map(|e| e.bottom()), Some(870.0 + 4.0 * 800.0));
        // hero + nav + 4 sections + about
        assert_eq!(layout.document_height(), 800.0 + 70.0 + 5.0 * 800.0);
        assert_eq!(layout.max_scroll(), layout.document_height() - 800.0);
        assert_eq!(layout.reveal_blocks().len(), 5);
    }

    #[test]
    fn optional_regions_can_be_dropped() {
        let config = PageConfig {
            nav_height: None,
            about_height: None,
            ..PageConfig::default()
        };
        let layout = PageLayout::standard(Viewport::new(1000, 800), &config);
        assert!(layout.element(NAVIGATION).is_none());
        assert!(layout.element(ABOUT).is_none());
        assert_eq!(layout.element("section-1").map(|e| e.top), Some(800.0));
    }

    #[test]
    fn content_block_sits_inside_section() {
        let layout = PageLayout::standard(Viewport::new(1000, 800), &PageConfig::default());
        let section = layout.element("section-2").cloned();
        let content = layout.element("section-2-content").cloned();
        let (Some(section), Some(content)) = (section, content) else {
            panic!("section-2 missing");
        };
        assert_eq!(content.top, section.top + 120.0);
        assert_eq!(content.bottom(), section.bottom() - 120.0);
    }
}
