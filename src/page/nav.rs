use super::layout::{section_id, PageLayout, ABOUT, HERO, NAVIGATION};
use super::scroll::ScrollState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub label: String,
    pub target: String,
}

/// Navigation bar: sticks once the hero has scrolled past, and scrolls to
/// anchors when one is activated
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    threshold: f32,
    sticky: bool,
    anchors: Vec<Anchor>,
    active: Option<usize>,
}

impl Navigation {
    /// `None` when the page has no navigation bar or no hero section
    pub fn from_layout(layout: &PageLayout) -> Option<Self> {
        let Some(threshold) = sticky_threshold(layout) else {
            log::debug!("no navigation bar on this page");
            return None;
        };

        let mut anchors: Vec<Anchor> = (1..)
            .map(section_id)
            .take_while(|id| layout.element(id).is_some())
            .enumerate()
            .map(|(i, target)| Anchor {
                label: format!("Section {}", i + 1),
                target,
            })
            .collect();
        if layout.element(ABOUT).is_some() {
            anchors.push(Anchor {
                label: "About".to_string(),
                target: ABOUT.to_string(),
            });
        }

        Some(Self {
            threshold,
            sticky: false,
            anchors,
            active: None,
        })
    }

    /// Follow a relayout of the same page: the threshold moves with the hero,
    /// while the active anchor and sticky state carry over
    pub fn relayout(&mut self, layout: &PageLayout) {
        if let Some(threshold) = sticky_threshold(layout) {
            self.threshold = threshold;
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn active(&self) -> Option<&Anchor> {
        self.active.and_then(|i| self.anchors.get(i))
    }

    /// Returns true when the sticky state flipped
    pub fn update(&mut self, scroll: f32) -> bool {
        let sticky = scroll > self.threshold;
        if sticky == self.sticky {
            return false;
        }
        log::debug!("navigation sticky: {}", sticky);
        self.sticky = sticky;
        true
    }

    /// Mark anchor `index` active and smooth-scroll to its section.
    /// Does nothing when the index or its target section does not exist.
    pub fn activate(&mut self, index: usize, layout: &PageLayout, scroll: &mut ScrollState) -> bool {
        let Some(anchor) = self.anchors.get(index) else {
            return false;
        };
        let Some(target) = layout.element(&anchor.target) else {
            log::debug!("anchor target '{}' not found", anchor.target);
            return false;
        };
        log::info!("navigating to '{}'", anchor.target);
        self.active = Some(index);
        scroll.smooth_to(target.top);
        true
    }
}

fn sticky_threshold(layout: &PageLayout) -> Option<f32> {
    let (hero, nav) = (layout.element(HERO)?, layout.element(NAVIGATION)?);
    Some(hero.top + hero.height - nav.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageConfig, Viewport};

    fn layout() -> PageLayout {
        PageLayout::standard(Viewport::new(1200, 900), &PageConfig::default())
    }

    #[test]
    fn threshold_is_hero_bottom_minus_nav() {
        let nav = Navigation::from_layout(&layout());
        assert_eq!(nav.map(|n| n.threshold()), Some(900.0 - 70.0));
    }

    #[test]
    fn sticky_flips_only_past_threshold() {
        let Some(mut nav) = Navigation::from_layout(&layout()) else {
            panic!("navigation missing");
        };
        assert!(!nav.update(830.0));
        assert!(!nav.is_sticky());
        assert!(nav.update(831.0));
        assert!(nav.is_sticky());
        assert!(!nav.update(2000.0));
        assert!(nav.update(10.0));
        assert!(!nav.is_sticky());
    }

    #[test]
    fn anchors_cover_sections_and_about() {
        let Some(nav) = Navigation::from_layout(&layout()) else {
            panic!("navigation missing");
        };
        let targets: Vec<&str> = nav.anchors().iter().map(|a| a.target.as_str()).collect();
        assert_eq!(
            targets,
            ["section-1", "section-2", "section-3", "section-4", "about-section"]
        );
    }

    #[test]
    fn activate_marks_active_and_scrolls() {
        let layout = layout();
        let Some(mut nav) = Navigation::from_layout(&layout) else {
            panic!("navigation missing");
        };
        let mut scroll = ScrollState::new(layout.max_scroll());

        assert!(nav.activate(2, &layout, &mut scroll));
        assert_eq!(nav.active().map(|a| a.target.as_str()), Some("section-3"));
        assert!(scroll.is_animating());

        assert!(!nav.activate(42, &layout, &mut scroll));
        assert_eq!(nav.active().map(|a| a.target.as_str()), Some("section-3"));
    }

    #[test]
    fn relayout_moves_threshold_and_keeps_anchor() {
        let layout = layout();
        let Some(mut nav) = Navigation::from_layout(&layout) else {
            panic!("navigation missing");
        };
        let mut scroll = ScrollState::new(layout.max_scroll());
        nav.activate(1, &layout, &mut scroll);
        nav.update(1000.0);

        nav.relayout(&PageLayout::standard(Viewport::new(800, 600), &PageConfig::default()));
        assert_eq!(nav.threshold(), 600.0 - 70.0);
        assert_eq!(nav.active().map(|a| a.target.as_str()), Some("section-2"));
        assert!(nav.is_sticky());
    }

    #[test]
    fn missing_nav_is_none() {
        let config = PageConfig {
            nav_height: None,
            ..PageConfig::default()
        };
        let layout = PageLayout::standard(Viewport::new(1200, 900), &config);
        assert!(Navigation::from_layout(&layout).is_none());
    }
}
