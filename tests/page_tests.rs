use studio_scene::animation::{Direction, RevealTween, REVEAL_DURATION};
use studio_scene::core::PageCommand;
use studio_scene::page::{content_id, section_id, PageConfig, PageLayout, ScrollState, Viewport, ABOUT};
use studio_scene::{Config, Studio};

const DT: f32 = 1.0 / 60.0;

fn layout() -> PageLayout {
    PageLayout::standard(Viewport::new(1200, 900), &PageConfig::default())
}

// ============================================================================
// Section reveal
// ============================================================================

#[test]
fn test_reveal_plays_then_reverses() {
    let layout = layout();
    // section-1 content top is 1090; 80% of a 900px viewport puts the start at 370
    let mut reveal = RevealTween::new(content_id(&section_id(1)), 50.0);

    reveal.update(&layout, 369.0, 0.5);
    assert_eq!(reveal.direction(), Direction::Reverse);
    assert_eq!(reveal.opacity(), 0.0);

    reveal.update(&layout, 370.0, 0.5);
    assert_eq!(reveal.direction(), Direction::Forward);
    assert!(reveal.opacity() > 0.5 && reveal.opacity() < 1.0);
    assert!(!reveal.is_settled());

    reveal.update(&layout, 400.0, 0.5);
    assert_eq!(reveal.opacity(), 1.0);
    assert_eq!(reveal.offset_y(), 0.0);
    assert!(reveal.is_settled());

    reveal.update(&layout, 0.0, REVEAL_DURATION);
    assert_eq!(reveal.direction(), Direction::Reverse);
    assert_eq!(reveal.opacity(), 0.0);
    assert_eq!(reveal.offset_y(), 50.0);
}

#[test]
fn test_reveal_ignores_missing_block() {
    let mut reveal = RevealTween::new("nowhere", 50.0);
    reveal.update(&layout(), 10_000.0, 1.0);
    assert_eq!(reveal.opacity(), 0.0);
}

#[test]
fn test_studio_reveals_follow_scroll() {
    let mut studio = Studio::new(Config {
        width: 120,
        height: 90,
        ..Config::default()
    });
    let max = studio.scroll().max();
    studio.scroll_mut().jump_to(max);

    for n in 0..90 {
        studio.advance(studio_scene::frame::FrameInfo::new(n, n as f32 * DT, DT));
    }
    assert!(studio.reveals().iter().all(|r| r.opacity() == 1.0));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_nav_sticky_toggles_at_threshold() {
    let mut studio = Studio::new(Config {
        width: 120,
        height: 90,
        ..Config::default()
    });
    let threshold = studio.navigation().unwrap().threshold();
    assert_eq!(threshold, 90.0 - 70.0);

    studio.apply(PageCommand::ScrollBy(threshold));
    studio.advance(studio_scene::frame::FrameInfo::new(0, 0.0, DT));
    assert!(!studio.navigation().unwrap().is_sticky());

    studio.apply(PageCommand::ScrollBy(1.0));
    studio.advance(studio_scene::frame::FrameInfo::new(1, DT, DT));
    assert!(studio.navigation().unwrap().is_sticky());
}

#[test]
fn test_anchor_smooth_scrolls_to_section() {
    let mut studio = Studio::new(Config::default());
    let target = studio.layout().element(&section_id(3)).unwrap().top;

    assert!(studio.apply(PageCommand::Anchor(2)));
    assert_eq!(studio.navigation().unwrap().active().unwrap().target, section_id(3));
    assert!(studio.scroll().is_animating());

    for n in 0..60 {
        studio.advance(studio_scene::frame::FrameInfo::new(n, n as f32 * DT, DT));
    }
    assert_eq!(studio.scroll().offset(), target);
    assert!(!studio.scroll().is_animating());
}

#[test]
fn test_last_anchor_is_about() {
    let studio = Studio::new(Config::default());
    let anchors = studio.navigation().unwrap().anchors();
    assert_eq!(anchors.len(), 5);
    assert_eq!(anchors[4].target, ABOUT);
}

#[test]
fn test_page_without_nav() {
    let config = Config {
        page: PageConfig {
            nav_height: None,
            ..PageConfig::default()
        },
        ..Config::default()
    };
    let mut studio = Studio::new(config);
    assert!(studio.navigation().is_none());
    assert!(studio.apply(PageCommand::Anchor(0)));
    assert_eq!(studio.scroll().offset(), 0.0);
}

// ============================================================================
// Scroll state
// ============================================================================

#[test]
fn test_smooth_scroll_is_clamped_and_cancellable() {
    let mut scroll = ScrollState::new(1000.0);
    scroll.smooth_to(5000.0);
    for _ in 0..10 {
        scroll.advance(0.1);
    }
    assert_eq!(scroll.offset(), 1000.0);

    scroll.smooth_to(0.0);
    scroll.advance(0.1);
    scroll.scroll_by(-10.0);
    assert!(!scroll.is_animating());
}

#[test]
fn test_layout_document_height() {
    let layout = layout();
    // hero + nav + four sections + about
    assert_eq!(layout.document_height(), 900.0 + 70.0 + 4.0 * 900.0 + 900.0);
    assert_eq!(layout.max_scroll(), layout.document_height() - 900.0);
    assert_eq!(layout.reveal_blocks().len(), 5);
}
