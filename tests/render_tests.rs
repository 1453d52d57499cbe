use studio_scene::frame::FrameInfo;
use studio_scene::page::{PageConfig, PageLayout, Viewport};
use studio_scene::render::Rgba;
use studio_scene::stage::{about_stage, hero_stage};
use studio_scene::{Config, Studio};

fn covered(pixels: &[Rgba], width: u32, x: std::ops::Range<u32>, y: std::ops::Range<u32>) -> usize {
    y.flat_map(|py| x.clone().map(move |px| (px, py)))
        .filter(|&(px, py)| pixels[(py * width + px) as usize].a > 0)
        .count()
}

// ============================================================================
// Stage rendering
// ============================================================================

#[test]
fn test_hero_props_land_in_expected_quadrants() {
    let mut stage = hero_stage(160, 120);
    let stats = stage.render();
    assert!(stats.drawn > 0);

    let fb = stage.framebuffer();
    // film camera upper left, spotlight upper right, chair lower right
    assert!(covered(fb.pixels(), 160, 0..80, 0..60) > 0);
    assert!(covered(fb.pixels(), 160, 80..160, 0..60) > 0);
    assert!(covered(fb.pixels(), 160, 80..160, 60..120) > 0);
    // background stays transparent for the page underneath
    assert_eq!(fb.pixel(0, 0), Some(Rgba::TRANSPARENT));
}

#[test]
fn test_spin_changes_the_frame() {
    let mut stage = hero_stage(96, 72);
    stage.render();
    let before = stage.framebuffer().as_bytes().to_vec();

    for frame in 0..600 {
        stage.tick(frame as f32 / 60.0);
    }
    stage.render();
    assert_ne!(stage.framebuffer().as_bytes(), before.as_slice());
}

#[test]
fn test_about_stage_renders_icons() {
    let layout = PageLayout::standard(Viewport::new(160, 120), &PageConfig::default());
    let mut stage = about_stage(&layout).unwrap();
    stage.tick(0.0);
    assert!(stage.render().drawn > 0);
    assert!(stage.framebuffer().pixels().iter().any(|p| p.a > 0));
}

#[test]
fn test_resize_keeps_aspect_in_step() {
    let mut stage = hero_stage(160, 120);
    stage.resize(200, 50);
    stage.resize(200, 50);
    assert_eq!(stage.size(), (200, 50));
    assert_eq!(stage.scene().camera.aspect, 4.0);

    stage.resize(0, 0);
    assert_eq!(stage.size(), (200, 50));
    stage.render();
    assert_eq!(stage.framebuffer().pixels().len(), 200 * 50);
}

// ============================================================================
// Composited frame
// ============================================================================

#[test]
fn test_composited_frame_depends_on_scroll() {
    let mut studio = Studio::new(Config {
        width: 96,
        height: 72,
        ..Config::default()
    });
    studio.advance(FrameInfo::new(0, 0.0, 0.0));
    studio.draw();
    let top = studio.frame_bytes().to_vec();
    assert_eq!(top.len(), 96 * 72 * 4);

    let max = studio.scroll().max();
    studio.scroll_mut().jump_to(max);
    studio.advance(FrameInfo::new(1, 0.0, 0.0));
    studio.draw();
    assert_ne!(studio.frame_bytes(), top.as_slice());
}
