// studio.rs - The whole page: scroll state, navigation, reveals, both stages,
// and the layer stack that turns them into one frame
use anyhow::Result;

use crate::animation::RevealTween;
use crate::config::Config;
use crate::core::{Canvas, Compositor, DrawOp, FrameTask, LayerView, PageCommand};
use crate::frame::FrameInfo;
use crate::page::{Navigation, PageLayout, ScrollState, Viewport, ABOUT, NAVIGATION};
use crate::render::{RenderStats, Rgba};
use crate::stage::{about_stage, hero_stage, Stage};

const PAGE_PRIORITY: i32 = 0;
const HERO_PRIORITY: i32 = 1;
const CONTENT_PRIORITY: i32 = 2;
const ABOUT_PRIORITY: i32 = 3;

const PANEL: Rgba = Rgba::new(255, 255, 255, 18);
const ACCENT: Rgba = Rgba::new(0, 170, 255, 255);
const NAV_BAR: Rgba = Rgba::new(10, 10, 10, 230);
const NAV_LINK: Rgba = Rgba::new(200, 200, 200, 255);

pub struct Studio {
    config: Config,
    layout: PageLayout,
    scroll: ScrollState,
    navigation: Option<Navigation>,
    reveals: Vec<RevealTween>,
    hero: Stage,
    about: Option<Stage>,
    background: Canvas,
    content: Canvas,
    compositor: Compositor,
    last_stats: RenderStats,
}

impl Studio {
    pub fn new(config: Config) -> Self {
        let (width, height) = (config.width.max(1), config.height.max(1));
        let layout = PageLayout::standard(Viewport::new(width, height), &config.page);
        let reveals = layout
            .reveal_blocks()
            .iter()
            .map(|id| RevealTween::new(id.as_str(), config.page.reveal_offset))
            .collect();

        log::info!(
            "studio {}x{}, document {}px, {} reveal blocks",
            width,
            height,
            layout.document_height(),
            layout.reveal_blocks().len()
        );

        Self {
            scroll: ScrollState::new(layout.max_scroll()),
            navigation: Navigation::from_layout(&layout),
            reveals,
            hero: hero_stage(width, height),
            about: about_stage(&layout),
            background: Canvas::new(width, height),
            content: Canvas::new(width, height),
            compositor: Compositor::new(width, height),
            last_stats: RenderStats::default(),
            layout,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    pub fn reveals(&self) -> &[RevealTween] {
        &self.reveals
    }

    pub fn hero(&self) -> &Stage {
        &self.hero
    }

    pub fn about(&self) -> Option<&Stage> {
        self.about.as_ref()
    }

    pub fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.compositor.dimensions()
    }

    /// Last composited frame as tightly packed RGBA8
    pub fn frame_bytes(&self) -> &[u8] {
        self.compositor.as_bytes()
    }

    /// Returns false when the command asks to quit
    pub fn apply(&mut self, command: PageCommand) -> bool {
        match command {
            PageCommand::ScrollBy(delta) => self.scroll.scroll_by(delta),
            PageCommand::Anchor(index) => {
                if let Some(nav) = &mut self.navigation {
                    nav.activate(index, &self.layout, &mut self.scroll);
                }
            }
            PageCommand::Quit => return false,
        }
        true
    }

    /// Relayout for a new viewport; zero-sized viewports are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        log::info!("resize to {}x{}", width, height);
        self.layout = PageLayout::standard(Viewport::new(width, height), &self.config.page);
        self.scroll.set_max(self.layout.max_scroll());

        if let Some(nav) = &mut self.navigation {
            nav.relayout(&self.layout);
            nav.update(self.scroll.offset());
        }

        self.hero.resize(width, height);
        if let (Some(stage), Some(section)) = (&mut self.about, self.layout.element(ABOUT)) {
            stage.resize(section.width.round() as u32, section.height.round() as u32);
        }
        self.background.resize(width, height);
        self.content.resize(width, height);
        self.compositor.resize(width, height);
    }

    /// Move scroll, navigation, reveals and both stages forward one frame
    pub fn advance(&mut self, frame: FrameInfo) {
        let offset = self.scroll.advance(frame.delta);
        if let Some(nav) = &mut self.navigation {
            nav.update(offset);
        }
        for reveal in &mut self.reveals {
            reveal.update(&self.layout, offset, frame.delta);
        }
        self.hero.update(&self.layout, offset, frame.time);
        if let Some(about) = &mut self.about {
            about.update(&self.layout, offset, frame.time);
        }
    }

    /// Render both stages, repaint the page and composite the frame
    pub fn draw(&mut self) {
        let offset = self.scroll.offset();
        self.last_stats = self.hero.render();
        if let Some(about) = &mut self.about {
            about.render();
        }

        self.background.push(DrawOp::Clear(Rgba::from_hex(self.config.page.background)));
        self.background.execute_ops();
        self.paint_content(offset);

        let (width, height) = self.compositor.dimensions();
        let hero_fb = self.hero.framebuffer();
        let mut layers = vec![
            LayerView::full(self.background.pixels(), width, height).priority(PAGE_PRIORITY),
            LayerView::full(hero_fb.pixels(), hero_fb.width(), hero_fb.height()).priority(HERO_PRIORITY),
            LayerView::full(self.content.pixels(), width, height).priority(CONTENT_PRIORITY),
        ];
        if let (Some(about), Some(section)) = (&self.about, self.layout.element(ABOUT)) {
            let fb = about.framebuffer();
            layers.push(
                LayerView::full(fb.pixels(), fb.width(), fb.height())
                    .at(section.left as i32, (section.top - offset).round() as i32)
                    .priority(ABOUT_PRIORITY),
            );
        }
        self.compositor.composite(layers);
    }

    fn paint_content(&mut self, offset: f32) {
        self.content.push(DrawOp::Clear(Rgba::TRANSPARENT));

        for reveal in &self.reveals {
            let Some(block) = self.layout.element(reveal.element()) else {
                continue;
            };
            let x = (block.left + block.width * 0.15).round() as i32;
            let y = (block.top - offset + reveal.offset_y()).round() as i32;
            let width = (block.width * 0.7).round() as u32;
            self.content.push(DrawOp::Rect {
                x,
                y,
                width,
                height: block.height.round() as u32,
                color: fade(PANEL, reveal.opacity()),
            });
            self.content.push(DrawOp::HLine { x, y, length: width, color: fade(ACCENT, reveal.opacity()) });
        }

        if let (Some(nav), Some(bar)) = (&self.navigation, self.layout.element(NAVIGATION)) {
            let top = if nav.is_sticky() { 0.0 } else { bar.top - offset };
            let y = top.round() as i32;
            let width = bar.width.round() as u32;
            self.content.push(DrawOp::Rect { x: 0, y, width, height: bar.height.round() as u32, color: NAV_BAR });

            let slot = width / (nav.anchors().len() as u32 + 1).max(1);
            let active = nav.active().map(|a| a.target.as_str());
            for (i, anchor) in nav.anchors().iter().enumerate() {
                let color = if Some(anchor.target.as_str()) == active { ACCENT } else { NAV_LINK };
                self.content.push(DrawOp::HLine {
                    x: (slot * (i as u32 + 1)) as i32 - 20,
                    y: y + (bar.height * 0.5) as i32,
                    length: 40,
                    color,
                });
            }
        }

        self.content.execute_ops();
    }
}

fn fade(color: Rgba, opacity: f32) -> Rgba {
    Rgba {
        a: (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8,
        ..color
    }
}

impl FrameTask for Studio {
    fn frame(&mut self, frame: FrameInfo) -> Result<()> {
        self.advance(frame);
        self.draw();
        log::trace!(
            "frame {} scroll {:.1}: {} triangles drawn, {} clipped",
            frame.number,
            self.scroll.offset(),
            self.last_stats.drawn,
            self.last_stats.clipped
        );
        Ok(())
    }
}
