use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use studio_scene::frame::FrameInfo;
use studio_scene::page::{PageConfig, PageLayout, Viewport};
use studio_scene::props;
use studio_scene::render::tessellate;
use studio_scene::stage::hero_stage;
use studio_scene::{Config, Studio};

/// Benchmark: building every hero prop from literals
fn bench_prop_assembly(c: &mut Criterion) {
    c.bench_function("prop_assembly", |b| b.iter(|| black_box(props::hero_props())));
}

/// Benchmark: tessellating every hero primitive
fn bench_tessellation(c: &mut Criterion) {
    let props = props::hero_props();
    c.bench_function("tessellate_hero", |b| {
        b.iter(|| {
            let triangles: usize = props
                .iter()
                .flat_map(|e| e.primitives())
                .map(|p| tessellate(p.shape()).triangle_count())
                .sum();
            black_box(triangles)
        })
    });
}

/// Benchmark: evaluating all hero scroll bindings at one offset
fn bench_scroll_bindings(c: &mut Criterion) {
    let layout = PageLayout::standard(Viewport::new(1280, 720), &PageConfig::default());
    let mut stage = hero_stage(1280, 720);
    let mut scroll = 0.0;
    c.bench_function("scroll_bindings", |b| {
        b.iter(|| {
            scroll = (scroll + 37.0) % layout.max_scroll();
            stage.apply_scroll(&layout, black_box(scroll));
        })
    });
}

/// Benchmark: rasterizing the hero scene at several sizes
fn bench_hero_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("hero_render");
    for (width, height) in [(320, 180), (640, 360), (1280, 720)] {
        let mut stage = hero_stage(width, height);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{}x{}", width, height)), &(), |b, _| {
            b.iter(|| black_box(stage.render()))
        });
    }
    group.finish();
}

/// Benchmark: one full studio frame (animate, render both stages, composite)
fn bench_studio_frame(c: &mut Criterion) {
    let mut studio = Studio::new(Config {
        width: 640,
        height: 360,
        ..Config::default()
    });
    let mut n = 0u64;
    c.bench_function("studio_frame_640x360", |b| {
        b.iter(|| {
            studio.advance(FrameInfo::new(n, n as f32 / 60.0, 1.0 / 60.0));
            studio.draw();
            n += 1;
            black_box(studio.frame_bytes().len())
        })
    });
}

criterion_group!(
    benches,
    bench_prop_assembly,
    bench_tessellation,
    bench_scroll_bindings,
    bench_hero_render,
    bench_studio_frame,
);

criterion_main!(benches);
