//! Compares the frame renderers on the default view at a reduced size.

use std::num::NonZeroU32;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fractal_zoom::core::actions::render_frame::render_frame::render_frame_serial;
use fractal_zoom::core::fractals::hsb_colour_map::HsbColourMap;
use fractal_zoom::{FractalConfig, ParallelFrameRenderer, RenderStrategy};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

fn bench_renderers(c: &mut Criterion) {
    let config = FractalConfig {
        pixel_width: WIDTH,
        pixel_height: HEIGHT,
        ..FractalConfig::default()
    };
    let viewport = config.viewport().expect("bench config is valid");
    let kernel = config.kernel().expect("bench config is valid");
    let colour_map = HsbColourMap::new();

    let mut group = c.benchmark_group("render_frame");
    group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));
    group.sample_size(20);

    group.bench_function("serial", |b| {
        b.iter(|| render_frame_serial(black_box(&viewport), &kernel, &colour_map))
    });

    let available = ParallelFrameRenderer::new().workers();
    let mut worker_counts = vec![NonZeroU32::MIN, available];
    worker_counts.dedup();

    for strategy in [RenderStrategy::ScopedThreads, RenderStrategy::Rayon] {
        for &workers in &worker_counts {
            let renderer = ParallelFrameRenderer::with_workers(workers).with_strategy(strategy);

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), workers),
                &renderer,
                |b, renderer| b.iter(|| renderer.render(black_box(&viewport), &kernel, &colour_map)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_renderers);
criterion_main!(benches);
