use std::f64::consts::FRAC_PI_2;

use criterion::{Criterion, criterion_group, criterion_main};
use radar_rs::api::{ChartConfig, RadarStyle, build_frame, render};
use radar_rs::core::{Viewport, vertices_of};
use radar_rs::render::{DrawingSurface, RecordingSurface};
use std::hint::black_box;

fn bench_vertices_of_12(c: &mut Criterion) {
    c.bench_function("vertices_of_12", |b| {
        b.iter(|| {
            let _ = vertices_of(
                black_box(12),
                black_box(250.0),
                black_box(3.0 * FRAC_PI_2),
                black_box(300.0),
                black_box(300.0),
            );
        })
    });
}

fn bench_build_frame_12x10(c: &mut Criterion) {
    let config = ChartConfig::from_values(10, (0..12).map(|i| f64::from(i % 10)).collect())
        .with_labels((0..12).map(|i| format!("axis {i}")));
    let style = RadarStyle::default();
    let viewport = Viewport::new(600, 600);

    c.bench_function("build_frame_12x10", |b| {
        b.iter(|| {
            let _ = build_frame(black_box(&config), black_box(&style), black_box(viewport))
                .expect("frame should build");
        })
    });
}

fn bench_render_recording_12x10(c: &mut Criterion) {
    let config = ChartConfig::from_values(10, (0..12).map(|i| f64::from(i % 10)).collect());
    let style = RadarStyle::default();
    let mut surface = RecordingSurface::new(Viewport::new(600, 600));

    c.bench_function("render_recording_12x10", |b| {
        b.iter(|| {
            surface.clear_all().expect("clear");
            render(black_box(&config), black_box(&style), &mut surface)
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_vertices_of_12,
    bench_build_frame_12x10,
    bench_render_recording_12x10
);
criterion_main!(benches);
