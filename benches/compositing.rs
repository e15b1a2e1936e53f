// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use icon_backdrop::domain::compositing::{BackgroundColor, CanvasSize, ScaleFactor};
use icon_backdrop::{icon, media};
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;

const CAPSULE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="26" height="44">
    <rect x="1" y="1" width="24" height="42" rx="12" fill="#e0e0e0" />
</svg>"##;

fn compositing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compositing");

    let foreground = RgbaImage::from_fn(512, 512, |x, y| {
        let alpha = ((x + y) % 256) as u8;
        Rgba([200, 120, 40, alpha])
    });

    group.bench_function("compose_from_raster_512", |b| {
        b.iter(|| black_box(icon::compose_from_raster(&foreground, BackgroundColor::DARK_GREY)));
    });

    group.bench_function("rasterize_and_center_svg", |b| {
        b.iter(|| {
            let raster =
                media::rasterize_vector_data(black_box(CAPSULE_SVG.as_bytes()), ScaleFactor::default())
                    .unwrap();
            black_box(icon::compose_centered(
                &raster,
                CanvasSize::default(),
                BackgroundColor::DARK_GREY,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, compositing_benchmark);
criterion_main!(benches);
