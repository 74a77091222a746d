// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use faceflip::domain::transform::TransformParameters;
use faceflip::media::{self, composite};
use image_rs::{DynamicImage, Rgba, RgbaImage};
use std::hint::black_box;

fn sample_image() -> DynamicImage {
    #[allow(clippy::cast_possible_truncation)]
    let buffer = RgbaImage::from_fn(640, 480, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    DynamicImage::ImageRgba8(buffer)
}

fn pipeline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let image = sample_image();

    let neutral = TransformParameters::default();
    group.bench_function("derive_views_neutral", |b| {
        b.iter(|| black_box(media::derive_views(black_box(&image), &neutral)));
    });

    let rotated = TransformParameters::default().with_rotation(30.0);
    group.bench_function("derive_views_rotated", |b| {
        b.iter(|| black_box(media::derive_views(black_box(&image), &rotated)));
    });

    let skewed = TransformParameters::default()
        .with_scale(1.5)
        .with_skew_x(15.0)
        .with_skew_y(-10.0);
    group.bench_function("derive_views_scaled_skewed", |b| {
        b.iter(|| black_box(media::derive_views(black_box(&image), &skewed)));
    });

    group.bench_function("build_composites", |b| {
        b.iter(|| black_box(composite::build_composites(black_box(&image))));
    });

    group.finish();
}

criterion_group!(benches, pipeline_benchmark);
criterion_main!(benches);
