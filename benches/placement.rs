use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use image::DynamicImage;
use region_sampler::sampling::{
    ImageCrateSink, MAX_ATTEMPTS, RandomPositions, RegionSampler, SamplerConfig, place_regions,
};

fn benchmark_placement_by_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_by_count");

    for count in [1usize, 10, 30] {
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &count,
            |b, &count| {
                let mut positions = RandomPositions::seeded(0);
                b.iter(|| {
                    let _ = place_regions(1000, 1000, 100, 100, black_box(count), MAX_ATTEMPTS, &mut positions);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_exhaustion(c: &mut Criterion) {
    let mut group = c.benchmark_group("attempt_cap");

    group.bench_function("impossible_request", |b| {
        let mut positions = RandomPositions::seeded(0);
        b.iter(|| {
            let _ = place_regions(200, 200, 150, 150, black_box(10), MAX_ATTEMPTS, &mut positions);
        });
    });

    group.finish();
}

fn benchmark_extraction_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_by_size");
    let sampler = RegionSampler::from_image(
        DynamicImage::new_rgb8(2000, 2000),
        ImageCrateSink,
        SamplerConfig::default(),
    );

    let sizes = vec![
        (32, 32, "32x32"),
        (128, 128, "128x128"),
        (512, 512, "512x512"),
    ];

    for (width, height, label) in sizes {
        group.bench_function(label, |b| {
            let mut positions = RandomPositions::seeded(1);
            b.iter(|| {
                let _ = sampler.generate_samples_with(black_box(width), black_box(height), 3, &mut positions);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_placement_by_count,
    benchmark_exhaustion,
    benchmark_extraction_sizes
);
criterion_main!(benches);
