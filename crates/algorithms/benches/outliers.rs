//! Benchmarks for windowed outlier masking

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastermask_algorithms::mask::{outliers_mask_with_mode, OutlierMaskConfig, StatisticMethod};
use rastermask_algorithms::statistics::Histogram;
use rastermask_core::{GeoTransform, Raster};
use rastermask_parallel::ProcessingMode;

fn create_test_raster(size: usize) -> Raster<f64> {
    let mut r = Raster::new(size, size);
    r.set_transform(GeoTransform::new(0.0, size as f64, 1.0, -1.0));
    // Textured surface with sparse spikes
    for row in 0..size {
        for col in 0..size {
            let mut v = ((row * 7 + col * 13) % 256) as f64;
            if (row * 31 + col * 17) % 997 == 0 {
                v += 5000.0;
            }
            r.set(row, col, v).unwrap();
        }
    }
    r
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("outliers/mode");
    group.sample_size(20);
    let config = OutlierMaskConfig {
        window_size: 256,
        ..Default::default()
    };
    for size in [512, 1024, 2048] {
        let raster = create_test_raster(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, _| {
            b.iter(|| {
                outliers_mask_with_mode(black_box(&raster), &config, ProcessingMode::Sequential)
                    .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, _| {
            b.iter(|| {
                outliers_mask_with_mode(black_box(&raster), &config, ProcessingMode::Parallel)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("outliers/method");
    let raster = create_test_raster(1024);
    for method in [StatisticMethod::InterquartileRange, StatisticMethod::StandardDeviation] {
        let config = OutlierMaskConfig {
            window_size: 500,
            statistic_method: method,
            as_alpha: true,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(method), &method, |b, _| {
            b.iter(|| {
                outliers_mask_with_mode(black_box(&raster), &config, ProcessingMode::Parallel)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let raster = create_test_raster(512);
    c.bench_function("statistics/histogram_512", |b| {
        b.iter(|| {
            let h = Histogram::from_values(0.0, 5256.0, black_box(raster.data()).iter().copied());
            h.percentile_threshold(0.75)
        })
    });
}

criterion_group!(benches, bench_modes, bench_methods, bench_histogram);
criterion_main!(benches);
