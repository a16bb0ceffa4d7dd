//! Outliers mask demo: synthetic sensor image with defects
//!
//! Generates a 1200x900 synthetic "elevation" image with:
//! - A smooth tilted surface with mild texture
//! - A block of saturated pixels (value 9999)
//! - A scatter of dropouts (value -500)
//!
//! Then masks outliers with both statistics, with and without clamps, and
//! prints how many pixels each run keeps per window row.
//!
//! Run:
//!   RUST_LOG=debug cargo run -p rastermask-algorithms --example outliers_demo

use rastermask_algorithms::mask::{
    outliers_mask, OutlierMaskConfig, OutlierMaskOutput, StatisticMethod, KEEP,
};
use rastermask_core::{GeoTransform, Raster, CRS};
use tracing::info;
use tracing_subscriber::EnvFilter;

const ROWS: usize = 900;
const COLS: usize = 1200;

fn main() -> rastermask_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let input = build_synthetic_image()?;
    info!("Synthetic image: {}x{}", COLS, ROWS);

    let runs = [
        ("iqr", OutlierMaskConfig::default()),
        (
            "stddev",
            OutlierMaskConfig {
                statistic_method: StatisticMethod::StandardDeviation,
                factor: 2.0,
                ..Default::default()
            },
        ),
        (
            "iqr clamped",
            OutlierMaskConfig {
                low: Some(0.0),
                high: Some(2000.0),
                window_size: 300,
                ..Default::default()
            },
        ),
        (
            "iqr alpha",
            OutlierMaskConfig {
                as_alpha: true,
                ..Default::default()
            },
        ),
    ];

    for (label, config) in runs {
        let output = outliers_mask(&input, &config)?;
        print_summary(label, &config, &output);
    }

    Ok(())
}

fn build_synthetic_image() -> rastermask_core::Result<Raster<f64>> {
    let mut raster = Raster::new(ROWS, COLS);
    raster.set_transform(GeoTransform::new(350_000.0, 6_300_000.0, 30.0, -30.0));
    raster.set_crs(Some(CRS::from_epsg(32719)));

    for row in 0..ROWS {
        for col in 0..COLS {
            let surface = 400.0 + row as f64 * 0.8 + col as f64 * 0.3;
            let texture = ((row * 37 + col * 91) % 41) as f64 - 20.0;
            raster.set(row, col, surface + texture)?;
        }
    }

    // Saturated block
    for row in 100..130 {
        for col in 700..760 {
            raster.set(row, col, 9999.0)?;
        }
    }

    // Dropouts
    for i in 0..400 {
        let row = (i * 131) % ROWS;
        let col = (i * 577) % COLS;
        raster.set(row, col, -500.0)?;
    }

    Ok(raster)
}

fn print_summary(label: &str, config: &OutlierMaskConfig, output: &OutlierMaskOutput) {
    let mask = output.mask().data();
    let total = mask.len();
    let kept = output.kept_count();
    println!(
        "\n{label}: method={} factor={} window={} -> kept {kept}/{total} ({:.2}%)",
        config.statistic_method,
        config.factor,
        config.window_size,
        100.0 * kept as f64 / total as f64,
    );

    for (i, rows) in mask
        .axis_chunks_iter(ndarray::Axis(0), config.window_size)
        .enumerate()
    {
        let masked = rows.iter().filter(|&&v| v != KEEP).count();
        println!("  window row {i}: {masked} masked");
    }
    if let Some(values) = output.values() {
        println!("  alpha output carries {} band values", values.len());
    }
}
