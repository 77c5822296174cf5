//! Hue isolation regression test
//!
//! Output purity for every target channel and profile, the red threshold
//! for a known average, and isolation of the blob fixture.

use hueframe_color::{IsolationProfile, PixelAnalyzer, isolate_color};
use hueframe_core::{ColorChannel, Pixel, PixelGrid};
use hueframe_io::ImageFormat;
use hueframe_test::{RegParams, fixtures, load_test_image};

#[test]
fn isolate_reg() {
    let mut rp = RegParams::new("isolate");

    // --- Test 1: red threshold, average red 50 ---
    eprintln!("=== Red threshold example ===");
    // 10 pixels: red values sum to 500
    let mut grid = PixelGrid::from_fn(10, 1, |x, _| match x {
        0 => Pixel::from_rgb(226, 0, 0),
        1 => Pixel::from_rgb(225, 0, 0),
        2 => Pixel::from_rgb(49, 0, 0),
        _ => Pixel::BLACK,
    });
    let stats = isolate_color(
        &mut grid,
        &IsolationProfile::strict(),
        ColorChannel::Red,
        1.0,
        1.0,
    )
    .expect("isolate");
    rp.compare_values(50.0, stats.average as f64, 0.0);
    rp.compare_values(225.0, stats.threshold as f64, 0.0);
    rp.compare_values(1.0, stats.kept as f64, 0.0);
    // 225 is not above the threshold
    rp.compare_values(
        1.0,
        if grid.get(1, 0).unwrap().is_black() { 1.0 } else { 0.0 },
        0.0,
    );

    // --- Test 2: purity for every channel and profile ---
    eprintln!("=== Output purity ===");
    let source = fixtures::noise(32, 24, 7);
    for profile in [IsolationProfile::strict(), IsolationProfile::relaxed()] {
        for target in ColorChannel::ALL {
            for (coeff, req) in [(0.0, 1.0), (0.5, 0.8), (1.0, 1.0), (-1.0, 2.0)] {
                let mut grid = source.deep_copy();
                isolate_color(&mut grid, &profile, target, coeff, req).expect("isolate");
                let pure = grid
                    .pixels()
                    .iter()
                    .all(|p| p.is_black() || p.is_pure(target));
                rp.compare_values(1.0, if pure { 1.0 } else { 0.0 }, 0.0);
            }
        }
    }

    // --- Test 3: the blob fixture keeps exactly the red block ---
    eprintln!("=== Blob fixture ===");
    let mut blob = load_test_image("blob.ppm").expect("load blob.ppm");
    let analyzer = PixelAnalyzer::default();
    // Average red 55: coefficient 0.5 gives threshold 123
    analyzer
        .isolate_color(&mut blob, ColorChannel::Red, 0.5, 1.0)
        .expect("isolate blob");
    rp.compare_values(12.0, analyzer.area(&blob) as f64, 0.0);
    let c = analyzer.centroid(&blob);
    rp.compare_values(3.0, c.x as f64, 0.0);
    rp.compare_values(2.0, c.y as f64, 0.0);
    rp.write_grid_and_check(&blob, ImageFormat::Png)
        .expect("write isolated blob");

    assert!(rp.cleanup(), "isolate regression test failed");
}
