//! Measurement regression test
//!
//! Centroid and area on synthetic blobs, averages and bottom cutoff.

use hueframe_core::{ColorChannel, Error, Pixel, PixelGrid};
use hueframe_test::{RegParams, fixtures};

#[test]
fn measurement_reg() {
    let mut rp = RegParams::new("measurement");

    // --- Test 1: centroid of a uniform square is its (truncated) middle ---
    eprintln!("=== Square blobs ===");
    for (x0, y0, size) in [(0, 0, 1), (3, 5, 4), (10, 2, 7), (20, 20, 10)] {
        let grid = fixtures::square_blob(40, 40, x0, y0, size, Pixel::WHITE);
        let c = grid.centroid();
        let mid = |start: u32| ((2 * start + size - 1) / 2) as f64;
        rp.compare_values(mid(x0), c.x as f64, 0.0);
        rp.compare_values(mid(y0), c.y as f64, 0.0);
        rp.compare_values((size * size) as f64, grid.area() as f64, 0.0);
    }

    // --- Test 2: single pixel anywhere ---
    eprintln!("=== Single pixel ===");
    for (x, y) in [(0, 0), (15, 0), (0, 9), (15, 9), (7, 4)] {
        let mut grid = PixelGrid::new(16, 10);
        grid.set(x, y, Pixel::from_rgb(0, 1, 0)).unwrap();
        let c = grid.centroid();
        rp.compare_values(x as f64, c.x as f64, 0.0);
        rp.compare_values(y as f64, c.y as f64, 0.0);
    }

    // --- Test 3: averages over a gradient ---
    eprintln!("=== Averages ===");
    let gradient = fixtures::gradient(52, 1);
    let red = gradient.average_channel(ColorChannel::Red).unwrap();
    rp.compare_values(127.0, red as f64, 1.0);
    let cyan = gradient.average_channel(ColorChannel::Cyan).unwrap();
    rp.compare_values(255.0, (red + cyan) as f64, 1.0);
    rp.compare_values(
        1.0,
        if PixelGrid::new(0, 0).average_channel(ColorChannel::Red) == Err(Error::EmptyGrid) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- Test 4: cutoff shifts the centroid upward ---
    eprintln!("=== Cutoff ===");
    let mut grid = PixelGrid::filled(6, 10, Pixel::WHITE);
    rp.compare_values(4.0, grid.centroid().y as f64, 0.0);
    grid.cutoff_bottom(4).unwrap();
    rp.compare_values(36.0, grid.area() as f64, 0.0);
    rp.compare_values(2.0, grid.centroid().y as f64, 0.0);
    rp.compare_values(
        1.0,
        if grid.cutoff_bottom(11).is_err() { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "measurement regression test failed");
}
