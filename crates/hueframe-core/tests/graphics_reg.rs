//! Graphics regression test
//!
//! Box painting with and without shrinking, centroid markers, lines and
//! frames.

use hueframe_core::{Color, Pixel, PixelGrid};
use hueframe_io::ImageFormat;
use hueframe_test::{RegParams, fixtures};

fn count(grid: &PixelGrid, color: Color) -> f64 {
    grid.pixels().iter().filter(|p| p.to_color() == color).count() as f64
}

#[test]
fn graphics_reg() {
    let mut rp = RegParams::new("graphics");

    // --- Test 1: boxes fully inside paint exactly (2r)^2 ---
    eprintln!("=== Inside boxes ===");
    for r in 1..=10u32 {
        let mut grid = PixelGrid::new(30, 30);
        let painted = grid.draw_box(15, 15, Color::MAGENTA, r);
        rp.compare_values(r as f64, painted as f64, 0.0);
        rp.compare_values((4 * r * r) as f64, count(&grid, Color::MAGENTA), 0.0);
    }

    // --- Test 2: boxes near an edge shrink to fit ---
    eprintln!("=== Shrinking boxes ===");
    for (x, y, r, expected) in [
        (2, 15, 8, 2),
        (15, 28, 8, 2),
        (29, 29, 5, 1),
        (0, 10, 3, 0),
        (40, 40, 3, 0),
    ] {
        let mut grid = PixelGrid::new(30, 30);
        let painted = grid.draw_box(x, y, Color::CYAN, r);
        rp.compare_values(expected as f64, painted as f64, 0.0);
        rp.compare_values(
            (4 * expected * expected) as f64,
            count(&grid, Color::CYAN),
            0.0,
        );
    }

    // --- Test 3: centroid marker on a blob ---
    eprintln!("=== Centroid marker ===");
    let mut grid = fixtures::square_blob(64, 48, 20, 10, 8, Pixel::from_rgb(200, 200, 200));
    let marker = grid.draw_centroid_marker(Color::RED, 1.5);
    rp.compare_values(23.0, marker.centroid.x as f64, 0.0);
    rp.compare_values(13.0, marker.centroid.y as f64, 0.0);
    rp.compare_values(64.0, marker.area as f64, 0.0);
    // 1.5 * 8 / 2 = 6
    rp.compare_values(6.0, marker.radius as f64, 0.0);
    rp.compare_values(144.0, count(&grid, Color::RED), 0.0);
    rp.write_grid_and_check(&grid, ImageFormat::Png)
        .expect("write marker");

    // --- Test 4: frame and lines ---
    eprintln!("=== Frame and lines ===");
    let mut grid = PixelGrid::new(20, 10);
    grid.draw_frame(Color::WHITE, 2);
    rp.compare_values((200 - 16 * 6) as f64, grid.area() as f64, 0.0);
    let mut grid = PixelGrid::new(20, 10);
    grid.draw_line(0, 5, 19, 5, Color::YELLOW);
    grid.draw_line(-5, -5, -1, -1, Color::YELLOW);
    rp.compare_values(20.0, count(&grid, Color::YELLOW), 0.0);

    assert!(rp.cleanup(), "graphics regression test failed");
}
