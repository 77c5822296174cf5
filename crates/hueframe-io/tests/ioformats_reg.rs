//! I/O formats regression test
//!
//! Format detection and write/read cycles across every supported format,
//! through files and through memory.

use hueframe_core::{Pixel, PixelGrid};
use hueframe_io::{
    ImageFormat, IoError, detect_format, detect_format_from_bytes, read_image,
    read_image_from_bytes, write_image, write_image_to_vec,
};
use hueframe_test::{RegParams, fixtures, load_test_image, regout_path, test_data_path};

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    // --- Test 1: Read the PNM fixture ---
    eprintln!("=== Read ASCII PPM fixture ===");
    let blob = load_test_image("blob.ppm").expect("load blob.ppm");
    rp.compare_values(8.0, blob.width() as f64, 0.0);
    rp.compare_values(6.0, blob.height() as f64, 0.0);
    rp.compare_values(13.0, blob.area() as f64, 0.0);
    rp.compare_values(
        1.0,
        if blob.get(7, 5).unwrap().rgb() == (20, 20, 200) {
            1.0
        } else {
            0.0
        },
        0.0,
    );
    assert_eq!(
        detect_format(test_data_path("blob.ppm")).unwrap(),
        ImageFormat::Pnm
    );

    // --- Test 2: Lossless formats through files ---
    eprintln!("=== Lossless file roundtrips ===");
    let gradient = fixtures::gradient(33, 17);
    for format in [ImageFormat::Png, ImageFormat::Bmp, ImageFormat::Pnm] {
        let path = regout_path(&format!("ioformats_rt.{}", format.extension()));
        write_image(&gradient, &path, format).expect("write");
        assert_eq!(detect_format(&path).unwrap(), format);
        let back = read_image(&path).expect("read");
        rp.compare_grids(&gradient, &back);
    }

    // --- Test 3: Lossless formats through memory ---
    eprintln!("=== Lossless memory roundtrips ===");
    let noise = fixtures::noise(19, 11, 42);
    for format in [ImageFormat::Png, ImageFormat::Bmp, ImageFormat::Pnm] {
        let bytes = write_image_to_vec(&noise, format).expect("encode");
        assert_eq!(detect_format_from_bytes(&bytes).unwrap(), format);
        let back = read_image_from_bytes(&bytes).expect("decode");
        rp.compare_grids(&noise, &back);
    }

    // --- Test 4: JPEG is approximate ---
    eprintln!("=== JPEG roundtrip ===");
    let flat = PixelGrid::filled(24, 24, Pixel::from_rgb(30, 160, 90));
    let bytes = write_image_to_vec(&flat, ImageFormat::Jpeg).expect("encode jpeg");
    let back = read_image_from_bytes(&bytes).expect("decode jpeg");
    let (r, g, b) = back.get(12, 12).unwrap().rgb();
    rp.compare_values(30.0, r as f64, 8.0);
    rp.compare_values(160.0, g as f64, 8.0);
    rp.compare_values(90.0, b as f64, 8.0);

    // --- Test 5: Golden output ---
    rp.write_grid_and_check(&blob, ImageFormat::Png)
        .expect("write golden");

    assert!(rp.cleanup(), "ioformats regression test failed");
}

#[test]
fn ioformats_errors_reg() {
    let mut rp = RegParams::new("ioformats_errors");

    let missing = read_image(test_data_path("does-not-exist.png"));
    rp.compare_values(
        1.0,
        if matches!(missing, Err(IoError::Io(_))) { 1.0 } else { 0.0 },
        0.0,
    );

    let garbage = read_image_from_bytes(b"definitely not an image");
    rp.compare_values(
        1.0,
        if matches!(garbage, Err(IoError::UnsupportedFormat(_))) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    let truncated = read_image_from_bytes(b"P6\n4 4\n255\n\x01\x02");
    rp.compare_values(1.0, if truncated.is_err() { 1.0 } else { 0.0 }, 0.0);

    let grid = PixelGrid::new(2, 2);
    let unwritable = write_image(&grid, "/nonexistent-dir/x/out.png", ImageFormat::Png);
    rp.compare_values(
        1.0,
        if matches!(unwritable, Err(IoError::NotWritable { .. })) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    assert!(rp.cleanup(), "ioformats_errors regression test failed");
}
