//! hueframe - Pixel-grid color analysis for Rust
//!
//! # Overview
//!
//! hueframe decodes images into an addressable [`PixelGrid`] and provides:
//!
//! - Primary (RGB) and complementary (CMY) channel access
//! - Channel averages, hue isolation masks and channel swapping
//! - Intensity-weighted centroid and active-area measurement
//! - Box, line and frame annotation
//! - Image I/O (PNG, JPEG, BMP, PNM) with bounded-retry loading
//!
//! # Example
//!
//! ```
//! use hueframe::prelude::*;
//!
//! let mut grid = PixelGrid::new(64, 48);
//! for y in 20..28 {
//!     for x in 30..38 {
//!         grid.set(x, y, Pixel::from_rgb(240, 20, 20)).unwrap();
//!     }
//! }
//!
//! let analyzer = PixelAnalyzer::default();
//! analyzer.isolate_color(&mut grid, ColorChannel::Red, 1.0, 1.0).unwrap();
//! let marker = grid.draw_centroid_marker(Color::GREEN, 1.0);
//! assert_eq!(marker.area, 64);
//! assert_eq!((marker.centroid.x, marker.centroid.y), (33, 23));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use hueframe_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use hueframe_color as analysis;
pub use hueframe_io as io;

/// The types most programs need
pub mod prelude {
    pub use hueframe_color::{IsolationProfile, PixelAnalyzer};
    pub use hueframe_core::{Centroid, Color, ColorChannel, Marker, Pixel, PixelGrid};
    pub use hueframe_io::{FileCodec, ImageCodec, Loaded, RetryPolicy};
}
