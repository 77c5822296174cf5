//! hueframe Core - Pixel grid and geometric analysis
//!
//! This crate provides the fundamental data structures used throughout
//! hueframe:
//!
//! - [`Pixel`] - A single packed `0xAARRGGBB` color sample
//! - [`ColorChannel`] - Primary (RGB) and complementary (CMY) channel selector
//! - [`PixelGrid`] - Row-major image container addressed as `(x, y)`
//! - [`Centroid`] / [`Marker`] - Derived measurement results
//! - [`Color`] - Plain RGB triple used for painting
//!
//! Grid operations are grouped by concern in the [`grid`] module:
//! pixel access, channel statistics, centroid/area measurement, masking
//! and box annotation.

pub mod channel;
pub mod error;
pub mod grid;
pub mod pixel;

pub use channel::{ChannelMapping, ColorChannel, Primary};
pub use error::{Error, Result};
pub use grid::graphics::{Color, Marker};
pub use grid::measurement::Centroid;
pub use grid::PixelGrid;
pub use pixel::Pixel;

/// Packing helpers for 32-bit ARGB values.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB),
/// the layout produced by most decoders for interleaved RGB data.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Maximum value of a single 8-bit channel.
    pub const CHANNEL_MAX: i32 = 255;

    /// Extract alpha component from a packed pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque packed pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a packed pixel with explicit alpha.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a packed pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Clamp an arbitrary channel value into `[0, 255]`.
    #[inline]
    pub fn clamp_channel(value: i32) -> u8 {
        value.clamp(0, CHANNEL_MAX) as u8
    }

}
