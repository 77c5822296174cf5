//! JPEG image format support
//!
//! Decoding uses the `jpeg-decoder` crate (grayscale, RGB and CMYK
//! sources); encoding uses `jpeg-encoder` and always writes baseline RGB.
//! JPEG is lossy, so a write/read cycle only approximates the source.

use crate::{IoError, IoResult};
use hueframe_core::{PixelGrid, color};
use jpeg_decoder::PixelFormat;
use std::io::{Read, Write};

/// Default encoder quality (1-100)
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader positioned at the SOI marker.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let packed: Vec<u32> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| color::compose_rgb(g, g, g)).collect(),
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|s| color::compose_rgb(s[0], s[0], s[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|s| color::compose_rgb(s[0], s[1], s[2]))
            .collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|s| {
                let k = s[3] as u32;
                let ch = |v: u8| (v as u32 * k / 255) as u8;
                color::compose_rgb(ch(255 - s[0]), ch(255 - s[1]), ch(255 - s[2]))
            })
            .collect(),
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    Ok(PixelGrid::from_packed(width, height, &packed)?)
}

/// Write a grid as baseline RGB JPEG.
///
/// Alpha is discarded.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if a dimension exceeds 65535 or the
/// encoder fails.
pub fn write_jpeg<W: Write>(grid: &PixelGrid, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(grid.width())
        .map_err(|_| IoError::EncodeError(format!("{} too wide for JPEG", grid)))?;
    let height = u16::try_from(grid.height())
        .map_err(|_| IoError::EncodeError(format!("{} too tall for JPEG", grid)))?;

    let encoder = jpeg_encoder::Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(
            &grid.to_rgb_bytes(),
            width,
            height,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
