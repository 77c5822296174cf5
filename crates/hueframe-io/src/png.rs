//! PNG image format support
//!
//! Every PNG color type is normalized to 8-bit samples on read: palettes
//! are expanded, 16-bit samples are stripped and grayscale is replicated
//! across the three channels.

use crate::{IoError, IoResult};
use hueframe_core::{PixelGrid, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }

    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "unexpanded PNG palette".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut packed = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..y * bytes_per_row + width as usize * samples];
        packed.extend(row.chunks_exact(samples).map(|s| match s {
            [g] => color::compose_rgb(*g, *g, *g),
            [g, a] => color::compose_rgba(*g, *g, *g, *a),
            [r, g, b] => color::compose_rgb(*r, *g, *b),
            [r, g, b, a, ..] => color::compose_rgba(*r, *g, *b, *a),
            [] => 0,
        }));
    }

    Ok(PixelGrid::from_packed(width, height, &packed)?)
}

/// Write a PNG image
///
/// Opaque grids are written as 8-bit RGB, grids with any transparency as
/// 8-bit RGBA.
pub fn write_png<W: Write>(grid: &PixelGrid, writer: W) -> IoResult<()> {
    let width = grid.width();
    let height = grid.height();
    let with_alpha = grid.has_alpha();
    let color_type = if with_alpha {
        ColorType::Rgba
    } else {
        ColorType::Rgb
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data = if with_alpha {
        let mut out = Vec::with_capacity(grid.len() * 4);
        for p in grid.pixels() {
            let (r, g, b, a) = color::extract_rgba(p.argb());
            out.extend_from_slice(&[r, g, b, a]);
        }
        out
    } else {
        grid.to_rgb_bytes()
    };

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
