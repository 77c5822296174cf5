//! BMP image format support
//!
//! Reads uncompressed 8-bit (palette), 24-bit and 32-bit Windows Bitmap
//! files and writes 24-bit (or 32-bit when the grid carries alpha).

use crate::{IoError, IoResult};
use hueframe_core::{PixelGrid, color};
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

fn le_u16(b: &[u8]) -> u16 {
    u16::from_le_bytes([b[0], b[1]])
}

fn le_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

fn le_i32(b: &[u8]) -> i32 {
    i32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

/// Row stride in bytes; BMP rows are 4-byte aligned
fn row_stride(width: u32, bits_per_pixel: u16) -> usize {
    (width as usize * bits_per_pixel as usize).div_ceil(32) * 4
}

/// Read a BMP image
///
/// Header dimensions are checked against the bytes actually present before
/// any pixel buffer is allocated.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<PixelGrid> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let truncated = || IoError::InvalidData("BMP: truncated file".to_string());
    let header_end = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    if data.len() < 2 || &data[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }
    if data.len() < header_end {
        return Err(truncated());
    }
    let file_header = &data[..BMP_FILE_HEADER_SIZE];
    let info_header = &data[BMP_FILE_HEADER_SIZE..header_end];

    let pixel_offset = le_u32(&file_header[10..14]) as usize;

    let header_size = le_u32(&info_header[0..4]);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_i32(&info_header[4..8]);
    let height = le_i32(&info_header[8..12]);

    let planes = le_u16(&info_header[12..14]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = le_u16(&info_header[14..16]);
    let compression = le_u32(&info_header[16..20]);

    // Only uncompressed data (BI_RGB, or BI_BITFIELDS with the default masks)
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }
    if !matches!(bits_per_pixel, 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    let mut consumed = BMP_FILE_HEADER_SIZE + header_size as usize;

    // 8-bit images are expanded through their palette
    let palette = if bits_per_pixel == 8 {
        let colors_used = le_u32(&info_header[32..36]) as usize;
        let num_colors = if colors_used == 0 || colors_used > 256 {
            256
        } else {
            colors_used
        };
        let raw = data
            .get(consumed..consumed + num_colors * 4)
            .ok_or_else(truncated)?;
        consumed += raw.len();
        raw.chunks_exact(4)
            .map(|c| color::compose_rgb(c[2], c[1], c[0]))
            .collect::<Vec<u32>>()
    } else {
        Vec::new()
    };

    let stride = row_stride(width, bits_per_pixel);
    let raster_len = stride.checked_mul(height as usize).ok_or_else(|| {
        IoError::InvalidData(format!("BMP: dimensions {}x{} too large", width, height))
    })?;
    let raster_start = pixel_offset.max(consumed);
    let raster = raster_start
        .checked_add(raster_len)
        .and_then(|raster_end| data.get(raster_start..raster_end))
        .ok_or_else(|| {
            IoError::InvalidData(format!(
                "BMP: {}x{} raster does not fit in {} bytes",
                width,
                height,
                data.len()
            ))
        })?;

    let mut pixels = vec![0u32; width as usize * height as usize];
    for (row, row_bytes) in raster.chunks_exact(stride.max(1)).take(height as usize).enumerate() {
        let row = row as u32;
        let y = if top_down { row } else { height - 1 - row };
        let out = &mut pixels[y as usize * width as usize..(y as usize + 1) * width as usize];

        match bits_per_pixel {
            8 => {
                for (dst, &idx) in out.iter_mut().zip(row_bytes) {
                    *dst = *palette.get(idx as usize).ok_or_else(|| {
                        IoError::InvalidData(format!("palette index {} out of range", idx))
                    })?;
                }
            }
            24 => {
                for (dst, px) in out.iter_mut().zip(row_bytes.chunks_exact(3)) {
                    *dst = color::compose_rgb(px[2], px[1], px[0]);
                }
            }
            _ => {
                for (dst, px) in out.iter_mut().zip(row_bytes.chunks_exact(4)) {
                    *dst = color::compose_rgba(px[2], px[1], px[0], px[3]);
                }
            }
        }
    }

    Ok(PixelGrid::from_packed(width, height, &pixels)?)
}

/// Write a BMP image
///
/// Grids with any non-opaque pixel are written as 32-bit BGRA, all
/// others as 24-bit BGR.
pub fn write_bmp<W: Write>(grid: &PixelGrid, mut writer: W) -> IoResult<()> {
    let width = grid.width();
    let height = grid.height();
    let bits_per_pixel: u16 = if grid.has_alpha() { 32 } else { 24 };

    let stride = row_stride(width, bits_per_pixel);
    let pixel_data_size = stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = pixel_offset + pixel_data_size;

    let file_size = u32::try_from(file_size)
        .map_err(|_| IoError::EncodeError(format!("{} too large for BMP", grid)))?;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // Reserved
    writer.write_all(&(pixel_offset as u32).to_le_bytes())?;

    // Info header
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?; // Bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&bits_per_pixel.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // Compression
    writer.write_all(&(pixel_data_size as u32).to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // Colors used
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    // Pixel data, bottom-up
    let mut row_buffer = vec![0u8; stride];
    for row in grid.rows().rev() {
        for (x, p) in row.iter().enumerate() {
            let (r, g, b, a) = color::extract_rgba(p.argb());
            if bits_per_pixel == 32 {
                row_buffer[x * 4..x * 4 + 4].copy_from_slice(&[b, g, r, a]);
            } else {
                row_buffer[x * 3..x * 3 + 3].copy_from_slice(&[b, g, r]);
            }
        }
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}
