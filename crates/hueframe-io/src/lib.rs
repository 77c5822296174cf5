//! hueframe-io - Image codec for hueframe
//!
//! Turns files and byte buffers into [`PixelGrid`]s and back.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature       |
//! |--------|------|-------|---------------|
//! | BMP    | yes  | yes   | `bmp`         |
//! | PNG    | yes  | yes   | `png-format`  |
//! | JPEG   | yes  | yes   | `jpeg`        |
//! | PNM    | yes  | yes   | `pnm`         |
//!
//! Reading detects the format from magic bytes; writing takes an explicit
//! [`ImageFormat`] or infers one from the path extension.
//!
//! The [`codec`] module layers the [`ImageCodec`] abstraction on top:
//! bounded-retry decoding and a placeholder fallback for callers that must
//! always get a grid back.

#[cfg(feature = "bmp")]
pub mod bmp;
pub mod codec;
mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use codec::{
    FileCodec, ImageCodec, Loaded, RetryPolicy, WriteOptions, decode_or_placeholder,
    decode_with_retry, placeholder_grid,
};
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use hueframe_core::PixelGrid;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let data = std::fs::read(path.as_ref())?;
    read_image_from_bytes(&data)
}

/// Read an image from an in-memory buffer
pub fn read_image_from_bytes(data: &[u8]) -> IoResult<PixelGrid> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(data, format)
}

/// Decode `data` as `format`, without sniffing
pub fn read_image_format(data: &[u8], format: ImageFormat) -> IoResult<PixelGrid> {
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::read_bmp(data),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(data),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(data),
        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}

/// Write an image to a file path in `format`
pub fn write_image<P: AsRef<Path>>(grid: &PixelGrid, path: P, format: ImageFormat) -> IoResult<()> {
    write_image_with_options(grid, path, format, &WriteOptions::default())
}

/// Write an image to a file path in `format`, with encoder options
///
/// # Errors
///
/// Returns [`IoError::NotWritable`] when the destination directory is
/// missing or read-only.
pub fn write_image_with_options<P: AsRef<Path>>(
    grid: &PixelGrid,
    path: P,
    format: ImageFormat,
    options: &WriteOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            IoError::NotWritable {
                path: path.to_path_buf(),
            }
        }
        _ => IoError::Io(e),
    })?;
    let mut writer = BufWriter::new(file);
    write_image_format(grid, &mut writer, format, options)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into a new buffer
pub fn write_image_to_vec(grid: &PixelGrid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(grid, &mut buffer, format, &WriteOptions::default())?;
    Ok(buffer)
}

/// Encode an image into any writer
pub fn write_image_format<W: Write>(
    grid: &PixelGrid,
    writer: W,
    format: ImageFormat,
    options: &WriteOptions,
) -> IoResult<()> {
    log::debug!("encoding {} as {:?}", grid, format);
    #[allow(unused_variables)]
    let quality = options.jpeg_quality;
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::write_bmp(grid, writer),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(grid, writer, quality),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(grid, writer),
        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}
