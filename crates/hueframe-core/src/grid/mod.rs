//! PixelGrid - The main image container
//!
//! The `PixelGrid` structure owns a row-major array of [`Pixel`] values.
//!
//! # Layout
//!
//! - Storage is a single `Vec<Pixel>` indexed `y * width + x`
//! - Rows are contiguous; every row has exactly `width` pixels
//! - Public coordinates are always `(x = column, y = row)`
//!
//! # Ownership model
//!
//! A grid exclusively owns its pixels. Mutation goes through `&mut self`,
//! and [`PixelGrid::deep_copy`] (or `Clone`) allocates fresh storage, so a
//! copy never aliases the source.

mod access;
pub mod graphics;
mod mask;
pub mod measurement;
pub mod statistics;

use crate::color;
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use std::fmt;

/// Row-major grid of pixels.
///
/// # Examples
///
/// ```
/// use hueframe_core::{Pixel, PixelGrid};
///
/// let mut grid = PixelGrid::new(4, 3);
/// grid.set(2, 1, Pixel::WHITE).unwrap();
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.height(), 3);
/// assert_eq!(*grid.get(2, 1).unwrap(), Pixel::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Width in pixels (columns)
    width: u32,
    /// Height in pixels (rows)
    height: u32,
    /// Row-major pixel storage
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create an all-black grid.
    ///
    /// Zero-sized grids are allowed; operations that average over the
    /// grid reject them with [`Error::EmptyGrid`].
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Create a grid with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![pixel; len],
        }
    }

    /// Create a grid by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a grid from packed `0xAARRGGBB` rows.
    ///
    /// `rows[row][col]` becomes the pixel at `(x = col, y = row)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if the rows have unequal lengths.
    pub fn from_packed_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut pixels = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend(values.iter().copied().map(Pixel::from_argb));
        }
        let width = u32::try_from(width)
            .map_err(|_| Error::InvalidParameter(format!("row length {width} too large")))?;
        let height = u32::try_from(rows.len())
            .map_err(|_| Error::InvalidParameter(format!("row count {} too large", rows.len())))?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from a flat row-major buffer of packed pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_packed(width: u32, height: u32, data: &[u32]) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: data.iter().copied().map(Pixel::from_argb).collect(),
        })
    }

    /// Build a grid from interleaved 8-bit RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: data
                .chunks_exact(3)
                .map(|c| Pixel::from_rgb(c[0], c[1], c[2]))
                .collect(),
        })
    }

    /// Produce an independent copy with freshly allocated pixels.
    ///
    /// Mutating the copy never affects `self` and vice versa.
    pub fn deep_copy(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.to_vec(),
        }
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the grid holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether any pixel is not fully opaque.
    pub fn has_alpha(&self) -> bool {
        self.pixels.iter().any(|p| p.alpha() != 255)
    }

    /// Export as packed rows, the inverse of [`PixelGrid::from_packed_rows`].
    pub fn to_packed_rows(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(Pixel::argb).collect())
            .collect()
    }

    /// Export as interleaved 8-bit RGB samples.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            let (r, g, b) = color::extract_rgb(p.argb());
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelGrid {}x{}", self.width, self.height)
    }
}
