//! Pixel access functions
//!
//! Checked and unchecked getters/setters, row views and iteration.
//! Checked accessors fail with [`Error::OutOfBounds`](crate::Error::OutOfBounds); they never clamp.

use super::PixelGrid;
use super::graphics::Color;
use crate::error::Result;
use crate::pixel::Pixel;

impl PixelGrid {
    /// Get the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the coordinate is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Result<&Pixel> {
        if !self.contains(x as i64, y as i64) {
            return Err(self.out_of_bounds(x as i64, y as i64));
        }
        Ok(&self.pixels[self.index(x, y)])
    }

    /// Get a mutable reference to the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the coordinate is outside the grid.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Result<&mut Pixel> {
        if !self.contains(x as i64, y as i64) {
            return Err(self.out_of_bounds(x as i64, y as i64));
        }
        let idx = self.index(x, y);
        Ok(&mut self.pixels[idx])
    }

    /// Replace the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the coordinate is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        *self.get_mut(x, y)? = pixel;
        Ok(())
    }

    /// Packed `0xAARRGGBB` value at `(x, y)`.
    pub fn packed(&self, x: u32, y: u32) -> Result<u32> {
        self.get(x, y).map(Pixel::argb)
    }

    /// Get the pixel at `(x, y)`, panicking instead of returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside {self}");
        self.pixels[self.index(x, y)]
    }

    /// Replace the pixel at `(x, y)`, panicking instead of returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, pixel: Pixel) {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside {self}");
        let idx = self.index(x, y);
        self.pixels[idx] = pixel;
    }

    /// Row `y` as a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if `y >= height`.
    pub fn row(&self, y: u32) -> Result<&[Pixel]> {
        if y >= self.height {
            return Err(self.out_of_bounds(0, y as i64));
        }
        let start = self.index(0, y);
        Ok(&self.pixels[start..start + self.width as usize])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        // chunks_exact panics on a zero chunk size
        let width = (self.width as usize).max(1);
        self.pixels.chunks_exact(width)
    }

    /// Iterate mutably over rows, top to bottom.
    pub fn rows_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut [Pixel]> + ExactSizeIterator {
        let width = (self.width as usize).max(1);
        self.pixels.chunks_exact_mut(width)
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// All pixels in row-major order, mutably.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Iterate as `(x, y, &pixel)` in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (u32, u32, &Pixel)> {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, p)| ((i as u32) % width, (i as u32) / width, p))
    }

    /// Paint every pixel with `color`, keeping alpha.
    pub fn fill(&mut self, color: Color) {
        for p in &mut self.pixels {
            p.set_to(color);
        }
    }
}
