//! Channel statistics
//!
//! Whole-grid sums and means over a single [`ColorChannel`]. Complementary
//! channels are read through their mapping, so the mean of `Cyan` equals
//! `255 - mean(Red)` up to truncation.

use super::PixelGrid;
use crate::channel::ColorChannel;
use crate::error::{Error, Result};

impl PixelGrid {
    /// Sum of `get_color(channel)` over every pixel.
    pub fn channel_sum(&self, channel: ColorChannel) -> i64 {
        self.pixels
            .iter()
            .map(|p| p.get_color(channel) as i64)
            .sum()
    }

    /// Arithmetic mean of `get_color(channel)` over every pixel.
    ///
    /// The mean is computed with integer division and truncates toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if width or height is 0.
    pub fn average_channel(&self, channel: ColorChannel) -> Result<i32> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::EmptyGrid);
        }
        let count = self.pixels.len() as i64;
        Ok((self.channel_sum(channel) / count) as i32)
    }
}
