//! Whole-grid channel statistics
//!
//! [`channel_summary`] gathers the averages of all six channels in a
//! single pass. Complementary sums are derived from the primary sums
//! (`Σ(255 - v) = 255·n - Σv`), so every average matches
//! `PixelGrid::average_channel` exactly.

use crate::ColorResult;
use hueframe_core::{ColorChannel, Error, PixelGrid, Primary};

/// Per-channel averages of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSummary {
    /// Number of pixels averaged
    pub pixel_count: u64,
    averages: [i32; 6],
}

impl ChannelSummary {
    /// Truncated mean of `channel`
    pub fn average(&self, channel: ColorChannel) -> i32 {
        self.averages[channel.index()]
    }

    /// The primary channel with the highest average (first wins on ties).
    pub fn dominant_primary(&self) -> ColorChannel {
        let mut best = ColorChannel::Red;
        for c in [ColorChannel::Green, ColorChannel::Blue] {
            if self.average(c) > self.average(best) {
                best = c;
            }
        }
        best
    }
}

/// Compute the averages of every channel.
///
/// # Errors
///
/// Returns `EmptyGrid` (wrapped) if width or height is 0.
pub fn channel_summary(grid: &PixelGrid) -> ColorResult<ChannelSummary> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(Error::EmptyGrid.into());
    }

    let mut sums = [0i64; 3];
    for p in grid.pixels() {
        sums[0] += p.red() as i64;
        sums[1] += p.green() as i64;
        sums[2] += p.blue() as i64;
    }

    let n = grid.len() as i64;
    let mut averages = [0i32; 6];
    for c in ColorChannel::ALL {
        let mapping = c.mapping();
        let primary_sum = match mapping.primary {
            Primary::Red => sums[0],
            Primary::Green => sums[1],
            Primary::Blue => sums[2],
        };
        let sum = if mapping.inverted {
            255 * n - primary_sum
        } else {
            primary_sum
        };
        averages[c.index()] = (sum / n) as i32;
    }

    Ok(ChannelSummary {
        pixel_count: n as u64,
        averages,
    })
}
