//! Pixel analyzer
//!
//! [`PixelAnalyzer`] bundles every analysis operation behind one value
//! configured with an [`IsolationProfile`]. It holds no per-grid state;
//! each call works on the grid it is handed.

use crate::analysis::{ChannelSummary, channel_summary};
use crate::isolate::{IsolationProfile, IsolationStats, isolate_color};
use crate::swap::swap_channels;
use crate::ColorResult;
use hueframe_core::{Centroid, ColorChannel, PixelGrid};

/// Analysis front end over [`PixelGrid`]
///
/// # Examples
///
/// ```
/// use hueframe_color::PixelAnalyzer;
/// use hueframe_core::{ColorChannel, Pixel, PixelGrid};
///
/// let mut grid = PixelGrid::new(4, 4);
/// grid.set(1, 2, Pixel::from_rgb(250, 10, 10)).unwrap();
///
/// let analyzer = PixelAnalyzer::default();
/// analyzer.isolate_color(&mut grid, ColorChannel::Red, 1.0, 1.0).unwrap();
/// assert_eq!(analyzer.area(&grid), 1);
/// assert_eq!(analyzer.centroid(&grid).x, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelAnalyzer {
    profile: IsolationProfile,
}

impl PixelAnalyzer {
    pub fn new(profile: IsolationProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &IsolationProfile {
        &self.profile
    }

    /// Truncated mean of `channel` over the grid.
    pub fn average_channel(&self, grid: &PixelGrid, channel: ColorChannel) -> ColorResult<i32> {
        Ok(grid.average_channel(channel)?)
    }

    /// Mask the grid to pure `target` or black using this analyzer's profile.
    pub fn isolate_color(
        &self,
        grid: &mut PixelGrid,
        target: ColorChannel,
        threshold_coeff: f64,
        required_intensity: f64,
    ) -> ColorResult<IsolationStats> {
        isolate_color(
            grid,
            &self.profile,
            target,
            threshold_coeff,
            required_intensity,
        )
    }

    pub fn swap_channels(&self, grid: &mut PixelGrid, a: ColorChannel, b: ColorChannel) {
        swap_channels(grid, a, b);
    }

    pub fn centroid(&self, grid: &PixelGrid) -> Centroid {
        grid.centroid()
    }

    pub fn area(&self, grid: &PixelGrid) -> u64 {
        grid.area()
    }

    /// Blacken the bottom `rows` rows.
    pub fn cutoff_bottom(&self, grid: &mut PixelGrid, rows: u32) -> ColorResult<()> {
        Ok(grid.cutoff_bottom(rows)?)
    }

    pub fn channel_summary(&self, grid: &PixelGrid) -> ColorResult<ChannelSummary> {
        channel_summary(grid)
    }
}
