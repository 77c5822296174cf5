//! Hue isolation
//!
//! Reduces a grid to a binary mask: every pixel becomes either the pure
//! hue of a target channel or pure black. A pixel survives when its target
//! channel exceeds a threshold derived from the grid's average for that
//! channel, and both secondary channels stay below a fraction of it.
//!
//! ```text
//! threshold = trunc(threshold_coeff * 1.5 * T[target] * average(target))
//! intensity = required_intensity * 0.7 * I[target]
//!
//! keep  <=>  v > threshold
//!            && s1 < v * intensity
//!            && s2 < v * intensity       (v = target read, s = secondaries)
//! ```
//!
//! `T` and `I` come from an [`IsolationProfile`].

use crate::{ColorError, ColorResult};
use hueframe_core::{Color, ColorChannel, PixelGrid};

/// Base factor applied to the channel average
pub const BASE_THRESHOLD: f64 = 1.5;

/// Base factor applied to the required intensity
pub const BASE_INTENSITY: f64 = 0.7;

/// Isolation constants for one target channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRule {
    /// The two channels that must stay dim relative to the target
    pub secondary: (ColorChannel, ColorChannel),
    /// `T`: scales the average-based threshold
    pub threshold_multiplier: f64,
    /// `I`: scales the allowed secondary/target ratio
    pub intensity_multiplier: f64,
}

impl ChannelRule {
    pub const fn new(
        secondary: (ColorChannel, ColorChannel),
        threshold_multiplier: f64,
        intensity_multiplier: f64,
    ) -> Self {
        Self {
            secondary,
            threshold_multiplier,
            intensity_multiplier,
        }
    }
}

/// Per-channel isolation table
///
/// [`IsolationProfile::strict`] is the default. [`IsolationProfile::relaxed`]
/// keeps the same secondaries but lowers every threshold multiplier to 1
/// and tolerates brighter secondaries for red and yellow targets.
#[derive(Debug, Clone, PartialEq)]
pub struct IsolationProfile {
    rules: [ChannelRule; 6],
}

/// Secondary pairs shared by every built-in profile, in `ColorChannel::ALL` order
const SECONDARIES: [(ColorChannel, ColorChannel); 6] = [
    (ColorChannel::Blue, ColorChannel::Green),
    (ColorChannel::Blue, ColorChannel::Red),
    (ColorChannel::Red, ColorChannel::Green),
    (ColorChannel::Magenta, ColorChannel::Yellow),
    (ColorChannel::Yellow, ColorChannel::Cyan),
    (ColorChannel::Cyan, ColorChannel::Magenta),
];

impl IsolationProfile {
    fn from_table(table: [(f64, f64); 6]) -> Self {
        let mut rules = [ChannelRule::new(SECONDARIES[0], 1.0, 1.0); 6];
        for (i, rule) in rules.iter_mut().enumerate() {
            *rule = ChannelRule::new(SECONDARIES[i], table[i].0, table[i].1);
        }
        Self { rules }
    }

    /// The canonical table.
    ///
    /// | target  | T | I   |
    /// |---------|---|-----|
    /// | red     | 3 | 0.5 |
    /// | green   | 1 | 1.0 |
    /// | blue    | 1 | 1.0 |
    /// | cyan    | 2 | 0.8 |
    /// | magenta | 2 | 0.8 |
    /// | yellow  | 2 | 0.8 |
    pub fn strict() -> Self {
        Self::from_table([
            (3.0, 0.5),
            (1.0, 1.0),
            (1.0, 1.0),
            (2.0, 0.8),
            (2.0, 0.8),
            (2.0, 0.8),
        ])
    }

    /// The alternate table: `T = 1` everywhere, `I` of 0.67 for red and
    /// 0.75 for yellow, 1.0 otherwise.
    pub fn relaxed() -> Self {
        Self::from_table([
            (1.0, 0.67),
            (1.0, 1.0),
            (1.0, 1.0),
            (1.0, 1.0),
            (1.0, 1.0),
            (1.0, 0.75),
        ])
    }

    /// Replace the rule for `target`.
    pub fn with_rule(mut self, target: ColorChannel, rule: ChannelRule) -> Self {
        self.rules[target.index()] = rule;
        self
    }

    /// The rule applied when isolating `target`.
    pub fn rule(&self, target: ColorChannel) -> &ChannelRule {
        &self.rules[target.index()]
    }

    /// Threshold for `target` given the grid's average of that channel.
    pub fn threshold(&self, target: ColorChannel, threshold_coeff: f64, average: i32) -> i64 {
        let rule = self.rule(target);
        (threshold_coeff * BASE_THRESHOLD * rule.threshold_multiplier * average as f64) as i64
    }

    /// Maximum secondary/target ratio for `target`.
    pub fn intensity(&self, target: ColorChannel, required_intensity: f64) -> f64 {
        required_intensity * BASE_INTENSITY * self.rule(target).intensity_multiplier
    }
}

impl Default for IsolationProfile {
    fn default() -> Self {
        Self::strict()
    }
}

/// Summary of one isolation pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsolationStats {
    /// Average of the target channel before masking
    pub average: i32,
    /// Threshold the target channel had to exceed
    pub threshold: i64,
    /// Allowed secondary/target ratio
    pub intensity: f64,
    /// Pixels turned into the pure target hue
    pub kept: u64,
}

/// Mask `grid` in place to pure `target` or pure black.
///
/// # Errors
///
/// - [`ColorError::InvalidParameters`] if either coefficient is NaN or
///   infinite.
/// - [`ColorError::Core`] wrapping `EmptyGrid` for a zero-sized grid.
pub fn isolate_color(
    grid: &mut PixelGrid,
    profile: &IsolationProfile,
    target: ColorChannel,
    threshold_coeff: f64,
    required_intensity: f64,
) -> ColorResult<IsolationStats> {
    if !threshold_coeff.is_finite() || !required_intensity.is_finite() {
        return Err(ColorError::InvalidParameters(format!(
            "isolation coefficients must be finite (threshold {}, intensity {})",
            threshold_coeff, required_intensity
        )));
    }

    let average = grid.average_channel(target)?;
    let threshold = profile.threshold(target, threshold_coeff, average);
    let intensity = profile.intensity(target, required_intensity);
    let (s1, s2) = profile.rule(target).secondary;
    log::debug!(
        "isolating {} in {}: average {}, threshold {}, intensity {:.3}",
        target,
        grid,
        average,
        threshold,
        intensity
    );

    let mut kept = 0;
    for p in grid.pixels_mut() {
        let v = p.get_color(target);
        let limit = v as f64 * intensity;
        if (v as i64) > threshold
            && (p.get_color(s1) as f64) < limit
            && (p.get_color(s2) as f64) < limit
        {
            p.set_pure(target);
            kept += 1;
        } else {
            p.set_to(Color::BLACK);
        }
    }

    Ok(IsolationStats {
        average,
        threshold,
        intensity,
        kept,
    })
}
