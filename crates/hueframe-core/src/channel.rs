//! Color channel selection
//!
//! A [`ColorChannel`] names either a primary channel stored in the pixel
//! (red, green, blue) or a complementary channel derived from one of them
//! (cyan, magenta, yellow). Every channel resolves to a [`ChannelMapping`]
//! so that pixel code never needs a per-channel branch for reads and writes.
//!
//! | channel | primary | read            |
//! |---------|---------|-----------------|
//! | Red     | Red     | `red`           |
//! | Green   | Green   | `green`         |
//! | Blue    | Blue    | `blue`          |
//! | Cyan    | Red     | `255 - red`     |
//! | Magenta | Green   | `255 - green`   |
//! | Yellow  | Blue    | `255 - blue`    |

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Primary channel physically stored in a packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primary {
    /// Red channel (bits 16-23)
    Red,
    /// Green channel (bits 8-15)
    Green,
    /// Blue channel (bits 0-7)
    Blue,
}

/// How a [`ColorChannel`] is backed by a primary channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelMapping {
    /// Underlying stored channel
    pub primary: Primary,
    /// Whether reads and writes go through `255 - v`
    pub inverted: bool,
}

impl ChannelMapping {
    /// Whether this mapping describes a complementary channel.
    #[inline]
    pub fn is_composite(self) -> bool {
        self.inverted
    }

    /// Convert a stored primary value into the channel's value, or back.
    ///
    /// The complementary transform is its own inverse, so the same
    /// function serves both directions.
    #[inline]
    pub fn apply(self, value: i32) -> i32 {
        if self.inverted { 255 - value } else { value }
    }
}

/// Channel selector for pixel reads, writes and analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
}

impl ColorChannel {
    /// All channels in declaration order.
    pub const ALL: [ColorChannel; 6] = [
        ColorChannel::Red,
        ColorChannel::Green,
        ColorChannel::Blue,
        ColorChannel::Cyan,
        ColorChannel::Magenta,
        ColorChannel::Yellow,
    ];

    /// Position in [`ColorChannel::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve the channel to its stored primary and inversion flag.
    pub const fn mapping(self) -> ChannelMapping {
        let (primary, inverted) = match self {
            ColorChannel::Red => (Primary::Red, false),
            ColorChannel::Green => (Primary::Green, false),
            ColorChannel::Blue => (Primary::Blue, false),
            ColorChannel::Cyan => (Primary::Red, true),
            ColorChannel::Magenta => (Primary::Green, true),
            ColorChannel::Yellow => (Primary::Blue, true),
        };
        ChannelMapping { primary, inverted }
    }

    /// Whether this is one of the complementary channels.
    #[inline]
    pub fn is_composite(self) -> bool {
        self.mapping().is_composite()
    }

    /// The channel backed by the same primary with the opposite inversion.
    pub fn complement(self) -> ColorChannel {
        match self {
            ColorChannel::Red => ColorChannel::Cyan,
            ColorChannel::Green => ColorChannel::Magenta,
            ColorChannel::Blue => ColorChannel::Yellow,
            ColorChannel::Cyan => ColorChannel::Red,
            ColorChannel::Magenta => ColorChannel::Green,
            ColorChannel::Yellow => ColorChannel::Blue,
        }
    }

    /// RGB triple of the pure hue for this channel.
    ///
    /// The pure hue reads 255 on its own channel and 0 on the two other
    /// channels of the same family.
    pub const fn pure_rgb(self) -> (u8, u8, u8) {
        match self {
            ColorChannel::Red => (255, 0, 0),
            ColorChannel::Green => (0, 255, 0),
            ColorChannel::Blue => (0, 0, 255),
            ColorChannel::Cyan => (0, 255, 255),
            ColorChannel::Magenta => (255, 0, 255),
            ColorChannel::Yellow => (255, 255, 0),
        }
    }

    /// Lowercase channel name.
    pub fn name(self) -> &'static str {
        match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
            ColorChannel::Cyan => "cyan",
            ColorChannel::Magenta => "magenta",
            ColorChannel::Yellow => "yellow",
        }
    }
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorChannel::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown color channel '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_primaries() {
        for c in [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue] {
            assert!(!c.is_composite());
        }
        assert_eq!(
            ColorChannel::Cyan.mapping(),
            ChannelMapping {
                primary: Primary::Red,
                inverted: true
            }
        );
        assert_eq!(ColorChannel::Yellow.mapping().primary, Primary::Blue);
    }

    #[test]
    fn test_complement_is_involution() {
        for c in ColorChannel::ALL {
            assert_eq!(c.complement().complement(), c);
            assert_eq!(c.complement().mapping().primary, c.mapping().primary);
        }
    }

    #[test]
    fn test_index_matches_all() {
        for (i, c) in ColorChannel::ALL.into_iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_apply_inverts_composites_only() {
        assert_eq!(ColorChannel::Red.mapping().apply(40), 40);
        assert_eq!(ColorChannel::Magenta.mapping().apply(40), 215);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Cyan".parse::<ColorChannel>().unwrap(), ColorChannel::Cyan);
        assert_eq!(" blue ".parse::<ColorChannel>().unwrap(), ColorChannel::Blue);
        assert!("orange".parse::<ColorChannel>().is_err());
        assert_eq!(ColorChannel::Magenta.to_string(), "magenta");
    }
}
