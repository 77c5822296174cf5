//! Single color sample
//!
//! A [`Pixel`] wraps one packed `0xAARRGGBB` value. Channel setters clamp
//! into `[0, 255]` and rewrite the packed value in place; packing and
//! unpacking are lossless.

use crate::channel::{ColorChannel, Primary};
use crate::color;
use crate::grid::graphics::Color;

/// One addressable color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    argb: u32,
}

impl Default for Pixel {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for Pixel {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.argb
    }
}

impl Pixel {
    /// Opaque black.
    pub const BLACK: Pixel = Pixel { argb: 0xFF00_0000 };
    /// Opaque white.
    pub const WHITE: Pixel = Pixel { argb: 0xFFFF_FFFF };

    /// Create a pixel from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self { argb }
    }

    /// Create an opaque pixel from three channel values.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(color::compose_rgb(r, g, b))
    }

    /// Create a pixel from four channel values.
    #[inline]
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_argb(color::compose_rgba(r, g, b, a))
    }

    /// The pure hue of `channel`, opaque.
    pub fn pure(channel: ColorChannel) -> Self {
        let (r, g, b) = channel.pure_rgb();
        Self::from_rgb(r, g, b)
    }

    /// Packed `0xAARRGGBB` value.
    #[inline]
    pub fn argb(&self) -> u32 {
        self.argb
    }

    #[inline]
    pub fn red(&self) -> i32 {
        color::red(self.argb) as i32
    }

    #[inline]
    pub fn green(&self) -> i32 {
        color::green(self.argb) as i32
    }

    #[inline]
    pub fn blue(&self) -> i32 {
        color::blue(self.argb) as i32
    }

    #[inline]
    pub fn alpha(&self) -> i32 {
        color::alpha(self.argb) as i32
    }

    /// RGB triple.
    #[inline]
    pub fn rgb(&self) -> (u8, u8, u8) {
        color::extract_rgb(self.argb)
    }

    pub fn set_red(&mut self, value: i32) {
        self.set_primary(Primary::Red, value);
    }

    pub fn set_green(&mut self, value: i32) {
        self.set_primary(Primary::Green, value);
    }

    pub fn set_blue(&mut self, value: i32) {
        self.set_primary(Primary::Blue, value);
    }

    pub fn set_alpha(&mut self, value: i32) {
        let (r, g, b) = self.rgb();
        self.argb = color::compose_rgba(r, g, b, color::clamp_channel(value));
    }

    /// Read a primary or complementary channel.
    pub fn get_color(&self, channel: ColorChannel) -> i32 {
        let mapping = channel.mapping();
        mapping.apply(self.primary(mapping.primary))
    }

    /// Write a primary or complementary channel.
    ///
    /// `value` is clamped to `[0, 255]` before the complementary transform,
    /// so `set_color(c, get_color(c))` never changes the pixel.
    pub fn set_color(&mut self, channel: ColorChannel, value: i32) {
        let mapping = channel.mapping();
        let clamped = color::clamp_channel(value) as i32;
        self.set_primary(mapping.primary, mapping.apply(clamped));
    }

    /// Force the pixel to the pure hue of `channel`, keeping alpha.
    pub fn set_pure(&mut self, channel: ColorChannel) {
        let (r, g, b) = channel.pure_rgb();
        self.argb = color::compose_rgba(r, g, b, self.alpha() as u8);
    }

    /// Whether the RGB content equals the pure hue of `channel`.
    pub fn is_pure(&self, channel: ColorChannel) -> bool {
        self.rgb() == channel.pure_rgb()
    }

    /// Paint the pixel with `c`, keeping alpha.
    pub fn set_to(&mut self, c: Color) {
        self.argb = color::compose_rgba(c.r, c.g, c.b, self.alpha() as u8);
    }

    /// RGB content as a [`Color`].
    pub fn to_color(&self) -> Color {
        let (r, g, b) = self.rgb();
        Color::new(r, g, b)
    }

    /// Mean of the three primary channels.
    #[inline]
    pub fn average(&self) -> f64 {
        (self.red() + self.green() + self.blue()) as f64 / 3.0
    }

    /// Whether all primary channels are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.argb & 0x00FF_FFFF == 0
    }

    #[inline]
    fn primary(&self, primary: Primary) -> i32 {
        match primary {
            Primary::Red => self.red(),
            Primary::Green => self.green(),
            Primary::Blue => self.blue(),
        }
    }

    fn set_primary(&mut self, primary: Primary, value: i32) {
        let v = color::clamp_channel(value);
        let (mut r, mut g, mut b, a) = color::extract_rgba(self.argb);
        match primary {
            Primary::Red => r = v,
            Primary::Green => g = v,
            Primary::Blue => b = v,
        }
        self.argb = color::compose_rgba(r, g, b, a);
    }
}
