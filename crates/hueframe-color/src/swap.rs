//! Channel swapping

use hueframe_core::{ColorChannel, PixelGrid};

/// Exchange the values of channels `a` and `b` in every pixel, in place.
///
/// Both channels are read before either is written, so swapping a
/// complementary channel with a primary one goes through the inversion
/// correctly. Swapping a channel with itself is a no-op.
pub fn swap_channels(grid: &mut PixelGrid, a: ColorChannel, b: ColorChannel) {
    if a == b {
        return;
    }
    for p in grid.pixels_mut() {
        let va = p.get_color(a);
        let vb = p.get_color(b);
        p.set_color(a, vb);
        p.set_color(b, va);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueframe_core::Pixel;

    #[test]
    fn test_swap_red_blue() {
        let mut grid = PixelGrid::filled(2, 2, Pixel::from_rgb(10, 20, 30));
        swap_channels(&mut grid, ColorChannel::Red, ColorChannel::Blue);
        assert!(grid.pixels().iter().all(|p| p.rgb() == (30, 20, 10)));
    }

    #[test]
    fn test_swap_primary_with_composite() {
        // Cyan reads 255 - red = 245; green is 20
        let mut grid = PixelGrid::filled(1, 1, Pixel::from_rgb(10, 20, 30));
        swap_channels(&mut grid, ColorChannel::Green, ColorChannel::Cyan);
        let p = grid.get(0, 0).unwrap();
        assert_eq!(p.green(), 245);
        assert_eq!(p.get_color(ColorChannel::Cyan), 20);
        assert_eq!(p.red(), 235);
    }

    #[test]
    fn test_swap_same_primary() {
        // Red and cyan share storage: after the swap red reads 255 - 10
        let mut grid = PixelGrid::filled(1, 1, Pixel::from_rgb(10, 0, 0));
        swap_channels(&mut grid, ColorChannel::Red, ColorChannel::Cyan);
        assert_eq!(grid.get(0, 0).unwrap().red(), 245);
    }

    #[test]
    fn test_swap_self_is_noop() {
        let original = PixelGrid::filled(2, 1, Pixel::from_rgba(1, 2, 3, 4));
        let mut grid = original.deep_copy();
        swap_channels(&mut grid, ColorChannel::Magenta, ColorChannel::Magenta);
        assert_eq!(grid, original);
    }
}
