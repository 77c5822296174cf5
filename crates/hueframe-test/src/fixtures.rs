//! Synthetic grids shared by the regression tests

use hueframe_core::{Pixel, PixelGrid};

/// Black grid with a filled `size x size` square of `pixel` at `(x0, y0)`.
pub fn square_blob(width: u32, height: u32, x0: u32, y0: u32, size: u32, pixel: Pixel) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        if x >= x0 && x < x0 + size && y >= y0 && y < y0 + size {
            pixel
        } else {
            Pixel::BLACK
        }
    })
}

/// Smooth RGB gradient: red grows with x, green with y, blue is their mix.
pub fn gradient(width: u32, height: u32) -> PixelGrid {
    let wmax = width.saturating_sub(1).max(1);
    let hmax = height.saturating_sub(1).max(1);
    PixelGrid::from_fn(width, height, |x, y| {
        let r = (x * 255 / wmax) as u8;
        let g = (y * 255 / hmax) as u8;
        let b = ((r as u16 + g as u16) / 2) as u8;
        Pixel::from_rgb(r, g, b)
    })
}

/// Deterministic pseudo-random grid from a linear congruential sequence.
pub fn noise(width: u32, height: u32, seed: u32) -> PixelGrid {
    let mut state = seed;
    PixelGrid::from_fn(width, height, |_, _| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        Pixel::from_argb(0xFF00_0000 | (state >> 8))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_blob_area() {
        let grid = square_blob(10, 10, 2, 3, 4, Pixel::WHITE);
        assert_eq!(grid.area(), 16);
    }

    #[test]
    fn test_gradient_corners() {
        let grid = gradient(5, 3);
        assert_eq!(grid.get(0, 0).unwrap().rgb(), (0, 0, 0));
        assert_eq!(grid.get(4, 2).unwrap().rgb(), (255, 255, 255));
    }

    #[test]
    fn test_noise_is_deterministic() {
        assert_eq!(noise(4, 4, 7), noise(4, 4, 7));
        assert_ne!(noise(4, 4, 7), noise(4, 4, 8));
    }
}
