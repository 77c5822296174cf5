//! Measurement functions
//!
//! Intensity-weighted centroid and active area of the non-black pixels.
//! Each pixel contributes its channel average as mass, so a dim pixel pulls
//! the centroid less than a bright one.

use super::PixelGrid;

/// Intensity-weighted center of mass, in integer grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Centroid {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl Centroid {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl PixelGrid {
    /// Compute the intensity-weighted centroid.
    ///
    /// With `w = pixel.average()`:
    /// `x = Σ w·col / Σ w`, `y = Σ w·row / Σ w`, each truncated.
    ///
    /// A grid with no mass (all black, or empty) yields `(0, 0)`.
    pub fn centroid(&self) -> Centroid {
        let mut mass_total = 0.0f64;
        let mut row_total = 0.0f64;
        let mut col_total = 0.0f64;
        for (x, y, p) in self.enumerate() {
            let w = p.average();
            mass_total += w;
            row_total += w * y as f64;
            col_total += w * x as f64;
        }
        if mass_total == 0.0 {
            return Centroid::default();
        }
        Centroid {
            x: (col_total / mass_total) as i64,
            y: (row_total / mass_total) as i64,
        }
    }

    /// Count the pixels whose channel average is non-zero.
    pub fn area(&self) -> u64 {
        self.pixels.iter().filter(|p| !p.is_black()).count() as u64
    }
}
