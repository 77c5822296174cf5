//! Row masking

use super::PixelGrid;
use super::graphics::Color;
use crate::error::{Error, Result};

impl PixelGrid {
    /// Paint the bottom `rows` rows black, in place.
    ///
    /// `rows == 0` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowsOutOfRange`] if `rows > height`.
    pub fn cutoff_bottom(&mut self, rows: u32) -> Result<()> {
        if rows > self.height {
            return Err(Error::RowsOutOfRange {
                rows,
                height: self.height,
            });
        }
        let first = self.height - rows;
        for row in self.rows_mut().skip(first as usize) {
            for p in row {
                p.set_to(Color::BLACK);
            }
        }
        Ok(())
    }
}
