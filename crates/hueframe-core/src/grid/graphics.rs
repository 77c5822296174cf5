//! Graphics rendering functions
//!
//! This module provides the annotation primitives used on grids:
//! - Filled boxes centered on a point, shrinking to fit the grid
//! - Centroid markers sized by the active area
//! - Lines (Bresenham) and rectangular frames, clipped to the grid

use super::PixelGrid;
use super::measurement::Centroid;

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);

    /// Compose as an opaque packed `0xAARRGGBB` pixel
    pub fn to_argb(&self) -> u32 {
        crate::color::compose_rgb(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Result of [`PixelGrid::draw_centroid_marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Where the box was centered
    pub centroid: Centroid,
    /// Active area the size was derived from
    pub area: u64,
    /// Radius derived from the area before fitting
    pub requested_radius: u32,
    /// Radius actually painted (0 when nothing fit)
    pub radius: u32,
}

/// Generate the points of a line using Bresenham's integer algorithm.
///
/// The line connects `(x1, y1)` to `(x2, y2)` inclusive with 8-connectivity.
pub fn line_points(x1: i64, y1: i64, x2: i64, y2: i64) -> Vec<(i64, i64)> {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1 } else { -1 };
    let sy = if y2 > y1 { 1 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);
    let (mut x, mut y) = (x1, y1);

    if dx >= dy {
        let mut err = dx / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        let mut err = dy / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

impl PixelGrid {
    /// Fill a `2r x 2r` square centered at `(x, y)` with `color`.
    ///
    /// The square covers rows `y - r .. y + r` and columns `x - r .. x + r`
    /// (upper bounds exclusive). When any of those coordinates falls outside
    /// the grid the radius is reduced by one and the check repeated; nothing
    /// is painted for a radius that does not fit. A radius of 0 paints
    /// nothing.
    ///
    /// Returns the radius actually painted.
    pub fn draw_box(&mut self, x: i64, y: i64, color: Color, radius: u32) -> u32 {
        // No radius larger than the longest side can fit.
        let mut r = (radius as i64).min(self.width.max(self.height) as i64);
        while r > 0 {
            // Corners that overflow i64 are outside any grid
            let corners = x
                .checked_sub(r)
                .zip(y.checked_sub(r))
                .zip(x.checked_add(r - 1).zip(y.checked_add(r - 1)));
            let fits = corners.filter(|&((x0, y0), (x1, y1))| {
                self.contains(x0, y0) && self.contains(x1, y1)
            });
            if let Some(((x0, y0), _)) = fits {
                self.fill_rect(x0, y0, 2 * r, 2 * r, color);
                if r != radius as i64 {
                    log::debug!("draw_box at ({x}, {y}): radius {radius} shrunk to {r}");
                }
                return r as u32;
            }
            r -= 1;
        }
        if radius > 0 {
            log::debug!("draw_box at ({x}, {y}): radius {radius} does not fit {self}");
        }
        0
    }

    /// Draw a box at the centroid, sized by the active area.
    ///
    /// `radius = size_coeff * sqrt(area) / 2`, truncated; a negative or
    /// non-finite result is treated as 0.
    pub fn draw_centroid_marker(&mut self, color: Color, size_coeff: f64) -> Marker {
        let centroid = self.centroid();
        let area = self.area();
        let raw = size_coeff * (area as f64).sqrt() / 2.0;
        let requested_radius = if raw.is_finite() && raw > 0.0 {
            raw as u32
        } else {
            0
        };
        let radius = self.draw_box(centroid.x, centroid.y, color, requested_radius);
        Marker {
            centroid,
            area,
            requested_radius,
            radius,
        }
    }

    /// Draw a one-pixel line, clipping points outside the grid.
    pub fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Color) {
        for (x, y) in line_points(x1, y1, x2, y2) {
            if self.contains(x, y) {
                let idx = self.index(x as u32, y as u32);
                self.pixels[idx].set_to(color);
            }
        }
    }

    /// Paint a border of `thickness` pixels around the grid edge.
    pub fn draw_frame(&mut self, color: Color, thickness: u32) {
        let (w, h) = (self.width as i64, self.height as i64);
        let t = (thickness as i64).min(w).min(h);
        if t == 0 {
            return;
        }
        self.fill_rect(0, 0, w, t, color);
        self.fill_rect(0, h - t, w, t, color);
        self.fill_rect(0, 0, t, h, color);
        self.fill_rect(w - t, 0, t, h, color);
    }

    /// Draw both diagonals of the grid.
    pub fn draw_cross(&mut self, color: Color) {
        if self.is_empty() {
            return;
        }
        let (xmax, ymax) = (self.width as i64 - 1, self.height as i64 - 1);
        self.draw_line(0, 0, xmax, ymax, color);
        self.draw_line(0, ymax, xmax, 0, color);
    }

    /// Fill a rectangle that is known to lie within the grid.
    fn fill_rect(&mut self, x0: i64, y0: i64, w: i64, h: i64, color: Color) {
        let width = self.width as usize;
        for y in y0..y0 + h {
            let start = y as usize * width + x0 as usize;
            for p in &mut self.pixels[start..start + w as usize] {
                p.set_to(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn count_color(grid: &PixelGrid, color: Color) -> usize {
        grid.pixels().iter().filter(|p| p.to_color() == color).count()
    }

    #[test]
    fn test_draw_box_inside() {
        let mut grid = PixelGrid::new(10, 10);
        assert_eq!(grid.draw_box(5, 5, Color::RED, 2), 2);
        assert_eq!(count_color(&grid, Color::RED), 16);
        assert_eq!(grid.get(3, 3).unwrap().to_color(), Color::RED);
        assert_eq!(grid.get(6, 6).unwrap().to_color(), Color::RED);
        assert!(grid.get(7, 7).unwrap().is_black());
        assert!(grid.get(2, 5).unwrap().is_black());
    }

    #[test]
    fn test_draw_box_shrinks() {
        let mut grid = PixelGrid::new(10, 10);
        // Radius 3 at (1, 5) would reach x = -2
        assert_eq!(grid.draw_box(1, 5, Color::GREEN, 3), 1);
        assert_eq!(count_color(&grid, Color::GREEN), 4);
    }

    #[test]
    fn test_draw_box_touching_far_edge() {
        let mut grid = PixelGrid::new(4, 4);
        // Columns 0..4 and rows 0..4: exactly the grid
        assert_eq!(grid.draw_box(2, 2, Color::WHITE, 2), 2);
        assert_eq!(grid.area(), 16);
    }

    #[test]
    fn test_draw_box_never_fits() {
        let mut grid = PixelGrid::new(4, 4);
        assert_eq!(grid.draw_box(-3, 1, Color::WHITE, 5), 0);
        assert_eq!(grid.draw_box(2, 2, Color::WHITE, 0), 0);
        assert_eq!(grid.area(), 0);
        let mut empty = PixelGrid::new(0, 0);
        assert_eq!(empty.draw_box(0, 0, Color::WHITE, 3), 0);
    }

    #[test]
    fn test_draw_box_extreme_center() {
        let mut grid = PixelGrid::new(4, 4);
        assert_eq!(grid.draw_box(i64::MIN, 2, Color::WHITE, 3), 0);
        assert_eq!(grid.draw_box(2, i64::MIN + 1, Color::WHITE, 3), 0);
        assert_eq!(grid.draw_box(i64::MAX, i64::MAX, Color::WHITE, 3), 0);
        assert_eq!(grid.area(), 0);
    }

    #[test]
    fn test_draw_box_huge_radius() {
        let mut grid = PixelGrid::new(6, 6);
        assert_eq!(grid.draw_box(3, 3, Color::BLUE, u32::MAX), 3);
        assert_eq!(count_color(&grid, Color::BLUE), 36);
    }

    #[test]
    fn test_draw_centroid_marker() {
        let mut grid = PixelGrid::new(20, 20);
        for y in 8..12 {
            for x in 8..12 {
                grid.set(x, y, Pixel::WHITE).unwrap();
            }
        }
        // area 16, sqrt 4, coeff 2 -> radius 4
        let marker = grid.draw_centroid_marker(Color::RED, 2.0);
        assert_eq!(marker.centroid, Centroid::new(9, 9));
        assert_eq!(marker.area, 16);
        assert_eq!(marker.requested_radius, 4);
        assert_eq!(marker.radius, 4);
        assert_eq!(count_color(&grid, Color::RED), 64);
    }

    #[test]
    fn test_draw_centroid_marker_degenerate() {
        let mut grid = PixelGrid::new(5, 5);
        let marker = grid.draw_centroid_marker(Color::RED, 3.0);
        assert_eq!(marker.radius, 0);
        let marker = grid.draw_centroid_marker(Color::RED, f64::NAN);
        assert_eq!(marker.requested_radius, 0);
        assert_eq!(grid.area(), 0);
    }

    #[test]
    fn test_line_points() {
        assert_eq!(line_points(0, 0, 3, 0), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(line_points(2, 2, 2, 2), vec![(2, 2)]);
        let diag = line_points(0, 3, 3, 0);
        assert_eq!(diag.first(), Some(&(0, 3)));
        assert_eq!(diag.last(), Some(&(3, 0)));
        assert_eq!(diag.len(), 4);
    }

    #[test]
    fn test_draw_line_clips() {
        let mut grid = PixelGrid::new(3, 3);
        grid.draw_line(-2, 1, 5, 1, Color::WHITE);
        assert_eq!(grid.area(), 3);
    }

    #[test]
    fn test_draw_frame_and_cross() {
        let mut grid = PixelGrid::new(6, 4);
        grid.draw_frame(Color::WHITE, 1);
        assert_eq!(grid.area(), 16);
        let mut grid = PixelGrid::new(4, 4);
        grid.draw_cross(Color::WHITE);
        assert_eq!(grid.area(), 8);
    }
}
