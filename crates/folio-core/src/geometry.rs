#![forbid(unsafe_code)]

//! Unit conversion between terminal cells and CSS pixels.
//!
//! Breakpoints, card sizes, and scroll slack are specified in pixels. The
//! terminal only knows columns, so every measurement crosses this boundary
//! exactly once: the adapter converts columns to pixels before calling into
//! the core, and converts pixel offsets back to columns when drawing.

/// Default horizontal size of one terminal column, in pixels.
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;

/// How many pixels a terminal column stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellMetrics {
    cell_width_px: u16,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH_PX)
    }
}

impl CellMetrics {
    /// Create metrics; a zero width is bumped to 1 so conversions never divide by zero.
    #[must_use]
    pub const fn new(cell_width_px: u16) -> Self {
        Self {
            cell_width_px: if cell_width_px == 0 { 1 } else { cell_width_px },
        }
    }

    pub const fn cell_width_px(&self) -> u16 {
        self.cell_width_px
    }

    /// Columns to pixels.
    #[inline]
    pub const fn to_px(&self, cols: u16) -> u32 {
        cols as u32 * self.cell_width_px as u32
    }

    /// Pixels to whole columns, rounding down.
    #[inline]
    pub const fn to_cols(&self, px: u32) -> u32 {
        px / self.cell_width_px as u32
    }

    /// Pixels to whole columns, rounding to nearest.
    #[inline]
    pub const fn to_cols_round(&self, px: u32) -> u32 {
        let w = self.cell_width_px as u32;
        (px + w / 2) / w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_eight_px() {
        assert_eq!(CellMetrics::default().cell_width_px(), 8);
    }

    #[test]
    fn breakpoint_lands_on_96_columns() {
        let m = CellMetrics::default();
        assert_eq!(m.to_px(96), 768);
        assert_eq!(m.to_px(95), 760);
    }

    #[test]
    fn zero_width_is_clamped() {
        let m = CellMetrics::new(0);
        assert_eq!(m.cell_width_px(), 1);
        assert_eq!(m.to_cols(10), 10);
    }

    #[test]
    fn rounding() {
        let m = CellMetrics::new(8);
        assert_eq!(m.to_cols(15), 1);
        assert_eq!(m.to_cols_round(12), 2);
        assert_eq!(m.to_cols_round(11), 1);
    }
}
