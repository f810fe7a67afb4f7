//! Display grid configuration constants.
//!
//! The 128x64 OLED is addressed as a grid of 8x8-pixel text cells: 16 columns
//! by 8 rows. Field positions in the presenter are cell coordinates, never raw
//! pixels; the pixel math lives in the display adapter.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306 OLED: 128x64)
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;

/// Edge length of one text cell in pixels (8x8 font grid).
pub const CELL_SIZE: u32 = 8;

// =============================================================================
// Pre-computed Grid Constants
// =============================================================================

/// Number of text columns (16 on a 128-pixel-wide display).
/// Pre-computed to avoid division in per-write code.
pub const GRID_COLS: u32 = DISPLAY_WIDTH / CELL_SIZE;

/// Number of text rows (8 on a 64-pixel-tall display).
pub const GRID_ROWS: u32 = DISPLAY_HEIGHT / CELL_SIZE;

// Compile-time validation: the display must divide evenly into cells
const _: () = assert!(DISPLAY_WIDTH % CELL_SIZE == 0);
const _: () = assert!(DISPLAY_HEIGHT % CELL_SIZE == 0);
const _: () = assert!(GRID_COLS == 16);
const _: () = assert!(GRID_ROWS == 8);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(GRID_COLS, 16, "128px wide display should have 16 cell columns");
        assert_eq!(GRID_ROWS, 8, "64px tall display should have 8 cell rows");
    }

    #[test]
    fn test_cells_cover_display_exactly() {
        assert_eq!(GRID_COLS * CELL_SIZE, DISPLAY_WIDTH);
        assert_eq!(GRID_ROWS * CELL_SIZE, DISPLAY_HEIGHT);
    }
}
