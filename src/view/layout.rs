//! Pixel geometry of the tile grid
//!
//! The frame is an outer panel border around a 4x3 block of cells. Each cell
//! is a tile with a border on every side, so the cell pitch is the tile size
//! plus twice the border width.

use crate::io::configuration::{GRID_COLS, GRID_ROWS, PANEL_BORDER, TILE_BORDER, TILE_COUNT};

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x: u32,
    /// Top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Check if a pixel lies within the rectangle
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}

/// Placement of slots inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    tile_width: u32,
    tile_height: u32,
}

impl GridLayout {
    /// Layout for tiles of the given size
    pub const fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
        }
    }

    /// Size of one tile picture
    pub const fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    const fn cell_width(&self) -> u32 {
        self.tile_width + 2 * TILE_BORDER
    }

    const fn cell_height(&self) -> u32 {
        self.tile_height + 2 * TILE_BORDER
    }

    /// Width and height of the whole frame including the panel border
    pub const fn frame_size(&self) -> (u32, u32) {
        (
            2 * PANEL_BORDER + GRID_COLS as u32 * self.cell_width(),
            2 * PANEL_BORDER + GRID_ROWS as u32 * self.cell_height(),
        )
    }

    /// Rectangle of a slot's cell, border included
    pub const fn cell_rect(&self, index: usize) -> Option<Rect> {
        if index >= TILE_COUNT {
            return None;
        }
        let row = (index / GRID_COLS) as u32;
        let col = (index % GRID_COLS) as u32;
        Some(Rect {
            x: PANEL_BORDER + col * self.cell_width(),
            y: PANEL_BORDER + row * self.cell_height(),
            width: self.cell_width(),
            height: self.cell_height(),
        })
    }

    /// Rectangle where a slot's picture is drawn, inside its border
    pub const fn slot_rect(&self, index: usize) -> Option<Rect> {
        match self.cell_rect(index) {
            Some(cell) => Some(Rect {
                x: cell.x + TILE_BORDER,
                y: cell.y + TILE_BORDER,
                width: self.tile_width,
                height: self.tile_height,
            }),
            None => None,
        }
    }

    /// Slot under a pixel, counting a tile's border as part of the tile
    pub const fn slot_at(&self, x: u32, y: u32) -> Option<usize> {
        if x < PANEL_BORDER || y < PANEL_BORDER {
            return None;
        }
        let (cell_width, cell_height) = (self.cell_width(), self.cell_height());
        if cell_width == 0 || cell_height == 0 {
            return None;
        }
        let col = ((x - PANEL_BORDER) / cell_width) as usize;
        let row = ((y - PANEL_BORDER) / cell_height) as usize;
        if col >= GRID_COLS || row >= GRID_ROWS {
            return None;
        }
        Some(row * GRID_COLS + col)
    }
}
