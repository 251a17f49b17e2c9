//! Software rendering of the board into a `0x00RRGGBB` pixel buffer

use image::RgbaImage;

use crate::board::Board;
use crate::io::configuration::{
    BACKGROUND_COLOR, BORDER_COLOR, HOVER_COLOR, PANEL_BORDER, TILE_BORDER,
};
use crate::view::layout::{GridLayout, Rect};

/// A rendered frame, row-major, one `0x00RRGGBB` word per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    /// Frame of the given size filled with one colour
    pub fn filled(width: u32, height: u32, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel words in row-major order
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Colour at a pixel, if it is inside the frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    fn set(&mut self, x: u32, y: u32, color: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y as usize * self.width as usize + x as usize;
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn outline(&mut self, rect: Rect, thickness: u32, color: u32) {
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                let on_edge = dx < thickness
                    || dy < thickness
                    || dx + thickness >= rect.width
                    || dy + thickness >= rect.height;
                if on_edge {
                    self.set(rect.x + dx, rect.y + dy, color);
                }
            }
        }
    }

    fn draw_image(&mut self, rect: Rect, image: &RgbaImage) {
        let width = rect.width.min(image.width());
        let height = rect.height.min(image.height());
        for y in 0..height {
            for x in 0..width {
                let [r, g, b, a] = image.get_pixel(x, y).0;
                let under = self.pixel(rect.x + x, rect.y + y).unwrap_or(BACKGROUND_COLOR);
                self.set(rect.x + x, rect.y + y, blend(under, [r, g, b], a));
            }
        }
    }

    /// Copy into a surface buffer of a possibly different size
    ///
    /// Pixels outside the frame are filled with the background colour and
    /// pixels outside the buffer are dropped.
    pub fn blit_into(&self, buffer: &mut [u32], buffer_width: u32, buffer_height: u32) {
        for y in 0..buffer_height {
            let row_start = y as usize * buffer_width as usize;
            for x in 0..buffer_width {
                let color = self.pixel(x, y).unwrap_or(BACKGROUND_COLOR);
                if let Some(pixel) = buffer.get_mut(row_start + x as usize) {
                    *pixel = color;
                }
            }
        }
    }
}

/// Pack 8-bit channels into `0x00RRGGBB`
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

const fn channel(color: u32, shift: u32) -> u32 {
    (color >> shift) & 0xFF
}

const fn mix(under: u32, shift: u32, top: u8, alpha: u32) -> u32 {
    (top as u32 * alpha + channel(under, shift) * (255 - alpha)) / 255
}

// Straight-alpha "over" onto an opaque destination
const fn blend(under: u32, over: [u8; 3], alpha: u8) -> u32 {
    let [r, g, b] = over;
    let a = alpha as u32;
    (mix(under, 16, r, a) << 16) | (mix(under, 8, g, a) << 8) | mix(under, 0, b, a)
}

/// Draw the board in slot order
///
/// Picture tiles get a gray border, or a yellow one when `hovered` points at
/// them. The blank slot shows the background with no border.
pub fn compose_frame(
    board: &Board<RgbaImage>,
    layout: &GridLayout,
    hovered: Option<usize>,
) -> Frame {
    let (width, height) = layout.frame_size();
    let mut frame = Frame::filled(width, height, BACKGROUND_COLOR);

    frame.outline(
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        },
        PANEL_BORDER,
        BORDER_COLOR,
    );

    for (index, tile) in board.slots().iter().enumerate() {
        let Some(image) = tile.image_ref() else {
            continue;
        };
        let (Some(cell), Some(slot)) = (layout.cell_rect(index), layout.slot_rect(index)) else {
            continue;
        };
        let border = if hovered == Some(index) {
            HOVER_COLOR
        } else {
            BORDER_COLOR
        };
        frame.outline(cell, TILE_BORDER, border);
        frame.draw_image(slot, image);
    }

    frame
}
