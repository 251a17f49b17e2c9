//! Tests for software rendering of the board

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use swaptile::board::{AdjacencyRule, Board};
    use swaptile::io::configuration::{BACKGROUND_COLOR, BORDER_COLOR, HOVER_COLOR};
    use swaptile::view::frame::{Frame, compose_frame, pack_rgb};
    use swaptile::view::layout::GridLayout;

    fn tile_color(index: usize) -> [u8; 3] {
        let step = index as u8 * 20;
        [step, 100, 255 - step]
    }

    fn solved_board(alpha: u8) -> Board<RgbaImage> {
        let images = (0..11)
            .map(|index| {
                let [r, g, b] = tile_color(index);
                RgbaImage::from_pixel(4, 3, Rgba([r, g, b, alpha]))
            })
            .collect();
        match Board::solved(images, AdjacencyRule::IndexDistance) {
            Ok(board) => board,
            Err(err) => unreachable!("solved board should build: {err}"),
        }
    }

    // Tests picture pixels land inside their slot rectangle
    // Verified by drawing images at the cell origin instead of inside the border
    #[test]
    fn test_tiles_drawn_in_slots() {
        let layout = GridLayout::new(4, 3);
        let frame = compose_frame(&solved_board(255), &layout, None);

        assert_eq!((frame.width(), frame.height()), layout.frame_size());
        for index in 0..11 {
            let Some(rect) = layout.slot_rect(index) else {
                unreachable!("slot {index} should have a rectangle");
            };
            let [r, g, b] = tile_color(index);
            assert_eq!(frame.pixel(rect.x, rect.y), Some(pack_rgb(r, g, b)));
            assert_eq!(
                frame.pixel(rect.x + 3, rect.y + 2),
                Some(pack_rgb(r, g, b))
            );
        }
    }

    // Tests picture tiles and the panel get gray borders but the blank does not
    // Verified by outlining every cell regardless of face
    #[test]
    fn test_borders() {
        let layout = GridLayout::new(4, 3);
        let frame = compose_frame(&solved_board(255), &layout, None);

        assert_eq!(frame.pixel(0, 0), Some(BORDER_COLOR));
        let Some(first) = layout.cell_rect(0) else {
            unreachable!("slot 0 should have a cell");
        };
        assert_eq!(frame.pixel(first.x, first.y), Some(BORDER_COLOR));

        let Some(blank) = layout.cell_rect(11) else {
            unreachable!("slot 11 should have a cell");
        };
        assert_eq!(frame.pixel(blank.x, blank.y), Some(BACKGROUND_COLOR));
        assert_eq!(frame.pixel(blank.x + 2, blank.y + 2), Some(BACKGROUND_COLOR));
    }

    // Tests the hovered picture tile is outlined in the highlight colour
    // Verified by ignoring the hovered slot
    #[test]
    fn test_hover_highlight() {
        let layout = GridLayout::new(4, 3);
        let board = solved_board(255);
        let Some(cell) = layout.cell_rect(4) else {
            unreachable!("slot 4 should have a cell");
        };

        let hovered = compose_frame(&board, &layout, Some(4));
        assert_eq!(hovered.pixel(cell.x, cell.y), Some(HOVER_COLOR));
        assert!(hovered.pixels().contains(&HOVER_COLOR));

        let over_blank = compose_frame(&board, &layout, Some(11));
        assert!(!over_blank.pixels().contains(&HOVER_COLOR));
    }

    // Tests transparent picture pixels show the background
    // Verified by copying RGB without blending
    #[test]
    fn test_transparent_tiles_show_background() {
        let layout = GridLayout::new(4, 3);
        let frame = compose_frame(&solved_board(0), &layout, None);
        let Some(rect) = layout.slot_rect(0) else {
            unreachable!("slot 0 should have a rectangle");
        };
        assert_eq!(frame.pixel(rect.x + 1, rect.y + 1), Some(BACKGROUND_COLOR));
    }

    // Tests blitting pads larger buffers and clips smaller ones
    // Verified by indexing the buffer with the frame width
    #[test]
    fn test_blit_into_handles_size_mismatch() {
        let frame = Frame::filled(2, 2, 0x0012_3456);

        let mut larger = vec![0u32; 3 * 3];
        frame.blit_into(&mut larger, 3, 3);
        assert_eq!(
            larger,
            vec![
                0x0012_3456,
                0x0012_3456,
                BACKGROUND_COLOR,
                0x0012_3456,
                0x0012_3456,
                BACKGROUND_COLOR,
                BACKGROUND_COLOR,
                BACKGROUND_COLOR,
                BACKGROUND_COLOR,
            ]
        );

        let mut smaller = vec![0u32; 1];
        frame.blit_into(&mut smaller, 1, 1);
        assert_eq!(smaller, vec![0x0012_3456]);
    }

    #[test]
    fn test_pack_rgb() {
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x0012_3456);
    }
}
