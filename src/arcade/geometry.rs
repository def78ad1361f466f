//! Board geometry: mapping pointer positions to cells.

use eframe::egui::{Pos2, Rect};

/// Window side length in logical units. The board fills the whole window.
pub const SURFACE_SIZE: f32 = 600.0;

/// Map a pointer position to a board cell.
///
/// The surface is split into a 3×3 grid of equal cells;
/// `cell = row * 3 + col` with integer division on each axis. Positions
/// outside `rect` map to `None` and are ignored by the caller. Positions on
/// the far edge clamp into the last row/column rather than indexing off the
/// board.
#[must_use]
pub fn cell_at(rect: Rect, pos: Pos2) -> Option<usize> {
    if !rect.contains(pos) {
        return None;
    }
    let col = (((pos.x - rect.min.x) / (rect.width() / 3.0)) as usize).min(2);
    let row = (((pos.y - rect.min.y) / (rect.height() / 3.0)) as usize).min(2);
    Some(row * 3 + col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    fn surface() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(SURFACE_SIZE, SURFACE_SIZE))
    }

    #[test]
    fn test_cell_centers_map_to_their_index() {
        let rect = surface();
        for row in 0..3 {
            for col in 0..3 {
                let pos = pos2(col as f32 * 200.0 + 100.0, row as f32 * 200.0 + 100.0);
                assert_eq!(cell_at(rect, pos), Some(row * 3 + col));
            }
        }
    }

    #[test]
    fn test_corners() {
        let rect = surface();
        assert_eq!(cell_at(rect, pos2(0.0, 0.0)), Some(0));
        assert_eq!(cell_at(rect, pos2(599.0, 0.0)), Some(2));
        assert_eq!(cell_at(rect, pos2(0.0, 599.0)), Some(6));
        assert_eq!(cell_at(rect, pos2(599.0, 599.0)), Some(8));
    }

    #[test]
    fn test_far_edge_clamps_into_last_cell() {
        let rect = surface();
        assert_eq!(cell_at(rect, pos2(600.0, 600.0)), Some(8));
    }

    #[test]
    fn test_outside_rect_is_none() {
        let rect = surface();
        assert_eq!(cell_at(rect, pos2(-1.0, 10.0)), None);
        assert_eq!(cell_at(rect, pos2(10.0, 601.0)), None);
    }

    #[test]
    fn test_offset_rect() {
        // The panel rect is not always at the origin.
        let rect = Rect::from_min_size(pos2(50.0, 30.0), vec2(300.0, 300.0));
        assert_eq!(cell_at(rect, pos2(51.0, 31.0)), Some(0));
        assert_eq!(cell_at(rect, pos2(200.0, 180.0)), Some(4));
        assert_eq!(cell_at(rect, pos2(10.0, 10.0)), None);
    }
}
