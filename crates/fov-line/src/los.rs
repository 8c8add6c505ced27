use fov_grid::Grid2D;

use crate::Bresenham;

/// Is `to` visible from `from` through `grid`'s transparency field?
///
/// Walks the Bresenham line between the two tiles and fails closed at the
/// first opaque tile strictly between them; the destination tile itself
/// may be opaque (a wall is still visible from next to it) and the origin
/// is never tested against itself.
pub fn has_los(grid: &dyn Grid2D, from: (i32, i32), to: (i32, i32)) -> bool {
    for (x, y) in Bresenham::new(from.0, from.1, to.0, to.1) {
        if (x, y) == to {
            return true;
        }
        if !grid.get_bool(x, y) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use fov_grid::BitpackedGrid;

    #[test]
    fn open_field_has_los_between_any_two_tiles() {
        let g = BitpackedGrid::filled(10, 10, true).unwrap();
        assert!(has_los(&g, (0, 0), (9, 9)));
    }

    #[test]
    fn wall_strictly_between_endpoints_blocks_los() {
        let mut g = BitpackedGrid::filled(10, 1, true).unwrap();
        g.set_bool(5, 0, false);
        assert!(!has_los(&g, (0, 0), (9, 0)));
    }

    #[test]
    fn opaque_destination_tile_is_still_visible() {
        let mut g = BitpackedGrid::filled(10, 1, true).unwrap();
        g.set_bool(9, 0, false);
        assert!(has_los(&g, (0, 0), (9, 0)));
    }

    #[test]
    fn degenerate_line_is_always_visible() {
        let g = BitpackedGrid::filled(4, 4, false).unwrap();
        assert!(has_los(&g, (2, 2), (2, 2)));
    }
}
