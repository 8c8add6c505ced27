use fov_grid::Grid2D;

/// Light walls that face an already-lit transparent tile.
///
/// Raycasting engines (§4.5.1, §4.5.2) only mark a wall lit when a ray
/// terminates on it; a wall sitting diagonally off a ray that passed it by
/// stays dark even though its lit face should be visible. This sweeps the
/// window once per quadrant and lights any opaque tile with a lit
/// transparent neighbor on the side closer to the origin along both axes.
pub fn light_walls(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
) {
    let (x_min, y_min, x_max, y_max) = window_bounds(fov, pov_x, pov_y, max_radius);
    for y in y_min..y_max {
        for x in x_min..x_max {
            if transparent.get_bool(x, y) {
                continue;
            }
            let dx = if x < pov_x { -1 } else { 1 };
            let dy = if y < pov_y { -1 } else { 1 };
            let near_x_lit = fov.get_bool(x - dx, y) && transparent.get_bool(x - dx, y);
            let near_y_lit = fov.get_bool(x, y - dy) && transparent.get_bool(x, y - dy);
            if near_x_lit || near_y_lit {
                fov.set_bool(x, y, true);
            }
        }
    }
}

pub(crate) fn window_bounds(
    fov: &dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
) -> (i32, i32, i32, i32) {
    let mut x_min = 0;
    let mut y_min = 0;
    let mut x_max = fov.width();
    let mut y_max = fov.height();
    if max_radius > 0 {
        x_min = x_min.max(pov_x - max_radius);
        y_min = y_min.max(pov_y - max_radius);
        x_max = x_max.min(pov_x + max_radius + 1);
        y_max = y_max.min(pov_y + max_radius + 1);
    }
    (x_min, y_min, x_max, y_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fov_grid::BitpackedGrid;

    #[test]
    fn wall_next_to_lit_near_side_floor_is_lit() {
        let mut transparent = BitpackedGrid::filled(5, 5, true).unwrap();
        transparent.set_bool(3, 2, false); // wall east of origin
        let mut fov = BitpackedGrid::new(5, 5).unwrap();
        fov.set_bool(2, 2, true); // origin-side floor already lit
        light_walls(&transparent, &mut fov, 2, 2, 0);
        assert!(fov.get_bool(3, 2));
    }

    #[test]
    fn isolated_wall_with_no_lit_neighbor_stays_dark() {
        let mut transparent = BitpackedGrid::filled(5, 5, true).unwrap();
        transparent.set_bool(4, 4, false);
        let fov = BitpackedGrid::new(5, 5).unwrap();
        let mut out = fov;
        light_walls(&transparent, &mut out, 0, 0, 0);
        assert!(!out.get_bool(4, 4));
    }
}
