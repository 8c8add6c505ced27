use fov_diag::FovError;
use fov_grid::Grid2D;
use fov_line::Bresenham;

/// Does the Bresenham segment between two points stay clear of opaque
/// tiles, excluding the destination itself?
fn line_clear(transparent: &dyn Grid2D, from: (i32, i32), to: (i32, i32)) -> bool {
    for (x, y) in Bresenham::new(from.0, from.1, to.0, to.1) {
        if (x, y) == to {
            return true;
        }
        if !transparent.get_bool(x, y) {
            return false;
        }
    }
    true
}

/// Permissive FOV (spec §4.5.6): a tile is visible if at least
/// `permissiveness` of the bright lines between the origin tile's corners
/// and the target tile's corners pass through no opaque tile.
pub fn permissive(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls: bool,
    permissiveness: i32,
) -> Result<(), FovError> {
    if !fov.in_bounds(pov_x, pov_y) {
        return Err(FovError::InvalidArgument(format!(
            "point of view ({pov_x}, {pov_y}) is out of bounds"
        )));
    }
    if !(1..=8).contains(&permissiveness) {
        return Err(FovError::InvalidArgument(format!(
            "permissiveness {permissiveness} must be in 1..=8"
        )));
    }
    fov.set_bool(pov_x, pov_y, true);

    let origin_corners = [(pov_x, pov_y), (pov_x + 1, pov_y), (pov_x, pov_y + 1), (pov_x + 1, pov_y + 1)];
    let radius_squared = max_radius * max_radius;

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

    for y in y_min..y_max {
        for x in x_min..x_max {
            if (x, y) == (pov_x, pov_y) {
                continue;
            }
            if max_radius > 0 {
                let r = (x - pov_x) * (x - pov_x) + (y - pov_y) * (y - pov_y);
                if r > radius_squared {
                    continue;
                }
            }
            let target_corners = [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)];
            let mut clear_lines = 0;
            'lines: for &oc in &origin_corners {
                for &tc in &target_corners {
                    if line_clear(transparent, oc, tc) {
                        clear_lines += 1;
                        if clear_lines >= permissiveness {
                            break 'lines;
                        }
                    }
                }
            }
            if clear_lines >= permissiveness {
                let opaque = !transparent.get_bool(x, y);
                if !opaque || light_walls {
                    fov.set_bool(x, y, true);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fov_grid::BitpackedGrid;

    #[test]
    fn rejects_invalid_permissiveness() {
        let transparent = BitpackedGrid::filled(4, 4, true).unwrap();
        let mut fov = BitpackedGrid::new(4, 4).unwrap();
        assert!(permissive(&transparent, &mut fov, 1, 1, 0, false, 0).is_err());
        assert!(permissive(&transparent, &mut fov, 1, 1, 0, false, 9).is_err());
    }

    #[test]
    fn open_room_is_fully_visible_at_minimal_permissiveness() {
        let transparent = BitpackedGrid::filled(5, 5, true).unwrap();
        let mut fov = BitpackedGrid::new(5, 5).unwrap();
        permissive(&transparent, &mut fov, 2, 2, 0, false, 1).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                assert!(fov.get_bool(x, y), "({x},{y})");
            }
        }
    }

    #[test]
    fn wall_blocks_tile_directly_behind_it() {
        let mut transparent = BitpackedGrid::filled(7, 1, true).unwrap();
        transparent.set_bool(3, 0, false);
        let mut fov = BitpackedGrid::new(7, 1).unwrap();
        permissive(&transparent, &mut fov, 0, 0, 0, false, 8).unwrap();
        assert!(!fov.get_bool(4, 0));
    }
}
