use fov_diag::FovError;
use fov_grid::Grid2D;
use fov_line::Bresenham;

use crate::postprocess::{light_walls, window_bounds};

/// Cast one Bresenham ray from the origin outward, stopping at the window
/// edge, the radius, or the first opaque tile.
///
/// Grounded on `cast_ray` in the original circular raycasting engine: every
/// ray-based engine in this module (circular, diamond) shares this helper.
#[allow(clippy::too_many_arguments)]
fn cast_ray(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    dest_x: i32,
    dest_y: i32,
    radius_squared: i32,
    light_walls: bool,
) {
    for (x, y) in Bresenham::new(pov_x, pov_y, dest_x, dest_y) {
        if !fov.in_bounds(x, y) {
            return;
        }
        if radius_squared > 0 {
            let r = (x - pov_x) * (x - pov_x) + (y - pov_y) * (y - pov_y);
            if r > radius_squared {
                return;
            }
        }
        if !transparent.get_bool(x, y) {
            if light_walls {
                fov.set_bool(x, y, true);
            }
            return;
        }
        fov.set_bool(x, y, true);
    }
}

fn check_origin(fov: &dyn Grid2D, pov_x: i32, pov_y: i32) -> Result<(), FovError> {
    if !fov.in_bounds(pov_x, pov_y) {
        return Err(FovError::InvalidArgument(format!(
            "point of view ({pov_x}, {pov_y}) is out of bounds"
        )));
    }
    Ok(())
}

/// Cast a Bresenham ray to every tile on the perimeter of the clipped
/// window (spec §4.5.1).
pub fn circular_raycasting(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls_flag: bool,
) -> Result<(), FovError> {
    check_origin(fov, pov_x, pov_y)?;
    fov.set_bool(pov_x, pov_y, true);
    let (x_min, y_min, x_max, y_max) = window_bounds(fov, pov_x, pov_y, max_radius);
    let radius_squared = max_radius * max_radius;
    for x in x_min..x_max {
        cast_ray(transparent, fov, pov_x, pov_y, x, y_min, radius_squared, light_walls_flag);
    }
    for y in (y_min + 1)..y_max {
        cast_ray(
            transparent, fov, pov_x, pov_y, x_max - 1, y, radius_squared, light_walls_flag,
        );
    }
    for x in (x_min..=(x_max - 2)).rev() {
        cast_ray(
            transparent, fov, pov_x, pov_y, x, y_max - 1, radius_squared, light_walls_flag,
        );
    }
    for y in ((y_min + 1)..=(y_max - 2)).rev() {
        cast_ray(transparent, fov, pov_x, pov_y, x_min, y, radius_squared, light_walls_flag);
    }
    if light_walls_flag {
        light_walls(transparent, fov, pov_x, pov_y, max_radius);
    }
    Ok(())
}

/// Cast a Bresenham ray to every point on the diamond (Manhattan) boundary
/// of the clipped window, rather than its square perimeter: a coverage
/// pattern that visits each perimeter direction once with less duplication
/// than tracing the square edges (spec §4.5.2).
pub fn diamond_raycasting(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls_flag: bool,
) -> Result<(), FovError> {
    check_origin(fov, pov_x, pov_y)?;
    fov.set_bool(pov_x, pov_y, true);
    let (x_min, y_min, x_max, y_max) = window_bounds(fov, pov_x, pov_y, max_radius);
    let radius_squared = max_radius * max_radius;
    let half_w = (x_max - x_min).max(y_max - y_min);
    for k in 1..=half_w {
        for offset in 0..=k {
            let targets = [
                (pov_x + offset, pov_y - (k - offset)),
                (pov_x + (k - offset), pov_y + offset),
                (pov_x - offset, pov_y + (k - offset)),
                (pov_x - (k - offset), pov_y - offset),
            ];
            for (tx, ty) in targets {
                if tx < x_min || tx >= x_max || ty < y_min || ty >= y_max {
                    continue;
                }
                cast_ray(
                    transparent, fov, pov_x, pov_y, tx, ty, radius_squared, light_walls_flag,
                );
            }
        }
    }
    if light_walls_flag {
        light_walls(transparent, fov, pov_x, pov_y, max_radius);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fov_grid::BitpackedGrid;

    #[test]
    fn rejects_origin_out_of_bounds() {
        let transparent = BitpackedGrid::filled(4, 4, true).unwrap();
        let mut fov = BitpackedGrid::new(4, 4).unwrap();
        assert!(circular_raycasting(&transparent, &mut fov, 9, 9, 0, false).is_err());
    }

    #[test]
    fn open_room_is_fully_visible() {
        let transparent = BitpackedGrid::filled(5, 5, true).unwrap();
        let mut fov = BitpackedGrid::new(5, 5).unwrap();
        circular_raycasting(&transparent, &mut fov, 2, 2, 0, false).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                assert!(fov.get_bool(x, y), "({x},{y}) should be visible");
            }
        }
    }

    #[test]
    fn wall_blocks_tiles_behind_it() {
        let mut transparent = BitpackedGrid::filled(7, 1, true).unwrap();
        transparent.set_bool(4, 0, false);
        let mut fov = BitpackedGrid::new(7, 1).unwrap();
        circular_raycasting(&transparent, &mut fov, 0, 0, 0, false).unwrap();
        assert!(fov.get_bool(3, 0));
        assert!(!fov.get_bool(4, 0));
        assert!(!fov.get_bool(5, 0));
    }

    #[test]
    fn diamond_raycasting_lights_open_room() {
        let transparent = BitpackedGrid::filled(5, 5, true).unwrap();
        let mut fov = BitpackedGrid::new(5, 5).unwrap();
        diamond_raycasting(&transparent, &mut fov, 2, 2, 0, false).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                assert!(fov.get_bool(x, y), "({x},{y}) should be visible");
            }
        }
    }

    #[test]
    fn radius_limits_visibility() {
        let transparent = BitpackedGrid::filled(11, 11, true).unwrap();
        let mut fov = BitpackedGrid::new(11, 11).unwrap();
        circular_raycasting(&transparent, &mut fov, 5, 5, 2, false).unwrap();
        assert!(fov.get_bool(5, 5));
        assert!(!fov.get_bool(0, 0));
    }
}
