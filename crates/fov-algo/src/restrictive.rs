use fov_diag::FovError;
use fov_grid::Grid2D;

/// Mingos' Restrictive Precise Angle Shadowcasting, ported from
/// `fov_restrictive.c`.
///
/// The original's horizontal-edge octant increments its obstacle-scan index
/// twice per matching obstacle (`++idx` inside the loop body on top of the
/// `for` clause's own `++idx`), silently skipping every other obstacle
/// check in that octant. Both octants here use the vertical edge's
/// single-increment scan; the defect is not reproduced.
#[allow(clippy::too_many_arguments)]
fn compute_quadrant(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls: bool,
    dx_sign: i32,
    dy_sign: i32,
) -> Result<(), FovError> {
    let max_obstacles = (fov.width().max(1) as usize * fov.height().max(1) as usize / 7).max(8);

    // vertical edge octant: scan progressive lines outward along y.
    scan_octant(
        transparent,
        fov,
        pov_x,
        pov_y,
        max_radius,
        light_walls,
        dx_sign,
        dy_sign,
        max_obstacles,
        true,
    )?;
    // horizontal edge octant: scan progressive lines outward along x.
    scan_octant(
        transparent,
        fov,
        pov_x,
        pov_y,
        max_radius,
        light_walls,
        dx_sign,
        dy_sign,
        max_obstacles,
        false,
    )?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn scan_octant(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls: bool,
    dx_sign: i32,
    dy_sign: i32,
    max_obstacles: usize,
    vertical_edge: bool,
) -> Result<(), FovError> {
    let mut start_angle: Vec<f64> = Vec::new();
    let mut end_angle: Vec<f64> = Vec::new();
    start_angle
        .try_reserve_exact(max_obstacles)
        .map_err(|_| FovError::OutOfMemory)?;
    end_angle
        .try_reserve_exact(max_obstacles)
        .map_err(|_| FovError::OutOfMemory)?;

    let mut iteration = 1i32;
    let mut total_obstacles = 0usize;
    let mut obstacles_in_last_line = 0usize;
    let mut min_angle = 0.0f64;

    let mut outer = if vertical_edge { pov_y + dy_sign } else { pov_x + dx_sign };
    let outer_bound = if vertical_edge { fov.height() } else { fov.width() };
    if outer < 0 || outer >= outer_bound {
        return Ok(());
    }

    loop {
        let slopes_per_cell = 1.0 / iteration as f64;
        let half_slopes = slopes_per_cell * 0.5;
        let mut processed_cell = ((min_angle + half_slopes) / slopes_per_cell) as i32;
        let (inner_min, inner_max) = if vertical_edge {
            (
                (pov_x - iteration).max(0),
                (pov_x + iteration).min(fov.width() - 1),
            )
        } else {
            (
                (pov_y - iteration).max(0),
                (pov_y + iteration).min(fov.height() - 1),
            )
        };
        let mut done = true;
        let mut inner = if vertical_edge {
            pov_x + processed_cell * dx_sign
        } else {
            pov_y + processed_cell * dy_sign
        };
        while inner >= inner_min && inner <= inner_max {
            let (x, y) = if vertical_edge { (inner, outer) } else { (outer, inner) };
            let mut visible = true;
            let mut extended = false;
            let centre_slope = processed_cell as f64 * slopes_per_cell;
            let start_slope = centre_slope - half_slopes;
            let end_slope = centre_slope + half_slopes;

            if obstacles_in_last_line > 0 {
                let (near_a, near_b) = if vertical_edge {
                    (
                        fov.get_bool(x, y - dy_sign) && transparent.get_bool(x, y - dy_sign),
                        fov.get_bool(x - dx_sign, y - dy_sign) && transparent.get_bool(x - dx_sign, y - dy_sign),
                    )
                } else {
                    (
                        fov.get_bool(x - dx_sign, y) && transparent.get_bool(x - dx_sign, y),
                        fov.get_bool(x - dx_sign, y - dy_sign) && transparent.get_bool(x - dx_sign, y - dy_sign),
                    )
                };
                if !near_a && !near_b {
                    visible = false;
                } else {
                    let mut idx = 0;
                    while idx < obstacles_in_last_line && visible {
                        if start_slope <= end_angle[idx] && end_slope >= start_angle[idx] {
                            if transparent.get_bool(x, y) {
                                if centre_slope > start_angle[idx] && centre_slope < end_angle[idx] {
                                    visible = false;
                                }
                            } else if start_slope >= start_angle[idx] && end_slope <= end_angle[idx] {
                                visible = false;
                            } else {
                                start_angle[idx] = start_angle[idx].min(start_slope);
                                end_angle[idx] = end_angle[idx].max(end_slope);
                                extended = true;
                            }
                        }
                        idx += 1;
                    }
                }
            }

            if visible {
                done = false;
                fov.set_bool(x, y, true);
                if !transparent.get_bool(x, y) {
                    if min_angle >= start_slope {
                        min_angle = end_slope;
                        if processed_cell == iteration {
                            done = true;
                        }
                    } else if !extended {
                        if total_obstacles >= max_obstacles {
                            return Err(FovError::OutOfMemory);
                        }
                        start_angle.push(start_slope);
                        end_angle.push(end_slope);
                        total_obstacles += 1;
                    }
                    if !light_walls {
                        fov.set_bool(x, y, false);
                    }
                }
            }
            processed_cell += 1;
            inner += if vertical_edge { dx_sign } else { dy_sign };
        }

        if iteration == max_radius {
            done = true;
        }
        iteration += 1;
        obstacles_in_last_line = total_obstacles;
        outer += if vertical_edge { dy_sign } else { dx_sign };
        if done || outer < 0 || outer >= outer_bound {
            break;
        }
    }
    Ok(())
}

/// Restrictive precise angle shadowcasting (spec §4.5.5), computing the
/// four quadrants `{(±1, ±1)}` sequentially.
pub fn restrictive_shadowcasting(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls: bool,
) -> Result<(), FovError> {
    if !fov.in_bounds(pov_x, pov_y) {
        return Err(FovError::InvalidArgument(format!(
            "point of view ({pov_x}, {pov_y}) is out of bounds"
        )));
    }
    fov.set_bool(pov_x, pov_y, true);
    for (dx_sign, dy_sign) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        compute_quadrant(
            transparent, fov, pov_x, pov_y, max_radius, light_walls, dx_sign, dy_sign,
        )?;
    }
    Ok(())
}
