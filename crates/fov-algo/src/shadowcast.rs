use fov_diag::FovError;
use fov_grid::Grid2D;

/// The eight octant transforms: `(xx, xy, yx, yy)` maps a `(col, row)` pair
/// (column across the cone, row out from the origin) to a `(dx, dy)` tile
/// offset.
const OCTANTS: [(i32, i32, i32, i32); 8] = [
    (1, 0, 0, -1),
    (0, 1, -1, 0),
    (0, -1, -1, 0),
    (-1, 0, 0, -1),
    (-1, 0, 0, 1),
    (0, -1, 1, 0),
    (0, 1, 1, 0),
    (1, 0, 0, 1),
];

#[allow(clippy::too_many_arguments)]
fn cast_light(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    row: i32,
    mut start_slope: f64,
    end_slope: f64,
    radius: i32,
    xx: i32,
    xy: i32,
    yx: i32,
    yy: i32,
    light_walls: bool,
    symmetric: bool,
) {
    if start_slope < end_slope {
        return;
    }
    let cap = if radius > 0 {
        radius
    } else {
        fov.width() + fov.height()
    };
    let mut i = row;
    loop {
        if i > cap {
            return;
        }
        let dy = -i;
        let mut blocked = false;
        let mut next_start_slope = start_slope;
        for dx in dy..=0 {
            let l_slope = (dx as f64 - 0.5) / (dy as f64 + 0.5);
            let r_slope = (dx as f64 + 0.5) / (dy as f64 - 0.5);
            if start_slope < r_slope {
                continue;
            }
            let out_of_cone = if symmetric {
                end_slope >= l_slope && l_slope != start_slope
            } else {
                end_slope > l_slope
            };
            if out_of_cone {
                break;
            }

            let tx = pov_x + dx * xx + dy * xy;
            let ty = pov_y + dx * yx + dy * yy;
            let within_radius = radius == 0 || dx * dx + dy * dy <= radius * radius;

            if within_radius && fov.in_bounds(tx, ty) {
                let opaque = !transparent.get_bool(tx, ty);
                if !opaque || light_walls {
                    fov.set_bool(tx, ty, true);
                }
                if blocked {
                    if opaque {
                        next_start_slope = r_slope;
                        continue;
                    }
                    blocked = false;
                    start_slope = next_start_slope;
                } else if opaque && i < cap {
                    blocked = true;
                    cast_light(
                        transparent,
                        fov,
                        pov_x,
                        pov_y,
                        i + 1,
                        start_slope,
                        l_slope,
                        radius,
                        xx,
                        xy,
                        yx,
                        yy,
                        light_walls,
                        symmetric,
                    );
                    next_start_slope = r_slope;
                }
            }
        }
        if blocked {
            return;
        }
        i += 1;
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

fn run(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls: bool,
    symmetric: bool,
) -> Result<(), FovError> {
    check_origin(fov, pov_x, pov_y)?;
    fov.set_bool(pov_x, pov_y, true);
    for (xx, xy, yx, yy) in OCTANTS {
        cast_light(
            transparent, fov, pov_x, pov_y, 1, 1.0, 0.0, max_radius, xx, xy, yx, yy, light_walls,
            symmetric,
        );
    }
    Ok(())
}

/// Eight-octant recursive shadowcasting (spec §4.5.3): per octant, scan rows
/// of increasing distance tracking a `(start_slope, end_slope)` cone,
/// narrowing it at opaque-to-transparent transitions and recursing on the
/// sub-cone at transparent-to-opaque ones.
pub fn recursive_shadowcasting(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls: bool,
) -> Result<(), FovError> {
    run(transparent, fov, pov_x, pov_y, max_radius, light_walls, false)
}

/// Symmetric shadowcasting (spec §4.5.4): same octant decomposition, but
/// the far cone edge is tested with an inclusive comparison so a tile
/// exactly on the boundary slope is visible from both ends of the sightline.
///
/// Mutual visibility holds for the general case, but a sightline that grazes
/// exactly through the shared corner of two opaque cells can still resolve
/// differently depending on which end it's cast from — an inherent property
/// of octant-sweep shadowcasting, not specific to this octant transform.
pub fn symmetric_shadowcasting(
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls: bool,
) -> Result<(), FovError> {
    run(transparent, fov, pov_x, pov_y, max_radius, light_walls, true)
}
