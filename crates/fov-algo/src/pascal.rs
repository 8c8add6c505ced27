use fov_diag::FovError;
use fov_grid::Grid2D;

/// Ported from `fov_pascal.c`'s `pascal_scan_line`: the per-tile average of
/// its contributing source cells, attenuated by this tile's own
/// transparency before being carried to the next row.
#[allow(clippy::too_many_arguments)]
fn scan_line(
    transparent: &dyn Grid2D,
    out: &mut dyn Grid2D,
    pov_x: i32,
    scan_y: i32,
    iteration: i32,
    prev_row: &[f64],
    next_row: &mut [f64],
    x_begin: i32,
    x_end: i32,
    x_step: i32,
) {
    let mut x = x_begin;
    while x != x_end {
        let mut casts = 0u32;
        let mut visibility = 0.0;
        casts += 1;
        visibility += prev_row[(x - x_step) as usize];
        if pov_x - iteration <= x && x <= pov_x + iteration {
            casts += 1;
            visibility += prev_row[x as usize];
        }
        if x <= pov_x - iteration || pov_x + iteration <= x {
            casts += 1;
            visibility += next_row[(x - x_step) as usize];
        }
        visibility *= 1.0 / casts as f64;
        out.set_f64(x, scan_y, visibility);
        if visibility != 0.0 {
            visibility *= transparent.get_f64(x, scan_y);
        }
        next_row[x as usize] = visibility;
        x += x_step;
    }
}

/// Iterative form of `pascal_scan_next_row`'s tail recursion: walks rows
/// away from the origin until out of bounds, swapping `prev`/`next` buffers
/// each step rather than recursing (map height would otherwise bound
/// recursion depth).
#[allow(clippy::too_many_arguments)]
fn scan_rows(
    transparent: &dyn Grid2D,
    out: &mut dyn Grid2D,
    pov_x: i32,
    mut scan_y: i32,
    scan_dir: i32,
    mut iteration: i32,
    prev_row: &mut [f64],
    next_row: &mut [f64],
) {
    let width = out.width();
    let height = out.height();
    let mut prev = prev_row;
    let mut next = next_row;
    while scan_y >= 0 && scan_y < height {
        next[pov_x as usize] = prev[pov_x as usize] * transparent.get_f64(pov_x, scan_y);
        out.set_f64(pov_x, scan_y, prev[pov_x as usize]);
        scan_line(transparent, out, pov_x, scan_y, iteration, prev, next, pov_x - 1, -1, -1);
        scan_line(transparent, out, pov_x, scan_y, iteration, prev, next, pov_x + 1, width, 1);
        std::mem::swap(&mut prev, &mut next);
        scan_y += scan_dir;
        iteration += 1;
    }
}

fn scan_init(transparent: &dyn Grid2D, out: &mut dyn Grid2D, pov_x: i32, pov_y: i32, row: &mut [f64]) {
    out.set_f64(pov_x, pov_y, 1.0);
    row[pov_x as usize] = transparent.get_f64(pov_x, pov_y);
    let mut visibility = row[pov_x as usize];
    for x in (0..pov_x).rev() {
        out.set_f64(x, pov_y, visibility);
        if visibility != 0.0 {
            visibility *= transparent.get_f64(x, pov_y);
        }
        row[x as usize] = visibility;
    }
    visibility = row[pov_x as usize];
    for x in (pov_x + 1)..out.width() {
        out.set_f64(x, pov_y, visibility);
        if visibility != 0.0 {
            visibility *= transparent.get_f64(x, pov_y);
        }
        row[x as usize] = visibility;
    }
}

/// Pascal's-triangle light diffusion (spec §4.5.7). `out` must be a scalar
/// grid (`u8`/`f32`/`f64`-backed `ContiguousGrid`) to retain fractional
/// light levels; writing through a boolean grid coerces each value to its
/// `>= 0.5` threshold.
pub fn pascal_diffusion(
    transparent: &dyn Grid2D,
    out: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
) -> Result<(), FovError> {
    if !out.in_bounds(pov_x, pov_y) {
        return Err(FovError::InvalidArgument(format!(
            "point of view ({pov_x}, {pov_y}) is out of bounds"
        )));
    }
    let width = out.width() as usize;
    if width == 0 {
        return Ok(());
    }
    let mut row = Vec::new();
    let mut row2 = Vec::new();
    let mut row3 = Vec::new();
    for buf in [&mut row, &mut row2, &mut row3] {
        buf.try_reserve_exact(width).map_err(|_| FovError::OutOfMemory)?;
        buf.resize(width, 0.0);
    }

    scan_init(transparent, out, pov_x, pov_y, &mut row);

    row2.copy_from_slice(&row);
    scan_rows(transparent, out, pov_x, pov_y - 1, -1, 1, &mut row2, &mut row3);
    row2.copy_from_slice(&row);
    scan_rows(transparent, out, pov_x, pov_y + 1, 1, 1, &mut row2, &mut row3);
    Ok(())
}
