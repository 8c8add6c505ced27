use fov_diag::FovError;
use fov_grid::Grid2D;

const MAYBE: i32 = 0b1;
const ALWAYS: i32 = 0b10;
const CACHED_TRANSPARENT: i32 = 0b100;

/// Ported from `fov_triage.c`'s `triage_scan_line`: OR the "maybe visible"
/// bit and AND the "always visible" bit across this tile's contributing
/// sources, then cache this tile's own transparency alongside them.
#[allow(clippy::too_many_arguments)]
fn scan_line(
    transparent: &dyn Grid2D,
    pov_x: i32,
    scan_y: i32,
    iteration: i32,
    prev_row: &[i32],
    next_row: &mut [i32],
    x_begin: i32,
    x_end: i32,
    x_step: i32,
) {
    let mut x = x_begin;
    while x != x_end {
        let mut tests = 0u32;
        let mut always_hit = 0u32;
        let mut maybe_hit = 0u32;

        tests += 1;
        let diag = prev_row[(x - x_step) as usize];
        if diag & 0b101 != 0 {
            maybe_hit += 1;
        }
        if diag & 0b110 != 0 {
            always_hit += 1;
        }

        if pov_x - iteration <= x && x <= pov_x + iteration {
            tests += 1;
            let straight = prev_row[x as usize];
            if straight & 0b101 != 0 {
                maybe_hit += 1;
            }
            if straight & 0b110 != 0 {
                always_hit += 1;
            }
        }
        if x <= pov_x - iteration || pov_x + iteration <= x {
            tests += 1;
            let adjacent = next_row[(x - x_step) as usize];
            if adjacent & 0b101 != 0 {
                maybe_hit += 1;
            }
            if adjacent & 0b110 != 0 {
                always_hit += 1;
            }
        }

        let mut value = 0;
        if maybe_hit > 0 {
            value |= MAYBE;
        }
        if always_hit == tests {
            value |= ALWAYS;
        }
        if value != 0 && transparent.get_bool(x, scan_y) {
            value |= CACHED_TRANSPARENT;
        }
        next_row[x as usize] = value;
        x += x_step;
    }
}

#[allow(clippy::too_many_arguments)]
fn scan_rows(
    transparent: &dyn Grid2D,
    out: &mut dyn Grid2D,
    pov_x: i32,
    mut scan_y: i32,
    scan_dir: i32,
    mut iteration: i32,
    prev_row: &mut [i32],
    next_row: &mut [i32],
) {
    let width = out.width();
    let height = out.height();
    let mut prev = prev_row;
    let mut next = next_row;
    while scan_y >= 0 && scan_y < height {
        next[pov_x as usize] = if prev[pov_x as usize] & CACHED_TRANSPARENT != 0 {
            prev[pov_x as usize]
        } else {
            0
        };
        if next[pov_x as usize] != 0 && transparent.get_bool(pov_x, scan_y) {
            next[pov_x as usize] &= 0b11;
        }

        scan_line(transparent, pov_x, scan_y, iteration, prev, next, pov_x - 1, -1, -1);
        scan_line(transparent, pov_x, scan_y, iteration, prev, next, pov_x + 1, width, 1);

        for x in 0..width {
            out.set_u8(x, scan_y, (next[x as usize] & 0b11) as u8);
        }

        std::mem::swap(&mut prev, &mut next);
        scan_y += scan_dir;
        iteration += 1;
    }
}

fn scan_init(transparent: &dyn Grid2D, out: &mut dyn Grid2D, pov_x: i32, pov_y: i32, row: &mut [i32]) {
    row[pov_x as usize] = if transparent.get_bool(pov_x, pov_y) {
        0b111
    } else {
        0b011
    };
    for x in (0..pov_x).rev() {
        row[x as usize] = 0;
        if row[(x + 1) as usize] & CACHED_TRANSPARENT != 0 {
            row[x as usize] = if transparent.get_bool(x, pov_y) { 0b111 } else { 0b011 };
        }
    }
    for x in (pov_x + 1)..out.width() {
        row[x as usize] = 0;
        if row[(x - 1) as usize] & CACHED_TRANSPARENT != 0 {
            row[x as usize] = if transparent.get_bool(x, pov_y) { 0b111 } else { 0b011 };
        }
    }
    for x in 0..out.width() {
        out.set_u8(x, pov_y, (row[x as usize] & 0b11) as u8);
    }
}

/// Reachability pre-filter (spec §4.5.8): classifies each tile as
/// unreachable / maybe-visible / always-visible without running a full FOV
/// pass, for use as an accelerator ahead of a more expensive engine. `out`
/// receives `0`, `1`, or `2` per tile via [`Grid2D::set_u8`].
pub fn triage(transparent: &dyn Grid2D, out: &mut dyn Grid2D, pov_x: i32, pov_y: i32) -> Result<(), FovError> {
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
        buf.resize(width, 0);
    }

    scan_init(transparent, out, pov_x, pov_y, &mut row);

    row2.copy_from_slice(&row);
    scan_rows(transparent, out, pov_x, pov_y - 1, -1, 1, &mut row2, &mut row3);
    row2.copy_from_slice(&row);
    scan_rows(transparent, out, pov_x, pov_y + 1, 1, 1, &mut row2, &mut row3);
    Ok(())
}
