//! Sub-tile-precision digital differential analyzer rasterization.
//!
//! Grounded in `dda.c`/`dda.h`: unlike [`crate::Bresenham`], the endpoints
//! are floating point, the sample count is caller-controlled rather than
//! implied by the geometry, and the step direction can be restricted to
//! pure horizontal/vertical moves (the "orthogonal" variant, used by the
//! diamond raycasting engine's octant walk).

/// Number of samples a plain DDA walk from `(bx, by)` to `(ex, ey)` would
/// naturally produce: `1 + max(|dx|, |dy|)` where `dx`/`dy` are truncated
/// toward zero, matching the original's `(ptrdiff_t)(end - begin)` cast.
pub fn dda_count(bx: f64, by: f64, ex: f64, ey: f64) -> usize {
    let dx = (ex - bx) as i64;
    let dy = (ey - by) as i64;
    (1 + dx.abs().max(dy.abs())) as usize
}

/// Rasterize a straight line from `(bx, by)` to `(ex, ey)`, writing
/// `out.len()` samples into `out`.
///
/// The sample count is independent of [`dda_count`]: a shorter `out` yields
/// a truncated prefix of the line, a longer one keeps stepping past the
/// endpoint with the same per-sample increment. Each sample rounds its
/// floating position to the nearest tile with `floor(v + 0.5)`.
pub fn dda_compute(bx: f64, by: f64, ex: f64, ey: f64, out: &mut [(i32, i32)]) {
    let trunc_dx = (ex - bx) as i64;
    let trunc_dy = (ey - by) as i64;
    let n = trunc_dx.abs().max(trunc_dy.abs());
    let div_n = if n == 0 { 0.0 } else { 1.0 / n as f64 };
    let dx = ex - bx;
    let dy = ey - by;
    for (i, slot) in out.iter_mut().enumerate() {
        let x = bx + i as f64 * dx * div_n;
        let y = by + i as f64 * dy * div_n;
        *slot = ((x + 0.5).floor() as i32, (y + 0.5).floor() as i32);
    }
}

/// Number of samples the orthogonal DDA walk produces:
/// `1 + round(|dx|) + round(|dy|)`, each axis stepping independently one
/// tile at a time.
pub fn dda_orthogonal_count(bx: f64, by: f64, ex: f64, ey: f64) -> usize {
    let nx = (ex - bx).abs();
    let ny = (ey - by).abs();
    (1.0 + (nx + 0.5).floor() + (ny + 0.5).floor()) as usize
}

/// Rasterize `(bx, by)` to `(ex, ey)` restricted to single-axis steps: each
/// sample after the first moves exactly one tile horizontally or
/// vertically, never diagonally, choosing the axis whose accumulated
/// fractional progress is further behind.
pub fn dda_compute_orthogonal(bx: f64, by: f64, ex: f64, ey: f64, out: &mut [(i32, i32)]) {
    if out.is_empty() {
        return;
    }
    let nx = (ex - bx).abs();
    let ny = (ey - by).abs();
    let sign_x: i32 = if ex >= bx { 1 } else { -1 };
    let sign_y: i32 = if ey >= by { 1 } else { -1 };
    let mut x = (bx + 0.5).floor() as i32;
    let mut y = (by + 0.5).floor() as i32;
    out[0] = (x, y);
    let mut ix = 0.0f64;
    let mut iy = 0.0f64;
    for slot in out[1..].iter_mut() {
        if (0.5 + ix) * ny < (0.5 + iy) * nx {
            x += sign_x;
            ix += 1.0;
        } else {
            y += sign_y;
            iy += 1.0;
        }
        *slot = (x, y);
    }
}
