/// Integer Bresenham line stepper from `(x0, y0)` to `(x1, y1)` inclusive.
///
/// Implements [`Iterator`] rather than the C library's explicit
/// init/step pair (spec §4.2): the stepper *is* the finite lazy sequence it
/// describes. It yields the origin first and its terminal item lands
/// exactly on the destination; it is restartable only by constructing a new
/// [`Bresenham`].
///
/// The underlying step rule (error-doubling, all-octant) picks different
/// tiles depending on which endpoint is "first" for shallow non-45-degree
/// slopes, so it is not symmetric under reversal on its own. To satisfy the
/// reversal invariant (spec §8), a line is always walked in one canonical
/// direction (lexicographically smaller endpoint first) and the result is
/// reversed afterward if the caller asked for the opposite direction — this
/// makes `Bresenham::new(a, b)` exactly `Bresenham::new(b, a)` reversed, by
/// construction, rather than by coincidence of the stepping rule.
pub struct Bresenham {
    points: Vec<(i32, i32)>,
    idx: usize,
}

fn walk(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut x = x0;
    let mut y = y0;
    let mut err = dx + dy;
    let mut points = Vec::with_capacity(1 + dx.max(-dy) as usize);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

impl Bresenham {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let mut points = if (x0, y0) <= (x1, y1) {
            walk(x0, y0, x1, y1)
        } else {
            let mut p = walk(x1, y1, x0, y0);
            p.reverse();
            p
        };
        points.shrink_to_fit();
        Self { points, idx: 0 }
    }

    /// Number of tiles this stepper will yield: `1 + max(|dx|, |dy|)`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Iterator for Bresenham {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        let point = *self.points.get(self.idx)?;
        self.idx += 1;
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn matches_scenario_s1() {
        let line: Vec<_> = Bresenham::new(0, 0, 11, 3).collect();
        assert_eq!(
            line,
            vec![
                (0, 0),
                (1, 0),
                (2, 1),
                (3, 1),
                (4, 1),
                (5, 1),
                (6, 2),
                (7, 2),
                (8, 2),
                (9, 2),
                (10, 3),
                (11, 3),
            ]
        );
    }

    #[test]
    fn reverse_direction_yields_reversed_list() {
        let forward: Vec<_> = Bresenham::new(0, 0, 11, 3).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        let backward: Vec<_> = Bresenham::new(11, 3, 0, 0).collect();
        assert_eq!(backward, reversed);
    }

    #[test]
    fn set_equality_holds_for_arbitrary_reversed_lines() {
        let cases = [(2, -3, 9, 5), (-4, -4, 4, 4), (0, 0, 0, 7), (0, 0, 7, 0)];
        for (x0, y0, x1, y1) in cases {
            let forward: HashSet<_> = Bresenham::new(x0, y0, x1, y1).collect();
            let backward: HashSet<_> = Bresenham::new(x1, y1, x0, y0).collect();
            assert_eq!(forward, backward, "mismatch for ({x0},{y0})->({x1},{y1})");
        }
    }

    #[test]
    fn degenerate_line_yields_single_point() {
        let line: Vec<_> = Bresenham::new(5, 5, 5, 5).collect();
        assert_eq!(line, vec![(5, 5)]);
    }

    #[test]
    fn length_matches_1_plus_max_delta() {
        let b = Bresenham::new(0, 0, 11, 3);
        assert_eq!(b.len(), 12);
    }

    proptest::proptest! {
        /// Invariant 6 (spec §8): reversing the endpoints yields the exact
        /// reverse of the forward traversal, for arbitrary endpoints.
        #[test]
        fn reversal_yields_exact_reverse_list(
            x0 in -50i32..50, y0 in -50i32..50,
            x1 in -50i32..50, y1 in -50i32..50,
        ) {
            let forward: Vec<_> = Bresenham::new(x0, y0, x1, y1).collect();
            let mut reversed = forward.clone();
            reversed.reverse();
            let backward: Vec<_> = Bresenham::new(x1, y1, x0, y0).collect();
            prop_assert_eq!(backward, reversed);
        }

        /// A weaker corollary of the same invariant: the two directions
        /// also agree as sets, which is all spec §8 #6 literally requires.
        #[test]
        fn reversal_yields_same_set(
            x0 in -50i32..50, y0 in -50i32..50,
            x1 in -50i32..50, y1 in -50i32..50,
        ) {
            let forward: HashSet<_> = Bresenham::new(x0, y0, x1, y1).collect();
            let backward: HashSet<_> = Bresenham::new(x1, y1, x0, y0).collect();
            prop_assert_eq!(forward, backward);
        }
    }
}
