use fov_diag::FovError;

use crate::{cell::GridCell, Grid2D};

/// A contiguous typed array bound over a caller-owned buffer.
///
/// `bind` does not copy: it borrows `buffer` for the lifetime `'a`, matching
/// the "bind" naming of the language-neutral API (spec §6.1) — the caller
/// retains ownership and may read the buffer directly, e.g. to serialize a
/// Pascal-diffusion light-level grid after the engine has run.
pub struct ContiguousGrid<'a, T: GridCell> {
    width: i32,
    height: i32,
    data: &'a mut [T],
}

impl<'a, T: GridCell> ContiguousGrid<'a, T> {
    /// Bind `buffer` as a `width x height` grid of `T`.
    ///
    /// Fails with [`FovError::InvalidArgument`] if `buffer.len()` does not
    /// equal `width * height`.
    pub fn bind(width: i32, height: i32, buffer: &'a mut [T]) -> Result<Self, FovError> {
        let width = width.max(0);
        let height = height.max(0);
        let expected = width as usize * height as usize;
        if buffer.len() != expected {
            return Err(FovError::InvalidArgument(format!(
                "buffer length {} does not match {width}x{height} ({expected} cells)",
                buffer.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data: buffer,
        })
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (self.width * y + x) as usize
    }

    /// Borrow the underlying cell data.
    pub fn as_slice(&self) -> &[T] {
        self.data
    }
}

impl<T: GridCell> Grid2D for ContiguousGrid<'_, T> {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn get_bool(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.data[self.index(x, y)].to_bool()
    }

    fn set_bool(&mut self, x: i32, y: i32, value: bool) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        self.data[idx] = T::from_bool(value);
    }

    fn get_u8(&self, x: i32, y: i32) -> u8 {
        if !self.in_bounds(x, y) {
            return 0;
        }
        self.data[self.index(x, y)].to_u8()
    }

    fn set_u8(&mut self, x: i32, y: i32, value: u8) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        self.data[idx] = T::from_u8(value);
    }

    fn get_f64(&self, x: i32, y: i32) -> f64 {
        if !self.in_bounds(x, y) {
            return 0.0;
        }
        self.data[self.index(x, y)].to_f64()
    }

    fn set_f64(&mut self, x: i32, y: i32, value: f64) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        self.data[idx] = T::from_f64(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_rejects_mismatched_buffer_length() {
        let mut buf = [false; 5];
        assert!(ContiguousGrid::bind(2, 2, &mut buf).is_err());
    }

    #[test]
    fn bool_contiguous_get_set_round_trip() {
        let mut buf = vec![false; 6];
        let mut g = ContiguousGrid::bind(3, 2, &mut buf).unwrap();
        g.set_bool(2, 1, true);
        assert!(g.get_bool(2, 1));
        assert!(!g.get_bool(0, 0));
    }

    #[test]
    fn f64_contiguous_has_full_fidelity() {
        let mut buf = vec![0.0f64; 4];
        let mut g = ContiguousGrid::bind(2, 2, &mut buf).unwrap();
        g.set_f64(1, 1, 0.33);
        assert_eq!(g.get_f64(1, 1), 0.33);
    }

    #[test]
    fn u8_contiguous_coerces_bool_to_0_or_255() {
        let mut buf = vec![0u8; 4];
        let mut g = ContiguousGrid::bind(2, 2, &mut buf).unwrap();
        g.set_bool(0, 0, true);
        assert_eq!(g.get_u8(0, 0), 255);
        g.set_bool(1, 0, false);
        assert_eq!(g.get_u8(1, 0), 0);
    }

    #[test]
    fn out_of_bounds_contiguous_access_is_noop() {
        let mut buf = vec![0u8; 4];
        let mut g = ContiguousGrid::bind(2, 2, &mut buf).unwrap();
        g.set_u8(5, 5, 9);
        assert_eq!(g.get_u8(5, 5), 0);
    }
}
