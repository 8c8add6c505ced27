//! Compatibility shim for the deprecated three-bit map layout
//! (`TCODFOV_Map2DDeprecated` / `TCODFOV_MapCell` in the original library).
//!
//! Each cell carries three independent bits — `transparent`, `walkable`,
//! `in_fov` — rather than the one bit a bit-packed [`Grid2D`] exposes. A
//! per-map `select` index chooses which of the three the [`Grid2D`] trait
//! methods read and write, so old call sites that only know "the" boolean
//! accessor keep working unmodified against whichever field they were
//! wired to. New code should reach for `fov_grid::BitpackedGrid` or
//! `ContiguousGrid` instead.

use fov_diag::FovError;
use fov_grid::Grid2D;

/// One of the three legacy cell bits, chosen per map via [`DeprecatedGrid::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellField {
    Transparent,
    Walkable,
    InFov,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct MapCell {
    transparent: bool,
    walkable: bool,
    in_fov: bool,
}

/// A grid of legacy `{transparent, walkable, in_fov}` cells, exposed through
/// [`Grid2D`] via whichever field is currently [`select`](Self::select)ed.
pub struct DeprecatedGrid {
    width: i32,
    height: i32,
    cells: Vec<MapCell>,
    select: CellField,
}

impl DeprecatedGrid {
    pub fn new(width: i32, height: i32) -> Result<Self, FovError> {
        let width = width.max(0);
        let height = height.max(0);
        let len = width as usize * height as usize;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| FovError::OutOfMemory)?;
        cells.resize(len, MapCell::default());
        Ok(Self {
            width,
            height,
            cells,
            select: CellField::Transparent,
        })
    }

    /// Change which field [`Grid2D::get_bool`]/[`Grid2D::set_bool`] reads
    /// and writes.
    pub fn select(&mut self, field: CellField) {
        self.select = field;
    }

    pub fn get_transparent(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).map(|c| c.transparent).unwrap_or(false)
    }
    pub fn set_transparent(&mut self, x: i32, y: i32, value: bool) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx].transparent = value;
        }
    }
    pub fn get_walkable(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).map(|c| c.walkable).unwrap_or(false)
    }
    pub fn set_walkable(&mut self, x: i32, y: i32, value: bool) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx].walkable = value;
        }
    }
    pub fn get_in_fov(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).map(|c| c.in_fov).unwrap_or(false)
    }
    pub fn set_in_fov(&mut self, x: i32, y: i32, value: bool) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx].in_fov = value;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    fn cell(&self, x: i32, y: i32) -> Option<&MapCell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }
}

impl Grid2D for DeprecatedGrid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn get_bool(&self, x: i32, y: i32) -> bool {
        let Some(cell) = self.cell(x, y) else {
            return false;
        };
        match self.select {
            CellField::Transparent => cell.transparent,
            CellField::Walkable => cell.walkable,
            CellField::InFov => cell.in_fov,
        }
    }

    fn set_bool(&mut self, x: i32, y: i32, value: bool) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        match self.select {
            CellField::Transparent => self.cells[idx].transparent = value,
            CellField::Walkable => self.cells[idx].walkable = value,
            CellField::InFov => self.cells[idx].in_fov = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_field_is_independently_addressable() {
        let mut g = DeprecatedGrid::new(3, 3).unwrap();
        g.set_transparent(1, 1, true);
        g.set_walkable(1, 1, false);
        g.set_in_fov(1, 1, true);
        assert!(g.get_transparent(1, 1));
        assert!(!g.get_walkable(1, 1));
        assert!(g.get_in_fov(1, 1));
    }

    #[test]
    fn select_changes_which_field_grid2d_reaches() {
        let mut g = DeprecatedGrid::new(2, 2).unwrap();
        g.set_transparent(0, 0, true);
        g.set_walkable(0, 0, false);

        g.select(CellField::Transparent);
        assert!(Grid2D::get_bool(&g, 0, 0));

        g.select(CellField::Walkable);
        assert!(!Grid2D::get_bool(&g, 0, 0));
        Grid2D::set_bool(&mut g, 0, 0, true);
        assert!(g.get_walkable(0, 0));
        assert!(g.get_transparent(0, 0), "unselected field must be untouched");
    }

    #[test]
    fn out_of_bounds_access_is_false_and_noop() {
        let mut g = DeprecatedGrid::new(2, 2).unwrap();
        assert!(!Grid2D::get_bool(&g, 5, 5));
        Grid2D::set_bool(&mut g, 5, 5, true);
        assert!(!Grid2D::get_bool(&g, 5, 5));
    }
}
