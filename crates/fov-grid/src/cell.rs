//! Coercion rules for the four cell kinds a [`crate::ContiguousGrid`] can
//! store: `bool`, `u8`, `f32`, `f64`. These mirror the closed
//! `TCODFOV_DataType` set the original C library exposes; adding a fifth
//! kind would mean adding a new `impl GridCell`, not widening an open
//! generic.

/// A scalar cell type storable in a [`crate::ContiguousGrid`].
///
/// The `to_*`/`from_*` pairs are the single place the get/set coercion
/// rules (spec §3.1) live; every grid variant funnels through them instead
/// of re-deriving the `0`/`255` and `0.0`/`1.0` mappings at each call site.
pub trait GridCell: Copy + Default + 'static {
    fn to_bool(self) -> bool;
    fn from_bool(value: bool) -> Self;
    fn to_u8(self) -> u8;
    fn from_u8(value: u8) -> Self;
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl GridCell for bool {
    fn to_bool(self) -> bool {
        self
    }
    fn from_bool(value: bool) -> Self {
        value
    }
    fn to_u8(self) -> u8 {
        if self { 255 } else { 0 }
    }
    fn from_u8(value: u8) -> Self {
        value > 0
    }
    fn to_f64(self) -> f64 {
        if self { 1.0 } else { 0.0 }
    }
    fn from_f64(value: f64) -> Self {
        value >= 0.5
    }
}

impl GridCell for u8 {
    fn to_bool(self) -> bool {
        self != 0
    }
    fn from_bool(value: bool) -> Self {
        if value { 255 } else { 0 }
    }
    fn to_u8(self) -> u8 {
        self
    }
    fn from_u8(value: u8) -> Self {
        value
    }
    fn to_f64(self) -> f64 {
        self as f64 * (1.0 / 255.0)
    }
    fn from_f64(value: f64) -> Self {
        (value * 255.0) as u8
    }
}

impl GridCell for f32 {
    fn to_bool(self) -> bool {
        self != 0.0
    }
    fn from_bool(value: bool) -> Self {
        if value { 1.0 } else { 0.0 }
    }
    fn to_u8(self) -> u8 {
        (self * 255.0) as u8
    }
    fn from_u8(value: u8) -> Self {
        value as f32 * (1.0 / 255.0)
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl GridCell for f64 {
    fn to_bool(self) -> bool {
        self != 0.0
    }
    fn from_bool(value: bool) -> Self {
        if value { 1.0 } else { 0.0 }
    }
    fn to_u8(self) -> u8 {
        (self * 255.0) as u8
    }
    fn from_u8(value: u8) -> Self {
        value as f64 * (1.0 / 255.0)
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn from_f64(value: f64) -> Self {
        value
    }
}
