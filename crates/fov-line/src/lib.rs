//! Line rasterization: the integer Bresenham stepper and the
//! floating-point DDA family used to walk octants during raycasting.

mod bresenham;
mod dda;
mod los;

pub use bresenham::Bresenham;
pub use dda::{dda_compute, dda_compute_orthogonal, dda_count, dda_orthogonal_count};
pub use los::has_los;
