//! Field-of-view engines, the shared wall-lighting post-process, and the
//! algorithm-tag dispatcher.

mod dispatch;
mod pascal;
mod permissive;
mod postprocess;
mod raycasting;
mod restrictive;
mod shadowcast;
mod triage;

pub use dispatch::{compute_fov, Algorithm};
pub use pascal::pascal_diffusion;
pub use permissive::permissive;
pub use postprocess::light_walls;
pub use raycasting::{circular_raycasting, diamond_raycasting};
pub use restrictive::restrictive_shadowcasting;
pub use shadowcast::{recursive_shadowcasting, symmetric_shadowcasting};
pub use triage::triage;
