use fov_diag::FovError;
use fov_grid::Grid2D;

use crate::{
    circular_raycasting, diamond_raycasting, permissive, recursive_shadowcasting,
    restrictive_shadowcasting, symmetric_shadowcasting,
};

/// Algorithm tag accepted by [`compute_fov`] (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    CircularRaycast,
    DiamondRaycast,
    RecursiveShadow,
    SymmetricShadow,
    Restrictive,
    Permissive(i32),
}

/// Dispatch to the FOV engine named by `algorithm`.
pub fn compute_fov(
    algorithm: Algorithm,
    transparent: &dyn Grid2D,
    fov: &mut dyn Grid2D,
    pov_x: i32,
    pov_y: i32,
    max_radius: i32,
    light_walls: bool,
) -> Result<(), FovError> {
    match algorithm {
        Algorithm::CircularRaycast => {
            circular_raycasting(transparent, fov, pov_x, pov_y, max_radius, light_walls)
        }
        Algorithm::DiamondRaycast => {
            diamond_raycasting(transparent, fov, pov_x, pov_y, max_radius, light_walls)
        }
        Algorithm::RecursiveShadow => {
            recursive_shadowcasting(transparent, fov, pov_x, pov_y, max_radius, light_walls)
        }
        Algorithm::SymmetricShadow => {
            symmetric_shadowcasting(transparent, fov, pov_x, pov_y, max_radius, light_walls)
        }
        Algorithm::Restrictive => {
            restrictive_shadowcasting(transparent, fov, pov_x, pov_y, max_radius, light_walls)
        }
        Algorithm::Permissive(k) => {
            permissive(transparent, fov, pov_x, pov_y, max_radius, light_walls, k)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fov_grid::BitpackedGrid;

    #[test]
    fn dispatches_to_every_tagged_engine() {
        let transparent = BitpackedGrid::filled(7, 7, true).unwrap();
        for algo in [
            Algorithm::CircularRaycast,
            Algorithm::DiamondRaycast,
            Algorithm::RecursiveShadow,
            Algorithm::SymmetricShadow,
            Algorithm::Restrictive,
            Algorithm::Permissive(2),
        ] {
            let mut fov = BitpackedGrid::new(7, 7).unwrap();
            compute_fov(algo, &transparent, &mut fov, 3, 3, 0, false).unwrap();
            assert!(fov.get_bool(3, 3), "{algo:?} did not light the origin");
        }
    }
}
