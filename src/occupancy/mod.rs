//! A fixed-resolution probabilistic 3D occupancy grid integrating
//! range-sensor hits via log-odds updates along free-space ray segments.

mod insert;
mod query;
mod voxel;

pub use voxel::OccupancyVoxel;

use crate::vec3::Vec3;
use voxel::{in_range, index_of};

/// Dense probabilistic voxel grid over a cube of `resolution^3` voxels.
///
/// The voxel array is allocated up front and only ever mutated in place;
/// `reconstruct_voxels` is the sole operation allowed to reallocate it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    voxel_size: f32,
    resolution: i32,
    origin: Vec3,
    voxels: Vec<OccupancyVoxel>,

    pub clamping_thres_min: f32,
    pub clamping_thres_max: f32,
    pub prob_hit_log: f32,
    pub prob_miss_log: f32,
    pub occ_prob_thres_log: f32,
    /// Renderer hint only; consumed by no logic in this crate since
    /// visualisation is an external collaborator's concern.
    pub visualize_free_area: bool,
}

impl OccupancyGrid {
    pub fn new(voxel_size: f32, resolution: i32, origin: Vec3) -> Self {
        let count = (resolution as usize).pow(3);
        let voxels = (0..count)
            .map(|_| OccupancyVoxel::unobserved([0, 0, 0]))
            .collect();

        Self {
            voxel_size,
            resolution,
            origin,
            voxels,
            clamping_thres_min: -2.0,
            clamping_thres_max: 3.5,
            prob_hit_log: 0.85,
            prob_miss_log: -0.4,
            occ_prob_thres_log: 0.0,
            visualize_free_area: true,
        }
    }

    pub fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    pub fn resolution(&self) -> i32 {
        self.resolution
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Reallocates the dense voxel array at a new voxel size/resolution and
    /// resets every voxel to unobserved (`prob_log = NaN`).
    pub fn reconstruct_voxels(&mut self, new_voxel_size: f32, new_resolution: i32) {
        self.voxel_size = new_voxel_size;
        self.resolution = new_resolution;
        let count = (new_resolution as usize).pow(3);
        self.voxels = (0..count)
            .map(|_| OccupancyVoxel::unobserved([0, 0, 0]))
            .collect();
    }

    /// Maps a world point to its grid coordinate, shifted so the grid is
    /// centred on `origin`: `floor((p - origin) / voxel_size) + R/2`.
    /// Does not check bounds; pair with [`in_range`] or [`Self::linear_index`].
    pub(crate) fn point_to_grid_coord(&self, p: Vec3) -> [i32; 3] {
        let half = self.resolution as f32 / 2.0;
        let rel = (p - self.origin) / self.voxel_size;
        [
            (rel.x.floor() + half) as i32,
            (rel.y.floor() + half) as i32,
            (rel.z.floor() + half) as i32,
        ]
    }

    /// World-space centre of voxel `g`, per the standard
    /// `(g - R/2 + 0.5) * voxel_size + origin` mapping.
    pub(crate) fn voxel_center(&self, g: [i32; 3]) -> Vec3 {
        let half = self.resolution as f32 / 2.0;
        Vec3::new(
            (g[0] as f32 - half + 0.5) * self.voxel_size + self.origin.x,
            (g[1] as f32 - half + 0.5) * self.voxel_size + self.origin.y,
            (g[2] as f32 - half + 0.5) * self.voxel_size + self.origin.z,
        )
    }

    pub(crate) fn linear_index(&self, g: [i32; 3]) -> Option<usize> {
        if in_range(g, self.resolution) {
            Some(index_of(g[0], g[1], g[2], self.resolution))
        } else {
            None
        }
    }

    pub(crate) fn voxel_at(&self, g: [i32; 3]) -> Option<&OccupancyVoxel> {
        self.linear_index(g).map(|idx| &self.voxels[idx])
    }

    fn is_occupied_log(&self, prob_log: f32) -> bool {
        !prob_log.is_nan() && prob_log > self.occ_prob_thres_log
    }

    fn is_known_log(&self, prob_log: f32) -> bool {
        !prob_log.is_nan()
    }
}

impl Default for OccupancyGrid {
    /// `voxel_size = 0.05`, `resolution = 512`, `origin = (0, 0, 0)`.
    fn default() -> Self {
        Self::new(0.05, 512, Vec3::ZERO)
    }
}
