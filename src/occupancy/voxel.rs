/// A single voxel's occupancy state.
///
/// `prob_log` is log-odds occupancy: `log(p / (1 - p))` of the voxel being
/// occupied, additive under independent Bayesian evidence. `NaN` means the
/// voxel has never been observed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyVoxel {
    pub grid_index: [i32; 3],
    pub prob_log: f32,
    pub color: [f32; 3],
}

impl OccupancyVoxel {
    pub(crate) fn unobserved(grid_index: [i32; 3]) -> Self {
        Self {
            grid_index,
            prob_log: f32::NAN,
            color: [1.0, 1.0, 1.0],
        }
    }

    pub fn is_known(&self) -> bool {
        !self.prob_log.is_nan()
    }
}

/// `index_of(i, j, k, R) = i + j*R + k*R^2`: the linearisation of an
/// in-range 3D integer grid coordinate into the dense voxel array.
pub(crate) fn index_of(i: i32, j: i32, k: i32, resolution: i32) -> usize {
    (i + j * resolution + k * resolution * resolution) as usize
}

pub(crate) fn in_range(g: [i32; 3], resolution: i32) -> bool {
    g.iter().all(|&c| c >= 0 && c < resolution)
}
