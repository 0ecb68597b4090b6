use crate::occupancy::{OccupancyGrid, OccupancyVoxel};
use crate::vec3::Vec3;

impl OccupancyGrid {
    /// Out-of-range points are reported as unknown, not occupied.
    pub fn is_occupied(&self, point: Vec3) -> bool {
        let g = self.point_to_grid_coord(point);
        self.voxel_at(g)
            .is_some_and(|v| self.is_occupied_log(v.prob_log))
    }

    pub fn is_unknown(&self, point: Vec3) -> bool {
        match self.voxel_at(self.point_to_grid_coord(point)) {
            Some(v) => !self.is_known_log(v.prob_log),
            None => true,
        }
    }

    pub fn extract_known_voxels(&self) -> Vec<OccupancyVoxel> {
        self.extract_by(|v| self.is_known_log(v.prob_log))
    }

    pub fn extract_free_voxels(&self) -> Vec<OccupancyVoxel> {
        self.extract_by(|v| self.is_known_log(v.prob_log) && !self.is_occupied_log(v.prob_log))
    }

    pub fn extract_occupied_voxels(&self) -> Vec<OccupancyVoxel> {
        self.extract_by(|v| self.is_occupied_log(v.prob_log))
    }

    pub fn extract_known_voxel_indices(&self) -> Vec<[i32; 3]> {
        self.extract_known_voxels().iter().map(|v| v.grid_index).collect()
    }

    pub fn extract_free_voxel_indices(&self) -> Vec<[i32; 3]> {
        self.extract_free_voxels().iter().map(|v| v.grid_index).collect()
    }

    pub fn extract_occupied_voxel_indices(&self) -> Vec<[i32; 3]> {
        self.extract_occupied_voxels().iter().map(|v| v.grid_index).collect()
    }

    pub fn count_known(&self) -> usize {
        self.count_by(|v| self.is_known_log(v.prob_log))
    }

    pub fn count_free(&self) -> usize {
        self.count_by(|v| self.is_known_log(v.prob_log) && !self.is_occupied_log(v.prob_log))
    }

    pub fn count_occupied(&self) -> usize {
        self.count_by(|v| self.is_occupied_log(v.prob_log))
    }

    /// World-space minimum corner of the bounding box of known voxels.
    /// Returns `origin` if no voxel is known.
    pub fn get_min_bound(&self) -> Vec3 {
        let Some(indices) = self.sorted_known_indices() else {
            return self.origin();
        };
        let g = indices[0];
        self.grid_to_world_min_shift(g)
    }

    /// World-space maximum corner of the bounding box of known voxels.
    /// Returns `origin` if no voxel is known.
    ///
    /// Uses a `resolution/2 - 1` shift rather than `get_min_bound`'s
    /// `resolution/2`, reproducing a one-voxel asymmetry present in the
    /// system this grid's behaviour is matched against.
    pub fn get_max_bound(&self) -> Vec3 {
        let Some(indices) = self.sorted_known_indices() else {
            return self.origin();
        };
        let g = *indices.last().unwrap();
        self.grid_to_world_max_shift(g)
    }

    fn extract_by(&self, pred: impl Fn(&OccupancyVoxel) -> bool) -> Vec<OccupancyVoxel> {
        let mut out: Vec<OccupancyVoxel> = self
            .voxels
            .iter()
            .filter(|v| pred(v))
            .copied()
            .collect();
        out.sort_by_key(|v| v.grid_index);
        out
    }

    fn count_by(&self, pred: impl Fn(&OccupancyVoxel) -> bool) -> usize {
        self.voxels.iter().filter(|v| pred(v)).count()
    }

    fn sorted_known_indices(&self) -> Option<Vec<[i32; 3]>> {
        let mut indices: Vec<[i32; 3]> = self
            .voxels
            .iter()
            .filter(|v| self.is_known_log(v.prob_log))
            .map(|v| v.grid_index)
            .collect();
        if indices.is_empty() {
            return None;
        }
        indices.sort_unstable();
        Some(indices)
    }

    fn grid_to_world_min_shift(&self, g: [i32; 3]) -> Vec3 {
        self.voxel_center(g)
    }

    fn grid_to_world_max_shift(&self, g: [i32; 3]) -> Vec3 {
        let half = self.resolution() as f32 / 2.0 - 1.0;
        Vec3::new(
            (g[0] as f32 - half + 0.5) * self.voxel_size() + self.origin().x,
            (g[1] as f32 - half + 0.5) * self.voxel_size() + self.origin().y,
            (g[2] as f32 - half + 0.5) * self.voxel_size() + self.origin().z,
        )
    }
}
