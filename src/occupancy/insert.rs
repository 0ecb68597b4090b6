use crate::occupancy::voxel::in_range;
use crate::occupancy::OccupancyGrid;
use crate::vec3::{Aabb, Vec3};

/// The centre voxel plus its six face neighbours: the sweep that lets a
/// ray clipping a voxel diagonally still register a free-space hit, since
/// sampling the ray's own path alone would miss it.
const NEIGHBOR_OFFSETS: [[i32; 3]; 7] = [
    [0, 0, 0],
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

struct RangedPoint {
    point: Vec3,
    distance: f32,
    hit: bool,
}

impl OccupancyGrid {
    /// Integrates a point cloud observed from `viewpoint` into the grid.
    ///
    /// `max_range < 0.0` disables range clamping. Points further than
    /// `max_range` are pulled in along their ray to exactly `max_range` and
    /// marked as a miss rather than a hit.
    pub fn insert(&mut self, points: &[Vec3], viewpoint: Vec3, max_range: f32) {
        if points.is_empty() {
            return;
        }

        let ranged = clamp_range(points, viewpoint, max_range);

        let max_distance = ranged
            .iter()
            .map(|r| r.distance)
            .fold(0.0f32, f32::max);
        let n_div = if max_distance > 0.0 {
            (max_distance / self.voxel_size).ceil() as i32
        } else {
            0
        };

        let free_voxels = if n_div > 0 {
            self.compute_free_voxels(&ranged, viewpoint, n_div)
        } else {
            Vec::new()
        };

        let occupied_voxels = self.compute_occupied_voxels(&ranged);

        let free_voxels = set_difference(free_voxels, &occupied_voxels);

        self.add_voxels(&free_voxels, false);
        self.add_voxels(&occupied_voxels, true);
    }

    fn compute_free_voxels(
        &self,
        ranged: &[RangedPoint],
        viewpoint: Vec3,
        n_div: i32,
    ) -> Vec<[i32; 3]> {
        let compute_for_point = |r: &RangedPoint| -> Vec<[i32; 3]> {
            let step = (r.point - viewpoint) / n_div as f32;
            let mut candidates = Vec::new();
            for j in 0..=n_div {
                let sample = viewpoint + step * j as f32;
                let base = self.point_to_grid_coord(sample);
                for offset in NEIGHBOR_OFFSETS {
                    let neighbor = [
                        base[0] + offset[0],
                        base[1] + offset[1],
                        base[2] + offset[2],
                    ];
                    if !in_range(neighbor, self.resolution) {
                        continue;
                    }
                    let center = self.voxel_center(neighbor);
                    let aabb = Aabb::from_center_size(center, self.voxel_size);
                    if aabb.intersects_segment(viewpoint, r.point) {
                        candidates.push(neighbor);
                    }
                }
            }
            candidates
        };

        #[cfg(feature = "parallel")]
        let mut all: Vec<[i32; 3]> = {
            use rayon::prelude::*;
            ranged
                .par_iter()
                .flat_map(compute_for_point)
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let mut all: Vec<[i32; 3]> = ranged.iter().flat_map(compute_for_point).collect();

        all.sort_unstable();
        all.dedup();
        all
    }

    fn compute_occupied_voxels(&self, ranged: &[RangedPoint]) -> Vec<[i32; 3]> {
        let mut occupied: Vec<[i32; 3]> = ranged
            .iter()
            .filter(|r| r.hit)
            .filter_map(|r| {
                let g = self.point_to_grid_coord(r.point);
                if in_range(g, self.resolution) {
                    Some(g)
                } else {
                    None
                }
            })
            .collect();
        occupied.sort_unstable();
        occupied.dedup();
        occupied
    }

    /// Applies one log-odds increment (`prob_hit_log` if `occupied`, else
    /// `prob_miss_log`) to every voxel in `voxels`, clamped to
    /// `[clamping_thres_min, clamping_thres_max]`. Callers must ensure
    /// `voxels` contains no duplicates within one call, since this applies
    /// a single increment per element with no accumulation across entries.
    pub fn add_voxels(&mut self, voxels: &[[i32; 3]], occupied: bool) {
        let delta = if occupied {
            self.prob_hit_log
        } else {
            self.prob_miss_log
        };
        for &g in voxels {
            if let Some(idx) = self.linear_index(g) {
                let slot = &mut self.voxels[idx];
                let base = if slot.prob_log.is_nan() {
                    0.0
                } else {
                    slot.prob_log
                };
                slot.prob_log =
                    (base + delta).clamp(self.clamping_thres_min, self.clamping_thres_max);
                slot.grid_index = g;
            }
        }
    }

    pub fn add_voxel(&mut self, voxel: [i32; 3], occupied: bool) {
        self.add_voxels(&[voxel], occupied);
    }
}

fn clamp_range(points: &[Vec3], viewpoint: Vec3, max_range: f32) -> Vec<RangedPoint> {
    points
        .iter()
        .map(|&p| {
            let delta = p - viewpoint;
            let d = delta.length();
            if max_range < 0.0 || d <= max_range {
                RangedPoint {
                    point: p,
                    distance: d,
                    hit: true,
                }
            } else {
                let clamped = if d > 0.0 {
                    viewpoint + delta * (max_range / d)
                } else {
                    viewpoint
                };
                RangedPoint {
                    point: clamped,
                    distance: max_range,
                    hit: false,
                }
            }
        })
        .collect()
}

/// Sorted set-difference: `a \ b`. Both inputs are already sorted and
/// deduplicated.
fn set_difference(a: Vec<[i32; 3]>, b: &[[i32; 3]]) -> Vec<[i32; 3]> {
    a.into_iter().filter(|g| b.binary_search(g).is_err()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_ray_marks_final_voxel_occupied_and_precedents_free() {
        // Scenario from the acceptance suite: 4^3 grid, voxel_size 1,
        // origin 0; ray from (-1.5,0.5,0.5) to (1.5,0.5,0.5).
        let mut grid = OccupancyGrid::new(1.0, 4, Vec3::ZERO);
        let viewpoint = Vec3::new(-1.5, 0.5, 0.5);
        let point = Vec3::new(1.5, 0.5, 0.5);
        grid.insert(&[point], viewpoint, -1.0);

        let last = grid.point_to_grid_coord(point);
        assert!(grid.voxel_at(last).unwrap().is_known());
        assert!(grid.voxel_at(last).unwrap().prob_log > grid.occ_prob_thres_log);
    }

    #[test]
    fn max_range_clamps_point_and_still_marks_occupied_at_clamp() {
        let mut grid = OccupancyGrid::new(1.0, 4, Vec3::ZERO);
        let viewpoint = Vec3::new(-1.5, 0.5, 0.5);
        let point = Vec3::new(1.5, 0.5, 0.5);
        grid.insert(&[point], viewpoint, 1.0);

        let clamped_point = Vec3::new(-0.5, 0.5, 0.5);
        let g = grid.point_to_grid_coord(clamped_point);
        assert!(grid.voxel_at(g).unwrap().prob_log > grid.occ_prob_thres_log);
    }

    #[test]
    fn reinserting_same_cloud_doubles_hit_log_odds_before_clamping() {
        let mut grid = OccupancyGrid::new(1.0, 4, Vec3::ZERO);
        let viewpoint = Vec3::new(-1.5, 0.5, 0.5);
        let point = Vec3::new(1.5, 0.5, 0.5);
        grid.insert(&[point], viewpoint, -1.0);
        let g = grid.point_to_grid_coord(point);
        let first = grid.voxel_at(g).unwrap().prob_log;

        grid.insert(&[point], viewpoint, -1.0);
        let second = grid.voxel_at(g).unwrap().prob_log;

        let expected = (first + grid.prob_hit_log).min(grid.clamping_thres_max);
        assert!((second - expected).abs() < 1e-4);
    }

    #[test]
    fn occupied_wins_over_free_in_same_insertion() {
        // A point whose own voxel is also swept as a candidate free voxel
        // for another ray must end up occupied, not free.
        let mut grid = OccupancyGrid::new(1.0, 6, Vec3::ZERO);
        let viewpoint = Vec3::new(-2.5, 0.5, 0.5);
        let near = Vec3::new(0.5, 0.5, 0.5);
        let far = Vec3::new(2.5, 0.5, 0.5);
        grid.insert(&[near, far], viewpoint, -1.0);

        let near_voxel = grid.point_to_grid_coord(near);
        let voxel = grid.voxel_at(near_voxel).unwrap();
        assert!(voxel.prob_log > grid.occ_prob_thres_log);
    }
}
