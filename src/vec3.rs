//! Shared 3D geometry primitives used by both the graph and the occupancy grid.

pub use glam::Vec3;

/// Axis-aligned bounding box of a single voxel, side `size`, centred at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_size(center: Vec3, size: f32) -> Self {
        let half = Vec3::splat(size * 0.5);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Slab-method ray/segment-vs-AABB intersection test.
    ///
    /// `origin` and `end` bound a finite segment rather than an infinite ray:
    /// a hit only counts if the intersection interval overlaps `[0, 1]` in
    /// the segment's own parametrisation.
    pub fn intersects_segment(&self, origin: Vec3, end: Vec3) -> bool {
        let dir = end - origin;
        let mut t_min = 0.0f32;
        let mut t_max = 1.0f32;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let lo = self.min[axis];
            let hi = self.max[axis];

            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return false;
                }
                continue;
            }

            let inv_d = 1.0 / d;
            let mut t0 = (lo - o) * inv_d;
            let mut t1 = (hi - o) * inv_d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
        true
    }
}
