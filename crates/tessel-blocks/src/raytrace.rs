//! Ray intersection against a single unit voxel.

use tessel_geom::{Aabb, Vec3};

use crate::direction::Direction;

/// Block hit by a ray and the face it entered through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHitResult {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub face: Direction,
}

impl BlockHitResult {
    /// Cell on the other side of the hit face, where a placed block goes.
    #[inline]
    pub fn adjacent(&self) -> (i32, i32, i32) {
        let (dx, dy, dz) = self.face.delta();
        (self.x + dx, self.y + dy, self.z + dz)
    }
}

/// Intersects the segment `start..end` (world space) with the unit cube at
/// block `(x, y, z)` and reports the face nearest to `start`.
///
/// Candidates are checked in `Direction::ALL` order and only a strictly
/// closer candidate replaces the current one, so equal distances resolve to
/// the earlier direction.
pub fn raytrace_block(x: i32, y: i32, z: i32, start: Vec3, end: Vec3) -> Option<BlockHitResult> {
    let origin = Vec3::new(x as f32, y as f32, z as f32);
    let s = start - origin;
    let e = end - origin;
    let shape = Aabb::UNIT;

    let candidates = [
        (Direction::Down, s.intermediate_with_y(e, shape.min.y)),
        (Direction::Up, s.intermediate_with_y(e, shape.max.y)),
        (Direction::North, s.intermediate_with_z(e, shape.min.z)),
        (Direction::South, s.intermediate_with_z(e, shape.max.z)),
        (Direction::West, s.intermediate_with_x(e, shape.min.x)),
        (Direction::East, s.intermediate_with_x(e, shape.max.x)),
    ];

    let mut closest: Option<(f32, Direction)> = None;
    for (dir, point) in candidates {
        let Some(p) = point else { continue };
        let inside = match dir {
            Direction::Down | Direction::Up => shape.contains_in_xz_plane(p),
            Direction::North | Direction::South => shape.contains_in_xy_plane(p),
            Direction::West | Direction::East => shape.contains_in_yz_plane(p),
        };
        if !inside {
            continue;
        }
        let dist = s.distance(p);
        if closest.is_none_or(|(best, _)| dist < best) {
            closest = Some((dist, dir));
        }
    }

    closest.map(|(_, face)| BlockHitResult { x, y, z, face })
}
