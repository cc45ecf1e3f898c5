//! Minimal geometry types shared by the engine crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Squared segment extent along one axis below which the segment is treated as
/// parallel to a plane on that axis.
const PARALLEL_EPS_SQ: f32 = 1.0e-7;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn distance(self, rhs: Vec3) -> f32 {
        (rhs - self).length()
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `rhs`.
    #[inline]
    pub fn lerp(self, rhs: Vec3, t: f32) -> Vec3 {
        self + (rhs - self) * t
    }

    /// Point on the segment `self..end` whose x equals `x`.
    /// Returns `None` if the segment is parallel to the plane or does not reach it.
    #[inline]
    pub fn intermediate_with_x(self, end: Vec3, x: f32) -> Option<Vec3> {
        segment_param(self.x, end.x, x).map(|t| self.lerp(end, t))
    }

    /// Point on the segment `self..end` whose y equals `y`.
    #[inline]
    pub fn intermediate_with_y(self, end: Vec3, y: f32) -> Option<Vec3> {
        segment_param(self.y, end.y, y).map(|t| self.lerp(end, t))
    }

    /// Point on the segment `self..end` whose z equals `z`.
    #[inline]
    pub fn intermediate_with_z(self, end: Vec3, z: f32) -> Option<Vec3> {
        segment_param(self.z, end.z, z).map(|t| self.lerp(end, t))
    }
}

#[inline]
fn segment_param(a: f32, b: f32, plane: f32) -> Option<f32> {
    let d = b - a;
    if d * d < PARALLEL_EPS_SQ {
        return None;
    }
    let t = (plane - a) / d;
    if (0.0..=1.0).contains(&t) { Some(t) } else { None }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The full-block voxel shape `[0,1]^3`.
    pub const UNIT: Aabb = Aabb {
        min: Vec3::ZERO,
        max: Vec3::ONE,
    };

    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn translated(self, by: Vec3) -> Aabb {
        Aabb::new(self.min + by, self.max + by)
    }

    /// Boundary-inclusive containment of `p` projected onto the XZ plane.
    #[inline]
    pub fn contains_in_xz_plane(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.z >= self.min.z && p.z <= self.max.z
    }

    /// Boundary-inclusive containment of `p` projected onto the XY plane.
    #[inline]
    pub fn contains_in_xy_plane(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Boundary-inclusive containment of `p` projected onto the YZ plane.
    #[inline]
    pub fn contains_in_yz_plane(&self, p: Vec3) -> bool {
        p.y >= self.min.y && p.y <= self.max.y && p.z >= self.min.z && p.z <= self.max.z
    }

    /// Strict overlap test; boxes that only touch do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
            && self.max.z > other.min.z
            && self.min.z < other.max.z
    }
}
