//! Face quad construction for the six axis directions.
//!
//! Vertex positions follow a fixed per-direction winding; the rotation step
//! only changes which UV corner lands on which vertex.

use crate::atlas::UvRect;
use crate::direction::Direction;

/// One vertex: block-local position and atlas UV.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct QuadVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

/// Four vertices of one rectangular face in block-local space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FaceQuad {
    pub vertices: [QuadVertex; 4],
}

/// Axis-aligned cuboid in block-local units `[0,1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cuboid {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Cuboid {
    pub const FULL: Cuboid = Cuboid {
        min: [0.0; 3],
        max: [1.0; 3],
    };

    #[inline]
    pub const fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }
}

/// Normalizes a rotation in degrees to a step in `0..4`.
#[inline]
pub fn rotation_step(degrees: i32) -> u8 {
    (degrees / 90).rem_euclid(4) as u8
}

impl FaceQuad {
    #[inline]
    pub fn positions(&self) -> [[f32; 3]; 4] {
        self.vertices.map(|v| v.pos)
    }

    #[inline]
    pub fn uvs(&self) -> [[f32; 2]; 4] {
        self.vertices.map(|v| v.uv)
    }

    /// Builds the face of `cuboid` facing `dir`, mapping `uv` with `rotation`
    /// quarter turns (taken modulo 4).
    pub fn build(cuboid: Cuboid, uv: UvRect, dir: Direction, rotation: u8) -> FaceQuad {
        let positions = face_positions(cuboid, dir);
        let base = base_uvs(uv, dir);
        let r = (rotation % 4) as usize;
        let mut vertices = [QuadVertex::default(); 4];
        for (i, v) in vertices.iter_mut().enumerate() {
            v.pos = positions[i];
            v.uv = base[(i + r) % 4];
        }
        FaceQuad { vertices }
    }

    /// Builds a quad from explicit vertices, used for non-axis-aligned geometry.
    #[inline]
    pub fn from_vertices(vertices: [([f32; 3], [f32; 2]); 4]) -> FaceQuad {
        FaceQuad {
            vertices: vertices.map(|(pos, uv)| QuadVertex { pos, uv }),
        }
    }
}

fn face_positions(c: Cuboid, dir: Direction) -> [[f32; 3]; 4] {
    let [x0, y0, z0] = c.min;
    let [x1, y1, z1] = c.max;
    match dir {
        Direction::Down => [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]],
        Direction::Up => [[x0, y1, z0], [x0, y1, z1], [x1, y1, z1], [x1, y1, z0]],
        Direction::North => [[x0, y0, z0], [x0, y1, z0], [x1, y1, z0], [x1, y0, z0]],
        Direction::South => [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
        Direction::West => [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]],
        Direction::East => [[x1, y0, z0], [x1, y1, z0], [x1, y1, z1], [x1, y0, z1]],
    }
}

// UV corner per vertex at rotation 0. Side faces put v1 (the bottom of the
// tile) on the bottom vertices.
fn base_uvs(uv: UvRect, dir: Direction) -> [[f32; 2]; 4] {
    let UvRect { u0, v0, u1, v1 } = uv;
    match dir {
        Direction::Down => [[u0, v0], [u1, v0], [u1, v1], [u0, v1]],
        Direction::Up => [[u0, v0], [u0, v1], [u1, v1], [u1, v0]],
        Direction::North | Direction::East => [[u1, v1], [u1, v0], [u0, v0], [u0, v1]],
        Direction::South | Direction::West => [[u0, v1], [u1, v1], [u1, v0], [u0, v0]],
    }
}
