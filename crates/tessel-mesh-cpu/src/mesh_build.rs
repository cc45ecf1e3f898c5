use tessel_blocks::FaceQuad;
use tessel_geom::Vec3;

use crate::constants::VERTS_PER_QUAD;

/// Append-only consumer of emitted vertices. Every four consecutive vertices
/// form one quad in the winding they were emitted.
pub trait VertexSink {
    fn vertex(&mut self, pos: Vec3, uv: [f32; 2], color: [f32; 3]);

    /// Emits `quad` translated by `origin` with a uniform gray `light`.
    #[inline]
    fn quad(&mut self, origin: Vec3, quad: &FaceQuad, light: f32) {
        for v in &quad.vertices {
            let [x, y, z] = v.pos;
            self.vertex(origin + Vec3::new(x, y, z), v.uv, [light; 3]);
        }
    }
}

/// CPU-side vertex arrays for one render layer.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub uv: Vec<f32>,
    pub col: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for reuse across frames.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.uv.clear();
        self.col.clear();
        self.idx.clear();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertex_count() / VERTS_PER_QUAD
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    #[inline]
    pub fn color(&self, i: usize) -> [f32; 3] {
        [self.col[i * 3], self.col[i * 3 + 1], self.col[i * 3 + 2]]
    }
}

impl VertexSink for MeshBuild {
    fn vertex(&mut self, pos: Vec3, uv: [f32; 2], color: [f32; 3]) {
        self.pos.extend_from_slice(&[pos.x, pos.y, pos.z]);
        self.uv.extend_from_slice(&uv);
        self.col.extend_from_slice(&color);
        let n = self.vertex_count();
        if n % VERTS_PER_QUAD == 0 {
            // Two triangles over the quad just completed
            let base = (n - VERTS_PER_QUAD) as u32;
            self.idx
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }
}
