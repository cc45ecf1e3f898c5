use std::time::Instant;

use tessel_blocks::{AIR, BlockAccess};

use crate::mesh_build::MeshBuild;
use crate::render::{BlockRenderer, RenderLayer};

/// Both render layers of a meshed region.
#[derive(Default, Clone, Debug)]
pub struct LayeredMesh {
    pub layers: [MeshBuild; 2],
    pub faces: [u32; 2],
}

impl LayeredMesh {
    #[inline]
    pub fn layer(&self, layer: RenderLayer) -> &MeshBuild {
        &self.layers[layer.index()]
    }

    #[inline]
    pub fn layer_mut(&mut self, layer: RenderLayer) -> &mut MeshBuild {
        &mut self.layers[layer.index()]
    }

    pub fn total_faces(&self) -> u32 {
        self.faces.iter().sum()
    }

    pub fn clear_keep_capacity(&mut self) {
        for mb in &mut self.layers {
            mb.clear_keep_capacity();
        }
        self.faces = [0; 2];
    }
}

/// Meshes every non-air cell in the inclusive box `min..=max`, running the
/// renderer once per layer per cell.
pub fn build_region(
    renderer: &BlockRenderer<'_>,
    access: &impl BlockAccess,
    min: (i32, i32, i32),
    max: (i32, i32, i32),
) -> LayeredMesh {
    let started = Instant::now();
    let mut out = LayeredMesh::default();
    for y in min.1..=max.1 {
        for z in min.2..=max.2 {
            for x in min.0..=max.0 {
                if access.block_id(x, y, z) == AIR {
                    continue;
                }
                for layer in RenderLayer::ALL {
                    let n = renderer.render(access, x, y, z, layer, out.layer_mut(layer));
                    out.faces[layer.index()] += n;
                }
            }
        }
    }
    log::debug!(
        "meshed region {:?}..={:?}: {} lit + {} shaded faces in {:?}",
        min,
        max,
        out.faces[0],
        out.faces[1],
        started.elapsed()
    );
    out
}
