//! Per-block face emission: neighbor culling, directional shading, and the
//! split of faces into the two render layers.

use tessel_blocks::{BlockAccess, BlockRegistry, Direction, Model};
use tessel_geom::Vec3;

use crate::constants::{CROSS_LIGHT, SHADE_NORTH_SOUTH, SHADE_VERTICAL, SHADE_WEST_EAST};
use crate::mesh_build::VertexSink;

/// Render pass a face is routed to.
///
/// `Lit` collects fully lit faces (plain shading), `Shaded` everything else
/// (drawn by the fog-attenuated pass).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderLayer {
    Lit = 0,
    Shaded = 1,
}

impl RenderLayer {
    pub const ALL: [RenderLayer; 2] = [RenderLayer::Lit, RenderLayer::Shaded];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<RenderLayer> {
        match i {
            0 => Some(RenderLayer::Lit),
            1 => Some(RenderLayer::Shaded),
            _ => None,
        }
    }

    /// Layer of a face given whether the cell it looks into is fully lit.
    #[inline]
    pub fn for_lit(fully_lit: bool) -> RenderLayer {
        if fully_lit {
            RenderLayer::Lit
        } else {
            RenderLayer::Shaded
        }
    }
}

/// Directional shade multiplier for faces pointing along `dir`.
#[inline]
pub fn face_shade(dir: Direction) -> f32 {
    match dir {
        Direction::Down | Direction::Up => SHADE_VERTICAL,
        Direction::North | Direction::South => SHADE_NORTH_SOUTH,
        Direction::West | Direction::East => SHADE_WEST_EAST,
    }
}

/// Emits block geometry from the registry's shared models.
#[derive(Clone, Copy)]
pub struct BlockRenderer<'a> {
    registry: &'a BlockRegistry,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(registry: &'a BlockRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub fn registry(&self) -> &'a BlockRegistry {
        self.registry
    }

    /// Emits the faces of the block at `(x, y, z)` that belong to `layer`.
    /// Returns how many faces were emitted. Call once per layer.
    pub fn render(
        &self,
        access: &impl BlockAccess,
        x: i32,
        y: i32,
        z: i32,
        layer: RenderLayer,
        sink: &mut impl VertexSink,
    ) -> u32 {
        let id = access.block_id(x, y, z);
        match self.registry.model_for(id) {
            Some(model) => self.render_model(model, access, x, y, z, layer, sink),
            None => 0,
        }
    }

    /// Same as [`render`](Self::render) with an explicit model.
    pub fn render_model(
        &self,
        model: &Model,
        access: &impl BlockAccess,
        x: i32,
        y: i32,
        z: i32,
        layer: RenderLayer,
        sink: &mut impl VertexSink,
    ) -> u32 {
        if model.is_cross() {
            return render_cross(model, access, x, y, z, layer, sink);
        }
        let origin = Vec3::new(x as f32, y as f32, z as f32);
        let mut rendered = 0;
        for dir in Direction::ALL {
            let (dx, dy, dz) = dir.delta();
            let (nx, ny, nz) = (x + dx, y + dy, z + dz);
            if self.registry.occludes(access.block_id(nx, ny, nz)) {
                continue;
            }
            if RenderLayer::for_lit(access.is_lit(nx, ny, nz)) != layer {
                continue;
            }
            let light = access.brightness(nx, ny, nz) * face_shade(dir);
            rendered += 1;
            for quad in model.faces(dir) {
                sink.quad(origin, quad, light);
            }
        }
        rendered
    }
}

// Crossed planes ignore neighbors; the block's own cell picks the layer and
// every quad goes out together.
fn render_cross(
    model: &Model,
    access: &impl BlockAccess,
    x: i32,
    y: i32,
    z: i32,
    layer: RenderLayer,
    sink: &mut impl VertexSink,
) -> u32 {
    if RenderLayer::for_lit(access.is_lit(x, y, z)) != layer {
        return 0;
    }
    let origin = Vec3::new(x as f32, y as f32, z as f32);
    for (_, quad) in model.iter() {
        sink.quad(origin, quad, CROSS_LIGHT);
    }
    1
}
