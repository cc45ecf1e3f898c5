//! Shared constants for tessel-mesh-cpu.

// Directional shade applied on top of neighbor brightness
pub(crate) const SHADE_VERTICAL: f32 = 1.0;
pub(crate) const SHADE_NORTH_SOUTH: f32 = 0.8;
pub(crate) const SHADE_WEST_EAST: f32 = 0.6;

// Cross-shaped blocks are drawn unshaded
pub(crate) const CROSS_LIGHT: f32 = 1.0;

pub(crate) const VERTS_PER_QUAD: usize = 4;
