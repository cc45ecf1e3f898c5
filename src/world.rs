//! Fixed-size dense block grid with per-column skylight.

use tessel_blocks::{AIR, BlockAccess, BlockId, BlockRegistry};

pub const DEFAULT_SHADOW_BRIGHTNESS: f32 = 0.8;

#[derive(Clone, Debug)]
pub struct World {
    pub sx: usize,
    pub sy: usize,
    pub sz: usize,
    blocks: Vec<BlockId>,
    // Per (x, z): y of the topmost light-blocking block, or -1 when none
    light_depths: Vec<i32>,
    shadow_brightness: f32,
}

impl World {
    pub fn new(sx: usize, sy: usize, sz: usize) -> Self {
        Self {
            sx,
            sy,
            sz,
            blocks: vec![AIR; sx * sy * sz],
            light_depths: vec![-1; sx * sz],
            shadow_brightness: DEFAULT_SHADOW_BRIGHTNESS,
        }
    }

    pub fn with_shadow_brightness(mut self, b: f32) -> Self {
        self.shadow_brightness = b.clamp(0.0, 1.0);
        self
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.sz + z) * self.sx + x
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.sx
            && (y as usize) < self.sy
            && (z as usize) < self.sz
    }

    /// Writes `id` at `(x, y, z)` and refreshes that column's light.
    /// Returns false when the cell is outside the grid.
    pub fn set_block_id(&mut self, x: i32, y: i32, z: i32, id: BlockId, reg: &BlockRegistry) -> bool {
        if !self.contains(x, y, z) {
            return false;
        }
        let i = self.idx(x as usize, y as usize, z as usize);
        self.blocks[i] = id;
        self.recalc_column(x as usize, z as usize, reg);
        true
    }

    fn recalc_column(&mut self, x: usize, z: usize, reg: &BlockRegistry) {
        let mut depth = -1;
        for y in (0..self.sy).rev() {
            if blocks_light(reg, self.blocks[self.idx(x, y, z)]) {
                depth = y as i32;
                break;
            }
        }
        self.light_depths[z * self.sx + x] = depth;
    }

    pub fn light_depth(&self, x: i32, z: i32) -> Option<i32> {
        if !self.contains(x, 0, z) {
            return None;
        }
        Some(self.light_depths[z as usize * self.sx + x as usize])
    }

    /// Inclusive bounds of the grid, for region meshing.
    pub fn bounds(&self) -> ((i32, i32, i32), (i32, i32, i32)) {
        (
            (0, 0, 0),
            (self.sx as i32 - 1, self.sy as i32 - 1, self.sz as i32 - 1),
        )
    }

    pub fn count_non_air(&self) -> usize {
        self.blocks.iter().filter(|&&b| b != AIR).count()
    }
}

#[inline]
fn blocks_light(reg: &BlockRegistry, id: BlockId) -> bool {
    id != AIR && reg.occludes(id)
}

impl BlockAccess for World {
    fn block_id(&self, x: i32, y: i32, z: i32) -> BlockId {
        if !self.contains(x, y, z) {
            return AIR;
        }
        self.blocks[self.idx(x as usize, y as usize, z as usize)]
    }

    fn brightness(&self, x: i32, y: i32, z: i32) -> f32 {
        match self.light_depth(x, z) {
            Some(depth) if y <= depth => self.shadow_brightness,
            _ => 1.0,
        }
    }
}
