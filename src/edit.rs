use tessel_blocks::{AIR, BlockAccess, BlockHitResult, BlockId, BlockRegistry};

use crate::world::World;

/// Clears the picked block. Returns the id that was there.
pub fn remove_block(world: &mut World, reg: &BlockRegistry, hit: &BlockHitResult) -> Option<BlockId> {
    let prev = world.block_id(hit.x, hit.y, hit.z);
    if prev == AIR || !world.set_block_id(hit.x, hit.y, hit.z, AIR, reg) {
        return None;
    }
    log::debug!("removed block {} at ({}, {}, {})", prev, hit.x, hit.y, hit.z);
    Some(prev)
}

/// Places `id` in the cell in front of the hit face. Only air cells inside the
/// world are replaced.
pub fn place_block(world: &mut World, reg: &BlockRegistry, hit: &BlockHitResult, id: BlockId) -> bool {
    let (x, y, z) = hit.adjacent();
    if world.block_id(x, y, z) != AIR || !world.set_block_id(x, y, z, id, reg) {
        return false;
    }
    log::debug!("placed block {} at ({}, {}, {}) against {}", id, x, y, z, hit.face);
    true
}
