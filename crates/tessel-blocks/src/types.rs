// Numeric block id: dense registry index and world-grid encoding.
pub type BlockId = u16;

/// Reserved id of the empty block.
pub const AIR: BlockId = 0;

/// Handle into a `ModelArena`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ModelId(pub u16);
