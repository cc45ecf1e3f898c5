use crate::types::BlockId;

/// Brightness of a cell that receives full light.
pub const FULL_BRIGHTNESS: f32 = 1.0;

/// Read access to world state around a block, in world-absolute coordinates.
///
/// Out-of-range coordinates are the implementor's concern; the usual answer is
/// air and full brightness.
pub trait BlockAccess {
    fn block_id(&self, x: i32, y: i32, z: i32) -> BlockId;

    /// Light level in `[0, 1]`.
    fn brightness(&self, x: i32, y: i32, z: i32) -> f32;

    /// Whether the cell is fully lit. Decides the render layer of faces that
    /// look into this cell.
    fn is_lit(&self, x: i32, y: i32, z: i32) -> bool {
        self.brightness(x, y, z) >= FULL_BRIGHTNESS
    }
}

impl<T: BlockAccess + ?Sized> BlockAccess for &T {
    #[inline]
    fn block_id(&self, x: i32, y: i32, z: i32) -> BlockId {
        (**self).block_id(x, y, z)
    }

    #[inline]
    fn brightness(&self, x: i32, y: i32, z: i32) -> f32 {
        (**self).brightness(x, y, z)
    }

    #[inline]
    fn is_lit(&self, x: i32, y: i32, z: i32) -> bool {
        (**self).is_lit(x, y, z)
    }
}
