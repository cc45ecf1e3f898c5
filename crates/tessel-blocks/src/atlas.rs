//! Texture atlas indexing: flat texture index to normalized UV rectangle.
//!
//! The atlas is a single 256x256 image cut into a 16x16 grid of 16px tiles.
//! Indices past 255 are not rejected; they wrap through the same arithmetic.

/// Edge length of one tile in pixels.
pub const TILE_SIZE: u32 = 16;
/// Edge length of the atlas image in pixels.
pub const ATLAS_SIZE: u32 = 256;
/// Tiles per atlas row.
pub const TILES_PER_ROW: u32 = ATLAS_SIZE / TILE_SIZE;

/// Normalized UV rectangle `(u0, v0)-(u1, v1)` in atlas space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

/// Pixel-space origin `(x, y)` of tile `index`.
#[inline]
pub fn tile_origin(index: u32) -> (u32, u32) {
    (
        (index % TILES_PER_ROW) * TILE_SIZE,
        (index / TILES_PER_ROW) * TILE_SIZE,
    )
}

/// UV rectangle covering the whole tile `index`.
#[inline]
pub fn tile_uv(index: u32) -> UvRect {
    sub_tile_uv(index, 0.0, 0.0, TILE_SIZE as f32, TILE_SIZE as f32)
}

/// UV rectangle of a pixel sub-rectangle of tile `index`.
/// `(u, v)` is the pixel offset inside the tile, `(us, vs)` the pixel size.
#[inline]
pub fn sub_tile_uv(index: u32, u: f32, v: f32, us: f32, vs: f32) -> UvRect {
    let (tx, ty) = tile_origin(index);
    let (tx, ty) = (tx as f32, ty as f32);
    let size = ATLAS_SIZE as f32;
    UvRect {
        u0: (tx + u) / size,
        v0: (ty + v) / size,
        u1: (tx + u + us) / size,
        v1: (ty + v + vs) / size,
    }
}
