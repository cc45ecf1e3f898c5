//! Block types, declarative block models, and voxel picking.
#![forbid(unsafe_code)]

pub mod access;
pub mod atlas;
pub mod config;
pub mod direction;
pub mod model;
pub mod quad;
pub mod raytrace;
pub mod registry;
pub mod types;

pub use access::BlockAccess;
pub use direction::Direction;
pub use model::{Model, ModelArena, ModelLoad, ModelLoadError, ModelLoader, ModelShape};
pub use quad::{Cuboid, FaceQuad, QuadVertex};
pub use raytrace::{BlockHitResult, raytrace_block};
pub use registry::{BlockRegistry, BlockType};
pub use types::{AIR, BlockId, ModelId};
