//! CPU meshing crate: per-block face emission into layered vertex buffers.
#![forbid(unsafe_code)]

mod build;
mod constants;
mod mesh_build;
mod render;

pub use build::{LayeredMesh, build_region};
pub use mesh_build::{MeshBuild, VertexSink};
pub use render::{BlockRenderer, RenderLayer, face_shade};
