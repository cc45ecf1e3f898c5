//! Declarative block models.
//!
//! A model description is a small JSON document listing cuboids with per-face
//! texture settings, or naming the `builtin/cross` parent for sprite-like
//! blocks. Loading turns it into per-direction lists of [`FaceQuad`]s that are
//! shared read-only by every block of the type.

use std::collections::{BTreeMap, HashMap};
use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::atlas::{TILE_SIZE, sub_tile_uv, tile_uv};
use crate::direction::Direction;
use crate::quad::{Cuboid, FaceQuad, rotation_step};
use crate::types::ModelId;

/// Parent name selecting the crossed-planes shape.
pub const CROSS_PARENT: &str = "builtin/cross";

/// Model descriptions express bounds and UVs in sixteenths of a block.
const MODEL_UNITS: f32 = 16.0;

// Angle of the first cross plane.
const CROSS_ANGLE_DEG: f64 = 45.0;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model description: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown face `{0}` in cuboid")]
    UnknownFace(String),
}

// --- Description format ---

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ModelDesc {
    #[serde(default)]
    pub parent: Option<String>,
    // Texture used by the cross shape.
    #[serde(default)]
    pub texture_index: Option<u32>,
    #[serde(default)]
    pub cuboids: Vec<CuboidDesc>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CuboidDesc {
    // x0, y0, z0, x1, y1, z1 in 0..16 units
    #[serde(default)]
    pub bounds: Option<[f32; 6]>,
    #[serde(default)]
    pub faces: Option<BTreeMap<String, FaceDesc>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FaceDesc {
    pub texture_index: u32,
    // u, v, width, height in pixels inside the tile
    #[serde(default)]
    pub uv: Option<[f32; 4]>,
    // degrees; only quarter turns are meaningful
    #[serde(default)]
    pub rotation: Option<i32>,
}

// --- Runtime model ---

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ModelShape {
    #[default]
    Cuboids,
    Cross,
}

/// Per-direction face quads of one block type.
///
/// Every direction is always present; an empty list means nothing is drawn
/// on that side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    faces: [Vec<FaceQuad>; 6],
    shape: ModelShape,
}

impl Model {
    /// A model with no quads in any direction.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn faces(&self, dir: Direction) -> &[FaceQuad] {
        &self.faces[dir.index()]
    }

    #[inline]
    pub fn shape(&self) -> ModelShape {
        self.shape
    }

    #[inline]
    pub fn is_cross(&self) -> bool {
        self.shape == ModelShape::Cross
    }

    pub fn quad_count(&self) -> usize {
        self.faces.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.iter().all(Vec::is_empty)
    }

    /// Iterates `(direction, quad)` over all quads in direction order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &FaceQuad)> {
        Direction::ALL
            .into_iter()
            .flat_map(move |d| self.faces(d).iter().map(move |q| (d, q)))
    }

    #[inline]
    fn push(&mut self, dir: Direction, quad: FaceQuad) {
        self.faces[dir.index()].push(quad);
    }

    /// Builds a model from a parsed description.
    pub fn from_desc(desc: &ModelDesc) -> Result<Model, ModelLoadError> {
        let mut model = Model::empty();
        if desc.parent.as_deref() == Some(CROSS_PARENT) {
            model.shape = ModelShape::Cross;
            add_cross_planes(&mut model, desc.texture_index.unwrap_or(0));
        }
        for cuboid in &desc.cuboids {
            let (Some(bounds), Some(faces)) = (cuboid.bounds, cuboid.faces.as_ref()) else {
                continue;
            };
            add_cuboid(&mut model, bounds, faces)?;
        }
        Ok(model)
    }

    pub fn from_json_str(json: &str) -> Result<Model, ModelLoadError> {
        let desc: ModelDesc = serde_json::from_str(json)?;
        Self::from_desc(&desc)
    }
}

fn add_cuboid(
    model: &mut Model,
    bounds: [f32; 6],
    faces: &BTreeMap<String, FaceDesc>,
) -> Result<(), ModelLoadError> {
    let [x0, y0, z0, x1, y1, z1] = bounds;
    let cuboid = Cuboid::new(
        [x0 / MODEL_UNITS, y0 / MODEL_UNITS, z0 / MODEL_UNITS],
        [x1 / MODEL_UNITS, y1 / MODEL_UNITS, z1 / MODEL_UNITS],
    );
    for (name, face) in faces {
        let dir: Direction = name
            .parse()
            .map_err(|_| ModelLoadError::UnknownFace(name.clone()))?;
        let [u, v, us, vs] = face
            .uv
            .unwrap_or_else(|| default_face_uv(dir, y0, y1));
        let uv = sub_tile_uv(face.texture_index, u, v, us, vs);
        let rotation = face.rotation.map(rotation_step).unwrap_or(0);
        model.push(dir, FaceQuad::build(cuboid, uv, dir, rotation));
    }
    Ok(())
}

// Side faces crop the tile to the cuboid's height, anchored at the tile's
// bottom edge, so partial-height blocks keep the lower part of their texture.
fn default_face_uv(dir: Direction, y0: f32, y1: f32) -> [f32; 4] {
    let full = TILE_SIZE as f32;
    if dir.is_vertical() {
        [0.0, 0.0, full, full]
    } else {
        [0.0, MODEL_UNITS - y1, full, y1 - y0]
    }
}

fn add_cross_planes(model: &mut Model, texture_index: u32) {
    let uv = tile_uv(texture_index);
    let (u0, v0, u1, v1) = (uv.u0, uv.v0, uv.u1, uv.v1);
    let rads = CROSS_ANGLE_DEG.to_radians();
    let (y0, y1) = (0.0f32, 1.0f32);
    for r in 0..2 {
        let angle = r as f64 * FRAC_PI_2 + rads;
        let xa = (angle.sin() * 0.5) as f32;
        let za = (angle.cos() * 0.5) as f32;
        let (x0, x1) = (0.5 - xa, 0.5 + xa);
        let (z0, z1) = (0.5 - za, 0.5 + za);

        let front = FaceQuad::from_vertices([
            ([x0, y1, z0], [u1, v0]),
            ([x1, y1, z1], [u0, v0]),
            ([x1, y0, z1], [u0, v1]),
            ([x0, y0, z0], [u1, v1]),
        ]);
        let back = FaceQuad::from_vertices([
            ([x1, y1, z1], [u0, v0]),
            ([x0, y1, z0], [u1, v0]),
            ([x0, y0, z0], [u1, v1]),
            ([x1, y0, z1], [u0, v1]),
        ]);
        let (front_dir, back_dir) = if r == 0 {
            (Direction::North, Direction::South)
        } else {
            (Direction::West, Direction::East)
        };
        model.push(front_dir, front);
        model.push(back_dir, back);
    }
}

// --- Loading ---

/// Result of loading one model: either the real geometry or the empty
/// fallback together with the reason.
#[derive(Debug)]
pub enum ModelLoad {
    Loaded(Model),
    Degraded { model: Model, error: ModelLoadError },
}

impl ModelLoad {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelLoad::Loaded(_))
    }

    pub fn model(&self) -> &Model {
        match self {
            ModelLoad::Loaded(m) | ModelLoad::Degraded { model: m, .. } => m,
        }
    }

    pub fn into_model(self) -> Model {
        match self {
            ModelLoad::Loaded(m) | ModelLoad::Degraded { model: m, .. } => m,
        }
    }

    pub fn error(&self) -> Option<&ModelLoadError> {
        match self {
            ModelLoad::Loaded(_) => None,
            ModelLoad::Degraded { error, .. } => Some(error),
        }
    }
}

/// Reads `<dir>/<name>.json` model descriptions.
#[derive(Clone, Debug)]
pub struct ModelLoader {
    dir: PathBuf,
}

impl ModelLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    pub fn try_load(&self, name: &str) -> Result<Model, ModelLoadError> {
        let path = self.path_for(name);
        let raw = fs::read_to_string(&path).map_err(|source| ModelLoadError::Io {
            path: path.clone(),
            source,
        })?;
        Model::from_json_str(&raw)
    }

    /// Loads `name`, degrading to an empty model on any failure.
    pub fn load(&self, name: &str) -> ModelLoad {
        match self.try_load(name) {
            Ok(model) => {
                log::debug!("loaded model `{}` ({} quads)", name, model.quad_count());
                ModelLoad::Loaded(model)
            }
            Err(error) => {
                log::warn!("model `{}` failed to load, rendering nothing: {}", name, error);
                ModelLoad::Degraded {
                    model: Model::empty(),
                    error,
                }
            }
        }
    }
}

/// Dense storage of loaded models; block types refer to entries by `ModelId`.
#[derive(Default, Debug)]
pub struct ModelArena {
    models: Vec<Model>,
    by_name: HashMap<String, ModelId>,
    degraded: Vec<(String, ModelLoadError)>,
}

impl ModelArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, model: Model) -> ModelId {
        let id = ModelId(self.models.len() as u16);
        self.models.push(model);
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Returns the id of `name`, loading it through `loader` on first use.
    pub fn load_or_get(&mut self, loader: &ModelLoader, name: &str) -> ModelId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        match loader.load(name) {
            ModelLoad::Loaded(model) => self.insert(name, model),
            ModelLoad::Degraded { model, error } => {
                self.degraded.push((name.to_string(), error));
                self.insert(name, model)
            }
        }
    }

    #[inline]
    pub fn get(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id.0 as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<ModelId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Models that fell back to empty geometry, with the reason.
    pub fn degraded(&self) -> &[(String, ModelLoadError)] {
        &self.degraded
    }
}
