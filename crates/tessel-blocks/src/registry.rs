use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{BlockDef, BlocksConfig};
use super::direction::Direction;
use super::model::{Model, ModelArena, ModelLoader};
use super::types::{AIR, BlockId, ModelId};

#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    // Texture index per face in Direction order
    pub textures: [u32; 6],
    pub model: Option<ModelId>,
    pub collision: bool,
    pub occludes: bool,
}

impl BlockType {
    fn air() -> Self {
        BlockType {
            id: AIR,
            name: "air".to_string(),
            textures: [0; 6],
            model: None,
            collision: false,
            occludes: false,
        }
    }

    // Fills id gaps left by the config; unknown ids behave like opaque blocks
    // with no geometry.
    fn placeholder(id: BlockId) -> Self {
        BlockType {
            id,
            name: String::new(),
            textures: [0; 6],
            model: None,
            collision: true,
            occludes: true,
        }
    }

    #[inline]
    pub fn texture(&self, dir: Direction) -> u32 {
        self.textures[dir.index()]
    }
}

/// Expands 1 (all faces), 3 (down, up, sides) or 6 declared texture indices
/// to one index per direction.
pub fn expand_textures(declared: &[u32]) -> Result<[u32; 6], Box<dyn Error>> {
    match *declared {
        [all] => Ok([all; 6]),
        [down, up, side] => Ok([down, up, side, side, side, side]),
        [a, b, c, d, e, f] => Ok([a, b, c, d, e, f]),
        _ => Err(format!(
            "expected 1, 3 or 6 texture indices, got {}",
            declared.len()
        )
        .into()),
    }
}

#[derive(Debug)]
pub struct BlockRegistry {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    pub models: ModelArena,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    /// A registry holding only air.
    pub fn new() -> Self {
        Self {
            blocks: vec![BlockType::air()],
            by_name: HashMap::from([("air".to_string(), AIR)]),
            models: ModelArena::new(),
        }
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// Shared geometry of block `id`, if it has any.
    #[inline]
    pub fn model_for(&self, id: BlockId) -> Option<&Model> {
        self.get(id)
            .and_then(|ty| ty.model)
            .and_then(|mid| self.models.get(mid))
    }

    /// Whether block `id` hides the neighboring face it touches.
    /// Ids outside the registry count as occluding.
    #[inline]
    pub fn occludes(&self, id: BlockId) -> bool {
        if id == AIR {
            return false;
        }
        self.get(id).map(|ty| ty.occludes).unwrap_or(true)
    }

    #[inline]
    pub fn has_collision(&self, id: BlockId) -> bool {
        self.get(id).map(|ty| ty.collision).unwrap_or(true)
    }

    /// Loads `blocks.toml`; model files resolve against `models_dir`.
    pub fn load_from_paths(
        blocks_path: impl AsRef<Path>,
        models_dir: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let blocks_toml = fs::read_to_string(blocks_path)?;
        let cfg: BlocksConfig = toml::from_str(&blocks_toml)?;
        Self::from_config(cfg, &ModelLoader::new(models_dir.as_ref()))
    }

    pub fn from_toml_str(toml_str: &str, loader: &ModelLoader) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg, loader)
    }

    pub fn from_config(cfg: BlocksConfig, loader: &ModelLoader) -> Result<Self, Box<dyn Error>> {
        let mut reg = BlockRegistry::new();
        let mut defined: Vec<bool> = vec![false];
        for def in cfg.blocks.into_iter() {
            let id = def.id.unwrap_or(reg.blocks.len() as u16);
            if id == AIR {
                check_air_def(&def)?;
                reg.blocks[0].name = def.name;
                continue;
            }
            if defined.get(id as usize).copied().unwrap_or(false) {
                return Err(format!("block id {} defined twice (`{}`)", id, def.name).into());
            }
            let ty = reg.compile_block(id, def, loader)?;
            if reg.blocks.len() <= id as usize {
                reg.blocks
                    .resize_with(id as usize + 1, || BlockType::placeholder(0));
                defined.resize(id as usize + 1, false);
            }
            reg.blocks[id as usize] = ty;
            defined[id as usize] = true;
        }
        for (i, ty) in reg.blocks.iter_mut().enumerate() {
            if !defined[i] && i != AIR as usize {
                *ty = BlockType::placeholder(i as BlockId);
            }
        }
        reg.by_name = reg
            .blocks
            .iter()
            .filter(|t| !t.name.is_empty())
            .map(|t| (t.name.clone(), t.id))
            .collect();
        log::info!(
            "block registry: {} ids, {} models ({} degraded)",
            reg.blocks.len(),
            reg.models.len(),
            reg.models.degraded().len()
        );
        Ok(reg)
    }

    fn compile_block(
        &mut self,
        id: BlockId,
        def: BlockDef,
        loader: &ModelLoader,
    ) -> Result<BlockType, Box<dyn Error>> {
        let textures = expand_textures(&def.textures)
            .map_err(|e| format!("block `{}`: {}", def.name, e))?;
        let model = def
            .model
            .as_deref()
            .map(|name| self.models.load_or_get(loader, name));
        Ok(BlockType {
            id,
            name: def.name,
            textures,
            model,
            collision: def.collision.unwrap_or(true),
            occludes: def.occludes.unwrap_or(true),
        })
    }
}

fn check_air_def(def: &BlockDef) -> Result<(), Box<dyn Error>> {
    if def.model.is_some() || !def.textures.is_empty() {
        return Err(format!("block id 0 is reserved for air, `{}` may not carry a model", def.name).into());
    }
    if def.collision == Some(true) || def.occludes == Some(true) {
        return Err("air cannot collide or occlude".into());
    }
    Ok(())
}
