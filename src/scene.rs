//! Demo scene description (`scene.toml`) and its expansion into a [`World`].

use std::error::Error;
use std::path::Path;

use serde::Deserialize;
use tessel_blocks::BlockRegistry;

use crate::world::{DEFAULT_SHADOW_BRIGHTNESS, World};

#[derive(Deserialize, Debug, Clone)]
pub struct SceneConfig {
    #[serde(default = "default_size")]
    pub size: [usize; 3],
    #[serde(default = "default_shadow")]
    pub shadow_brightness: f32,
    #[serde(default)]
    pub layers: Vec<LayerDef>,
    #[serde(default)]
    pub place: Vec<PlaceDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LayerDef {
    pub block: String,
    pub height: usize,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlaceDef {
    pub block: String,
    #[serde(default)]
    pub at: Vec<[i32; 3]>,
}

fn default_size() -> [usize; 3] {
    [16, 8, 16]
}

fn default_shadow() -> f32 {
    DEFAULT_SHADOW_BRIGHTNESS
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            shadow_brightness: default_shadow(),
            layers: Vec::new(),
            place: Vec::new(),
        }
    }
}

impl SceneConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    /// Reads `path`, falling back to an empty default scene when it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            log::info!("{} not found; using an empty scene", path.display());
            return Ok(Self::default());
        }
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn build(&self, reg: &BlockRegistry) -> Result<World, Box<dyn Error>> {
        let [sx, sy, sz] = self.size;
        let mut world = World::new(sx, sy, sz).with_shadow_brightness(self.shadow_brightness);
        let mut y = 0usize;
        for layer in &self.layers {
            let id = lookup(reg, &layer.block)?;
            for _ in 0..layer.height {
                if y >= sy {
                    break;
                }
                for z in 0..sz {
                    for x in 0..sx {
                        world.set_block_id(x as i32, y as i32, z as i32, id, reg);
                    }
                }
                y += 1;
            }
        }
        for p in &self.place {
            let id = lookup(reg, &p.block)?;
            for &[x, y, z] in &p.at {
                if !world.set_block_id(x, y, z, id, reg) {
                    log::warn!("scene placement of {} at ({x},{y},{z}) is out of range", p.block);
                }
            }
        }
        Ok(world)
    }
}

fn lookup(reg: &BlockRegistry, name: &str) -> Result<u16, Box<dyn Error>> {
    reg.id_by_name(name)
        .ok_or_else(|| format!("scene references unknown block '{}'", name).into())
}
