use serde::Deserialize;

// Top-level blocks config file
#[derive(Deserialize, Debug, Clone)]
pub struct BlocksConfig {
    pub blocks: Vec<BlockDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u16>,
    // 1 entry: all faces; 3 entries: down, up, sides; 6 entries: one per direction.
    #[serde(default)]
    pub textures: Vec<u32>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub collision: Option<bool>,
    // Whether this block hides the faces of its neighbors.
    #[serde(default)]
    pub occludes: Option<bool>,
}
