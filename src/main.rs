mod assets;
mod edit;
mod raycast;
mod scene;
mod world;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tessel_blocks::{BlockAccess, BlockRegistry, Direction};
use tessel_geom::Vec3;
use tessel_mesh_cpu::{BlockRenderer, RenderLayer, build_region};

use crate::scene::SceneConfig;

#[derive(Parser, Debug)]
#[command(name = "tessel", about = "Voxel block models: load, mesh and pick")]
struct Cli {
    /// Directory containing `assets/` (defaults to TESSEL_ASSETS or a nearby search)
    #[arg(long)]
    assets_root: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Load the block registry and report every block's model
    Models,
    /// Mesh the demo scene and print per-layer totals
    Mesh {
        /// Override the scene's shadow brightness
        #[arg(long)]
        shadow: Option<f32>,
    },
    /// Cast a ray into the demo scene, optionally editing the picked block
    Pick {
        /// Eye position as `x,y,z`
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        from: Vec3,
        /// View direction as `x,y,z`
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        dir: Vec3,
        #[arg(long, default_value_t = raycast::PICK_REACH)]
        reach: f32,
        /// Place this block against the hit face
        #[arg(long, conflicts_with = "remove")]
        place: Option<String>,
        /// Remove the hit block
        #[arg(long)]
        remove: bool,
    },
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z, got '{}'", s));
    };
    let num = |p: &str| p.parse::<f32>().map_err(|e| format!("'{}': {}", p, e));
    Ok(Vec3::new(num(x)?, num(y)?, num(z)?))
}

struct Assets {
    root: PathBuf,
    registry: BlockRegistry,
}

fn load_assets(cli_root: Option<String>) -> Result<Assets, Box<dyn Error>> {
    let root = assets::resolve_assets_root(cli_root);
    log::info!("assets root: {}", root.display());
    let registry =
        BlockRegistry::load_from_paths(assets::blocks_path(&root), assets::models_dir(&root))?;
    Ok(Assets { root, registry })
}

fn cmd_models(a: &Assets) {
    for ty in &a.registry.blocks {
        let model = ty.model.and_then(|m| a.registry.models.get(m));
        let shape = match model {
            Some(m) if m.is_cross() => "cross".to_string(),
            Some(m) => format!("{} quads", m.quad_count()),
            None => "none".to_string(),
        };
        println!(
            "{:>3} {:<12} up={:<3} side={:<3} occludes={:<5} collision={:<5} model={}",
            ty.id,
            ty.name,
            ty.texture(Direction::Up),
            ty.texture(Direction::North),
            ty.occludes,
            ty.collision,
            shape
        );
    }
    for (name, err) in a.registry.models.degraded() {
        println!("degraded model '{}': {}", name, err);
    }
}

fn cmd_mesh(a: &Assets, shadow: Option<f32>) -> Result<(), Box<dyn Error>> {
    let mut cfg = SceneConfig::load_or_default(&assets::scene_path(&a.root))?;
    if let Some(s) = shadow {
        cfg.shadow_brightness = s;
    }
    let world = cfg.build(&a.registry)?;
    let renderer = BlockRenderer::new(&a.registry);
    let (min, max) = world.bounds();
    let mesh = build_region(&renderer, &world, min, max);
    println!("blocks: {}", world.count_non_air());
    for layer in RenderLayer::ALL {
        let mb = mesh.layer(layer);
        println!(
            "{:?}: {} faces, {} quads, {} vertices, {} indices",
            layer,
            mesh.faces[layer.index()],
            mb.quad_count(),
            mb.vertex_count(),
            mb.idx.len()
        );
    }
    Ok(())
}

fn cmd_pick(
    a: &Assets,
    from: Vec3,
    dir: Vec3,
    reach: f32,
    place: Option<String>,
    remove: bool,
) -> Result<(), Box<dyn Error>> {
    let cfg = SceneConfig::load_or_default(&assets::scene_path(&a.root))?;
    let mut world = cfg.build(&a.registry)?;
    let Some(hit) = raycast::pick_block(&world, from, dir, reach) else {
        println!("no block within {} blocks", reach);
        return Ok(());
    };
    let id = world.block_id(hit.x, hit.y, hit.z);
    let name = a.registry.get(id).map(|t| t.name.as_str()).unwrap_or("?");
    println!("hit {} at ({}, {}, {}) face {}", name, hit.x, hit.y, hit.z, hit.face);

    if remove {
        match edit::remove_block(&mut world, &a.registry, &hit) {
            Some(_) => println!("removed"),
            None => println!("nothing removed"),
        }
    } else if let Some(block) = place {
        let id = a
            .registry
            .id_by_name(&block)
            .ok_or_else(|| format!("unknown block '{}'", block))?;
        let (x, y, z) = hit.adjacent();
        if edit::place_block(&mut world, &a.registry, &hit, id) {
            println!("placed {} at ({}, {}, {})", block, x, y, z);
        } else {
            println!("cannot place at ({}, {}, {})", x, y, z);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let assets = load_assets(cli.assets_root)?;
    match cli.cmd {
        Cmd::Models => cmd_models(&assets),
        Cmd::Mesh { shadow } => cmd_mesh(&assets, shadow)?,
        Cmd::Pick {
            from,
            dir,
            reach,
            place,
            remove,
        } => cmd_pick(&assets, from, dir, reach, place, remove)?,
    }
    Ok(())
}
