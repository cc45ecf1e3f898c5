use std::path::{Path, PathBuf};

pub fn resolve_assets_root(cli: Option<String>) -> PathBuf {
    // Precedence: CLI flag -> TESSEL_ASSETS env -> search nearby dirs -> CWD
    if let Some(p) = cli {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
        log::warn!("assets root {} does not exist; searching", pb.display());
    }
    if let Ok(p) = std::env::var("TESSEL_ASSETS") {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    // Search candidates: CWD, executable dir, crate root; climb up to 5 parents
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    for base in candidates {
        if let Some(found) = find_upwards(&base, 5) {
            return found;
        }
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn find_upwards(base: &Path, levels: usize) -> Option<PathBuf> {
    let mut cur = base.to_path_buf();
    for _ in 0..levels {
        if blocks_path(&cur).exists() {
            return Some(cur);
        }
        cur = cur.parent()?.to_path_buf();
    }
    None
}

pub fn blocks_path(root: &Path) -> PathBuf {
    root.join("assets/voxels/blocks.toml")
}

pub fn scene_path(root: &Path) -> PathBuf {
    root.join("assets/voxels/scene.toml")
}

pub fn models_dir(root: &Path) -> PathBuf {
    root.join("assets/models/block")
}
