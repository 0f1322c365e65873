//! Texture naming scheme and fatal startup verification
//!
//! Every body resolves its texture from its name. There is no fallback
//! texture and no retry: a missing file aborts the process before the
//! event loop starts, naming the file it could not find.

use anyhow::{Context, ensure};
use std::path::Path;

use crate::bodies::registry::PLANETS;

/// Asset-relative directory holding the body textures
pub const TEXTURE_DIR: &str = "textures";

/// Asset path for a body or material name
pub fn texture_path(name: &str) -> String {
    format!("{TEXTURE_DIR}/{name}.jpg")
}

/// Every texture name the scene loads, derived from the body tables
pub fn required_texture_names() -> Vec<String> {
    let mut names = vec!["sun".to_string(), "stars".to_string()];
    for planet in &PLANETS {
        names.push(planet.name.to_string());
        if planet.satellite {
            names.push("moon".to_string());
        }
        if planet.rings {
            names.push(format!("{}_rings", planet.name));
        }
    }
    names
}

/// Check that every required texture file exists under the asset root.
/// Called before the app is built; an error here is fatal.
pub fn verify_texture_files(asset_root: &Path) -> anyhow::Result<()> {
    for name in required_texture_names() {
        let path = asset_root.join(texture_path(&name));
        ensure!(
            path.is_file(),
            "missing texture {} (expected at {})",
            name,
            path.display()
        );
    }
    Ok(())
}

/// Convenience wrapper using the default `assets/` root next to the binary
pub fn verify_default_assets() -> anyhow::Result<()> {
    verify_texture_files(Path::new("assets"))
        .context("cannot start without the body textures")
}
