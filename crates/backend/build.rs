use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Places the workspace `config.toml` beside the built binary, where
/// `shared::config::load_config` looks for it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let Some(workspace_root) = manifest_dir.ancestors().nth(2) else {
        println!("cargo:warning=workspace root not found, binary will use its embedded config");
        return;
    };
    let source = workspace_root.join("config.toml");
    if !source.exists() {
        println!("cargo:warning=no config.toml at {}, binary will use its embedded config", source.display());
        return;
    }

    // OUT_DIR = target/<profile>/build/backend-<hash>/out
    let out_dir = env::var("OUT_DIR").unwrap_or_default();
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let Some(bin_dir) = Path::new(&out_dir).ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=could not locate target/{} for {}", profile, out_dir);
        return;
    };

    let dest = bin_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        panic!("copying {} to {}: {}", source.display(), dest.display(), e);
    }
}
