//! Places the workspace `config.toml` next to the backend binary.

use std::path::{Path, PathBuf};

fn profile_dir() -> Option<PathBuf> {
    let out_dir = std::env::var("OUT_DIR").ok()?;
    let profile = std::env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    if !source.exists() {
        println!("cargo:warning=config.toml not found, the embedded default will be used");
        return;
    }
    if let Err(e) = std::fs::copy(&source, target_dir.join("config.toml")) {
        println!("cargo:warning=failed to copy config.toml: {}", e);
    }
}
