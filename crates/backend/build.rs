use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// target/<profile>, found by walking up from OUT_DIR
/// (target/<profile>/build/backend-xxx/out).
fn profile_dir() -> PathBuf {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let profile = env::var("PROFILE").unwrap();
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
        .expect("Could not find target profile directory")
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found, the embedded default will be used");
        return;
    }

    let dest = profile_dir().join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        panic!("Failed to copy config.toml to {}: {}", dest.display(), e);
    }
}
