//! Build script for the Spotify Artist Report CLI.
//!
//! Copies the `.env.example` configuration template into the user's local data
//! directory, next to where the tool looks for its `.env` file:
//!
//! - Linux: `~/.local/share/sportcli/.env.example`
//! - macOS: `~/Library/Application Support/sportcli/.env.example`
//! - Windows: `%LOCALAPPDATA%/sportcli/.env.example`
//!
//! Any failure only produces a cargo warning; the template is a convenience
//! and never blocks compilation.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("sportcli");
    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=cannot copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
