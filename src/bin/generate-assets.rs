#![forbid(unsafe_code)]
//! Writes shell completions and the man page for `pathtree`.
//!
//! Usage: `generate-assets [OUT_DIR]` (defaults to `dist`).

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use pathtree::cli::Args;
use std::fs;
use std::path::PathBuf;

const BIN_NAME: &str = "pathtree";

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    }

    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::Elvish,
        Shell::PowerShell,
    ] {
        let mut cmd = Args::command();
        let written = generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)?;
        eprintln!("wrote {}", written.display());
    }

    let man_path = man_dir.join(format!("{BIN_NAME}.1"));
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    fs::write(&man_path, buffer).with_context(|| format!("{}: cannot write", man_path.display()))?;
    eprintln!("wrote {}", man_path.display());

    Ok(())
}
