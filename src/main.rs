mod layout;
mod sync;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::layout::SyncLayout;
use crate::sync::AssemblySync;

#[derive(Debug, Parser)]
#[command(
    name = "assembly-sync",
    about = "Copy client and Quantum assemblies into the backend Lib folder"
)]
struct Cli {
    /// Directory the assembly folders are resolved against (defaults to the current directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// JSON file overriding the relative assembly and Lib folder locations
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse CLI
    let args = Cli::parse();

    let base = match args.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let layout = match args.layout.as_deref() {
        Some(path) => {
            log::info!("Using layout from {}", path.display());
            SyncLayout::load(path)?
        }
        None => SyncLayout::default(),
    };

    AssemblySync::new(layout.resolve(&base)).run()
}
