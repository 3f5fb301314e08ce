use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
};

use crate::layout::{ASSEMBLIES, SyncPaths};

/// Copies the fixed assembly set from the client and Quantum output folders
/// into the backend library folder.
pub struct AssemblySync {
    paths: SyncPaths,
}

impl AssemblySync {
    pub fn new(paths: SyncPaths) -> Self {
        log::debug!("Client assemblies:  {}", paths.client.display());
        log::debug!("Quantum assemblies: {}", paths.quantum.display());
        log::debug!("Destination:        {}", paths.destination.display());
        Self { paths }
    }

    /// Copies every assembly, printing a confirmation line to stdout for each.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Same as [`AssemblySync::run`] with confirmations written to `out`.
    ///
    /// Stops at the first failed copy. Files copied before the failure are left
    /// in place.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<()> {
        for (dir, file_name) in ASSEMBLIES {
            let src = self.paths.source(dir).join(file_name);
            let dest = self.paths.destination.join(file_name);

            let bytes = fs::copy(&src, &dest).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    src.display(),
                    dest.display()
                )
            })?;
            log::debug!("Copied {} ({bytes} bytes) to {}", src.display(), dest.display());

            writeln!(out, "Copied {file_name}").context("Failed to write confirmation")?;
        }

        log::info!(
            "{} assemblies synced to {}",
            ASSEMBLIES.len(),
            self.paths.destination.display()
        );
        Ok(())
    }
}
