use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Which of the two source directories an assembly is copied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceDir {
    /// Client script assemblies (Library/ScriptAssemblies).
    Client,
    /// Quantum plugin assemblies (Assets/Libs/Photon/Quantum/Assemblies).
    Quantum,
}

/// Assemblies copied on every run, in copy order.
pub const ASSEMBLIES: [(SourceDir, &str); 4] = [
    (SourceDir::Quantum, "quantum.code.dll"),
    (SourceDir::Client, "FirstLight.DataExtensions.dll"),
    (SourceDir::Client, "FirstLight.Game.dll"),
    (SourceDir::Client, "FirstLight.Services.dll"),
];

/// Relative offsets of the three directories, resolved against a base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncLayout {
    pub client_assemblies: String,
    pub quantum_assemblies: String,
    pub destination: String,
}

impl Default for SyncLayout {
    fn default() -> Self {
        Self {
            client_assemblies: "../../../Library/ScriptAssemblies/".to_string(),
            quantum_assemblies: "../../../Assets/Libs/Photon/Quantum/Assemblies/".to_string(),
            destination: "../../Lib/".to_string(),
        }
    }
}

impl SyncLayout {
    pub fn load(layout_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(layout_path)
            .with_context(|| format!("Failed to read layout file: {}", layout_path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load layout file: {}", layout_path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let layout: SyncLayout =
            serde_json::from_str(content).context("Failed to parse layout JSON")?;

        if layout.client_assemblies.trim().is_empty() {
            anyhow::bail!("client_assemblies must not be empty");
        }
        if layout.quantum_assemblies.trim().is_empty() {
            anyhow::bail!("quantum_assemblies must not be empty");
        }
        if layout.destination.trim().is_empty() {
            anyhow::bail!("destination must not be empty");
        }

        Ok(layout)
    }

    /// Joins each offset onto `base`. Nothing is checked on disk.
    pub fn resolve(&self, base: &Path) -> SyncPaths {
        SyncPaths {
            client: base.join(&self.client_assemblies),
            quantum: base.join(&self.quantum_assemblies),
            destination: base.join(&self.destination),
        }
    }
}

/// The three directories a run works with, computed once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    pub client: PathBuf,
    pub quantum: PathBuf,
    pub destination: PathBuf,
}

impl SyncPaths {
    pub fn source(&self, dir: SourceDir) -> &Path {
        match dir {
            SourceDir::Client => &self.client,
            SourceDir::Quantum => &self.quantum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_resolves_against_base() {
        let base = Path::new("/work/Backend/Tools/sync");
        let paths = SyncLayout::default().resolve(base);

        assert_eq!(
            paths.client,
            base.join("../../../Library/ScriptAssemblies/")
        );
        assert_eq!(
            paths.quantum,
            base.join("../../../Assets/Libs/Photon/Quantum/Assemblies/")
        );
        assert_eq!(paths.destination, base.join("../../Lib/"));
        assert_eq!(paths.source(SourceDir::Client), paths.client.as_path());
        assert_eq!(paths.source(SourceDir::Quantum), paths.quantum.as_path());
    }

    #[test]
    fn quantum_assembly_is_copied_first() {
        let names: Vec<_> = ASSEMBLIES.iter().map(|(_, name)| *name).collect();
        assert_eq!(
            names,
            [
                "quantum.code.dll",
                "FirstLight.DataExtensions.dll",
                "FirstLight.Game.dll",
                "FirstLight.Services.dll",
            ]
        );
        assert_eq!(ASSEMBLIES[0].0, SourceDir::Quantum);
        assert!(ASSEMBLIES[1..].iter().all(|(dir, _)| *dir == SourceDir::Client));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let layout = SyncLayout::parse(r#"{ "destination": "out/Lib" }"#).unwrap();
        assert_eq!(layout.destination, "out/Lib");
        assert_eq!(
            layout.client_assemblies,
            SyncLayout::default().client_assemblies
        );
        assert_eq!(
            layout.quantum_assemblies,
            SyncLayout::default().quantum_assemblies
        );
    }

    #[test]
    fn empty_offset_is_rejected() {
        let err = SyncLayout::parse(r#"{ "quantum_assemblies": "  " }"#).unwrap_err();
        assert!(err.to_string().contains("quantum_assemblies"));
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(SyncLayout::parse("{ not json").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("assembly-sync-no-such-layout.json");
        let err = SyncLayout::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read layout file"));
    }
}
