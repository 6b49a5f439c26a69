use crate::error::{ReleaseError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST: &str = "package.json";

/// The fields of the consuming project's `package.json` that a release needs.
///
/// Loaded once at startup and handed to the orchestrator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    pub version: String,
}

impl PackageManifest {
    pub fn new(name: Option<&str>, version: impl Into<String>) -> Self {
        PackageManifest {
            name: name.map(str::to_string),
            version: version.into(),
        }
    }

    /// Name for status lines, `package` when the manifest has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("package")
    }
}

/// Reads and parses a `package.json`.
///
/// The version is kept as a string; it is validated when next versions are
/// computed.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<PackageManifest> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ReleaseError::manifest(format!("cannot read {}: {}", path.display(), e)))?;

    serde_json::from_str(&content)
        .map_err(|e| ReleaseError::manifest(format!("cannot parse {}: {}", path.display(), e)))
}
