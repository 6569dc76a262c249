//! Generation manifest
//!
//! Parses and validates YAML manifests describing a batch of sample sources:
//!
//! ```yaml
//! sources:
//!   - name: Post
//!     url: https://jsonplaceholder.typicode.com/posts
//!   - name: Profile
//!     file: fixtures/profile.json
//! output: types/types.ts
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level generation manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Manifest {
    /// Sample sources to infer from, merged in order
    pub sources: Vec<SourceDefinition>,

    /// Output file; stdout when absent
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Banner line prepended to file output
    #[serde(default = "default_banner")]
    pub banner: String,
}

/// One sample source: a named URL or local file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SourceDefinition {
    /// Root record name; generated when absent
    #[serde(default)]
    pub name: Option<String>,

    /// URL to fetch the sample from
    #[serde(default)]
    pub url: Option<String>,

    /// Local file holding the sample
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_banner() -> String {
    crate::output::GENERATED_BANNER.to_string()
}

/// Load a manifest from a YAML file
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::manifest(format!(
            "Failed to read manifest file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_manifest_from_str(&content)
}

/// Load a manifest from a YAML string
pub fn load_manifest_from_str(yaml: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_yaml::from_str(yaml)
        .map_err(|e| Error::manifest(format!("Failed to parse manifest YAML: {e}")))?;

    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Validate a manifest
fn validate_manifest(manifest: &Manifest) -> Result<()> {
    if manifest.sources.is_empty() {
        return Err(Error::manifest("Manifest must list at least one source"));
    }

    for (i, source) in manifest.sources.iter().enumerate() {
        match (&source.url, &source.file) {
            (Some(_), Some(_)) => {
                return Err(Error::manifest(format!(
                    "Source {} sets both url and file; pick one",
                    i + 1
                )));
            }
            (None, None) => {
                return Err(Error::manifest(format!(
                    "Source {} needs either url or file",
                    i + 1
                )));
            }
            _ => {}
        }

        if let Some(url) = &source.url {
            url::Url::parse(url)
                .map_err(|e| Error::manifest(format!("Source {} has invalid url: {e}", i + 1)))?;
        }
    }

    Ok(())
}
