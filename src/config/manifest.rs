use crate::core::{FeatureSet, ManifestReader};
use crate::utils::error::{MatrixError, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The slice of a Cargo manifest this tool reads.
///
/// `toml` is built with `preserve_order`, so `features` keeps the order the
/// keys are written in. Feature values (enabled sub-features) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub features: toml::Table,
}

impl Manifest {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn feature_set(&self) -> FeatureSet {
        FeatureSet::new(self.features.keys().cloned())
    }
}

/// Reads features from a manifest file on disk.
#[derive(Debug, Clone)]
pub struct CargoManifest {
    path: PathBuf,
}

impl CargoManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Manifest> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MatrixError::ManifestNotFound {
                path: self.path.clone(),
            },
            _ => MatrixError::IoError(e),
        })?;

        toml::from_str(&content).map_err(|source| MatrixError::ManifestParseError {
            path: self.path.clone(),
            source,
        })
    }
}

impl ManifestReader for CargoManifest {
    fn read_features(&self) -> Result<FeatureSet> {
        tracing::debug!("Reading manifest {}", self.path.display());

        let features = self.load()?.feature_set();
        if features.is_empty() {
            tracing::info!("No [features] declared in {}", self.path.display());
        }
        Ok(features)
    }
}
