use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// The input document.
///
/// ```json
/// { "images": ["photos/a.png", "photos/b.jpg"] }
/// ```
///
/// Paths are kept exactly as written; relative ones resolve against the
/// working directory. Fields other than `images` are ignored.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ImageManifest {
    pub images: Vec<PathBuf>,
}

pub fn load_manifest(path: &Path) -> Result<ImageManifest, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: ImageManifest =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), count = manifest.images.len(), "loaded image manifest");
    Ok(manifest)
}
