use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The input document could not be used. Fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not open file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid image manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A single image could not be loaded. The pipeline skips it and moves on.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

/// The viewer surface itself failed. Not recovered.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to create texture: {reason}")]
    Texture { reason: String },
}
