//! The binary artifact to upload.
//!

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::payload::EncodedPayload;

/// A binary artifact read once from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The path the artifact was read from.
    pub path: PathBuf,

    bytes: Vec<u8>,
}

impl Artifact {
    /// Read the entire artifact at `path` into memory.
    pub fn read(path: &Path) -> Result<Self, FileAccessError> {
        let bytes = fs::read(path).map_err(|source| FileAccessError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// The artifact's contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The artifact's size in octets.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// If the artifact has no contents.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Base64 encode the artifact.
    pub fn encode(&self) -> EncodedPayload {
        EncodedPayload::from_bytes(&self.bytes)
    }
}

/// The artifact could not be read.
#[derive(Debug, Error)]
#[error("Failed to read artifact '{}': {source}", .path.display())]
pub struct FileAccessError {
    /// The path that could not be read.
    pub path: PathBuf,

    /// The underlying IO error.
    #[source]
    pub source: io::Error,
}
