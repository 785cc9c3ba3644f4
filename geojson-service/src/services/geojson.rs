//! Loads the served GeoJSON document from disk.
//!
//! The document is opaque: it is decoded only to check that it is JSON and
//! handed back as-is. Nothing is cached, so every call sees the file as it is
//! on disk right now.

use serde_json::Value;
use service_core::error::AppError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} as JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<GeoJsonError> for AppError {
    fn from(err: GeoJsonError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

#[derive(Debug, Clone)]
pub struct GeoJsonSource {
    path: PathBuf,
}

impl GeoJsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Value, GeoJsonError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| GeoJsonError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&bytes).map_err(|source| GeoJsonError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
