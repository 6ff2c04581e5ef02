use serde_json::Value;
use std::{io::ErrorKind, path::PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("GeoJSON file not found at {0}")]
    Missing(String),
    #[error("GeoJSON file unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("GeoJSON file is not valid JSON: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("GeoJSON download failed: {0}")]
    Download(#[from] reqwest::Error),
}

/// State boundary file kept on local disk and served to map clients.
pub struct GeoJsonStore {
    path: PathBuf,
}

impl GeoJsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read and parse the boundary file. Re-read on every call.
    pub async fn load(&self) -> Result<Value, GeoJsonError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(GeoJsonError::Missing(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write `geojson` pretty-printed, creating parent directories.
    pub async fn save(&self, geojson: &Value) -> Result<(), GeoJsonError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(geojson)?).await?;
        info!(path = %self.path.display(), "Saved GeoJSON boundary file");
        Ok(())
    }

    /// Download the boundary file from `url` and store it locally.
    pub async fn fetch(&self, client: &reqwest::Client, url: &str) -> Result<(), GeoJsonError> {
        info!(url, "Downloading GeoJSON boundary file");
        let body = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let geojson: Value = serde_json::from_slice(&body)?;
        self.save(&geojson).await
    }
}
