use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Flat on-disk store for generated PDFs. The directory is created once at
/// startup and only ever appended to; the same directory is served read-only
/// under `/static/pdfs`.
#[derive(Clone)]
pub struct PdfStorage {
    dir: PathBuf,
}

impl PdfStorage {
    pub async fn init(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("failed to create PDF directory {}", dir.display()))?;

        info!("PDF output directory ready at {}", dir.display());

        Ok(Self { dir })
    }

    pub async fn store(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
