//! Local persistence of synthesized audio artifacts.

use crate::Result;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes audio payloads into an output directory under timestamped names.
///
/// The directory is created on first use; creation is idempotent, so
/// concurrent conversions sharing one store are safe. File names carry the
/// epoch-millisecond timestamp of the write (`<millis>-audio.mp3`), which
/// keeps outputs of separate calls distinct without a collision guard.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the full payload to a new timestamped file and return its path.
    ///
    /// The payload must already be complete; nothing is written until the
    /// caller holds the whole buffer, so a failed conversion leaves no
    /// partial file behind.
    pub async fn persist(&self, data: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(format!("{}-audio.mp3", epoch_millis()));
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }
}

fn epoch_millis() -> u128 {
    // A clock before the Unix epoch collapses to 0; the write still succeeds.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn persist_writes_timestamped_mp3() {
        let scratch = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(scratch.path().join("out"));

        let path = store.persist(b"audio-bytes").await.unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        let stem = name.strip_suffix("-audio.mp3").expect("timestamp suffix");
        assert!(stem.parse::<u128>().is_ok(), "non-numeric prefix: {}", name);
        assert_eq!(std::fs::read(&path).unwrap(), b"audio-bytes");
    }

    #[tokio::test]
    async fn persist_creates_missing_directory() {
        let scratch = tempfile::tempdir().unwrap();
        let dir = scratch.path().join("a").join("b");
        assert!(!dir.exists());

        let store = ArtifactStore::new(&dir);
        let path = store.persist(b"x").await.unwrap();

        assert!(dir.is_dir());
        assert!(path.starts_with(&dir));
    }
}
