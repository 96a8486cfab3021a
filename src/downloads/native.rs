use std::fs;
use std::path::PathBuf;

use super::{DownloadError, SaveTarget};

/// Writes songs into a directory on disk. Used by desktop and mobile builds.
#[derive(Debug, Clone)]
pub struct FileSaveTarget {
    dir: PathBuf,
}

impl FileSaveTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The user's download directory, or the working directory when the
    /// platform has none.
    pub fn in_download_dir() -> Self {
        Self::new(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
    }
}

impl SaveTarget for FileSaveTarget {
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), DownloadError> {
        let save_error = |err: std::io::Error| DownloadError::Save {
            file_name: file_name.to_string(),
            reason: err.to_string(),
        };

        fs::create_dir_all(&self.dir).map_err(save_error)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).map_err(save_error)?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }
}
