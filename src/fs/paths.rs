//! Local path derivation for downloaded archives.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Final `/`-delimited segment of a link.
///
/// Links sharing a final segment map to the same name, so later downloads
/// overwrite earlier ones.
pub fn local_filename(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}

/// Destination of a link inside the output directory.
pub fn destination_path(output_dir: &Path, link: &str) -> PathBuf {
    output_dir.join(local_filename(link))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| Error::write(path, e))?;
    }
    Ok(())
}
