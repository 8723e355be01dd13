//! Loading of static display assets
//!
//! The background image and the label font are read once at startup. Any
//! failure here is fatal for the caller and is reported, never masked.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tiny_skia::Pixmap;
use tracing::info;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Background image {path} could not be decoded: {reason}")]
    InvalidBackground { path: PathBuf, reason: String },
    #[error("Font data could not be parsed: {reason}")]
    InvalidFont { reason: String },
}

/// Decodes a PNG background image
pub fn load_background(path: &Path) -> Result<Pixmap, AssetError> {
    let pixmap = Pixmap::load_png(path).map_err(|e| AssetError::InvalidBackground {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(
        path = %path.display(),
        width = pixmap.width(),
        height = pixmap.height(),
        "Loaded background image"
    );
    Ok(pixmap)
}

/// Reads a whole asset file into memory
pub fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_background_is_reported() {
        let path = Path::new("definitely/not/here/background.png");
        let err = load_background(path).unwrap_err();
        assert!(matches!(err, AssetError::InvalidBackground { .. }));
        assert!(err.to_string().contains("background.png"));
    }

    #[test]
    fn missing_asset_is_io_error() {
        let err = read_asset(Path::new("definitely/not/here/font.ttf")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
