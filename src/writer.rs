//! Persists a finished canvas to disk.

use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::Error;

/// Encode `poster` at `path`; the format is picked from the file extension.
///
/// # Errors
/// Returns [`Error::Image`] when encoding or writing fails.
pub fn save_poster(poster: &RgbImage, path: &Path) -> Result<(), Error> {
    poster.save(path)?;
    info!(
        path = %path.display(),
        w = poster.width(),
        h = poster.height(),
        "poster saved"
    );
    Ok(())
}
