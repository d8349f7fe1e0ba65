//! Decodes scanned files into orientation-corrected images.
//!
//! Per-file failures are recovered locally: a broken file is skipped with a
//! warning and recorded in the report, and loading continues.

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use image::metadata::Orientation;
use tracing::{debug, warn};

/// One decoded, upright image and where it came from.
#[derive(Debug)]
pub struct LoadedPhoto {
    pub path: PathBuf,
    pub image: DynamicImage,
}

/// A file that was scanned but could not be decoded.
#[derive(Debug)]
pub struct SkippedPhoto {
    pub path: PathBuf,
    pub error: image::ImageError,
}

/// Outcome of loading a batch of files.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub photos: Vec<LoadedPhoto>,
    pub skipped: Vec<SkippedPhoto>,
}

/// Decode every path in order, applying EXIF orientation correction.
///
/// Input order is preserved in `photos`; undecodable files land in `skipped`.
#[must_use]
pub fn load_photos(paths: &[PathBuf]) -> LoadReport {
    let mut report = LoadReport::default();
    for path in paths {
        match image::open(path) {
            Ok(mut img) => {
                if let Some(orientation) = read_exif_orientation(path) {
                    img.apply_orientation(orientation);
                }
                debug!(path = %path.display(), w = img.width(), h = img.height(), "loaded");
                report.photos.push(LoadedPhoto {
                    path: path.clone(),
                    image: img,
                });
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping undecodable file");
                report.skipped.push(SkippedPhoto {
                    path: path.clone(),
                    error,
                });
            }
        }
    }
    report
}

/// Read the EXIF orientation tag, if the file carries one.
///
/// Files without EXIF (or with an unreadable container) are treated as already
/// upright.
fn read_exif_orientation(path: &Path) -> Option<Orientation> {
    let f = fs::File::open(path).ok()?;
    let mut buf = BufReader::new(f);
    let reader = exif::Reader::new().read_from_container(&mut buf).ok()?;
    use exif::{In, Tag, Value};
    let field = reader.get_field(Tag::Orientation, In::PRIMARY)?;
    let raw = match &field.value {
        Value::Short(arr) if !arr.is_empty() => arr[0],
        Value::Long(arr) if !arr.is_empty() => arr[0] as u16,
        _ => return None,
    };
    Orientation::from_exif(u8::try_from(raw).ok()?)
}
