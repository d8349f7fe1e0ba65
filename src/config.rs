//! YAML configuration for poster runs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::ensure;
use serde::Deserialize;

use crate::error::Error;

/// Fixed output dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PosterSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PosterSize {
    /// A3 at 300 dpi, landscape.
    fn default() -> Self {
        Self {
            width: 3508,
            height: 2480,
        }
    }
}

/// Which planner(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Grid,
    Mosaic,
    Both,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Both
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Grid => "grid",
            Self::Mosaic => "mosaic",
            Self::Both => "both",
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Configuration {
    /// Folder holding the source images.
    pub image_folder: PathBuf,

    /// Output path for the near-square grid poster.
    #[serde(default = "Configuration::default_output_grid")]
    pub output_grid: PathBuf,

    /// Output path for the full-coverage mosaic poster.
    #[serde(default = "Configuration::default_output_mosaic")]
    pub output_mosaic: PathBuf,

    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub poster_size: PosterSize,

    /// Canvas background color, RGB.
    #[serde(default)]
    pub background: [u8; 3],

    /// Accepted file extensions, lowercase, without the leading dot.
    #[serde(default = "Configuration::default_extensions")]
    pub extensions: Vec<String>,

    /// Whether to descend into subdirectories of `image-folder`.
    #[serde(default)]
    pub recursive: bool,

    /// Fixes the mosaic shuffle; unset runs seed from OS entropy.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl Configuration {
    fn default_output_grid() -> PathBuf {
        PathBuf::from("poster-grid.jpg")
    }

    fn default_output_mosaic() -> PathBuf {
        PathBuf::from("poster-mosaic.jpg")
    }

    fn default_extensions() -> Vec<String> {
        ["png", "jpg", "jpeg", "gif", "bmp"]
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Sanity checks beyond what serde enforces.
    ///
    /// # Errors
    /// Returns a descriptive error on any out-of-range value.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.poster_size.width > 0 && self.poster_size.height > 0,
            "poster-size must be positive, got {}x{}",
            self.poster_size.width,
            self.poster_size.height
        );
        ensure!(
            !self.extensions.is_empty(),
            "extensions must list at least one file type"
        );
        Ok(())
    }
}

/// Load a [`Configuration`] from a YAML file.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if it
/// does not parse.
pub fn from_yaml_file(path: &Path) -> Result<Configuration, Error> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}
