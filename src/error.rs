use thiserror::Error;

/// Library error type for poster composition.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured image folder is missing or not a directory.
    #[error("invalid image folder: {0}")]
    BadDir(String),

    /// Scanning and decoding completed but yielded no usable images.
    #[error("no images found in the configured folder")]
    EmptyScan,

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// Encode/write failure from the image backend.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
