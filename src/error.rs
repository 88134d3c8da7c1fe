//! Error type shared by the pixel engine, the file collaborator and the shell.
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A buffer extent an operation cannot work with: zero-size resample
    /// source, oversize crop, mismatched merge inputs or wrong raw length.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("pixel ({x}, {y}, channel {channel}) is outside a {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        channel: usize,
        width: usize,
        height: usize,
    },

    #[error("percent must be between 0 and 100, got {0}")]
    InvalidPercent(i64),

    #[error("brightness multiplier must be finite and non-negative, got {0}")]
    InvalidMultiplier(f64),

    /// Decoding or encoding an image file failed.
    #[error("failed to access image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to load config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to serialize JSON for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
